//! Story and session error types.

/// Specific error conditions for story session operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoryErrorKind {
    /// Fewer than the minimum number of choices were parsed from a segment
    MalformedSegment {
        /// Number of choice lines found
        found: usize,
    },
    /// Save data was not valid JSON or failed field validation
    InvalidSaveData(String),
    /// A selected choice index was outside the displayed choice list
    ChoiceOutOfRange {
        /// The selected index
        index: usize,
        /// Number of choices on display
        available: usize,
    },
}

impl std::fmt::Display for StoryErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoryErrorKind::MalformedSegment { found } => write!(
                f,
                "Failed to generate valid story choices: found {} choice lines, need at least 2",
                found
            ),
            StoryErrorKind::InvalidSaveData(msg) => write!(f, "Invalid save file: {}", msg),
            StoryErrorKind::ChoiceOutOfRange { index, available } => write!(
                f,
                "Choice {} is out of range: {} choices available",
                index, available
            ),
        }
    }
}

/// Error type for story session operations.
///
/// # Examples
///
/// ```
/// use chronicle_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::MalformedSegment { found: 1 });
/// assert!(format!("{}", err).contains("valid story choices"));
/// ```
#[derive(Debug, Clone)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for StoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Story Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for StoryError {}
