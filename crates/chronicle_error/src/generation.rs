//! Generation error types.

/// Specific error conditions for remote text generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// HTTP/network error
    Http(String),
    /// API returned a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Error message returned by the API
        message: String,
    },
    /// Failed to parse the API response body
    ResponseParsing(String),
    /// Response contained no choices
    EmptyResponse,
    /// Request builder error
    Builder(String),
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::Http(msg) => write!(f, "HTTP error: {}", msg),
            GenerationErrorKind::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            GenerationErrorKind::ResponseParsing(msg) => {
                write!(f, "Response parsing failed: {}", msg)
            }
            GenerationErrorKind::EmptyResponse => write!(f, "No choices in response"),
            GenerationErrorKind::Builder(msg) => write!(f, "Builder error: {}", msg),
        }
    }
}

/// Error type for remote text generation.
///
/// # Examples
///
/// ```
/// use chronicle_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("No choices"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}
