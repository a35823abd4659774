//! Error types for the Chronicle narrative engine.
//!
//! This crate provides the foundation error types used throughout the
//! Chronicle workspace.

mod config;
mod generation;
mod story;

pub use config::ConfigError;
pub use generation::{GenerationError, GenerationErrorKind};
pub use story::{StoryError, StoryErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum ChronicleErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Remote text generation error
    Generation(GenerationError),
    /// Story session error
    Story(StoryError),
}

impl std::fmt::Display for ChronicleErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChronicleErrorKind::Config(e) => write!(f, "{}", e),
            ChronicleErrorKind::Generation(e) => write!(f, "{}", e),
            ChronicleErrorKind::Story(e) => write!(f, "{}", e),
        }
    }
}

/// Chronicle error with kind discrimination.
#[derive(Debug)]
pub struct ChronicleError(Box<ChronicleErrorKind>);

impl ChronicleError {
    /// Create a new error from a kind.
    pub fn new(kind: ChronicleErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ChronicleErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ChronicleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chronicle Error: {}", self.0)
    }
}

impl std::error::Error for ChronicleError {}

// Generic From implementation for any type that converts to ChronicleErrorKind
impl<T> From<T> for ChronicleError
where
    T: Into<ChronicleErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Chronicle operations.
pub type ChronicleResult<T> = std::result::Result<T, ChronicleError>;
