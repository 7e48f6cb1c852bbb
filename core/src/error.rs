use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Caller handed in a term the formatter cannot emit (e.g. an empty expression)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The output writer failed
    #[error("Formatting error")]
    Fmt(#[from] core::fmt::Error),
}

/// Result type for formatting operations
pub type Result<T> = std::result::Result<T, SortError>;
