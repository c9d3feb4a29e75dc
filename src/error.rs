use std::fmt;

/// Errors surfaced by [`parse`](crate::parse) and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Neither grammar explained a single token of the input.
    NoDateFound,
    /// The offset could not be applied to its origin.
    OffsetCompileFailed(String),
    /// The absolute date fields do not form a calendar date.
    DateCompileFailed(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoDateFound => write!(f, "no date-like expression found"),
            ParseError::OffsetCompileFailed(msg) => write!(f, "unable to apply offset: {}", msg),
            ParseError::DateCompileFailed(msg) => write!(f, "unable to build date: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}
