//! Validation error types

use std::fmt;

/// Validation error for request bodies.
///
/// The `Display` output is sent to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing or is not a JSON string
    NotAString { field: &'static str },

    /// Field is missing, not a string, or blank after trimming
    BlankString { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAString { field } => write!(f, "Field \"{}\" must be a string.", field),
            Self::BlankString { field } => {
                write!(f, "Field \"{}\" must be a non-empty string.", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
