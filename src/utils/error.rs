//! Error handling for the mathspan boundary layer
//!
//! The core renderer never fails; it reports through the `(ok, output)`
//! pair. Errors here cover the I/O boundary only (reading input files,
//! writing rendered output).

use std::fmt;

/// Boundary error type
#[derive(Debug, Clone)]
pub enum MathspanError {
    /// IO error (file read/write at the CLI boundary)
    IoError {
        message: String,
        path: Option<String>,
    },
    /// Invalid input handed to the boundary layer
    InvalidInput { message: String },
}

impl fmt::Display for MathspanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathspanError::IoError { message, path } => {
                if let Some(p) = path {
                    write!(f, "IO error on '{}': {}", p, message)
                } else {
                    write!(f, "IO error: {}", message)
                }
            }
            MathspanError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
        }
    }
}

impl std::error::Error for MathspanError {}

impl From<std::io::Error> for MathspanError {
    fn from(err: std::io::Error) -> Self {
        MathspanError::IoError {
            message: err.to_string(),
            path: None,
        }
    }
}

// Convenience constructors
impl MathspanError {
    pub fn io_at(path: impl Into<String>, err: std::io::Error) -> Self {
        MathspanError::IoError {
            message: err.to_string(),
            path: Some(path.into()),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        MathspanError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type for boundary operations
pub type MathspanResult<T> = Result<T, MathspanError>;
