//! Error types for the stream generator
//!
//! Generation itself cannot fail: every probabilistic branch has a no-op
//! fallback. Errors only arise when validating a configuration or when
//! encoding and writing the finished stream.

use thiserror::Error;

/// Main error type for the stream generator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    /// I/O error occurred while writing the output stream
    ///
    /// This is a fatal error (closed pipe, disk full, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The CSV writer rejected a record
    #[error("CSV encode error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    EncodeError {
        /// Output line where the error occurred (if available)
        line: Option<u64>,
        /// Description of the encoding error
        message: String,
    },

    /// A generator configuration value is out of range
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfig {
        /// Name of the offending field
        field: String,
        /// What is wrong with it
        message: String,
    },
}

impl From<std::io::Error> for GeneratorError {
    fn from(error: std::io::Error) -> Self {
        GeneratorError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for GeneratorError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        GeneratorError::EncodeError {
            line,
            message: error.to_string(),
        }
    }
}

impl GeneratorError {
    /// Create an InvalidConfig error
    pub fn invalid_config(field: &str, message: &str) -> Self {
        GeneratorError::InvalidConfig {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
