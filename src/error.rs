//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// User input that cannot become an expense record
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input ended while an entry was being collected
    #[error("Input ended before the {0} was entered")]
    MissingInput(&'static str),

    /// Data file errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TrackerError {
    /// Create an invalid input error for an amount that could not be parsed
    pub fn invalid_amount(input: impl AsRef<str>) -> Self {
        Self::InvalidInput(format!("'{}' is not a valid amount", input.as_ref()))
    }

    /// Check if this is an invalid input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = TrackerError::invalid_amount("abc");
        assert_eq!(err.to_string(), "Invalid input: 'abc' is not a valid amount");
        assert!(err.is_invalid_input());
        assert!(!err.is_storage());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tracker_err: TrackerError = io_err.into();
        assert!(matches!(tracker_err, TrackerError::Io(_)));
    }

    #[test]
    fn test_missing_input_display() {
        let err = TrackerError::MissingInput("description");
        assert_eq!(err.to_string(), "Input ended before the description was entered");
        assert!(!err.is_invalid_input());
    }
}
