//! Custom error types for finsight
//!
//! The report and export functions are infallible. Everything that can fail
//! lives on the host side: reading settings and input files, parsing
//! command-line values, and writing exported documents.

use thiserror::Error;

/// The main error type for finsight operations
#[derive(Error, Debug)]
pub enum FinsightError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user-supplied values (calendar offsets, page numbers, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// An input file did not contain the expected records
    #[error("Invalid input in {path}: {reason}")]
    Input { path: String, reason: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinsightError {
    /// Create an input error for a file
    pub fn input(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FinsightError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinsightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for FinsightError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for finsight operations
pub type FinsightResult<T> = Result<T, FinsightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinsightError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_input_error() {
        let err = FinsightError::input("budgets.json", "expected an array");
        assert_eq!(
            err.to_string(),
            "Invalid input in budgets.json: expected an array"
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinsightError = io_err.into();
        assert!(matches!(err, FinsightError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err: FinsightError = json_err.into();
        assert!(matches!(err, FinsightError::Json(_)));
    }
}
