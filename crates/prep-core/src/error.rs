//! Error types for input preparation
//!
//! Validation failures are reported as [`Error::InvalidArgument`] whose
//! display text is exactly the human-readable message, so callers can match
//! on it.

use thiserror::Error;

/// Core error type for input preparation
#[derive(Error, Debug)]
pub enum Error {
    /// An argument failed validation
    #[error("{0}")]
    InvalidArgument(String),

    /// A combination of arguments that has no defined behavior
    #[error("Not supported: {0}")]
    Unsupported(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an input label that does not resolve to anything
    pub fn uninterpretable(input: &str) -> Self {
        Self::InvalidArgument(format!("Could not interpret input '{input}'"))
    }

    /// Create an error for a two-group split that did not find two groups
    pub fn not_two_groups() -> Self {
        Self::InvalidArgument("group must have exactly two unique values.".to_string())
    }

    /// Create an error for a value column that does not hold numbers
    pub fn non_numeric() -> Self {
        Self::InvalidArgument("x and y must be numeric arrays".to_string())
    }

    /// Create an error for label and value sequences of different lengths
    pub fn length_mismatch(labels: usize, values: usize) -> Self {
        Self::InvalidArgument(format!(
            "labels and values must have the same length, got {labels} and {values}"
        ))
    }

    /// Whether this error is a validation failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("DV and data must be specified".to_string());
        assert_eq!(err.to_string(), "DV and data must be specified");

        let err = Error::Unsupported("effects=all".to_string());
        assert_eq!(err.to_string(), "Not supported: effects=all");
    }

    #[test]
    fn test_error_helper_functions() {
        assert_eq!(
            Error::uninterpretable("score").to_string(),
            "Could not interpret input 'score'"
        );
        assert_eq!(
            Error::not_two_groups().to_string(),
            "group must have exactly two unique values."
        );
        assert_eq!(Error::non_numeric().to_string(), "x and y must be numeric arrays");
        assert_eq!(
            Error::length_mismatch(3, 2).to_string(),
            "labels and values must have the same length, got 3 and 2"
        );
    }

    #[test]
    fn test_is_invalid_argument() {
        assert!(Error::not_two_groups().is_invalid_argument());
        assert!(!Error::Unsupported("x".to_string()).is_invalid_argument());
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("custom error message")),
            _ => panic!("Wrong error type"),
        }
    }
}
