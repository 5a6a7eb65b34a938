//! Custom error types for the signup wizard
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions. Per-step validation failures are not
//! errors in this sense; they live in [`crate::wizard::StepError`].

use thiserror::Error;

/// The main error type for signup wizard operations
#[derive(Error, Debug)]
pub enum SignupError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Invalid user-supplied values outside the wizard steps (CLI arguments)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The controller was asked for something its state cannot provide.
    /// Reaching this is a programming defect, not a user-facing condition.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Pricing table errors (missing or unknown items)
    #[error("Pricing error: {0}")]
    Pricing(String),
}

impl SignupError {
    /// Create an error for an unrecognised plan name
    pub fn unknown_plan(name: impl AsRef<str>) -> Self {
        Self::Validation(format!(
            "Unknown plan: '{}'. Valid plans: arcade, advanced, pro",
            name.as_ref()
        ))
    }

    /// Create an error for an unrecognised add-on name
    pub fn unknown_addon(name: impl AsRef<str>) -> Self {
        Self::Validation(format!(
            "Unknown add-on: '{}'. Valid add-ons: online-service, larger-storage, custom-profile",
            name.as_ref()
        ))
    }

    /// Check if this is an invalid-state error
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SignupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SignupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SignupError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for signup wizard operations
pub type SignupResult<T> = Result<T, SignupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SignupError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_unknown_plan_error() {
        let err = SignupError::unknown_plan("gold");
        assert_eq!(
            err.to_string(),
            "Validation error: Unknown plan: 'gold'. Valid plans: arcade, advanced, pro"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_state_error() {
        let err = SignupError::InvalidState("no plan selected".into());
        assert!(err.is_invalid_state());
        assert_eq!(err.to_string(), "Invalid state: no plan selected");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SignupError = io_err.into();
        assert!(matches!(err, SignupError::Io(_)));
    }
}
