//! Error types for php-envcheck operations.
//!
//! This module defines [`EnvCheckError`], the error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `EnvCheckError` for failures that stop a command (bad profile, I/O)
//! - Use `anyhow::Error` (via `EnvCheckError::Other`) for unexpected errors
//! - A failed database connection is not an `EnvCheckError`: it is a
//!   [`ConnectError`](crate::runtime::ConnectError) that ends up as report text

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for php-envcheck operations.
#[derive(Debug, Error)]
pub enum EnvCheckError {
    /// Profile file not found at the given location.
    #[error("Profile not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a profile file.
    #[error("Failed to parse profile at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid profile structure or values.
    #[error("Invalid profile: {message}")]
    ConfigValidationError { message: String },

    /// A program could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The PHP runtime ran but its answer could not be used.
    #[error("PHP runtime probe '{probe}' failed: {message}")]
    RuntimeProbeFailed { probe: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for php-envcheck operations.
pub type Result<T> = std::result::Result<T, EnvCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = EnvCheckError::ConfigNotFound {
            path: PathBuf::from("/etc/php-envcheck.yml"),
        };
        assert!(err.to_string().contains("/etc/php-envcheck.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = EnvCheckError::ConfigParseError {
            path: PathBuf::from("/profile.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/profile.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = EnvCheckError::ConfigValidationError {
            message: "extension name must not be empty".into(),
        };
        assert!(err.to_string().contains("extension name must not be empty"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = EnvCheckError::CommandFailed {
            command: "php -i".into(),
            code: Some(255),
        };
        let msg = err.to_string();
        assert!(msg.contains("php -i"));
        assert!(msg.contains("255"));
    }

    #[test]
    fn runtime_probe_failed_displays_probe_and_message() {
        let err = EnvCheckError::RuntimeProbeFailed {
            probe: "snapshot".into(),
            message: "expected value at line 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("snapshot"));
        assert!(msg.contains("expected value at line 1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EnvCheckError = io_err.into();
        assert!(matches!(err, EnvCheckError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(EnvCheckError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
