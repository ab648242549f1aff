//! Error types and handling for the `TripPlanner` application

use thiserror::Error;

/// Main error type for the `TripPlanner` application
#[derive(Error, Debug)]
pub enum TripError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Failures of the recommendation provider call (auth, network, quota,
    /// malformed request). All are reported identically; none are retried.
    #[error("Provider error: {message}")]
    Provider { message: String },

    /// Transport succeeded but the provider returned no usable content
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            TripError::Provider { .. } => {
                "Unable to reach the recommendation service. Please check your internet connection."
                    .to_string()
            }
            TripError::EmptyResponse => {
                "The recommendation service returned no content. Please try again.".to_string()
            }
            TripError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripError::config("missing API key");
        assert!(matches!(config_err, TripError::Config { .. }));

        let provider_err = TripError::provider("connection failed");
        assert!(matches!(provider_err, TripError::Provider { .. }));

        let validation_err = TripError::validation("empty destination");
        assert!(matches!(validation_err, TripError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TripError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let provider_err = TripError::provider("test");
        assert!(provider_err.user_message().contains("Unable to reach"));

        let validation_err = TripError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_provider_error_display_carries_description() {
        let err = TripError::provider("connection timed out");
        assert_eq!(err.to_string(), "Provider error: connection timed out");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let trip_err: TripError = io_err.into();
        assert!(matches!(trip_err, TripError::Io { .. }));
    }
}
