//! Error types for the colorguide library

use thiserror::Error;

/// Result type alias for colorguide operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for frame analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Frame sample buffers or strides are inconsistent
    #[error("Invalid frame sample: {reason}")]
    InvalidSample { reason: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration could not be loaded or saved
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create an invalid-sample error with context
    pub fn invalid_sample(reason: impl Into<String>) -> Self {
        Self::InvalidSample {
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InvalidSample { .. } => {
                "Camera frame could not be read. Please point the camera again.".to_string()
            }
            AnalysisError::InvalidParameter { parameter, .. } => {
                format!(
                    "Invalid setting for '{}'. Please check the configuration.",
                    parameter
                )
            }
            AnalysisError::ConfigError { .. } => {
                "Configuration could not be loaded. Please check the config file.".to_string()
            }
        }
    }
}
