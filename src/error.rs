use thiserror::Error;

/// Main error type for the beatgrid library
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to decode audio: {path}")]
    DecodeFailed { path: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid analysis parameters: {details}")]
    InvalidParameters { details: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using AnalysisError
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl AnalysisError {
    /// Check if this error is recoverable (can be retried)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // IO and decode failures might be temporary (file still copying, etc.)
            Self::Io(_) => true,
            Self::DecodeFailed { .. } => true,
            // Configuration problems are permanent until fixed by the user
            _ => false,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::DecodeFailed { path } => {
                format!(
                    "Could not decode audio file '{}'. Please check the file exists and is a supported format.",
                    path
                )
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
