//! Error types for freshcast

use thiserror::Error;

/// Result type alias using FreshCastError
pub type Result<T> = std::result::Result<T, FreshCastError>;

/// Error type alias for convenience
pub type Error = FreshCastError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
    pub const UNAVAILABLE: i32 = 4;
}

/// Main error type for freshcast
#[derive(Debug, Error)]
pub enum FreshCastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("No forecasting model found for product: {0}")]
    ModelNotFound(String),

    #[error("Forecasting models not trained yet")]
    NotTrained,

    #[error("Assistant not configured (set FRESHCAST_LLM_API_KEY or OPENAI_API_KEY)")]
    AssistantUnavailable,

    #[error("Assistant error: {0}")]
    AssistantError(String),

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl FreshCastError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ModelNotFound(_) | Self::UnknownProduct(_) => exit_codes::NOT_FOUND,
            Self::InvalidInput(_) | Self::Config(_) => exit_codes::INVALID_INPUT,
            Self::NotTrained | Self::AssistantUnavailable => exit_codes::UNAVAILABLE,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
