//! Error types for tabrl

use thiserror::Error;

/// Main error type for tabrl
#[derive(Error, Debug)]
pub enum TabrlError {
    #[error("Environment error: {0}")]
    Env(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Invalid action {action} for action space of size {space}")]
    InvalidAction { action: usize, space: usize },

    #[error("Observation out of range: {0}")]
    ObservationOutOfRange(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tabrl operations
pub type Result<T> = std::result::Result<T, TabrlError>;
