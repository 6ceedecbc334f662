use thiserror::Error;

/// Errors raised when restoring or serializing camera state
#[derive(Error, Debug)]
pub enum CameraError {
    /// Snapshot held values a camera cannot take on
    #[error("invalid camera state: {0}")]
    InvalidState(String),

    /// JSON encode/decode failure
    #[error("camera state serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field is out of its accepted range
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
