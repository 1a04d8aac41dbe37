use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RevealError {
    #[error("invalid root margin {margin:?}: {reason}")]
    InvalidMargin { margin: String, reason: String },

    #[error("threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("intersection observer unavailable: {0}")]
    Host(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("project list is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("project list is empty")]
    Empty,
}
