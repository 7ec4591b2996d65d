use thiserror::Error;

/// Days error types
#[derive(Error, Debug)]
pub enum DaysError {
    #[error("Habit not found: {0}")]
    NotFound(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Habit position {index} is out of range (1-{len})")]
    OutOfRange { index: i64, len: usize },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for days operations
pub type Result<T> = std::result::Result<T, DaysError>;
