use thiserror::Error;

/// Errors raised while building or laying out chart data
#[derive(Debug, Error)]
pub enum ChartError {
    /// Matrix or dataset rejected before any bands were computed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation requested before the layout holds a matrix
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Property override that cannot be applied
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset or config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset or config file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
