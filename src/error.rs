use thiserror::Error;

/// Main error type for the quiz engine
#[derive(Error, Debug)]
pub enum QuizError {
    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (config) errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reader errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Roster could not be fetched or parsed
    #[error("Roster source '{source_name}' unavailable: {message}")]
    DataUnavailable { source_name: String, message: String },

    /// A single record is missing required fields
    #[error("Malformed record at row {row}: {message}")]
    MalformedRecord { row: usize, message: String },

    /// Not enough distinct clubs to build a two-condition task
    #[error("Need at least 2 distinct clubs to generate tasks, got {available}")]
    DegenerateTask { available: usize },

    /// Invalid configuration values
    #[error("Config error: {0}")]
    Config(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for QuizError {
    fn from(s: String) -> Self {
        QuizError::Other(s)
    }
}

impl From<&str> for QuizError {
    fn from(s: &str) -> Self {
        QuizError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, QuizError>;
