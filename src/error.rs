use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid task number: {0}")]
    InvalidIndex(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
