//! Error Types

use thiserror::Error;

/// Result type for collection operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Rejections from the add operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("todo already exists: {0}")]
    AlreadyExists(String),
    #[error("todo text is empty")]
    EmptyText,
}

/// Errors while loading the app configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed list contains duplicate todo: {0}")]
    DuplicateSeed(String),
}
