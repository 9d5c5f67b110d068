//! Error types for evman.

use thiserror::Error;

/// Errors that can occur in evman operations.
#[derive(Error, Debug)]
pub enum EvmanError {
    #[error("An event is already scheduled on {date} at {time}")]
    Conflict { date: String, time: String },

    #[error("Event '{name}' on {date} at {time} already exists")]
    Duplicate {
        name: String,
        date: String,
        time: String,
    },

    #[error("Event '{0}' not found")]
    NotFound(String),

    #[error("Field '{field}' may not contain {character:?}")]
    ReservedCharacter { field: &'static str, character: char },

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for evman operations.
pub type EvmanResult<T> = Result<T, EvmanError>;
