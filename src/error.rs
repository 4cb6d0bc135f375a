use thiserror::Error;

use crate::types::LangMode;

#[derive(Error, Debug)]
pub enum PokekaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize/deserialize data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No entry named {name:?} in {mode} mode")]
    NotFound { mode: LangMode, name: String },

    #[error("No option selected")]
    NoSelection,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Failed to open browser: {0}")]
    Browser(String),
}

pub type Result<T> = std::result::Result<T, PokekaError>;
