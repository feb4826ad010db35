//! Error types for deckdown

use thiserror::Error;

/// Main error type for deckdown operations
#[derive(Error, Debug)]
pub enum DeckdownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Syntax error reported by the tokenizer, with the offending line
    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// Structural error reported by the block parser
    #[error("syntax error: {0}")]
    Parse(String),

    /// Serialization error when dumping a document tree
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for deckdown operations
pub type Result<T> = std::result::Result<T, DeckdownError>;
