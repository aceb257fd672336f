//! Error types for drill-core.

use thiserror::Error;

/// Failures touching the card file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("card file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("card file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rejected input when creating a card by hand.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("term must not be empty")]
    EmptyTerm,

    #[error("a card for '{0}' already exists")]
    DuplicateTerm(String),
}
