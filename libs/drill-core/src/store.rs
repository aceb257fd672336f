//! JSON-backed card storage.
//!
//! The whole deck lives in one JSON file (an array of card objects) that is
//! read fully at startup and rewritten fully after every change. There is a
//! single writer at a time, so no locking.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::types::Card;

type Result<T> = std::result::Result<T, StorageError>;

/// Path-backed handle to the card file.
#[derive(Debug)]
pub struct CardStore {
    path: PathBuf,
}

impl CardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every card. A missing file is an empty deck, not an error, so
    /// callers can decide whether to seed a starter card.
    pub fn load(&self) -> Result<Vec<Card>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let cards: Vec<Card> = serde_json::from_str(&content)?;
        Ok(cards)
    }

    /// Rewrite the backing file with the full deck, pretty-printed.
    pub fn save(&self, cards: &[Card]) -> Result<()> {
        let content = serde_json::to_string_pretty(cards)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Next free card id: one past the highest in use.
pub fn next_id(cards: &[Card]) -> i64 {
    cards.iter().map(|c| c.id).max().unwrap_or(0) + 1
}
