//! Core types for the vocabulary drill.

use serde::{Deserialize, Serialize};

/// Weight given to a card that has never been answered correctly, and
/// restored whenever it is answered wrong.
pub const DEFAULT_WEIGHT: f64 = 100.0;

/// Weights never fall below this, so every card keeps a nonzero chance of
/// being drawn.
pub const MIN_WEIGHT: f64 = 1.0;

fn default_category() -> String {
    "General".to_string()
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// A single vocabulary card.
///
/// Timestamps are Unix seconds. Zero means "never" for `last_reviewed_at`
/// and "immediately due" for `next_review_at`, so a freshly created card is
/// always eligible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub term: String,
    pub translation: String,
    #[serde(default)]
    pub sentence: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub correct_streak: u32,
    #[serde(default)]
    pub last_reviewed_at: i64,
    #[serde(default)]
    pub next_review_at: i64,
}

impl Card {
    /// Fresh card with default scheduling state. An empty category falls
    /// back to "General".
    pub fn new(id: i64, term: &str, translation: &str, sentence: &str, category: &str) -> Self {
        Self {
            id,
            term: term.to_string(),
            translation: translation.to_string(),
            sentence: sentence.to_string(),
            category: if category.is_empty() {
                default_category()
            } else {
                category.to_string()
            },
            weight: DEFAULT_WEIGHT,
            correct_streak: 0,
            last_reviewed_at: 0,
            next_review_at: 0,
        }
    }
}
