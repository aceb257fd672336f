//! Core vocabulary-drill library shared by the terminal and web front-ends.
//!
//! Provides:
//! - JSON-backed card store (one flat file, fully rewritten on save)
//! - Review scheduling (due check, fresh-card pool, weighted random fallback)
//! - Multiple-choice question building
//! - Shared types (Card, Question, DeckStats)

pub mod deck;
pub mod error;
pub mod quiz;
pub mod scheduler;
pub mod store;
pub mod types;

pub use deck::{add_card, DeckStats, LEARNED_STREAK};
pub use error::{StorageError, ValidationError};
pub use quiz::{apply_answer, build_question, evaluate, Question};
pub use scheduler::{interval_for, record_outcome, select_next};
pub use store::{next_id, CardStore};
pub use types::Card;
