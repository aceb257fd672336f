//! Deck-level operations: adding cards and summarizing progress.

use crate::error::ValidationError;
use crate::store::next_id;
use crate::types::Card;

/// Streak at which a card counts as learned in the statistics view.
pub const LEARNED_STREAK: u32 = 5;

/// Validate and append a new card, assigning the next free id.
///
/// The term must be non-empty and not already present (compared
/// case-insensitively, since "Run" and "run" are the same word). An empty
/// category falls back to "General".
pub fn add_card<'a>(
    deck: &'a mut Vec<Card>,
    term: &str,
    translation: &str,
    sentence: &str,
    category: &str,
) -> Result<&'a Card, ValidationError> {
    let term = term.trim();
    if term.is_empty() {
        return Err(ValidationError::EmptyTerm);
    }

    let lowered = term.to_lowercase();
    if deck.iter().any(|c| c.term.to_lowercase() == lowered) {
        return Err(ValidationError::DuplicateTerm(term.to_string()));
    }

    let card = Card::new(
        next_id(deck),
        term,
        translation.trim(),
        sentence.trim(),
        category.trim(),
    );
    deck.push(card);
    Ok(&deck[deck.len() - 1])
}

/// Progress counts over the whole deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeckStats {
    pub total: usize,
    pub learned: usize,
    pub in_progress: usize,
    pub fresh: usize,
}

impl DeckStats {
    pub fn collect(cards: &[Card]) -> Self {
        let mut stats = Self {
            total: cards.len(),
            ..Self::default()
        };
        for card in cards {
            if card.correct_streak >= LEARNED_STREAK {
                stats.learned += 1;
            } else if card.correct_streak > 0 {
                stats.in_progress += 1;
            } else {
                stats.fresh += 1;
            }
        }
        stats
    }

    /// Fraction of the deck that is learned; 0.0 for an empty deck.
    pub fn learned_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.learned as f64 / self.total as f64
        }
    }
}
