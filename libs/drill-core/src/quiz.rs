//! One question/answer cycle: building multiple-choice options and folding
//! the outcome back into the deck.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::scheduler::record_outcome;
use crate::types::Card;

/// Wrong options drawn alongside the correct translation.
const DISTRACTOR_COUNT: usize = 3;

/// A rendered multiple-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub card_id: i64,
    pub prompt: String,
    pub category: String,
    pub sentence: String,
    pub answer: String,
    pub options: Vec<String>,
}

/// Build a question for `target`.
///
/// Distractors are up to [`DISTRACTOR_COUNT`] distinct other cards'
/// translations, drawn without replacement (shuffle and slice); with a
/// small deck the option list simply shrinks, it is never padded. Options
/// are compared as plain text, so when two cards share a translation the
/// duplicated option is indistinguishable from the correct answer.
pub fn build_question<R: Rng + ?Sized>(cards: &[Card], target: &Card, rng: &mut R) -> Question {
    let mut pool: Vec<&Card> = cards.iter().filter(|c| c.id != target.id).collect();
    pool.shuffle(rng);

    let mut options: Vec<String> = pool
        .iter()
        .take(DISTRACTOR_COUNT)
        .map(|c| c.translation.clone())
        .collect();
    options.push(target.translation.clone());
    options.shuffle(rng);

    Question {
        card_id: target.id,
        prompt: target.term.clone(),
        category: target.category.clone(),
        sentence: target.sentence.clone(),
        answer: target.translation.clone(),
        options,
    }
}

/// Exact text comparison between the chosen option and the correct
/// translation.
pub fn evaluate(selected: &str, answer: &str) -> bool {
    selected == answer
}

/// Record an answer against the deck and return the updated card, or `None`
/// if the id is no longer present.
pub fn apply_answer(cards: &mut [Card], card_id: i64, is_correct: bool, now: i64) -> Option<&Card> {
    let card = cards.iter_mut().find(|c| c.id == card_id)?;
    record_outcome(card, is_correct, now);
    Some(&*card)
}
