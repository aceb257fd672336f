//! Bulk import: merge a JSON batch of new cards into the card file,
//! skipping terms the deck already has.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use drill_core::{next_id, Card, CardStore};

/// Merge new vocabulary into the card file, skipping duplicates.
#[derive(Parser)]
#[command(name = "worddrill-import")]
struct Args {
    /// JSON file holding an array of cards to add
    input: PathBuf,

    /// Card file to merge into
    #[arg(long, default_value = "words.json")]
    data_file: PathBuf,
}

/// Incoming card record. Exporters may pre-set the scheduling fields;
/// anything omitted gets the usual defaults.
#[derive(Debug, Deserialize)]
struct NewCard {
    term: String,
    translation: String,
    #[serde(default)]
    sentence: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    correct_streak: Option<u32>,
    #[serde(default)]
    next_review_at: Option<i64>,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct MergeReport {
    added: usize,
    skipped: usize,
}

/// Fold the batch into the deck. Terms are deduplicated case-insensitively
/// against the existing deck and within the batch itself.
fn merge_batch(deck: &mut Vec<Card>, batch: Vec<NewCard>) -> MergeReport {
    let mut seen: HashSet<String> = deck.iter().map(|c| c.term.to_lowercase()).collect();
    let mut report = MergeReport::default();

    for incoming in batch {
        let term = incoming.term.trim();
        let key = term.to_lowercase();
        if key.is_empty() {
            println!("Skipping card with an empty term");
            report.skipped += 1;
            continue;
        }
        if seen.contains(&key) {
            println!("Skipping duplicate: {term}");
            report.skipped += 1;
            continue;
        }

        let mut card = Card::new(
            next_id(deck),
            term,
            incoming.translation.trim(),
            incoming.sentence.trim(),
            incoming.category.trim(),
        );
        if let Some(weight) = incoming.weight {
            card.weight = weight.max(1.0);
        }
        if let Some(streak) = incoming.correct_streak {
            card.correct_streak = streak;
        }
        if let Some(at) = incoming.next_review_at {
            card.next_review_at = at;
        }

        seen.insert(key);
        deck.push(card);
        report.added += 1;
    }

    report
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("could not read {}", args.input.display()))?;
    let batch: Vec<NewCard> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid card batch", args.input.display()))?;

    let store = CardStore::new(&args.data_file);
    let mut deck = store
        .load()
        .with_context(|| format!("could not load {}", args.data_file.display()))?;

    let report = merge_batch(&mut deck, batch);

    store
        .save(&deck)
        .with_context(|| format!("could not write {}", args.data_file.display()))?;

    println!(
        "Added {} new cards. Skipped {} duplicates.",
        report.added, report.skipped
    );
    println!("Total cards: {}", deck.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn incoming(term: &str, translation: &str) -> NewCard {
        NewCard {
            term: term.to_string(),
            translation: translation.to_string(),
            sentence: String::new(),
            category: String::new(),
            weight: None,
            correct_streak: None,
            next_review_at: None,
        }
    }

    #[test]
    fn new_terms_get_sequential_ids_and_defaults() {
        let mut deck = vec![Card::new(4, "run", "koşmak", "", "")];

        let report = merge_batch(&mut deck, vec![incoming("eat", "yemek")]);
        assert_eq!(report, MergeReport { added: 1, skipped: 0 });
        assert_eq!(deck[1].id, 5);
        assert_eq!(deck[1].weight, 100.0);
        assert_eq!(deck[1].category, "General");
    }

    #[test]
    fn duplicates_are_skipped_case_insensitively() {
        let mut deck = vec![Card::new(1, "run", "koşmak", "", "")];

        let report = merge_batch(
            &mut deck,
            vec![
                incoming("RUN", "koşmak"),
                incoming("eat", "yemek"),
                incoming("Eat", "yemek"),
                incoming("  ", "boş"),
            ],
        );
        assert_eq!(report, MergeReport { added: 1, skipped: 3 });
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn scheduling_overrides_are_honored() {
        let mut deck = Vec::new();
        let batch = vec![NewCard {
            weight: Some(25.0),
            correct_streak: Some(2),
            next_review_at: Some(9_000),
            ..incoming("sleep", "uyumak")
        }];

        merge_batch(&mut deck, batch);
        assert_eq!(deck[0].weight, 25.0);
        assert_eq!(deck[0].correct_streak, 2);
        assert_eq!(deck[0].next_review_at, 9_000);
    }

    #[test]
    fn override_weight_is_floored() {
        let mut deck = Vec::new();
        let batch = vec![NewCard {
            weight: Some(0.0),
            ..incoming("jump", "zıplamak")
        }];

        merge_batch(&mut deck, batch);
        assert_eq!(deck[0].weight, 1.0);
    }
}
