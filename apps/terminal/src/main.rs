//! Terminal front-end: a colored menu loop over the shared card file.

mod add;
mod input;
mod quiz;
mod stats;

use anyhow::{Context, Result};
use colored::Colorize;
use drill_core::{Card, CardStore};

/// Data file used when WORDDRILL_FILE is not set.
const DEFAULT_DATA_FILE: &str = "words.json";

fn main() -> Result<()> {
    let path = std::env::var("WORDDRILL_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
    let store = CardStore::new(&path);

    let mut deck = store
        .load()
        .with_context(|| format!("could not load {path}"))?;

    if deck.is_empty() {
        println!(
            "{}",
            format!("{path} not found, seeding a starter card...").yellow()
        );
        deck.push(Card::new(1, "run", "koşmak", "I run fast.", "General"));
        if let Err(err) = store.save(&deck) {
            eprintln!("{}", format!("warning: could not write {path}: {err}").red());
        }
    }

    loop {
        input::clear_screen();
        println!("{}", "--- WORDDRILL ---".cyan().bold());
        println!("Words in deck: {}", deck.len());
        println!("{}", "-".repeat(30));
        println!("1. Start quiz");
        println!("2. Statistics");
        println!("3. Add word");
        println!("4. Exit");
        println!("{}", "-".repeat(30));

        match input::read_line("Choice: ")?.trim() {
            "1" => quiz::run(&store, &mut deck)?,
            "2" => stats::show(&deck)?,
            "3" => add::run(&store, &mut deck)?,
            "4" => {
                println!("See you!");
                break;
            }
            _ => {
                println!("{}", "Please pick one of the listed options.".red());
                input::pause()?;
            }
        }
    }

    Ok(())
}
