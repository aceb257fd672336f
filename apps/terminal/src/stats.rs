//! Deck statistics screen.

use anyhow::Result;
use colored::Colorize;
use drill_core::{Card, DeckStats, LEARNED_STREAK};

use crate::input;

pub fn show(deck: &[Card]) -> Result<()> {
    input::clear_screen();
    let stats = DeckStats::collect(deck);

    println!("\n{}\n", "--- STATISTICS ---".magenta().bold());
    println!("Total words : {}", stats.total);
    println!(
        "Learned     : {} (streak of {LEARNED_STREAK}+)",
        stats.learned.to_string().green()
    );
    println!("In progress : {}", stats.in_progress.to_string().yellow());
    println!("New         : {}", stats.fresh.to_string().blue());

    if stats.total > 0 {
        println!("\nProgress    : {:.1}%", stats.learned_ratio() * 100.0);
    }

    input::pause()?;
    Ok(())
}
