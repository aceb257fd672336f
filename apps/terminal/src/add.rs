//! Manual card entry.

use anyhow::Result;
use colored::Colorize;
use drill_core::{add_card, Card, CardStore};

use crate::input;

pub fn run(store: &CardStore, deck: &mut Vec<Card>) -> Result<()> {
    input::clear_screen();
    println!("\n{}\n", "--- ADD WORD ---".magenta().bold());

    let term = input::read_line("Term: ")?;
    let translation = input::read_line("Translation: ")?;
    let sentence = input::read_line("Example sentence: ")?;
    let category = input::read_line("Category (optional): ")?;

    match add_card(deck, &term, &translation, &sentence, &category) {
        Ok(card) => {
            println!("\n{}", format!("Added '{}'.", card.term).green());
            if let Err(err) = store.save(deck) {
                eprintln!(
                    "{}",
                    format!("warning: could not save the deck: {err}").yellow()
                );
            }
        }
        Err(err) => println!("\n{}", err.to_string().red()),
    }

    input::pause()?;
    Ok(())
}
