//! Quiz rounds: question display, answer entry, feedback.

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use drill_core::{apply_answer, build_question, evaluate, select_next, Card, CardStore};

use crate::input;

/// Run quiz rounds until the user backs out to the menu.
pub fn run(store: &CardStore, deck: &mut Vec<Card>) -> Result<()> {
    while play_round(store, deck)? {}
    Ok(())
}

/// One round. Returns false when the user wants the menu back.
fn play_round(store: &CardStore, deck: &mut Vec<Card>) -> Result<bool> {
    input::clear_screen();

    let now = Utc::now().timestamp();
    let mut rng = rand::thread_rng();

    let Some(target) = select_next(deck, now, &mut rng) else {
        println!("{}", "The deck is empty!".red());
        input::pause()?;
        return Ok(false);
    };
    let question = build_question(deck, target, &mut rng);

    println!("\n{}", "=".repeat(50));
    println!(
        "{}",
        format!("What is the translation of '{}'?", question.prompt).cyan()
    );
    println!("{}", format!("[Category: {}]", question.category).yellow());
    println!("{}\n", "=".repeat(50));

    for (i, option) in question.options.iter().enumerate() {
        println!("{}) {}", i + 1, option);
    }
    println!("\n0) Back to menu");

    let Some(choice) = input::read_selection("\nYour answer: ", question.options.len())? else {
        return Ok(false);
    };

    let correct = evaluate(&question.options[choice], &question.answer);
    if correct {
        println!("\n{}", "Correct!".green().bold());
    } else {
        println!(
            "\n{}",
            format!("Wrong. The answer is '{}'.", question.answer)
                .red()
                .bold()
        );
    }
    println!("{}", format!("Example: {}", question.sentence).blue());

    apply_answer(deck, question.card_id, correct, now);
    if let Err(err) = store.save(deck) {
        eprintln!(
            "{}",
            format!("warning: could not save progress: {err}").yellow()
        );
    }

    input::pause()?;
    Ok(true)
}
