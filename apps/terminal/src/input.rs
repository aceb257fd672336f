//! Small stdin helpers shared by the menu screens.

use std::io::{self, Write};

pub fn clear_screen() {
    // ANSI clear + cursor home.
    print!("\x1b[2J\x1b[1;1H");
    let _ = io::stdout().flush();
}

pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn pause() -> io::Result<()> {
    read_line("\nPress Enter to continue...").map(|_| ())
}

#[derive(Debug, PartialEq, Eq)]
pub enum Selection {
    Back,
    Pick(usize),
    Invalid,
}

/// Interpret a menu entry: `0` backs out, `1..=max` picks (0-based index),
/// anything else is invalid.
pub fn parse_selection(raw: &str, max: usize) -> Selection {
    match raw.trim().parse::<usize>() {
        Ok(0) => Selection::Back,
        Ok(n) if n <= max => Selection::Pick(n - 1),
        _ => Selection::Invalid,
    }
}

/// Read a selection, re-prompting until it is valid. `None` means the user
/// backed out.
pub fn read_selection(prompt: &str, max: usize) -> io::Result<Option<usize>> {
    loop {
        let raw = read_line(prompt)?;
        match parse_selection(&raw, max) {
            Selection::Back => return Ok(None),
            Selection::Pick(idx) => return Ok(Some(idx)),
            Selection::Invalid => println!("Please enter a number between 0 and {max}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_parse() {
        assert_eq!(parse_selection("0", 4), Selection::Back);
        assert_eq!(parse_selection("1", 4), Selection::Pick(0));
        assert_eq!(parse_selection(" 4 ", 4), Selection::Pick(3));
    }

    #[test]
    fn out_of_range_and_garbage_are_invalid() {
        assert_eq!(parse_selection("5", 4), Selection::Invalid);
        assert_eq!(parse_selection("-1", 4), Selection::Invalid);
        assert_eq!(parse_selection("abc", 4), Selection::Invalid);
        assert_eq!(parse_selection("", 4), Selection::Invalid);
    }
}
