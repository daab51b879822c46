use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};

pub fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Turns a 1-based menu choice into an index into a list of `count` items.
pub fn parse_selection(choice: &str, count: usize) -> Result<usize> {
    let choice = choice.trim();
    if choice.is_empty() || !choice.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidSelection);
    }

    match choice.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(Error::InvalidSelection),
    }
}
