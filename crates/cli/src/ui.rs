//! Prompting and colored output helpers for the menu shell.

use std::io::{self, Write};

use crossterm::style::Stylize;

use sakura_core::Price;

/// Currency symbol used throughout the store.
pub const CURRENCY: &str = "Ұ";

/// Print a page heading.
pub fn heading(title: &str) {
    println!();
    println!("{}", format!("---------- {title} ----------").magenta().bold());
    println!();
}

/// Print the top-level welcome banner.
pub fn banner(title: &str) {
    println!();
    println!("{}", format!("==========  {title}  ==========").magenta().bold());
}

/// Print a success message in blue.
pub fn success(message: &str) {
    println!("\n{}", message.to_owned().blue());
}

/// Print an error message in red.
pub fn error(message: &str) {
    println!("\n{}", message.to_owned().red());
}

/// Print a notice in yellow (cancellations, logouts).
pub fn notice(message: &str) {
    println!("\n{}", message.to_owned().yellow());
}

/// Prompt for one line of input and return it trimmed.
///
/// # Errors
///
/// Returns an error only if stdin or stdout fails, which ends the session.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label.to_owned().bold());
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

/// Prompt for the numbered-menu choice.
///
/// # Errors
///
/// Returns an error only if stdin or stdout fails.
pub fn prompt_choice() -> io::Result<String> {
    prompt("\n > Enter your choice: ")
}

/// Prompt for a value and parse it, reporting a parse failure inline.
///
/// Returns `Ok(None)` on bad input so the caller can fall back to its
/// menu, as every screen does.
///
/// # Errors
///
/// Returns an error only if stdin or stdout fails.
pub fn prompt_parse<T: std::str::FromStr>(label: &str) -> io::Result<Option<T>> {
    let input = prompt(label)?;
    match input.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            error("Invalid input. Please try again...");
            Ok(None)
        }
    }
}

/// Ask a y/n question. Returns `None` on anything else.
///
/// # Errors
///
/// Returns an error only if stdin or stdout fails.
pub fn confirm(label: &str) -> io::Result<Option<bool>> {
    let answer = prompt(label)?.to_lowercase();
    Ok(match answer.as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    })
}

/// Format a price with the store currency symbol and thousands grouping,
/// e.g. `Ұ2,500.00`.
#[must_use]
pub fn money(price: Price) -> String {
    let text = price.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    format!("{CURRENCY}{grouped}.{fraction}")
}
