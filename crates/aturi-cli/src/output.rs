//! Terminal output for command results.
//!
//! Results go to stdout and rejections to stderr, so `aturi uri check`
//! and `aturi rkey` can be used in pipelines that only read stdout.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Report an input that passed validation.
pub fn accepted(input: &str, note: &str) {
    println!("{} {} {}", "✓".green(), input, note.dimmed());
}

/// Report an input that failed validation, with the reason.
pub fn rejected(input: &str, reason: &str) {
    eprintln!("{} {}: {}", "✗".red(), input.bold(), reason);
}

/// Print a labeled part, skipping it when empty.
pub fn part(label: &str, value: &str) {
    if !value.is_empty() {
        println!("{:<11}{}", format!("{label}:").dimmed(), value);
    }
}

/// Print a value as a single line of JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
