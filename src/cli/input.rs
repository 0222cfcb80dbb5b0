//! User input utilities for interactive CLI prompts
//!
//! This module provides the confirmation prompt shown before the
//! processor overwrites existing output files.

use crate::{Error, Result};
use std::io::{self, Write};
use std::path::Path;

/// Get user confirmation for an action
pub fn prompt_confirmation(message: &str, default_yes: bool) -> Result<bool> {
    let default_text = if default_yes { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", message, default_text);

    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    match parse_response(&input, default_yes) {
        Some(answer) => Ok(answer),
        None => {
            println!("Please enter 'y' for yes or 'n' for no.");
            prompt_confirmation(message, default_yes)
        }
    }
}

/// Ask whether an existing output file should be overwritten
///
/// Defaults to "no" so an accidental Enter never clobbers data.
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    prompt_confirmation(
        &format!("Output file {} already exists. Overwrite?", path.display()),
        false,
    )
}

/// Interpret one line of user input as a yes/no answer
///
/// Empty input takes the default; unrecognized input returns None so
/// the caller can re-prompt.
fn parse_response(input: &str, default_yes: bool) -> Option<bool> {
    let input = input.trim().to_lowercase();

    if input.is_empty() {
        return Some(default_yes);
    }

    match input.as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
