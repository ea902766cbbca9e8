//! Terminal prompts. Everything here degrades to "no answer" when stderr is
//! not attached to a terminal.

use dialoguer::{Confirm, Input};
use std::path::Path;
use use_cli::config::DEFAULT_DESTINATION;

fn interactive() -> bool {
    console::Term::stderr().is_term()
}

/// Overwrite confirmation backed by a terminal prompt.
pub struct TerminalConfirm;

impl use_cli::conflict::Confirm for TerminalConfirm {
    fn confirm_overwrite(&self, path: &Path) -> Option<bool> {
        if !interactive() {
            return None;
        }
        Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()
            .ok()
    }
}

pub fn ask_destination() -> Option<String> {
    if !interactive() {
        return None;
    }
    Input::<String>::new()
        .with_prompt("Set default installation path for hooks")
        .default(DEFAULT_DESTINATION.to_string())
        .validate_with(|input: &String| -> Result<(), &'static str> {
            if input.trim().is_empty() {
                Err("Path cannot be empty!")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .ok()
}
