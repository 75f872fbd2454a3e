//! Interactive menu mode
//!
//! Line-oriented prompt/response loop over the six dictionary operations.
//! Input and output are generic so the loop can be driven from tests.

use crate::core::RebalanceRecord;
use crate::dictionary::{AddOutcome, Dictionary, RemoveOutcome};
use crate::output::formatters::format_word_list;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::warn;

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Find,
    Remove,
    FindSimilar,
    Save,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection (`1`-`6`)
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Find),
            "3" => Some(Self::Remove),
            "4" => Some(Self::FindSimilar),
            "5" => Some(Self::Save),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu until the user exits or input ends
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails. Failed
/// dictionary operations, including saves, are reported and the loop goes on.
pub fn run_menu<R: BufRead, W: Write>(
    dict: &mut Dictionary,
    mut input: R,
    mut output: W,
) -> Result<()> {
    // Rebalances from the initial load are not news
    dict.drain_rebalances();

    loop {
        print_menu(&mut output)?;
        let Some(line) = prompt(&mut input, &mut output, "Enter your choice (1-6)")? else {
            writeln!(output, "\nExiting program.")?;
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(output, "{}", "Invalid choice.".red())?;
            continue;
        };

        if choice == MenuChoice::Exit {
            writeln!(output, "Exiting program.")?;
            return Ok(());
        }

        let prompt_text = match choice {
            MenuChoice::Add => "Enter word to add",
            MenuChoice::Find => "Enter word to find",
            MenuChoice::Remove => "Enter word to delete",
            MenuChoice::FindSimilar => "Enter word to find similar words",
            MenuChoice::Save | MenuChoice::Exit => "Enter filename to save dictionary",
        };
        let Some(argument) = prompt(&mut input, &mut output, prompt_text)? else {
            writeln!(output, "\nExiting program.")?;
            return Ok(());
        };

        execute(dict, choice, &argument, &mut output)?;
    }
}

/// Perform one menu operation and report the result
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn execute<W: Write>(
    dict: &mut Dictionary,
    choice: MenuChoice,
    argument: &str,
    output: &mut W,
) -> Result<()> {
    match choice {
        MenuChoice::Add => match dict.add(argument) {
            AddOutcome::Inserted => writeln!(output, "{}", "Word added successfully".green())?,
            AddOutcome::AlreadyPresent => writeln!(
                output,
                "{}",
                "Word already exists in the dictionary.".yellow()
            )?,
        },
        MenuChoice::Find => {
            if dict.contains(argument) {
                writeln!(output, "{}", "Word found in the dictionary.".green())?;
            } else {
                writeln!(output, "{}", "Word not found in the dictionary.".yellow())?;
            }
        }
        MenuChoice::Remove => match dict.remove(argument) {
            RemoveOutcome::Removed => {
                writeln!(output, "{}", "Word deleted successfully".green())?;
            }
            RemoveOutcome::NotFound => {
                writeln!(output, "{}", "Word not found in the dictionary.".yellow())?;
            }
            RemoveOutcome::EmptyDictionary => {
                writeln!(output, "{}", "The dictionary is empty. Cannot delete.".yellow())?;
            }
        },
        MenuChoice::FindSimilar => {
            let similar = dict.find_similar(argument);
            writeln!(output, "Similar words: {}", format_word_list(&similar))?;
        }
        MenuChoice::Save => save(dict, argument, output)?,
        MenuChoice::Exit => {}
    }

    report_rebalances(&dict.drain_rebalances(), output)?;
    Ok(())
}

fn save<W: Write>(dict: &Dictionary, filename: &str, output: &mut W) -> Result<()> {
    if dict.is_empty() {
        writeln!(output, "Dictionary is empty. Nothing to save.")?;
        return Ok(());
    }
    match dict.save(filename) {
        Ok(_) => writeln!(output, "{}", "Dictionary saved successfully.".green())?,
        Err(err) => {
            warn!(error = %err, "save failed");
            writeln!(output, "{}", format!("Could not save dictionary: {err}").red())?;
        }
    }
    Ok(())
}

fn report_rebalances<W: Write>(records: &[RebalanceRecord], output: &mut W) -> Result<()> {
    for record in records {
        writeln!(output, "  {} {record}", "↻".cyan())?;
    }
    Ok(())
}

fn print_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "\n{}", "Dictionary Operations:".bold())?;
    writeln!(output, "1. Add word")?;
    writeln!(output, "2. Find word")?;
    writeln!(output, "3. Remove word")?;
    writeln!(output, "4. Find similar words")?;
    writeln!(output, "5. Save dictionary to file")?;
    writeln!(output, "6. Exit")?;
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input
///
/// # Errors
///
/// Returns an error if flushing the prompt or reading the line fails.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{text}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
