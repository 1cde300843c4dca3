//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::output::{print_round, print_statistics, print_submit_outcome};
use crate::session::{PuzzleSession, Round, SelectionResult, Statistics, SubmitOutcome};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// A parsed line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select { row: usize, col: usize },
    Submit,
    Clear,
    NewRound,
    Help,
    Quit,
}

impl Command {
    /// Parse a line such as `3 4`, `3,4`, `submit` or `q`
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "s" | "submit" | "check" => Some(Self::Submit),
            "c" | "clear" => Some(Self::Clear),
            "n" | "new" => Some(Self::NewRound),
            "h" | "help" | "?" => Some(Self::Help),
            "q" | "quit" | "exit" => Some(Self::Quit),
            other => parse_cell(other).map(|(row, col)| Self::Select { row, col }),
        }
    }
}

fn parse_cell(input: &str) -> Option<(usize, usize)> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or a new round cannot be generated.
pub fn run_simple<R: Rng>(session: &mut PuzzleSession<R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Hunt - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_help();

    if session.round().is_none() {
        session.new_round().context("failed to generate the first puzzle")?;
    }

    let max_attempts = session.config().max_attempts;
    let mut stats = Statistics::default();

    loop {
        if let Some(round) = session.round() {
            print_round(round, max_attempts);
        }

        let Some(line) = get_user_input("Cell (row col) or command")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let Some(command) = Command::parse(&line) else {
            println!("{}", "❌ Unrecognised input. Type 'help' for commands.".red());
            continue;
        };

        match command {
            Command::Select { row, col } => match session.select_cell(row, col)? {
                SelectionResult::Added | SelectionResult::Removed => {}
                SelectionResult::NotAdjacent => println!(
                    "{}",
                    "⚠️  Select a cell adjacent to the previous one!".yellow()
                ),
                SelectionResult::OutOfBounds => {
                    println!("{}", "⚠️  That cell is outside the grid.".yellow());
                }
            },
            Command::Submit => {
                let candidate = session
                    .round()
                    .map(Round::candidate)
                    .unwrap_or_default();
                let outcome = session.submit()?;
                stats.record(outcome);
                print_submit_outcome(outcome, &candidate);

                if outcome == SubmitOutcome::RoundWon {
                    print_statistics(&stats);
                    match get_user_input("Play again? (yes/no)")?
                        .unwrap_or_default()
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            session.new_round()?;
                            println!("\n🔄 New puzzle generated!");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                } else if outcome == SubmitOutcome::RoundLost {
                    print_statistics(&stats);
                }
            }
            Command::Clear => session.clear_selection()?,
            Command::NewRound => {
                session.new_round()?;
                println!("\n🔄 New puzzle generated!");
            }
            Command::Help => print_help(),
            Command::Quit => {
                print_statistics(&stats);
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_help() {
    println!("Find every listed word by chaining adjacent cells (diagonals count).");
    println!("  - Type a cell as 'row col' (e.g. '3 4') to select or unselect it");
    println!("  - 's' to submit the selection, 'c' to clear it");
    println!("  - 'n' for a new puzzle, 'q' to quit\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
