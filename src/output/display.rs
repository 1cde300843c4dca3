//! Display functions for command results

use super::formatters::{attempts_meter, cell_mark, create_progress_bar, grid_lines, word_entry};
use crate::commands::{BenchmarkResult, GenerateResult};
use crate::core::Coord;
use crate::session::{Round, Statistics, SubmitOutcome};
use colored::Colorize;
use rustc_hash::FxHashSet;

/// Print a generated puzzle, optionally with its answer key highlighted
pub fn print_generate_result(result: &GenerateResult, reveal: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD HUNT PUZZLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let answer_cells: FxHashSet<Coord> = if reveal {
        result
            .generated
            .placements
            .iter()
            .flat_map(|placement| placement.cells())
            .collect()
    } else {
        FxHashSet::default()
    };

    println!();
    for line in grid_lines(&result.generated.grid, |coord| {
        cell_mark(coord, &[], &answer_cells)
    }) {
        println!("  {line}");
    }

    println!("\n📝 {}", "Words to find:".bright_cyan().bold());
    for word in &result.targets {
        println!("   {}", word_entry(word, false));
    }

    if reveal {
        println!("\n🔑 {}", "Answer key:".bright_cyan().bold());
        for placement in &result.generated.placements {
            println!("   {placement}");
        }
        if result.generated.fallbacks > 0 {
            println!(
                "   {}",
                format!(
                    "({} placed by scanning after random tries ran out)",
                    result.generated.fallbacks
                )
                .bright_black()
            );
        }
    }
}

/// Print the board, target list and attempts for the line-based game
pub fn print_round(round: &Round, max_attempts: usize) {
    let selection = round.selection().cells();
    let found = round.correct_coordinates();

    println!();
    for line in grid_lines(round.grid(), |coord| cell_mark(coord, selection, found)) {
        println!("  {line}");
    }

    println!();
    for word in round.targets() {
        let found = round.is_found(word);
        let entry = word_entry(word, found);
        if found {
            println!("   {}", entry.green().strikethrough());
        } else {
            println!("   {entry}");
        }
    }

    println!(
        "\n   Attempts: {}  Selection: {}",
        attempts_meter(round.attempts_remaining(), max_attempts).red(),
        if selection.is_empty() {
            "(empty)".bright_black().to_string()
        } else {
            round.candidate().bright_yellow().bold().to_string()
        }
    );
}

/// Print the message that goes with a submission
pub fn print_submit_outcome(outcome: SubmitOutcome, candidate: &str) {
    let message = match outcome {
        SubmitOutcome::CorrectNew => format!("✅ Found {candidate}!").green().bold(),
        SubmitOutcome::CorrectDuplicate => {
            format!("🔁 You already found {candidate}.").yellow()
        }
        SubmitOutcome::Incorrect => {
            let shown = if candidate.is_empty() { "(nothing)" } else { candidate };
            format!("❌ {shown} is not one of the words.").red()
        }
        SubmitOutcome::RoundWon => "🎉 Congratulations! You found every word!"
            .bright_green()
            .bold(),
        SubmitOutcome::RoundLost => "💀 Game over! You ran out of attempts. New puzzle generated."
            .bright_red()
            .bold(),
    };
    println!("\n{message}");
}

/// Print win/loss totals
pub fn print_statistics(stats: &Statistics) {
    println!(
        "   Rounds won: {}  lost: {}  win rate: {:.0}%  words found: {}",
        stats.rounds_won.to_string().green(),
        stats.rounds_lost.to_string().red(),
        stats.win_rate(),
        stats.words_found
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATION BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Grids requested:  {}", result.total_grids);
    println!(
        "   Generated:        {}",
        result.generated.to_string().green().bold()
    );
    println!(
        "   Failed:           {}",
        if result.failed == 0 {
            "0".green()
        } else {
            result.failed.to_string().red().bold()
        }
    );
    println!("   Scan fallbacks:   {}", result.fallbacks);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Grids/second:     {:.1}", result.grids_per_second);

    if let Some(message) = &result.first_failure {
        println!("   First failure:    {}", message.red());
    }

    if result.generated > 0 {
        println!("\n📈 {}", "Shared cells per grid:".bright_cyan().bold());
        for (&crossings, &count) in &result.crossing_distribution {
            let pct = (count as f64 / result.generated as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40).green();
            println!("   {crossings:>2}: {bar} {count:5} ({pct:5.1}%)");
        }
    }
}
