//! Formatting utilities for terminal output

use crate::core::{Coord, Grid};
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashSet;

/// How a cell should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    Plain,
    Selected,
    Found,
}

/// Decide a cell's highlight; an in-progress selection wins over a found word
#[must_use]
pub fn cell_mark(coord: Coord, selection: &[Coord], found: &FxHashSet<Coord>) -> CellMark {
    if selection.contains(&coord) {
        CellMark::Selected
    } else if found.contains(&coord) {
        CellMark::Found
    } else {
        CellMark::Plain
    }
}

/// Render a grid with column and row headers
///
/// `mark` is consulted for every cell.
#[must_use]
pub fn grid_lines<F>(grid: &Grid, mark: F) -> Vec<String>
where
    F: Fn(Coord) -> CellMark,
{
    let header: String = (0..grid.size()).map(|col| format!("{col:>2}")).collect();
    let mut lines = vec![format!("   {header}")];

    for (row, cells) in grid.rows().enumerate() {
        let mut line = format!("{row:>2} ");
        for (col, &letter) in cells.iter().enumerate() {
            line.push(' ');
            line.push_str(&paint(letter, mark(Coord::new(row, col))).to_string());
        }
        lines.push(line);
    }
    lines
}

fn paint(letter: char, mark: CellMark) -> ColoredString {
    let text = letter.to_string();
    match mark {
        CellMark::Plain => text.normal(),
        CellMark::Selected => text.black().on_yellow().bold(),
        CellMark::Found => text.black().on_green(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One heart per remaining attempt, hollow for spent ones
#[must_use]
pub fn attempts_meter(remaining: usize, max: usize) -> String {
    let remaining = remaining.min(max);
    format!("{}{}", "♥".repeat(remaining), "♡".repeat(max - remaining))
}

/// Target list entry, marked when found
#[must_use]
pub fn word_entry(word: &str, found: bool) -> String {
    if found {
        format!("✓ {word}")
    } else {
        format!("• {word}")
    }
}
