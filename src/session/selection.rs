//! In-progress cell selection
//!
//! A chain of distinct cells; each new cell must touch the last one.

use super::SelectionResult;
use crate::core::Coord;

/// Ordered, adjacency-checked chain of selected cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<Coord>,
}

impl Selection {
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Toggle `coord` in or out of the chain
    ///
    /// Selecting a cell already in the chain removes just that cell, with no
    /// adjacency check. A new cell is appended when the chain is empty or the
    /// cell touches the last one; otherwise the chain is left untouched.
    pub fn toggle(&mut self, coord: Coord) -> SelectionResult {
        if let Some(pos) = self.position(coord) {
            self.cells.remove(pos);
            return SelectionResult::Removed;
        }

        match self.cells.last() {
            Some(&last) if !last.is_adjacent(coord) => SelectionResult::NotAdjacent,
            _ => {
                self.cells.push(coord);
                SelectionResult::Added
            }
        }
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    fn position(&self, coord: Coord) -> Option<usize> {
        self.cells.iter().position(|&c| c == coord)
    }

    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    #[must_use]
    pub fn last(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Empty the chain, returning the cells that were selected
    pub fn take(&mut self) -> Vec<Coord> {
        std::mem::take(&mut self.cells)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
