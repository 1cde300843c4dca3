//! Letter grid
//!
//! An immutable square matrix of uppercase letters, stored row-major.

use super::{Coord, Orientation, Placement};
use crate::error::GridError;
use std::fmt;

/// A completed N×N word-search grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from row strings
    ///
    /// # Errors
    /// Returns `GridError` if there are no rows, a row's length differs from
    /// the number of rows, or a cell is not an uppercase letter.
    ///
    /// # Examples
    /// ```
    /// use word_hunt::core::{Coord, Grid};
    ///
    /// let grid = Grid::from_rows(&["CAT", "XOX", "XGX"]).unwrap();
    /// assert_eq!(grid.size(), 3);
    /// assert_eq!(grid.get(Coord::new(1, 1)), Some('O'));
    ///
    /// assert!(Grid::from_rows(&["CAT", "XO"]).is_err());
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, text) in rows.iter().enumerate() {
            let letters: Vec<char> = text.as_ref().chars().collect();
            if letters.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    expected: size,
                    found: letters.len(),
                });
            }
            for (col, &ch) in letters.iter().enumerate() {
                if !is_grid_letter(ch) {
                    return Err(GridError::InvalidCell {
                        coord: Coord::new(row, col),
                        found: ch,
                    });
                }
            }
            cells.extend(letters);
        }

        Ok(Self { size, cells })
    }

    /// Callers guarantee `cells.len() == size * size` and that every cell is a letter.
    pub(crate) fn from_cells(size: usize, cells: Vec<char>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Letter at `coord`, or `None` when out of bounds
    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.contains(coord)
            .then(|| self.cells[coord.row * self.size + coord.col])
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size.max(1))
    }

    /// All cells, row-major
    #[must_use]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Concatenate the letters at `coords` in the given order
    ///
    /// Out-of-bounds coordinates contribute nothing.
    #[must_use]
    pub fn read(&self, coords: &[Coord]) -> String {
        coords.iter().filter_map(|&coord| self.get(coord)).collect()
    }

    /// Locate `word` reading rows left-to-right or columns top-to-bottom
    ///
    /// Rows are scanned before columns; the first match wins.
    #[must_use]
    pub fn find_word(&self, word: &str) -> Option<Placement> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() || letters.len() > self.size {
            return None;
        }

        for orientation in Orientation::ALL {
            let (rows, cols) = orientation.anchor_bounds(self.size, letters.len());
            for row in 0..rows {
                for col in 0..cols {
                    let anchor = Coord::new(row, col);
                    let matches = letters
                        .iter()
                        .enumerate()
                        .all(|(i, &ch)| self.get(orientation.step(anchor, i)) == Some(ch));
                    if matches {
                        return Some(Placement::new(word, anchor, orientation));
                    }
                }
            }
        }

        None
    }
}

/// Cells hold a single uppercase letter (accented letters included)
#[inline]
#[must_use]
pub fn is_grid_letter(ch: char) -> bool {
    ch.is_alphabetic() && ch.is_uppercase()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
