//! Word placements
//!
//! Words run either left-to-right along a row or top-to-bottom along a column.

use super::Coord;
use rand::Rng;
use std::fmt;

/// Direction a word is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Both orientations, in fallback scan order
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Pick an orientation uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Cell `offset` steps from `anchor` in this direction
    #[inline]
    #[must_use]
    pub const fn step(self, anchor: Coord, offset: usize) -> Coord {
        match self {
            Self::Horizontal => Coord::new(anchor.row, anchor.col + offset),
            Self::Vertical => Coord::new(anchor.row + offset, anchor.col),
        }
    }

    /// Exclusive upper bounds `(rows, cols)` for an anchor of a word of
    /// `len` letters on a `size` grid. Zero in either means no anchor fits.
    #[inline]
    #[must_use]
    pub const fn anchor_bounds(self, size: usize, len: usize) -> (usize, usize) {
        let span = if len > size { 0 } else { size - len + 1 };
        match self {
            Self::Horizontal => (size, span),
            Self::Vertical => (span, size),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Where a word sits in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub anchor: Coord,
    pub orientation: Orientation,
}

impl Placement {
    #[must_use]
    pub fn new(word: impl Into<String>, anchor: Coord, orientation: Orientation) -> Self {
        Self {
            word: word.into(),
            anchor,
            orientation,
        }
    }

    /// Number of letters (not bytes) in the word
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cells covered by the word, in reading order
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.len()).map(|i| self.orientation.step(self.anchor, i))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} {}", self.word, self.anchor, self.orientation)
    }
}
