//! Grid coordinates
//!
//! A `Coord` is a zero-based (row, column) pair. Adjacency is 8-directional:
//! two cells touch when both their row and column differ by at most one.

use std::fmt;

/// A (row, column) position in the letter grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance between two cells
    #[inline]
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> usize {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        if dr > dc { dr } else { dc }
    }

    /// True when `other` is one king-move away (or the same cell)
    #[inline]
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.chebyshev_distance(other) <= 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_neighbours_are_adjacent() {
        let centre = Coord::new(4, 4);
        assert!(centre.is_adjacent(Coord::new(3, 4)));
        assert!(centre.is_adjacent(Coord::new(5, 4)));
        assert!(centre.is_adjacent(Coord::new(4, 3)));
        assert!(centre.is_adjacent(Coord::new(4, 5)));
    }

    #[test]
    fn diagonal_neighbours_are_adjacent() {
        let centre = Coord::new(4, 4);
        assert!(centre.is_adjacent(Coord::new(3, 3)));
        assert!(centre.is_adjacent(Coord::new(5, 5)));
        assert!(centre.is_adjacent(Coord::new(3, 5)));
        assert!(centre.is_adjacent(Coord::new(5, 3)));
    }

    #[test]
    fn distant_cells_are_not_adjacent() {
        assert!(!Coord::new(0, 0).is_adjacent(Coord::new(2, 2)));
        assert!(!Coord::new(0, 0).is_adjacent(Coord::new(0, 2)));
        assert!(!Coord::new(9, 0).is_adjacent(Coord::new(7, 1)));
    }

    #[test]
    fn chebyshev_distance_takes_the_larger_axis() {
        assert_eq!(Coord::new(0, 0).chebyshev_distance(Coord::new(2, 5)), 5);
        assert_eq!(Coord::new(6, 1).chebyshev_distance(Coord::new(1, 3)), 5);
        assert_eq!(Coord::new(3, 3).chebyshev_distance(Coord::new(3, 3)), 0);
    }

    #[test]
    fn coord_display_and_from_tuple() {
        let coord: Coord = (2, 7).into();
        assert_eq!(coord, Coord::new(2, 7));
        assert_eq!(format!("{coord}"), "(2, 7)");
    }
}
