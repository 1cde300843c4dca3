//! Grid generation
//!
//! Words are placed one at a time onto a board of optional cells. Each word
//! gets a bounded number of random orientation/anchor tries; if all of them
//! collide, a deterministic scan takes the first open slot. Only when the
//! scan also fails does generation give up with [`PlacementError::Saturated`].

use super::FILLER_ALPHABET;
use crate::config::GameConfig;
use crate::core::{Coord, Grid, Orientation, Placement};
use crate::error::PlacementError;
use rand::Rng;

/// A generated grid along with where each word ended up
#[derive(Debug, Clone)]
pub struct GeneratedGrid {
    pub grid: Grid,
    pub placements: Vec<Placement>,
    /// Words that exhausted their random tries and were placed by scanning
    pub fallbacks: usize,
}

/// Builds N×N grids embedding a list of words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGenerator {
    size: usize,
    max_attempts: usize,
}

impl GridGenerator {
    /// # Parameters
    /// - `size`: grid width and height
    /// - `max_attempts`: random tries per word before falling back to a scan
    #[must_use]
    pub const fn new(size: usize, max_attempts: usize) -> Self {
        Self { size, max_attempts }
    }

    #[must_use]
    pub const fn from_config(config: &GameConfig) -> Self {
        Self::new(config.grid_size, config.placement_attempts)
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Generate a grid containing every word in `words`
    ///
    /// # Errors
    /// Returns `PlacementError` if a word is empty, longer than the grid, or
    /// has no open slot left on the board.
    pub fn generate<S, R>(&self, words: &[S], rng: &mut R) -> Result<Grid, PlacementError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        self.generate_with_placements(words, rng)
            .map(|generated| generated.grid)
    }

    /// Like [`generate`](Self::generate), but also reports placements
    ///
    /// # Errors
    /// Same as [`generate`](Self::generate).
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_hunt::generator::GridGenerator;
    ///
    /// let generator = GridGenerator::new(6, 50);
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let generated = generator.generate_with_placements(&["CAT", "DOG"], &mut rng).unwrap();
    ///
    /// assert_eq!(generated.placements.len(), 2);
    /// assert!(generated.grid.find_word("CAT").is_some());
    /// ```
    pub fn generate_with_placements<S, R>(
        &self,
        words: &[S],
        rng: &mut R,
    ) -> Result<GeneratedGrid, PlacementError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut board = Board::new(self.size);
        let mut placements = Vec::with_capacity(words.len());
        let mut fallbacks = 0;

        for word in words {
            let word = word.as_ref();
            let letters: Vec<char> = word.chars().collect();
            self.check_fits(word, &letters)?;

            let placement = match self.place_randomly(&board, word, &letters, rng) {
                Some(placement) => placement,
                None => {
                    fallbacks += 1;
                    log::debug!(
                        "\"{word}\" missed {} random tries, scanning for an open slot",
                        self.max_attempts
                    );
                    board
                        .scan(word, &letters)
                        .ok_or_else(|| PlacementError::Saturated {
                            word: word.to_string(),
                            size: self.size,
                            attempts: self.max_attempts,
                        })
                        .inspect_err(|err| log::warn!("{err}"))?
                }
            };

            board.commit(&placement, &letters);
            placements.push(placement);
        }

        let grid = board.fill(rng);
        Ok(GeneratedGrid {
            grid,
            placements,
            fallbacks,
        })
    }

    fn check_fits(&self, word: &str, letters: &[char]) -> Result<(), PlacementError> {
        if letters.is_empty() {
            return Err(PlacementError::EmptyWord);
        }
        if letters.len() > self.size {
            return Err(PlacementError::WordTooLong {
                word: word.to_string(),
                len: letters.len(),
                size: self.size,
            });
        }
        Ok(())
    }

    fn place_randomly<R: Rng + ?Sized>(
        &self,
        board: &Board,
        word: &str,
        letters: &[char],
        rng: &mut R,
    ) -> Option<Placement> {
        for _ in 0..self.max_attempts {
            let orientation = Orientation::random(rng);
            let (rows, cols) = orientation.anchor_bounds(self.size, letters.len());
            let anchor = Coord::new(rng.random_range(0..rows), rng.random_range(0..cols));

            if board.fits(anchor, orientation, letters) {
                return Some(Placement::new(word, anchor, orientation));
            }
        }
        None
    }
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// Work-in-progress grid where `None` marks a cell no word has claimed
struct Board {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Board {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    /// Every target cell is empty or already holds the same letter
    fn fits(&self, anchor: Coord, orientation: Orientation, letters: &[char]) -> bool {
        letters.iter().enumerate().all(|(i, &ch)| {
            let coord = orientation.step(anchor, i);
            match self.cells[self.index(coord)] {
                None => true,
                Some(existing) => existing == ch,
            }
        })
    }

    /// First open slot, horizontal before vertical, row-major
    fn scan(&self, word: &str, letters: &[char]) -> Option<Placement> {
        Orientation::ALL.into_iter().find_map(|orientation| {
            let (rows, cols) = orientation.anchor_bounds(self.size, letters.len());
            (0..rows)
                .flat_map(|row| (0..cols).map(move |col| Coord::new(row, col)))
                .find(|&anchor| self.fits(anchor, orientation, letters))
                .map(|anchor| Placement::new(word, anchor, orientation))
        })
    }

    fn commit(&mut self, placement: &Placement, letters: &[char]) {
        for (i, &ch) in letters.iter().enumerate() {
            let index = self.index(placement.orientation.step(placement.anchor, i));
            self.cells[index] = Some(ch);
        }
    }

    fn fill<R: Rng + ?Sized>(self, rng: &mut R) -> Grid {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| {
                cell.unwrap_or_else(|| FILLER_ALPHABET[rng.random_range(0..FILLER_ALPHABET.len())])
            })
            .collect();
        Grid::from_cells(self.size, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_grid_letter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const POOL: &[&str] = &["TRICÔ", "JARDIM", "XADREZ", "DAMAS", "PINTURA"];

    #[test]
    fn every_cell_is_a_letter() {
        let generator = GridGenerator::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generator.generate(POOL, &mut rng).unwrap();
            assert_eq!(grid.size(), 10);
            assert_eq!(grid.cells().len(), 100);
            assert!(grid.cells().iter().all(|&ch| is_grid_letter(ch)));
        }
    }

    #[test]
    fn every_word_is_recoverable_by_scanning() {
        let generator = GridGenerator::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generated = generator.generate_with_placements(POOL, &mut rng).unwrap();
            for word in POOL {
                assert!(
                    generated.grid.find_word(word).is_some(),
                    "seed {seed}: {word} not found in\n{}",
                    generated.grid
                );
            }
        }
    }

    #[test]
    fn placements_match_grid_contents() {
        let generator = GridGenerator::default();
        let mut rng = StdRng::seed_from_u64(42);
        let generated = generator.generate_with_placements(POOL, &mut rng).unwrap();

        assert_eq!(generated.placements.len(), POOL.len());
        for placement in &generated.placements {
            let cells: Vec<Coord> = placement.cells().collect();
            assert_eq!(generated.grid.read(&cells), placement.word);
        }
    }

    #[test]
    fn same_seed_same_grid() {
        let generator = GridGenerator::default();
        let first = generator
            .generate(POOL, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let second = generator
            .generate(POOL, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn word_longer_than_grid_is_rejected() {
        let generator = GridGenerator::new(4, 10);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generator.generate(&["CAMINHAR"], &mut rng),
            Err(PlacementError::WordTooLong {
                word: "CAMINHAR".to_string(),
                len: 8,
                size: 4
            })
        );
    }

    #[test]
    fn empty_word_is_rejected() {
        let generator = GridGenerator::new(4, 10);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generator.generate(&["CAT", ""], &mut rng),
            Err(PlacementError::EmptyWord)
        );
    }

    #[test]
    fn saturated_board_fails_instead_of_looping() {
        // The first two words cover all four cells with distinct letters
        let generator = GridGenerator::new(2, 5);
        let mut rng = StdRng::seed_from_u64(3);
        let result = generator.generate(&["AB", "CD", "EF", "GH"], &mut rng);
        assert!(matches!(result, Err(PlacementError::Saturated { .. })));
    }

    #[test]
    fn scan_fallback_places_word_when_random_tries_are_disabled() {
        let generator = GridGenerator::new(3, 0);
        let mut rng = StdRng::seed_from_u64(0);
        let generated = generator
            .generate_with_placements(&["CAT", "DOG"], &mut rng)
            .unwrap();

        assert_eq!(generated.fallbacks, 2);
        assert_eq!(
            generated.placements[0],
            Placement::new("CAT", Coord::new(0, 0), Orientation::Horizontal)
        );
        assert_eq!(
            generated.placements[1],
            Placement::new("DOG", Coord::new(1, 0), Orientation::Horizontal)
        );
    }

    #[test]
    fn crossing_words_share_letters() {
        // Three rows fill the board, so the column word can only fit by
        // reusing the first letter of each row
        let generator = GridGenerator::new(3, 0);
        let mut rng = StdRng::seed_from_u64(0);
        let generated = generator
            .generate_with_placements(&["CAT", "DOG", "PIG", "CDP"], &mut rng)
            .unwrap();

        assert_eq!(
            generated.placements[3],
            Placement::new("CDP", Coord::new(0, 0), Orientation::Vertical)
        );
        assert_eq!(generated.grid.to_string(), "C A T\nD O G\nP I G");
    }

    #[test]
    fn empty_word_list_yields_filler_only_grid() {
        let generator = GridGenerator::new(5, 10);
        let mut rng = StdRng::seed_from_u64(11);
        let words: [&str; 0] = [];
        let grid = generator.generate(&words, &mut rng).unwrap();
        assert!(grid.cells().iter().all(|ch| FILLER_ALPHABET.contains(ch)));
    }
}
