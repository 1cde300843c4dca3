//! Game configuration
//!
//! The shipped game uses fixed constants; `GameConfig` carries them so tests
//! can run the same machinery on smaller boards.

/// Grid width and height
pub const GRID_SIZE: usize = 10;

/// Incorrect submissions allowed per round
pub const MAX_ATTEMPTS: usize = 5;

/// Target words drawn for each round
pub const WORDS_PER_ROUND: usize = 5;

/// Random placement tries per word before the deterministic scan
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Tunable parameters for a puzzle session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: usize,
    pub max_attempts: usize,
    pub words_per_round: usize,
    pub placement_attempts: usize,
}

impl GameConfig {
    /// Config for a custom board, keeping the default retry ceiling
    #[must_use]
    pub const fn new(grid_size: usize, max_attempts: usize, words_per_round: usize) -> Self {
        Self {
            grid_size,
            max_attempts,
            words_per_round,
            placement_attempts: PLACEMENT_ATTEMPTS,
        }
    }

    #[must_use]
    pub const fn with_placement_attempts(mut self, placement_attempts: usize) -> Self {
        self.placement_attempts = placement_attempts;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(GRID_SIZE, MAX_ATTEMPTS, WORDS_PER_ROUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_shipped_constants() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.words_per_round, 5);
        assert_eq!(config.placement_attempts, PLACEMENT_ATTEMPTS);
    }

    #[test]
    fn with_placement_attempts_overrides_only_the_ceiling() {
        let config = GameConfig::new(4, 3, 2).with_placement_attempts(7);
        assert_eq!(config, GameConfig {
            grid_size: 4,
            max_attempts: 3,
            words_per_round: 2,
            placement_attempts: 7,
        });
    }
}
