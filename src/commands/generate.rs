//! Generate command
//!
//! Draws one set of target words and builds a grid for them, keeping the
//! placements so they can be shown alongside the puzzle.

use crate::config::GameConfig;
use crate::error::SessionError;
use crate::generator::{GeneratedGrid, GridGenerator};
use crate::wordlists::Vocabulary;
use rand::Rng;

/// A generated puzzle with its answer key
pub struct GenerateResult {
    pub targets: Vec<String>,
    pub generated: GeneratedGrid,
}

/// Draw targets and generate a grid for them
///
/// # Errors
///
/// Returns an error if the vocabulary is too small for a round or the words
/// cannot be placed.
pub fn generate_puzzle<R: Rng + ?Sized>(
    config: &GameConfig,
    vocabulary: &Vocabulary,
    rng: &mut R,
) -> Result<GenerateResult, SessionError> {
    let targets = vocabulary.draw(config.words_per_round, rng)?;
    let generated = GridGenerator::from_config(config)
        .generate_with_placements(targets.as_slice(), rng)?;

    Ok(GenerateResult { targets, generated })
}
