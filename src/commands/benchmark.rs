//! Benchmark command
//!
//! Generates many grids in parallel and reports how placement behaved.

use crate::config::GameConfig;
use crate::generator::{GeneratedGrid, GridGenerator};
use crate::wordlists::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_grids: usize,
    pub generated: usize,
    pub failed: usize,
    /// Words that needed the deterministic scan after random tries ran out
    pub fallbacks: usize,
    /// Grids keyed by how many cells were shared between two words
    pub crossing_distribution: BTreeMap<usize, usize>,
    pub first_failure: Option<String>,
    pub duration: Duration,
    pub grids_per_second: f64,
}

enum GridOutcome {
    Generated { fallbacks: usize, crossings: usize },
    Failed(String),
}

/// Generate `count` rounds' worth of grids
///
/// Grid `i` is seeded with `base_seed + i`, so a run is reproducible no
/// matter how rayon schedules the work.
#[must_use]
pub fn run_benchmark(
    config: &GameConfig,
    vocabulary: &Vocabulary,
    count: usize,
    base_seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let generator = GridGenerator::from_config(config);

    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes: Vec<GridOutcome> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let outcome = vocabulary
                .draw(config.words_per_round, &mut rng)
                .map_err(|err| err.to_string())
                .and_then(|targets| {
                    generator
                        .generate_with_placements(targets.as_slice(), &mut rng)
                        .map_err(|err| err.to_string())
                })
                .map_or_else(GridOutcome::Failed, |generated| GridOutcome::Generated {
                    fallbacks: generated.fallbacks,
                    crossings: crossing_cells(&generated),
                });
            pb.inc(1);
            outcome
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let mut generated = 0;
    let mut failed = 0;
    let mut fallbacks = 0;
    let mut crossing_distribution = BTreeMap::new();
    let mut first_failure = None;

    for outcome in outcomes {
        match outcome {
            GridOutcome::Generated {
                fallbacks: scanned,
                crossings,
            } => {
                generated += 1;
                fallbacks += scanned;
                *crossing_distribution.entry(crossings).or_insert(0) += 1;
            }
            GridOutcome::Failed(message) => {
                failed += 1;
                first_failure.get_or_insert(message);
            }
        }
    }

    if failed > 0 {
        log::warn!("{failed} of {count} grids could not be generated");
    }

    BenchmarkResult {
        total_grids: count,
        generated,
        failed,
        fallbacks,
        crossing_distribution,
        first_failure,
        duration,
        grids_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Cells claimed by more than one word
fn crossing_cells(generated: &GeneratedGrid) -> usize {
    let mut seen = FxHashSet::default();
    let mut total = 0;
    for placement in &generated.placements {
        for cell in placement.cells() {
            total += 1;
            seen.insert(cell);
        }
    }
    total - seen.len()
}
