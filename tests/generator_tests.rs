//! Grid generation through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use word_hunt::core::{Orientation, is_grid_letter};
use word_hunt::error::PlacementError;
use word_hunt::generator::GridGenerator;
use word_hunt::wordlists::Vocabulary;

#[test]
fn every_cell_is_an_uppercase_letter() {
    let generator = GridGenerator::new(10, 100);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let grid = generator
            .generate(&["JARDIM", "XADREZ", "YOGA", "BINGO", "DANÇA"], &mut rng)
            .unwrap();
        assert!(grid.cells().iter().copied().all(is_grid_letter));
        assert_eq!(grid.cells().len(), 100);
    }
}

#[test]
fn drawn_rounds_are_recoverable_from_the_grid() {
    let vocabulary = Vocabulary::embedded(10).unwrap();
    let generator = GridGenerator::new(10, 100);
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..25 {
        let targets = vocabulary.draw(5, &mut rng).unwrap();
        let generated = generator
            .generate_with_placements(targets.as_slice(), &mut rng)
            .unwrap();

        assert_eq!(generated.placements.len(), targets.len());
        for placement in &generated.placements {
            let cells: Vec<_> = placement.cells().collect();
            assert_eq!(generated.grid.read(&cells), placement.word);
        }
    }
}

#[test]
fn placements_run_forward_only() {
    let generator = GridGenerator::new(10, 100);
    let mut rng = StdRng::seed_from_u64(4);
    let generated = generator
        .generate_with_placements(&["MÚSICA", "CROCHÊ", "TRICÔ"], &mut rng)
        .unwrap();

    for placement in &generated.placements {
        let cells: Vec<_> = placement.cells().collect();
        let last = cells[cells.len() - 1];
        match placement.orientation {
            Orientation::Horizontal => {
                assert_eq!(last.row, placement.anchor.row);
                assert_eq!(last.col, placement.anchor.col + placement.len() - 1);
            }
            Orientation::Vertical => {
                assert_eq!(last.col, placement.anchor.col);
                assert_eq!(last.row, placement.anchor.row + placement.len() - 1);
            }
        }
        assert!(last.row < 10 && last.col < 10);
    }
}

#[test]
fn full_board_reports_saturation() {
    let generator = GridGenerator::new(3, 10);
    let mut rng = StdRng::seed_from_u64(0);
    let err = generator
        .generate(&["ABC", "DEF", "GHI", "JKL", "MNO", "PQR", "STU"], &mut rng)
        .unwrap_err();
    assert!(matches!(err, PlacementError::Saturated { size: 3, .. }));
}

#[test]
fn custom_vocabulary_feeds_the_generator() {
    let vocabulary = Vocabulary::new(["rust", "crab", "cargo"], 6).unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    let targets = vocabulary.draw(3, &mut rng).unwrap();

    let grid = GridGenerator::new(6, 100).generate(targets.as_slice(), &mut rng).unwrap();
    for word in &targets {
        assert!(grid.find_word(word).is_some());
    }
}
