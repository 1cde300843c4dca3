//! Puzzle session state machine
//!
//! `PuzzleSession` owns the current round and the random source used to
//! regenerate it. All transitions run to completion; rejected actions leave
//! the round untouched.

use super::{RoundState, Selection, SelectionResult, SubmitOutcome};
use crate::config::GameConfig;
use crate::core::{Coord, Grid};
use crate::error::SessionError;
use crate::generator::GridGenerator;
use crate::wordlists::Vocabulary;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Everything that belongs to one round
#[derive(Debug, Clone)]
pub struct Round {
    grid: Grid,
    targets: Vec<String>,
    found: FxHashSet<String>,
    attempts_remaining: usize,
    selection: Selection,
    correct: FxHashSet<Coord>,
}

impl Round {
    fn new(grid: Grid, targets: Vec<String>, attempts: usize) -> Self {
        Self {
            grid,
            targets,
            found: FxHashSet::default(),
            attempts_remaining: attempts,
            selection: Selection::new(),
            correct: FxHashSet::default(),
        }
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Target words in draw order
    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    #[must_use]
    pub const fn found(&self) -> &FxHashSet<String> {
        &self.found
    }

    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.attempts_remaining
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Cells of every word found so far
    #[must_use]
    pub const fn correct_coordinates(&self) -> &FxHashSet<Coord> {
        &self.correct
    }

    /// Letters currently selected, in selection order
    #[must_use]
    pub fn candidate(&self) -> String {
        self.grid.read(self.selection.cells())
    }

    fn is_complete(&self) -> bool {
        self.found.len() == self.targets.len()
    }

    fn snapshot(&self, state: RoundState) -> SessionSnapshot {
        SessionSnapshot {
            state,
            grid: self.grid.clone(),
            target_words: self.targets.clone(),
            found_words: self.found.clone(),
            attempts_remaining: self.attempts_remaining,
            selection: self.selection.cells().to_vec(),
            correct_coordinates: self.correct.clone(),
        }
    }
}

/// Owned copy of the round for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: RoundState,
    pub grid: Grid,
    pub target_words: Vec<String>,
    pub found_words: FxHashSet<String>,
    pub attempts_remaining: usize,
    pub selection: Vec<Coord>,
    pub correct_coordinates: FxHashSet<Coord>,
}

/// A single-player word-search game
///
/// Generic over the random source so tests can seed it.
pub struct PuzzleSession<R> {
    config: GameConfig,
    vocabulary: Vocabulary,
    generator: GridGenerator,
    rng: R,
    state: RoundState,
    round: Option<Round>,
    rounds_started: usize,
}

impl<R: Rng> PuzzleSession<R> {
    /// Create an idle session; call [`new_round`](Self::new_round) to start playing
    #[must_use]
    pub fn new(config: GameConfig, vocabulary: Vocabulary, rng: R) -> Self {
        Self {
            generator: GridGenerator::from_config(&config),
            config,
            vocabulary,
            rng,
            state: RoundState::Idle,
            round: None,
            rounds_started: 0,
        }
    }

    /// Create a session and immediately generate its first round
    ///
    /// # Errors
    /// Returns `SessionError` if the first round cannot be generated.
    pub fn start(config: GameConfig, vocabulary: Vocabulary, rng: R) -> Result<Self, SessionError> {
        let mut session = Self::new(config, vocabulary, rng);
        session.new_round()?;
        Ok(session)
    }

    /// Create a session already playing a fixed grid
    ///
    /// Later rounds are generated from `vocabulary` as usual.
    ///
    /// # Errors
    /// Returns `SessionError::GridSizeMismatch` if the grid does not match
    /// the configured size, and `NoTargets`, `DuplicateTarget` or
    /// `TargetNotInGrid` if the targets could never all be found.
    pub fn with_round(
        config: GameConfig,
        vocabulary: Vocabulary,
        rng: R,
        grid: Grid,
        targets: Vec<String>,
    ) -> Result<Self, SessionError> {
        if grid.size() != config.grid_size {
            return Err(SessionError::GridSizeMismatch {
                expected: config.grid_size,
                found: grid.size(),
            });
        }
        check_targets(&grid, &targets)?;

        let mut session = Self::new(config, vocabulary, rng);
        session.round = Some(Round::new(grid, targets, config.max_attempts));
        session.state = RoundState::Playing;
        session.rounds_started = 1;
        Ok(session)
    }

    /// Discard the current round and generate a fresh one
    ///
    /// On failure the previous round (if any) is kept as it was.
    ///
    /// # Errors
    /// Returns `SessionError` if the vocabulary cannot supply enough distinct
    /// words or the words cannot be placed.
    pub fn new_round(&mut self) -> Result<SessionSnapshot, SessionError> {
        let targets = self
            .vocabulary
            .draw(self.config.words_per_round, &mut self.rng)?;
        let grid = self.generator.generate(targets.as_slice(), &mut self.rng)?;

        log::info!("New round with targets {targets:?}");
        let round = Round::new(grid, targets, self.config.max_attempts);
        let snapshot = round.snapshot(RoundState::Playing);
        self.round = Some(round);
        self.state = RoundState::Playing;
        self.rounds_started += 1;

        Ok(snapshot)
    }

    /// Drop every selected cell
    ///
    /// # Errors
    /// Returns `SessionError::NotPlaying` outside a round in play.
    pub fn clear_selection(&mut self) -> Result<(), SessionError> {
        self.playing_round_mut()?.selection.clear();
        Ok(())
    }

    /// Toggle the cell at (`row`, `col`) in the current selection
    ///
    /// # Errors
    /// Returns `SessionError::NotPlaying` outside a round in play.
    pub fn select_cell(&mut self, row: usize, col: usize) -> Result<SelectionResult, SessionError> {
        let round = self.playing_round_mut()?;
        let coord = Coord::new(row, col);

        if !round.grid.contains(coord) {
            return Ok(SelectionResult::OutOfBounds);
        }

        let result = round.selection.toggle(coord);
        log::trace!("select {coord}: {result:?}");
        Ok(result)
    }

    /// Check the current selection against the target words
    ///
    /// The selection is cleared whatever the outcome. Running out of attempts
    /// regenerates the round before returning [`SubmitOutcome::RoundLost`].
    ///
    /// # Errors
    /// Returns `SessionError::NotPlaying` outside a round in play, or any
    /// error from regenerating the round after the last attempt.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        let round = self.playing_round_mut()?;
        let cells = round.selection.take();
        let candidate = round.grid.read(&cells);

        if round.targets.contains(&candidate) {
            if round.found.contains(&candidate) {
                log::debug!("{candidate} already found");
                return Ok(SubmitOutcome::CorrectDuplicate);
            }

            log::debug!("found {candidate}");
            round.found.insert(candidate);
            round.correct.extend(cells);

            if round.is_complete() {
                log::info!("Round won");
                self.state = RoundState::Won;
                return Ok(SubmitOutcome::RoundWon);
            }
            return Ok(SubmitOutcome::CorrectNew);
        }

        round.attempts_remaining = round.attempts_remaining.saturating_sub(1);
        log::debug!(
            "\"{candidate}\" is not a target, {} attempts left",
            round.attempts_remaining
        );

        if round.attempts_remaining == 0 {
            log::info!("Round lost, regenerating");
            self.state = RoundState::Exhausted;
            self.new_round()?;
            return Ok(SubmitOutcome::RoundLost);
        }
        Ok(SubmitOutcome::Incorrect)
    }

    /// Owned copy of the current round, if one exists
    #[must_use]
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.round.as_ref().map(|round| round.snapshot(self.state))
    }

    fn playing_round_mut(&mut self) -> Result<&mut Round, SessionError> {
        match (self.state, self.round.as_mut()) {
            (RoundState::Playing, Some(round)) => Ok(round),
            (state, _) => Err(SessionError::NotPlaying(state)),
        }
    }
}

fn check_targets(grid: &Grid, targets: &[String]) -> Result<(), SessionError> {
    if targets.is_empty() {
        return Err(SessionError::NoTargets);
    }

    let mut seen = FxHashSet::default();
    for word in targets {
        if !seen.insert(word.as_str()) {
            return Err(SessionError::DuplicateTarget { word: word.clone() });
        }
        if word.is_empty() || grid.find_word(word).is_none() {
            return Err(SessionError::TargetNotInGrid { word: word.clone() });
        }
    }
    Ok(())
}

impl<R> PuzzleSession<R> {
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Rounds generated or installed so far, including the current one
    #[must_use]
    pub const fn rounds_started(&self) -> usize {
        self.rounds_started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cat_dog_session() -> PuzzleSession<StdRng> {
        let config = GameConfig::new(4, 5, 2);
        let vocabulary = Vocabulary::new(["CAT", "DOG"], 4).unwrap();
        let grid = Grid::from_rows(&["CATX", "XXDX", "XXOX", "XXGX"]).unwrap();
        PuzzleSession::with_round(
            config,
            vocabulary,
            StdRng::seed_from_u64(1),
            grid,
            vec!["CAT".to_string(), "DOG".to_string()],
        )
        .unwrap()
    }

    fn select_all(session: &mut PuzzleSession<StdRng>, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            assert_eq!(session.select_cell(row, col).unwrap(), SelectionResult::Added);
        }
    }

    #[test]
    fn new_session_is_idle() {
        let vocabulary = Vocabulary::embedded(10).unwrap();
        let mut session =
            PuzzleSession::new(GameConfig::default(), vocabulary, StdRng::seed_from_u64(0));
        assert_eq!(session.state(), RoundState::Idle);
        assert!(session.snapshot().is_none());
        assert!(matches!(
            session.select_cell(0, 0),
            Err(SessionError::NotPlaying(RoundState::Idle))
        ));
        assert!(matches!(session.submit(), Err(SessionError::NotPlaying(RoundState::Idle))));
    }

    #[test]
    fn new_round_resets_everything() {
        let vocabulary = Vocabulary::embedded(10).unwrap();
        let mut session =
            PuzzleSession::start(GameConfig::default(), vocabulary, StdRng::seed_from_u64(3))
                .unwrap();

        select_all(&mut session, &[(0, 0)]);
        session.submit().unwrap();

        let snapshot = session.new_round().unwrap();
        assert_eq!(snapshot.state, RoundState::Playing);
        assert_eq!(snapshot.attempts_remaining, 5);
        assert_eq!(snapshot.target_words.len(), 5);
        assert!(snapshot.found_words.is_empty());
        assert!(snapshot.selection.is_empty());
        assert!(snapshot.correct_coordinates.is_empty());
        assert_eq!(session.rounds_started(), 2);
    }

    #[test]
    fn finding_a_word_records_it_and_its_cells() {
        let mut session = cat_dog_session();
        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);

        assert_eq!(session.submit().unwrap(), SubmitOutcome::CorrectNew);

        let round = session.round().unwrap();
        assert!(round.is_found("CAT"));
        assert_eq!(round.found().len(), 1);
        assert!(round.selection().is_empty());
        assert_eq!(round.attempts_remaining(), 5);
        for col in 0..3 {
            assert!(round.correct_coordinates().contains(&Coord::new(0, col)));
        }
    }

    #[test]
    fn duplicate_find_changes_nothing_but_the_selection() {
        let mut session = cat_dog_session();
        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        session.submit().unwrap();

        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(session.submit().unwrap(), SubmitOutcome::CorrectDuplicate);

        let round = session.round().unwrap();
        assert_eq!(round.found().len(), 1);
        assert_eq!(round.attempts_remaining(), 5);
        assert_eq!(round.correct_coordinates().len(), 3);
        assert!(round.selection().is_empty());
    }

    #[test]
    fn finding_every_word_wins_the_round() {
        let mut session = cat_dog_session();
        select_all(&mut session, &[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(session.submit().unwrap(), SubmitOutcome::CorrectNew);

        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(session.submit().unwrap(), SubmitOutcome::RoundWon);
        assert_eq!(session.state(), RoundState::Won);

        assert!(matches!(
            session.select_cell(0, 0),
            Err(SessionError::NotPlaying(RoundState::Won))
        ));

        session.new_round().unwrap();
        assert_eq!(session.state(), RoundState::Playing);
    }

    #[test]
    fn reversed_selection_does_not_match() {
        let mut session = cat_dog_session();
        select_all(&mut session, &[(0, 2), (0, 1), (0, 0)]);
        assert_eq!(session.submit().unwrap(), SubmitOutcome::Incorrect);
        assert_eq!(session.round().unwrap().attempts_remaining(), 4);
    }

    #[test]
    fn empty_submission_costs_an_attempt() {
        let mut session = cat_dog_session();
        assert_eq!(session.submit().unwrap(), SubmitOutcome::Incorrect);
        assert_eq!(session.round().unwrap().attempts_remaining(), 4);
    }

    #[test]
    fn last_attempt_regenerates_the_round() {
        let mut session = cat_dog_session();
        for _ in 0..4 {
            assert_eq!(session.submit().unwrap(), SubmitOutcome::Incorrect);
        }
        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(session.submit().unwrap(), SubmitOutcome::CorrectNew);

        select_all(&mut session, &[(3, 0)]);
        assert_eq!(session.submit().unwrap(), SubmitOutcome::RoundLost);

        let snapshot = session.snapshot().unwrap();
        assert_eq!(snapshot.state, RoundState::Playing);
        assert_eq!(snapshot.attempts_remaining, 5);
        assert!(snapshot.found_words.is_empty());
        assert!(snapshot.correct_coordinates.is_empty());
        assert_eq!(session.rounds_started(), 2);
        for word in &snapshot.target_words {
            assert!(snapshot.grid.find_word(word).is_some());
        }
    }

    #[test]
    fn out_of_bounds_cell_is_rejected() {
        let mut session = cat_dog_session();
        assert_eq!(session.select_cell(4, 0).unwrap(), SelectionResult::OutOfBounds);
        assert_eq!(session.select_cell(0, 9).unwrap(), SelectionResult::OutOfBounds);
        assert!(session.round().unwrap().selection().is_empty());
    }

    #[test]
    fn with_round_checks_grid_size() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        let result = PuzzleSession::with_round(
            GameConfig::default(),
            Vocabulary::embedded(10).unwrap(),
            StdRng::seed_from_u64(0),
            grid,
            vec![],
        );
        assert!(matches!(
            result,
            Err(SessionError::GridSizeMismatch {
                expected: 10,
                found: 2
            })
        ));
    }

    fn fixed_round(targets: &[&str]) -> Result<PuzzleSession<StdRng>, SessionError> {
        PuzzleSession::with_round(
            GameConfig::new(4, 5, 2),
            Vocabulary::new(["CAT", "DOG"], 4).unwrap(),
            StdRng::seed_from_u64(0),
            Grid::from_rows(&["CATX", "XXDX", "XXOX", "XXGX"]).unwrap(),
            targets.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn with_round_rejects_unwinnable_targets() {
        assert!(matches!(fixed_round(&[]), Err(SessionError::NoTargets)));
        assert!(matches!(
            fixed_round(&["CAT", "CAT"]),
            Err(SessionError::DuplicateTarget { word }) if word == "CAT"
        ));
        assert!(matches!(
            fixed_round(&["CAT", ""]),
            Err(SessionError::TargetNotInGrid { word }) if word.is_empty()
        ));
        assert!(matches!(
            fixed_round(&["CAT", "PIG"]),
            Err(SessionError::TargetNotInGrid { word }) if word == "PIG"
        ));
        assert!(fixed_round(&["CAT", "DOG"]).is_ok());
    }

    #[test]
    fn clear_selection_drops_every_cell() {
        let mut session = cat_dog_session();
        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        session.clear_selection().unwrap();
        assert!(session.round().unwrap().selection().is_empty());

        let mut idle = PuzzleSession::new(
            GameConfig::default(),
            Vocabulary::embedded(10).unwrap(),
            StdRng::seed_from_u64(0),
        );
        assert!(matches!(
            idle.clear_selection(),
            Err(SessionError::NotPlaying(RoundState::Idle))
        ));
    }

    #[test]
    fn deselecting_a_middle_cell_keeps_the_rest() {
        let mut session = cat_dog_session();
        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(session.select_cell(0, 1).unwrap(), SelectionResult::Removed);
        assert_eq!(
            session.round().unwrap().selection().cells(),
            [Coord::new(0, 0), Coord::new(0, 2)]
        );
        assert_eq!(session.round().unwrap().candidate(), "CT");
    }

    #[test]
    fn failed_new_round_keeps_previous_round() {
        let config = GameConfig::new(4, 5, 3);
        let vocabulary = Vocabulary::new(["CAT", "DOG"], 4).unwrap();
        let grid = Grid::from_rows(&["CATX", "XXDX", "XXOX", "XXGX"]).unwrap();
        let mut session = PuzzleSession::with_round(
            config,
            vocabulary,
            StdRng::seed_from_u64(0),
            grid.clone(),
            vec!["CAT".to_string()],
        )
        .unwrap();

        assert!(matches!(session.new_round(), Err(SessionError::Vocabulary(_))));
        assert_eq!(session.state(), RoundState::Playing);
        assert_eq!(session.round().unwrap().grid(), &grid);
    }

    #[test]
    fn candidate_reads_current_selection() {
        let mut session = cat_dog_session();
        select_all(&mut session, &[(1, 2), (2, 2)]);
        assert_eq!(session.round().unwrap().candidate(), "DO");
    }
}
