//! Running totals across rounds

use super::SubmitOutcome;

/// Tally of submissions and round results for one program run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_won: usize,
    pub rounds_lost: usize,
    pub words_found: usize,
    pub misses: usize,
}

impl Statistics {
    /// Fold one submission into the totals
    pub fn record(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::CorrectNew => self.words_found += 1,
            SubmitOutcome::RoundWon => {
                self.words_found += 1;
                self.rounds_won += 1;
            }
            SubmitOutcome::Incorrect => self.misses += 1,
            SubmitOutcome::RoundLost => {
                self.misses += 1;
                self.rounds_lost += 1;
            }
            SubmitOutcome::CorrectDuplicate => {}
        }
    }

    #[must_use]
    pub const fn rounds_finished(&self) -> usize {
        self.rounds_won + self.rounds_lost
    }

    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let finished = self.rounds_finished();
        if finished == 0 {
            0.0
        } else {
            self.rounds_won as f64 / finished as f64 * 100.0
        }
    }
}
