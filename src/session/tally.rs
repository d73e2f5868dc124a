//! Running score for a session
//!
//! Features:
//! - Correct / attempted counts
//! - Current and best streak of correct answers

/// Correct and attempted counts for one session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Words read correctly
    pub correct: u32,
    /// Words attempted
    pub total: u32,
    /// Correct answers in a row, reset by a miss
    pub streak: u32,
    /// Longest streak this session
    pub best_streak: u32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one scored round
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }

    /// Words missed so far
    pub fn incorrect(&self) -> u32 {
        self.total - self.correct
    }

    /// Fraction correct (0.0-1.0); 1.0 before any attempt
    pub fn accuracy(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.correct as f32 / self.total as f32
        }
    }
}
