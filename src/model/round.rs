use std::collections::HashSet;

use super::Difficulty;

/// Per-round mutable state; replaced wholesale at every round start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    pub secret: String,
    pub attempt: u32,
    pub lives_left: u32,
    pub hints_used: u32,
    pub revealed_positions: HashSet<usize>,
    pub time_left: u32,
    pub total_time: u32,
}

impl Round {
    pub fn new(secret: String, difficulty: Difficulty) -> Self {
        Self {
            secret,
            attempt: 0,
            lives_left: difficulty.lives(),
            hints_used: 0,
            revealed_positions: HashSet::new(),
            time_left: difficulty.time_budget(),
            total_time: difficulty.time_budget(),
        }
    }

    pub fn secret_len(&self) -> usize {
        self.secret.chars().count()
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed_positions.len() >= self.secret_len()
    }

    /// Fraction of the time budget already spent, for progress display.
    pub fn elapsed_fraction(&self) -> f64 {
        if self.total_time == 0 {
            return 0.0;
        }
        f64::from(self.total_time - self.time_left) / f64::from(self.total_time)
    }
}
