use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

impl Difficulty {
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn from_index(index: usize) -> Difficulty {
        match index {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            2 => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    /// Round time budget, in seconds.
    pub fn time_budget(&self) -> u32 {
        match self {
            Difficulty::Easy => 40,
            Difficulty::Medium => 30,
            Difficulty::Hard => 20,
        }
    }

    pub fn lives(&self) -> u32 {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 5,
            Difficulty::Hard => 4,
        }
    }

    /// Score deducted for each wrong guess.
    pub fn wrong_guess_penalty(&self) -> i64 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}
