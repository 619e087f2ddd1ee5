use std::fmt;

use crate::game::game_engine::MAX_HINTS_PER_ROUND;

/// Recoverable hint failures; the round state is untouched when these occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintError {
    LimitExceeded,
    NothingToReveal,
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintError::LimitExceeded => {
                write!(f, "Max {} hints already used in this round", MAX_HINTS_PER_ROUND)
            }
            HintError::NothingToReveal => write!(f, "All letters are already revealed"),
        }
    }
}

impl std::error::Error for HintError {}
