use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, Difficulty};

/// Summary of a finished session, handed to the shell so it can prompt for a
/// leaderboard name.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct SessionStats {
    pub score: i64,
    pub rounds_played: u32,
    pub difficulty: Difficulty,
    pub category: Category,
    pub timestamp: i64,
    pub playthrough_id: Uuid,
}
