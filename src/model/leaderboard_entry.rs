/// One parsed line of the leaderboard log. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub timestamp: String,
    pub name: String,
    pub score: i64,
}
