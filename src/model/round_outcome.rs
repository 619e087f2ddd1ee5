#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Solved {
        attempt: u32,
        base_points: i64,
        time_bonus: i64,
    },
    OutOfLives,
    TimedOut,
}
