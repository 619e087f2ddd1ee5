use super::{HintError, RoundOutcome, SessionStats, TimerToken};
use crate::game::settings::Settings;

/// Engine → shell. The shell renders these; it holds no game state of its
/// own beyond what these carry.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEngineEvent {
    SessionStarted,
    RoundStarted {
        round_no: u32,
        rounds_total: u32,
        time_left: u32,
        lives_left: u32,
        mask: String,
        timer: TimerToken,
    },
    /// Re-arms the countdown: the shell schedules the next `Tick(timer)` one
    /// second after receiving this.
    TimerTick {
        time_left: u32,
        elapsed_fraction: f64,
        timer: TimerToken,
    },
    ScoreChanged(i64),
    LivesChanged(u32),
    MaskUpdated(String),
    /// One line of the scrolling guess history.
    GuessRecorded {
        attempt: u32,
        guess: String,
        mask: String,
    },
    HintUsageChanged(u32),
    HintFailed(HintError),
    RoundEnded {
        round_no: u32,
        outcome: RoundOutcome,
        secret: String,
    },
    SessionEnded(SessionStats),
    SessionReset,
    SettingsChanged(Settings),
}
