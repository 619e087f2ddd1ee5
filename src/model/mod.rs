mod category;
mod difficulty;
mod game_engine_command;
mod game_engine_event;
mod hint_error;
mod leaderboard_entry;
mod round;
mod round_outcome;
mod session_stats;
mod timer_token;

pub use category::Category;
pub use difficulty::Difficulty;
pub use game_engine_command::{GameEngineCommand, SettingsChange};
pub use game_engine_event::GameEngineEvent;
pub use hint_error::HintError;
pub use leaderboard_entry::LeaderboardEntry;
pub use round::Round;
pub use round_outcome::RoundOutcome;
pub use session_stats::SessionStats;
pub use timer_token::TimerToken;
