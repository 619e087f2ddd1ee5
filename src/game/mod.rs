pub mod game_engine;
pub mod leaderboard;
pub mod masking;
pub mod settings;
pub mod word_bank;

pub use game_engine::GameEngine;
pub use leaderboard::LeaderboardStore;
