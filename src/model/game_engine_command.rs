use super::{Category, Difficulty, TimerToken};

#[derive(Debug, Clone, Default)]
pub struct SettingsChange {
    pub difficulty: Option<Difficulty>,
    pub category: Option<Category>,
}

/// Shell → engine. Every user intent and the timer callback arrive here.
#[derive(Debug, Clone)]
pub enum GameEngineCommand {
    NewSession,
    SubmitGuess(String),
    UseHint,
    Tick(TimerToken),
    ResetSession,
    ChangeSettings(SettingsChange),
}
