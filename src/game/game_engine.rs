use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use super::masking::{mask, pick_unrevealed};
use super::settings::Settings;
use super::word_bank::choose_word;
use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventHandler, EventObserver, Unsubscriber};
use crate::model::{
    GameEngineCommand, GameEngineEvent, HintError, Round, RoundOutcome, SessionStats,
    SettingsChange, TimerToken,
};

pub const ROUNDS_TOTAL: u32 = 5;
pub const BASE_POINTS: i64 = 10;
pub const BONUS_PER_SECOND_LEFT: i64 = 1;
pub const HINT_PENALTY: i64 = 2;
pub const MAX_HINTS_PER_ROUND: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnginePhase {
    Idle,
    RoundActive,
    RoundEnded,
    SessionEnded,
}

/// The round/session state machine. All game state lives here; the shell
/// only renders events and feeds commands (and the 1-second tick) back in.
pub struct GameEngine {
    phase: EnginePhase,
    score: i64,
    round_no: u32,
    round: Round,
    settings: Settings,
    // bumped on arm and on every round end; ticks carrying an older
    // generation are stale and discarded
    timer_generation: u64,
    current_playthrough_id: Uuid,
    rng: Box<dyn RngCore>,
    subscription_id: Option<Unsubscriber<GameEngineCommand>>,
    event_emitter: EventEmitter<GameEngineEvent>,
}

impl Destroyable for GameEngine {
    fn destroy(&mut self) {
        if let Some(subscription_id) = self.subscription_id.take() {
            subscription_id.unsubscribe();
        }
    }
}

impl EventHandler<GameEngineCommand> for GameEngine {
    fn handle_event(&mut self, command: &GameEngineCommand) {
        self.handle_command(command);
    }
}

impl GameEngine {
    pub fn new(
        command_observer: EventObserver<GameEngineCommand>,
        event_emitter: EventEmitter<GameEngineEvent>,
        settings: Settings,
    ) -> Rc<RefCell<Self>> {
        let rng: Box<dyn RngCore> = match Settings::seed_from_env() {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_os_rng()),
        };
        Self::with_rng(command_observer, event_emitter, settings, rng)
    }

    pub fn with_rng(
        command_observer: EventObserver<GameEngineCommand>,
        event_emitter: EventEmitter<GameEngineEvent>,
        settings: Settings,
        rng: Box<dyn RngCore>,
    ) -> Rc<RefCell<Self>> {
        let engine = Self {
            phase: EnginePhase::Idle,
            score: 0,
            round_no: 0,
            round: Round::default(),
            settings,
            timer_generation: 0,
            current_playthrough_id: Uuid::new_v4(),
            rng,
            subscription_id: None,
            event_emitter,
        };
        let refcell = Rc::new(RefCell::new(engine));
        GameEngine::wire_subscription(refcell.clone(), command_observer);
        refcell
    }

    fn wire_subscription(
        engine: Rc<RefCell<Self>>,
        command_observer: EventObserver<GameEngineCommand>,
    ) {
        let engine_handler = engine.clone();
        let subscription_id = command_observer.subscribe(move |command| {
            let mut engine = engine_handler.borrow_mut();
            engine.handle_event(command);
        });
        engine.borrow_mut().subscription_id = Some(subscription_id);
    }

    fn handle_command(&mut self, command: &GameEngineCommand) {
        trace!(target: "game_engine", "Handling command: {:?}", command);
        match command {
            GameEngineCommand::NewSession => self.start_session(),
            GameEngineCommand::SubmitGuess(raw) => self.submit_guess(raw),
            GameEngineCommand::UseHint => {
                if let Err(err) = self.reveal_random_letter() {
                    self.event_emitter.emit(&GameEngineEvent::HintFailed(err));
                }
            }
            GameEngineCommand::Tick(token) => self.tick(*token),
            GameEngineCommand::ResetSession => self.reset_session(),
            GameEngineCommand::ChangeSettings(change) => self.change_settings(change),
        }
    }

    fn start_session(&mut self) {
        self.score = 0;
        self.round_no = 0;
        self.current_playthrough_id = Uuid::new_v4();
        debug!(
            target: "game_engine",
            "New session; difficulty: {}; category: {}",
            self.settings.difficulty, self.settings.category
        );
        self.event_emitter.emit(&GameEngineEvent::SessionStarted);
        self.event_emitter.emit(&GameEngineEvent::ScoreChanged(0));
        self.start_round();
    }

    fn start_round(&mut self) {
        self.round_no += 1;
        if self.round_no > ROUNDS_TOTAL {
            self.finish_session();
            return;
        }
        let difficulty = self.settings.difficulty;
        let secret = choose_word(self.settings.category, difficulty, self.rng.as_mut());
        debug!(
            target: "game_engine",
            "Round {}/{} started ({} letters, {}s, {} lives)",
            self.round_no,
            ROUNDS_TOTAL,
            secret.chars().count(),
            difficulty.time_budget(),
            difficulty.lives()
        );
        self.round = Round::new(secret, difficulty);
        self.phase = EnginePhase::RoundActive;
        let timer = self.arm_timer();
        self.event_emitter.emit(&GameEngineEvent::RoundStarted {
            round_no: self.round_no,
            rounds_total: ROUNDS_TOTAL,
            time_left: self.round.time_left,
            lives_left: self.round.lives_left,
            mask: self.current_mask(""),
            timer,
        });
    }

    fn submit_guess(&mut self, raw: &str) {
        if self.phase != EnginePhase::RoundActive {
            debug!(target: "game_engine", "Ignoring guess; no round is active");
            return;
        }
        let guess = raw.trim().to_lowercase();
        if guess.is_empty() {
            return;
        }
        self.round.attempt += 1;

        if guess == self.round.secret {
            let time_bonus = i64::from(self.round.time_left) * BONUS_PER_SECOND_LEFT;
            self.score += BASE_POINTS + time_bonus;
            self.event_emitter
                .emit(&GameEngineEvent::ScoreChanged(self.score));
            self.end_round(RoundOutcome::Solved {
                attempt: self.round.attempt,
                base_points: BASE_POINTS,
                time_bonus,
            });
            return;
        }

        let masked = self.current_mask(&guess);
        self.event_emitter.emit(&GameEngineEvent::GuessRecorded {
            attempt: self.round.attempt,
            guess,
            mask: masked.clone(),
        });
        self.event_emitter.emit(&GameEngineEvent::MaskUpdated(masked));

        self.score -= self.settings.difficulty.wrong_guess_penalty();
        self.round.lives_left = self.round.lives_left.saturating_sub(1);
        self.event_emitter
            .emit(&GameEngineEvent::ScoreChanged(self.score));
        self.event_emitter
            .emit(&GameEngineEvent::LivesChanged(self.round.lives_left));

        if self.round.lives_left == 0 {
            self.end_round(RoundOutcome::OutOfLives);
        }
    }

    fn reveal_random_letter(&mut self) -> Result<(), HintError> {
        if self.phase != EnginePhase::RoundActive {
            return Ok(());
        }
        if self.round.hints_used >= MAX_HINTS_PER_ROUND {
            return Err(HintError::LimitExceeded);
        }
        let Some(idx) = pick_unrevealed(
            &self.round.secret,
            &self.round.revealed_positions,
            self.rng.as_mut(),
        ) else {
            return Err(HintError::NothingToReveal);
        };
        self.round.revealed_positions.insert(idx);
        self.round.hints_used += 1;
        self.score -= HINT_PENALTY;
        self.event_emitter
            .emit(&GameEngineEvent::HintUsageChanged(self.round.hints_used));
        self.event_emitter
            .emit(&GameEngineEvent::ScoreChanged(self.score));
        self.event_emitter
            .emit(&GameEngineEvent::MaskUpdated(self.current_mask("")));
        Ok(())
    }

    fn tick(&mut self, token: TimerToken) {
        if self.phase != EnginePhase::RoundActive || !token.matches(self.timer_generation) {
            trace!(target: "game_engine", "Discarding stale tick: {:?}", token);
            return;
        }
        if self.round.time_left > 0 {
            self.round.time_left -= 1;
        }
        if self.round.time_left == 0 {
            self.end_round(RoundOutcome::TimedOut);
            return;
        }
        self.event_emitter.emit(&GameEngineEvent::TimerTick {
            time_left: self.round.time_left,
            elapsed_fraction: self.round.elapsed_fraction(),
            timer: token,
        });
    }

    fn end_round(&mut self, outcome: RoundOutcome) {
        self.disarm_timer();
        self.phase = EnginePhase::RoundEnded;
        debug!(
            target: "game_engine",
            "Round {} ended: {:?}", self.round_no, outcome
        );
        self.event_emitter.emit(&GameEngineEvent::RoundEnded {
            round_no: self.round_no,
            outcome,
            secret: self.round.secret.clone(),
        });
        self.advance();
    }

    fn advance(&mut self) {
        if self.round_no < ROUNDS_TOTAL {
            self.start_round();
        } else {
            self.finish_session();
        }
    }

    fn finish_session(&mut self) {
        self.disarm_timer();
        self.phase = EnginePhase::SessionEnded;
        let stats = self.session_stats();
        debug!(target: "game_engine", "Session ended with score {}", stats.score);
        self.event_emitter
            .emit(&GameEngineEvent::SessionEnded(stats));
    }

    fn reset_session(&mut self) {
        self.disarm_timer();
        self.phase = EnginePhase::Idle;
        self.score = 0;
        self.round_no = 0;
        self.round = Round::default();
        self.event_emitter.emit(&GameEngineEvent::SessionReset);
        self.event_emitter.emit(&GameEngineEvent::ScoreChanged(0));
    }

    fn change_settings(&mut self, change: &SettingsChange) {
        if let Some(difficulty) = change.difficulty {
            self.settings.difficulty = difficulty;
        }
        if let Some(category) = change.category {
            self.settings.category = category;
        }
        self.event_emitter
            .emit(&GameEngineEvent::SettingsChanged(self.settings.clone()));
    }

    fn arm_timer(&mut self) -> TimerToken {
        self.timer_generation += 1;
        TimerToken::new(self.timer_generation)
    }

    fn disarm_timer(&mut self) {
        self.timer_generation += 1;
    }

    fn current_mask(&self, guess: &str) -> String {
        mask(&self.round.secret, guess, &self.round.revealed_positions)
    }

    pub fn session_stats(&self) -> SessionStats {
        SessionStats {
            score: self.score,
            rounds_played: self.round_no.min(ROUNDS_TOTAL),
            difficulty: self.settings.difficulty,
            category: self.settings.category,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs() as i64,
            playthrough_id: self.current_playthrough_id,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn round_no(&self) -> u32 {
        self.round_no
    }

    pub fn is_round_active(&self) -> bool {
        self.phase == EnginePhase::RoundActive
    }

    pub fn masked_word(&self) -> String {
        self.current_mask("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Channel;
    use crate::game::tests::UsingLogger;
    use crate::model::{Category, Difficulty};
    use test_context::test_context;

    struct Harness {
        commands: EventEmitter<GameEngineCommand>,
        engine: Rc<RefCell<GameEngine>>,
        events: Rc<RefCell<Vec<GameEngineEvent>>>,
        _event_sub: Unsubscriber<GameEngineEvent>,
    }

    impl Harness {
        fn new(settings: Settings) -> Self {
            let (command_emitter, command_observer) = Channel::<GameEngineCommand>::new();
            let (event_emitter, event_observer) = Channel::<GameEngineEvent>::new();
            let events = Rc::new(RefCell::new(Vec::new()));
            let sink = events.clone();
            let event_sub = event_observer
                .subscribe(move |event: &GameEngineEvent| sink.borrow_mut().push(event.clone()));
            let engine = GameEngine::with_rng(
                command_observer,
                event_emitter,
                settings,
                Box::new(StdRng::seed_from_u64(7)),
            );
            Self {
                commands: command_emitter,
                engine,
                events,
                _event_sub: event_sub,
            }
        }

        fn send(&self, command: GameEngineCommand) {
            self.commands.emit(&command);
        }

        fn secret(&self) -> String {
            self.engine.borrow().round.secret.clone()
        }

        fn last_timer_token(&self) -> TimerToken {
            self.events
                .borrow()
                .iter()
                .rev()
                .find_map(|event| match event {
                    GameEngineEvent::RoundStarted { timer, .. } => Some(*timer),
                    GameEngineEvent::TimerTick { timer, .. } => Some(*timer),
                    _ => None,
                })
                .expect("no timer armed")
        }

        fn count_round_starts(&self) -> usize {
            self.events
                .borrow()
                .iter()
                .filter(|event| matches!(event, GameEngineEvent::RoundStarted { .. }))
                .count()
        }

        fn session_ended(&self) -> Option<SessionStats> {
            self.events
                .borrow()
                .iter()
                .find_map(|event| match event {
                    GameEngineEvent::SessionEnded(stats) => Some(stats.clone()),
                    _ => None,
                })
        }
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_full_session_solves_five_rounds(_ctx: &mut UsingLogger) {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);

        for _ in 0..ROUNDS_TOTAL {
            let secret = harness.secret();
            harness.send(GameEngineCommand::SubmitGuess(secret));
        }

        assert_eq!(harness.count_round_starts(), ROUNDS_TOTAL as usize);
        let stats = harness.session_ended().expect("session should have ended");
        assert_eq!(stats.rounds_played, ROUNDS_TOTAL);
        // every round solved with the full Easy budget left
        assert_eq!(
            stats.score,
            i64::from(ROUNDS_TOTAL)
                * (BASE_POINTS + i64::from(Difficulty::Easy.time_budget()) * BONUS_PER_SECOND_LEFT)
        );
        assert!(!harness.engine.borrow().is_round_active());
    }

    #[test]
    fn test_correct_guess_scores_base_plus_time_bonus() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);
        harness.engine.borrow_mut().round.time_left = 25;

        let secret = harness.secret();
        harness.send(GameEngineCommand::SubmitGuess(secret));

        // 10 base + 25 seconds left
        assert_eq!(
            harness.events.borrow().iter().find_map(|event| match event {
                GameEngineEvent::RoundEnded { outcome, .. } => Some(*outcome),
                _ => None,
            }),
            Some(RoundOutcome::Solved {
                attempt: 1,
                base_points: 10,
                time_bonus: 25
            })
        );
        assert_eq!(harness.engine.borrow().score(), 35);
    }

    #[test]
    fn test_guess_is_trimmed_and_lowercased() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);
        let secret = harness.secret();
        harness.send(GameEngineCommand::SubmitGuess(format!(
            "  {}  ",
            secret.to_uppercase()
        )));
        assert_eq!(harness.engine.borrow().round_no(), 2);
    }

    #[test]
    fn test_empty_guess_is_ignored() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);
        harness.send(GameEngineCommand::SubmitGuess("   ".to_string()));
        assert_eq!(harness.engine.borrow().round.attempt, 0);
        assert_eq!(harness.engine.borrow().score(), 0);
    }

    #[test]
    fn test_guess_without_active_round_is_ignored() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::SubmitGuess("tiger".to_string()));
        assert_eq!(harness.engine.borrow().round_no(), 0);
        assert!(harness.events.borrow().is_empty());
    }

    #[test]
    fn test_wrong_guess_on_hard_costs_three_points_and_a_life() {
        let settings = Settings {
            difficulty: Difficulty::Hard,
            ..Settings::default()
        };
        let harness = Harness::new(settings);
        harness.send(GameEngineCommand::NewSession);

        harness.send(GameEngineCommand::SubmitGuess("xxxxx".to_string()));

        let engine = harness.engine.borrow();
        assert_eq!(engine.score(), -3);
        assert_eq!(engine.round.lives_left, Difficulty::Hard.lives() - 1);
        assert_eq!(engine.round.attempt, 1);
    }

    #[test]
    fn test_running_out_of_lives_fails_the_round() {
        let settings = Settings {
            difficulty: Difficulty::Hard,
            ..Settings::default()
        };
        let harness = Harness::new(settings);
        harness.send(GameEngineCommand::NewSession);

        for _ in 0..Difficulty::Hard.lives() {
            harness.send(GameEngineCommand::SubmitGuess("xxxxx".to_string()));
        }

        let events = harness.events.borrow();
        assert!(events.iter().any(|event| matches!(
            event,
            GameEngineEvent::RoundEnded {
                round_no: 1,
                outcome: RoundOutcome::OutOfLives,
                ..
            }
        )));
        drop(events);
        // the next round started automatically
        assert_eq!(harness.engine.borrow().round_no(), 2);
        assert!(harness.engine.borrow().is_round_active());
    }

    #[test]
    fn test_countdown_times_out_the_round() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);

        for _ in 0..Difficulty::Easy.time_budget() {
            let token = harness.last_timer_token();
            harness.send(GameEngineCommand::Tick(token));
        }

        let events = harness.events.borrow();
        assert!(events.iter().any(|event| matches!(
            event,
            GameEngineEvent::RoundEnded {
                round_no: 1,
                outcome: RoundOutcome::TimedOut,
                ..
            }
        )));
        drop(events);
        assert_eq!(harness.engine.borrow().round_no(), 2);
    }

    #[test]
    fn test_stale_tick_after_round_end_is_discarded() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);
        let stale_token = harness.last_timer_token();

        // end round 1 by solving it; round 2's timer is armed with a new token
        let secret = harness.secret();
        harness.send(GameEngineCommand::SubmitGuess(secret));
        let time_before = harness.engine.borrow().round.time_left;

        harness.send(GameEngineCommand::Tick(stale_token));
        assert_eq!(harness.engine.borrow().round.time_left, time_before);

        let fresh_token = harness.last_timer_token();
        assert_ne!(stale_token, fresh_token);
        harness.send(GameEngineCommand::Tick(fresh_token));
        assert_eq!(harness.engine.borrow().round.time_left, time_before - 1);
    }

    #[test]
    fn test_tick_reports_elapsed_fraction() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);
        let token = harness.last_timer_token();
        harness.send(GameEngineCommand::Tick(token));

        let events = harness.events.borrow();
        let (time_left, elapsed_fraction) = events
            .iter()
            .find_map(|event| match event {
                GameEngineEvent::TimerTick {
                    time_left,
                    elapsed_fraction,
                    ..
                } => Some((*time_left, *elapsed_fraction)),
                _ => None,
            })
            .expect("no tick event");
        assert_eq!(time_left, Difficulty::Easy.time_budget() - 1);
        assert!((elapsed_fraction - 1.0 / f64::from(Difficulty::Easy.time_budget())).abs() < 1e-9);
    }

    #[test]
    fn test_hints_reveal_deduct_and_cap() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);

        harness.send(GameEngineCommand::UseHint);
        harness.send(GameEngineCommand::UseHint);
        {
            let engine = harness.engine.borrow();
            assert_eq!(engine.round.hints_used, 2);
            assert_eq!(engine.round.revealed_positions.len(), 2);
            assert_eq!(engine.score(), -2 * HINT_PENALTY);
        }

        harness.send(GameEngineCommand::UseHint);
        {
            let engine = harness.engine.borrow();
            assert_eq!(engine.round.hints_used, 2);
            assert_eq!(engine.score(), -2 * HINT_PENALTY);
        }
        assert!(harness
            .events
            .borrow()
            .iter()
            .any(|event| matches!(event, GameEngineEvent::HintFailed(HintError::LimitExceeded))));
    }

    #[test]
    fn test_hint_with_everything_revealed_fails_without_state_change() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);
        {
            let mut engine = harness.engine.borrow_mut();
            let len = engine.round.secret_len();
            engine.round.revealed_positions.extend(0..len);
        }

        let result = harness.engine.borrow_mut().reveal_random_letter();
        assert_eq!(result, Err(HintError::NothingToReveal));
        let engine = harness.engine.borrow();
        assert_eq!(engine.round.hints_used, 0);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_hint_updates_mask() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);
        harness.send(GameEngineCommand::UseHint);

        let engine = harness.engine.borrow();
        let masked = engine.masked_word();
        assert_eq!(masked.chars().filter(|ch| *ch != '_').count(), 1);
        assert_eq!(masked.chars().count(), engine.round.secret_len());
    }

    #[test]
    fn test_advance_past_last_round_never_starts_another() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);
        for _ in 0..ROUNDS_TOTAL {
            let secret = harness.secret();
            harness.send(GameEngineCommand::SubmitGuess(secret));
        }
        assert_eq!(harness.count_round_starts(), ROUNDS_TOTAL as usize);

        harness.engine.borrow_mut().advance();
        assert_eq!(harness.count_round_starts(), ROUNDS_TOTAL as usize);
        assert!(!harness.engine.borrow().is_round_active());
    }

    #[test]
    fn test_reset_session_clears_everything() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);
        harness.send(GameEngineCommand::UseHint);
        harness.send(GameEngineCommand::SubmitGuess("xxxxx".to_string()));

        harness.send(GameEngineCommand::ResetSession);

        let engine = harness.engine.borrow();
        assert_eq!(engine.round_no(), 0);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.round, Round::default());
        assert!(!engine.is_round_active());
        drop(engine);
        assert!(harness
            .events
            .borrow()
            .iter()
            .any(|event| matches!(event, GameEngineEvent::SessionReset)));
    }

    #[test]
    fn test_reset_disarms_the_timer() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);
        let token = harness.last_timer_token();
        harness.send(GameEngineCommand::ResetSession);

        harness.send(GameEngineCommand::Tick(token));
        assert_eq!(harness.engine.borrow().round.time_left, 0);
        assert!(!harness.engine.borrow().is_round_active());
    }

    #[test]
    fn test_settings_change_applies_at_next_round() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);
        assert_eq!(
            harness.engine.borrow().round.total_time,
            Difficulty::Easy.time_budget()
        );

        harness.send(GameEngineCommand::ChangeSettings(SettingsChange {
            difficulty: Some(Difficulty::Hard),
            category: Some(Category::Tech),
        }));
        // current round is untouched
        assert_eq!(
            harness.engine.borrow().round.total_time,
            Difficulty::Easy.time_budget()
        );

        let secret = harness.secret();
        harness.send(GameEngineCommand::SubmitGuess(secret));
        let engine = harness.engine.borrow();
        assert_eq!(engine.round.total_time, Difficulty::Hard.time_budget());
        assert_eq!(engine.round.lives_left, Difficulty::Hard.lives());
    }

    #[test]
    fn test_destroy_detaches_the_engine_from_the_channel() {
        let harness = Harness::new(Settings::default());
        harness.send(GameEngineCommand::NewSession);
        assert_eq!(harness.engine.borrow().round_no(), 1);

        harness.engine.borrow_mut().destroy();
        let secret = harness.secret();
        harness.send(GameEngineCommand::SubmitGuess(secret));
        assert_eq!(harness.engine.borrow().round_no(), 1);
    }
}
