//! Game Controller
//!
//! The boundary a presentation shell talks to. Owns the active session,
//! the statistics and the RNG; every call returns a value for the shell to
//! render.

use tracing::{debug, info};

use crate::core::rng::SecretRng;
use crate::game::difficulty::Difficulty;
use crate::game::hint::{hint, Hint};
use crate::game::outcome::{parse_guess, GuessError, GuessOutcome};
use crate::game::session::{GameSession, SessionId, SessionView};
use crate::game::stats::{GameRecord, StatsSummary, StatsTracker};

/// Controller configuration.
#[derive(Clone, Debug, Default)]
pub struct ControllerConfig {
    /// Difficulty of the first session.
    pub difficulty: Difficulty,
    /// Fixed RNG seed. `None` seeds from a fresh session id.
    pub seed: Option<u64>,
}

/// Owns one game at a time plus the statistics across games.
pub struct GameController {
    session: GameSession,
    stats: StatsTracker,
    rng: SecretRng,
}

fn new_session_id() -> SessionId {
    uuid::Uuid::new_v4().into_bytes()
}

fn log_session_start(session: &GameSession) {
    info!(
        "Session {} started ({}, {} attempts)",
        hex::encode(&session.id()[..4]),
        session.difficulty(),
        session.max_attempts()
    );
}

impl GameController {
    /// Create a controller and start its first session.
    pub fn new(config: &ControllerConfig) -> Self {
        let first_id = new_session_id();
        let mut rng = match config.seed {
            Some(seed) => {
                info!("Using fixed seed {}", seed);
                SecretRng::new(seed)
            }
            None => {
                let rng = SecretRng::for_session(&first_id, 0);
                debug!("Seeded from session {}", hex::encode(&first_id[..4]));
                rng
            }
        };

        let session = GameSession::start(first_id, config.difficulty, &mut rng);
        log_session_start(&session);

        Self {
            session,
            stats: StatsTracker::new(),
            rng,
        }
    }

    /// Start a fresh session on `difficulty`, discarding the current one.
    pub fn new_game(&mut self, difficulty: Difficulty) -> SessionView {
        self.start_session(new_session_id(), difficulty)
    }

    /// Switch difficulty. Starts a fresh session so the budget and bounds
    /// always belong to the same game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> SessionView {
        self.new_game(difficulty)
    }

    fn start_session(&mut self, id: SessionId, difficulty: Difficulty) -> SessionView {
        self.session = GameSession::start(id, difficulty, &mut self.rng);
        log_session_start(&self.session);
        self.session.view()
    }

    /// Submit raw guess text.
    ///
    /// A finished session rejects before the text is parsed. A win is
    /// recorded in the statistics exactly once.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.session.is_over() {
            debug!("Guess {:?} after game over", raw);
            return Err(GuessError::AlreadyOver);
        }

        let value = parse_guess(raw).map_err(|e| {
            debug!("Rejected guess: {}", e);
            e
        })?;

        let outcome = self.session.guess(value).map_err(|e| {
            debug!("Rejected guess {}: {}", value, e);
            e
        })?;

        let view = self.session.view();
        debug!(
            "Guess {} -> {:?}, range {}..={}, attempts {}/{}",
            value, outcome, view.lower_bound, view.upper_bound, view.attempts, view.max_attempts
        );

        match outcome {
            GuessOutcome::Won { attempts } => {
                self.stats.record_win(*self.session.id(), self.session.difficulty(), attempts);
                info!(
                    "Session {} won in {} attempts",
                    hex::encode(&self.session.id()[..4]),
                    attempts
                );
            }
            GuessOutcome::Lost { secret } => {
                info!(
                    "Session {} lost, secret was {}",
                    hex::encode(&self.session.id()[..4]),
                    secret
                );
            }
            GuessOutcome::TooLow | GuessOutcome::TooHigh => {}
        }

        Ok(outcome)
    }

    /// Hint for the current session.
    pub fn request_hint(&self) -> Hint {
        hint(&self.session)
    }

    /// Aggregated statistics.
    pub fn stats(&self) -> StatsSummary {
        self.stats.summary()
    }

    /// Won games, oldest first.
    pub fn history(&self) -> &[GameRecord] {
        self.stats.history()
    }

    /// Current session snapshot.
    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    /// Difficulty of the current session.
    pub fn difficulty(&self) -> Difficulty {
        self.session.difficulty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Seed 42 draws secrets 5, 60, 91, 15, 93.
    fn seeded(difficulty: Difficulty) -> GameController {
        GameController::new(&ControllerConfig { difficulty, seed: Some(42) })
    }

    #[test]
    fn test_first_session_started() {
        let controller = seeded(Difficulty::Medium);
        let view = controller.view();
        assert_eq!((view.lower_bound, view.upper_bound), (1, 100));
        assert_eq!(view.attempts, 0);
        assert_eq!(view.max_attempts, 10);
        assert!(!view.is_over);
    }

    #[test]
    fn test_seeded_secrets_are_reproducible() {
        let mut controller = seeded(Difficulty::Easy);
        assert_eq!(controller.submit_guess("5"), Ok(GuessOutcome::Won { attempts: 1 }));

        controller.new_game(Difficulty::Easy);
        assert_eq!(controller.submit_guess("60"), Ok(GuessOutcome::Won { attempts: 1 }));
    }

    #[test]
    fn test_play_to_win_records_stats_once() {
        let mut controller = seeded(Difficulty::Medium);

        assert_eq!(controller.submit_guess("50"), Ok(GuessOutcome::TooHigh));
        assert_eq!(controller.submit_guess("3"), Ok(GuessOutcome::TooLow));
        assert_eq!(controller.submit_guess("5"), Ok(GuessOutcome::Won { attempts: 3 }));

        assert_eq!(controller.submit_guess("5"), Err(GuessError::AlreadyOver));

        let stats = controller.stats();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.best_score, Some(3));
        assert_eq!(stats.average_attempts, Some(3.0));
        assert_eq!(controller.history().len(), 1);
        assert_eq!(controller.history()[0].difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_invalid_and_out_of_range_do_not_count() {
        let mut controller = seeded(Difficulty::Medium);
        controller.submit_guess("50").unwrap();

        assert_eq!(
            controller.submit_guess("fifty"),
            Err(GuessError::InvalidInput { raw: "fifty".to_string() })
        );
        assert_eq!(
            controller.submit_guess("75"),
            Err(GuessError::OutOfRange { lower: 1, upper: 49 })
        );
        assert_eq!(controller.view().attempts, 1);
    }

    #[test]
    fn test_game_over_rejects_before_parsing() {
        let mut controller = seeded(Difficulty::Medium);
        controller.submit_guess("5").unwrap();
        assert_eq!(controller.submit_guess("not a number"), Err(GuessError::AlreadyOver));
    }

    #[test]
    fn test_loss_is_not_recorded() {
        let mut controller = seeded(Difficulty::Hard);
        for value in (6..=11).rev() {
            assert_eq!(controller.submit_guess(&value.to_string()), Ok(GuessOutcome::TooHigh));
        }
        assert_eq!(controller.submit_guess("1"), Ok(GuessOutcome::Lost { secret: 5 }));
        assert_eq!(controller.stats().games_played, 0);
        assert_eq!(controller.request_hint(), Hint::StartNewGame);
    }

    #[test]
    fn test_set_difficulty_starts_fresh_session() {
        let mut controller = seeded(Difficulty::Medium);
        controller.submit_guess("50").unwrap();

        let view = controller.set_difficulty(Difficulty::Hard);
        assert_eq!(view.max_attempts, 7);
        assert_eq!(view.attempts, 0);
        assert_eq!((view.lower_bound, view.upper_bound), (1, 100));
        assert_eq!(controller.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_hint_before_first_guess() {
        let controller = seeded(Difficulty::Medium);
        assert_eq!(controller.request_hint(), Hint::GuessMiddle);
    }

    #[test]
    fn test_binary_search_always_wins_on_medium() {
        for _ in 0..20 {
            let mut controller = GameController::new(&ControllerConfig::default());
            loop {
                let view = controller.view();
                let mid = (view.lower_bound + view.upper_bound) / 2;
                match controller.submit_guess(&mid.to_string()) {
                    Ok(GuessOutcome::Won { attempts }) => {
                        assert!(attempts <= 7);
                        break;
                    }
                    Ok(GuessOutcome::TooLow) | Ok(GuessOutcome::TooHigh) => {}
                    other => panic!("unexpected {:?} for {}", other, mid),
                }
            }
        }
    }

    #[test]
    fn test_random_play_keeps_view_consistent() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut controller = seeded(Difficulty::Medium);
        for _ in 0..500 {
            let before = controller.view();
            let raw = rng.gen_range(-10..=110).to_string();
            let result = controller.submit_guess(&raw);
            let after = controller.view();

            assert!(after.lower_bound <= after.upper_bound);
            assert!(after.lower_bound >= before.lower_bound || before.is_over);
            assert!(after.upper_bound <= before.upper_bound || before.is_over);
            match result {
                Ok(_) => assert_eq!(after.attempts, before.attempts + 1),
                Err(_) => assert_eq!(after.attempts, before.attempts),
            }
            if after.is_over {
                controller.new_game(Difficulty::Medium);
            }
        }
    }
}
