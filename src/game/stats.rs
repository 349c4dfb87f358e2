//! Session Statistics
//!
//! Aggregates over won games for the lifetime of the process.

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::game::difficulty::Difficulty;
use crate::game::session::SessionId;

/// One won game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Session that was won
    pub session_id: SessionId,
    /// Difficulty it was played on
    pub difficulty: Difficulty,
    /// Attempts used to win
    pub attempts: u32,
    /// When the winning guess was made
    pub finished_at: DateTime<Utc>,
}

/// Aggregates as shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Won games recorded
    pub games_played: u32,
    /// Mean attempts per won game; `None` before the first win
    pub average_attempts: Option<f64>,
    /// Fewest attempts in any won game
    pub best_score: Option<u32>,
}

/// Running statistics.
#[derive(Clone, Debug, Default, Serialize)]
pub struct StatsTracker {
    games_played: u32,
    total_attempts: u64,
    best_score: Option<u32>,
    history: Vec<GameRecord>,
}

impl StatsTracker {
    /// Empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a won game.
    pub fn record(&mut self, record: GameRecord) {
        self.games_played += 1;
        self.total_attempts += u64::from(record.attempts);
        self.best_score = Some(match self.best_score {
            Some(best) => best.min(record.attempts),
            None => record.attempts,
        });
        self.history.push(record);
    }

    /// Record a won game finishing now.
    pub fn record_win(&mut self, session_id: SessionId, difficulty: Difficulty, attempts: u32) {
        self.record(GameRecord {
            session_id,
            difficulty,
            attempts,
            finished_at: Utc::now(),
        });
    }

    /// Won games recorded.
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Sum of attempts over won games.
    pub fn total_attempts(&self) -> u64 {
        self.total_attempts
    }

    /// Fewest attempts in any won game.
    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    /// Mean attempts per won game.
    pub fn average_attempts(&self) -> Option<f64> {
        if self.games_played == 0 {
            None
        } else {
            Some(self.total_attempts as f64 / f64::from(self.games_played))
        }
    }

    /// Won games, oldest first.
    pub fn history(&self) -> &[GameRecord] {
        &self.history
    }

    /// Aggregates as a value.
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            games_played: self.games_played,
            average_attempts: self.average_attempts(),
            best_score: self.best_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker() {
        let stats = StatsTracker::new();
        let summary = stats.summary();
        assert_eq!(summary.games_played, 0);
        assert_eq!(summary.average_attempts, None);
        assert_eq!(summary.best_score, None);
        assert!(stats.history().is_empty());
    }

    #[test]
    fn test_three_wins() {
        let mut stats = StatsTracker::new();
        for attempts in [5, 3, 7] {
            stats.record_win([0; 16], Difficulty::Medium, attempts);
        }

        assert_eq!(stats.games_played(), 3);
        assert_eq!(stats.total_attempts(), 15);
        assert_eq!(stats.best_score(), Some(3));
        assert_eq!(stats.average_attempts(), Some(5.0));
    }

    #[test]
    fn test_history_keeps_order() {
        let mut stats = StatsTracker::new();
        stats.record_win([1; 16], Difficulty::Easy, 9);
        stats.record_win([2; 16], Difficulty::Hard, 4);

        let attempts: Vec<u32> = stats.history().iter().map(|r| r.attempts).collect();
        assert_eq!(attempts, vec![9, 4]);
        assert_eq!(stats.history()[1].difficulty, Difficulty::Hard);
        assert!(stats.history()[0].finished_at <= stats.history()[1].finished_at);
    }

    #[test]
    fn test_best_score_only_improves() {
        let mut stats = StatsTracker::new();
        stats.record_win([0; 16], Difficulty::Medium, 4);
        stats.record_win([0; 16], Difficulty::Medium, 8);
        assert_eq!(stats.best_score(), Some(4));
        stats.record_win([0; 16], Difficulty::Medium, 1);
        assert_eq!(stats.best_score(), Some(1));
    }
}
