//! High score record
//!
//! A single two-field record (name, score), persisted to the score file.
//! Written at most once per game-over, and only when the session improved
//! on the stored score, so the stored value never decreases.

use serde::{Deserialize, Serialize};

/// The persisted high score: who holds it and what it is
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub name: String,
    pub score: u32,
}

impl HighScoreRecord {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Whether a session score beats the stored one (strict improvement)
    pub fn improves(&self, score: u32) -> bool {
        score > self.score
    }

    /// Avatar color earned by the stored high score.
    ///
    /// Rewards: >300 green, ≥700 purple, ≥1000 orange, ≥1500 gold,
    /// ≥3000 diamond. None below the first rung.
    pub fn achievement_color(&self) -> Option<&'static str> {
        match self.score {
            s if s >= 3000 => Some("diamond"),
            s if s >= 1500 => Some("gold"),
            s if s >= 1000 => Some("orange"),
            s if s >= 700 => Some("purple"),
            s if s > 300 => Some("green"),
            _ => None,
        }
    }
}
