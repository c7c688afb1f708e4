//! Presentation collaborator seam
//!
//! Rendering, dialogs, and name capture are collaborators, not part of the
//! sim. The tick loop hands each `GameEvent` to a `Frontend`; the driver asks
//! it for the end-of-game decision and, on a new high score, the player name.

use crate::highscores::HighScoreRecord;
use crate::sim::{EndDecision, GameEvent, GameState};

/// What the game needs from a presentation layer
pub trait Frontend {
    /// Draw the initial HUD (score, lives, speed, charges, stored high score)
    fn draw_hud(&mut self, state: &GameState, high: &HighScoreRecord);

    /// Reflect one state mutation
    fn apply(&mut self, state: &GameState, event: &GameEvent);

    /// Blocking end-of-game dialog: Retry / Abort / Ignore
    fn end_decision(&mut self, score: u32) -> EndDecision;

    /// Blocking name prompt when a new high score is being recorded
    fn player_name(&mut self) -> String;
}

/// Frontend that renders nothing and always aborts; used in tests and for
/// headless runs
#[derive(Debug, Default)]
pub struct NullFrontend;

impl Frontend for NullFrontend {
    fn draw_hud(&mut self, _state: &GameState, _high: &HighScoreRecord) {}

    fn apply(&mut self, _state: &GameState, _event: &GameEvent) {}

    fn end_decision(&mut self, _score: u32) -> EndDecision {
        EndDecision::Abort
    }

    fn player_name(&mut self) -> String {
        String::new()
    }
}
