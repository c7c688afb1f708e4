//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only
//! - Seeded RNG only
//! - Input arrives as drained events, never as shared mutable state
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{out_of_bounds_x, out_of_bounds_y, within_box};
pub use state::{
    Avatar, Boss, BossColor, Bubble, EndDecision, GameEvent, GamePhase, GameState,
    random_arena_pos,
};
pub use tick::tick;
