//! Bubble Arena - a bounded-arena arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `input`: Input event queue bridging the listener thread and the tick loop
//! - `highscores`: High score record and improvement rules
//! - `persistence`: Score file load/store
//! - `frontend`: Presentation collaborator seam (rendering, dialogs)

pub mod frontend;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use highscores::HighScoreRecord;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Tick rate of the main loop (Hz)
    pub const TICK_HZ: u32 = 60;

    /// Arena bounds (the visual border is drawn slightly larger)
    pub const ARENA_X_MIN: f32 = -322.0;
    pub const ARENA_X_MAX: f32 = 314.0;
    pub const ARENA_Y_MIN: f32 = -264.0;
    pub const ARENA_Y_MAX: f32 = 264.0;

    /// Avatar speed limits
    pub const MIN_SPEED: f32 = 1.0;
    pub const MAX_SPEED: f32 = 7.4;

    /// Discrete turn step (degrees)
    pub const TURN_STEP_DEG: f32 = 30.0;
    /// Backward nudge applied before a boundary reversal (reduces wall sticking)
    pub const REVERSE_NUDGE: f32 = 3.0;

    /// Starting lives for avatar and boss
    pub const START_LIVES: i32 = 3;
    pub const BOSS_START_LIVES: i32 = 7;
    /// Lives granted by the Ignore branch of the end-of-game dialog
    pub const IGNORE_LIVES: i32 = 10_000;

    /// Hitbox half-widths (axis-aligned boxes)
    pub const BUBBLE_HALF_WIDTH: f32 = 15.0;
    pub const BOSS_HALF_WIDTH: f32 = 40.0;

    /// Point bubble rewards
    pub const POINT_BUBBLE_SCORE: u32 = 10;
    pub const POINT_BUBBLE_SPEED_BOOST: f32 = 0.2;

    /// Boss becomes visible once score reaches this
    pub const BOSS_ACTIVATION_SCORE: u32 = 100;
    /// Exact score values that daze the boss
    pub const DAZE_THRESHOLDS: [u32; 7] = [150, 205, 300, 375, 450, 555, 620];
    /// Above the last fixed threshold, every multiple of this re-arms the daze
    pub const DAZE_REPEAT_MODULUS: u32 = 50;
    /// Lives lost on contact with a non-dazed boss
    pub const BOSS_CONTACT_PENALTY: i32 = 5;
    /// Reward for hitting a dazed boss that survives
    pub const BOSS_HIT_SCORE: u32 = 25;
    pub const BOSS_HIT_SPEED_PENALTY: f32 = 0.8;
    /// Reward for the finishing hit
    pub const BOSS_KILL_SCORE: u32 = 250;
    pub const BOSS_KILL_SPEED_PENALTY: f32 = 1.6;
    /// Scripted recoil after a dazed hit
    pub const BOSS_RETREAT_DISTANCE: f32 = 220.0;
    /// Ticks before the recoiled boss returns to its pre-hit position
    pub const BOSS_RETURN_DELAY_TICKS: u64 = 30;

    /// Slow bubble spawn rule: score >= floor, then every multiple of the step
    pub const SLOW_BUBBLE_SCORE_FLOOR: u32 = 560;
    pub const SLOW_BUBBLE_SCORE_STEP: u32 = 80;
    pub const SLOW_BUBBLE_SCORE: u32 = 10;
    /// Speed drop when a slow charge is spent
    pub const SLOW_CHARGE_SPEED_DROP: f32 = 1.0;

    /// Parking spots for entities that are out of play
    pub const AVATAR_OFFSCREEN: (f32, f32) = (2000.0, 2000.0);
    pub const BOSS_DEFEATED_POS: (f32, f32) = (4000.0, 4000.0);
    pub const SLOW_BUBBLE_PARKED: (f32, f32) = (1000.0, 1000.0);

    /// Boss spawn position
    pub const BOSS_START_POS: (f32, f32) = (200.0, 200.0);
}

/// Unit vector for a heading in degrees (0° points along +x, CCW positive)
#[inline]
pub fn heading_to_vec(heading_deg: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Normalize a heading to [0, 360)
#[inline]
pub fn wrap_heading(mut heading_deg: f32) -> f32 {
    while heading_deg >= 360.0 {
        heading_deg -= 360.0;
    }
    while heading_deg < 0.0 {
        heading_deg += 360.0;
    }
    heading_deg
}

/// Center of the arena rectangle
#[inline]
pub fn arena_center() -> Vec2 {
    Vec2::new(
        (consts::ARENA_X_MIN + consts::ARENA_X_MAX) / 2.0,
        (consts::ARENA_Y_MIN + consts::ARENA_Y_MAX) / 2.0,
    )
}
