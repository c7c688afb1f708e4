//! Game state and core simulation types
//!
//! Everything the tick loop reads or mutates lives here.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{arena_center, heading_to_vec, wrap_heading};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives ran out; waiting for an end-of-game decision
    Ended,
}

/// Outcome of the end-of-game dialog, supplied by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndDecision {
    /// Persist high score if improved, rebuild state, play again
    Retry,
    /// Persist high score if improved, quit
    Abort,
    /// Resume with an effectively unbounded life count (unfair-ending escape)
    Ignore,
}

/// Boss body color, signalling vulnerability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossColor {
    Black,
    Gold,
}

/// State mutations the presentation layer must reflect.
///
/// Continuous avatar motion is read straight off the state; events cover
/// the discrete changes (score, lives, teleports, boss lifecycle).
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Avatar color earned by the stored high score
    AvatarColor(&'static str),
    LivesChanged(i32),
    ScoreChanged(u32),
    SpeedChanged(f32),
    SlowChargesChanged(u32),
    PointBubbleMoved(Vec2),
    SlowBubbleMoved(Vec2),
    /// Avatar was teleported (unstick, boss hit recenter, end-of-game parking)
    AvatarRecentered(Vec2),
    BossShown,
    BossColor(BossColor),
    BossMoved(Vec2),
    BossDefeated,
    /// A daze threshold was jumped over by a score increase, never matching
    /// exactly, so it did not fire
    ThresholdMissed { threshold: u32 },
    GameEnded { score: u32 },
}

/// The player-controlled entity
#[derive(Debug, Clone)]
pub struct Avatar {
    pub pos: Vec2,
    /// Heading in degrees, 0 = +x, counter-clockwise
    pub heading_deg: f32,
    pub speed: f32,
    pub lives: i32,
    /// Banked slow-bubble charges
    pub slow_charges: u32,
    pub movement_enabled: bool,
}

impl Avatar {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            heading_deg: 0.0,
            speed: MIN_SPEED,
            lives: START_LIVES,
            slow_charges: 0,
            movement_enabled: true,
        }
    }

    /// Turn left by the fixed step
    pub fn turn_left(&mut self) {
        self.heading_deg = wrap_heading(self.heading_deg + TURN_STEP_DEG);
    }

    /// Turn right by the fixed step
    pub fn turn_right(&mut self) {
        self.heading_deg = wrap_heading(self.heading_deg - TURN_STEP_DEG);
    }

    /// Boundary bounce: small backward nudge, then 180° turn
    pub fn reverse(&mut self) {
        self.pos -= heading_to_vec(self.heading_deg) * REVERSE_NUDGE;
        self.heading_deg = wrap_heading(self.heading_deg + 180.0);
    }

    /// Move forward by the current speed (only when movement is enabled)
    pub fn advance(&mut self) {
        if self.movement_enabled {
            self.pos += heading_to_vec(self.heading_deg) * self.speed;
        }
    }

    /// Adjust speed by a delta (clamping happens in the tick's speed-cap step)
    pub fn change_speed(&mut self, delta: f32) {
        self.speed += delta;
    }

    /// Clamp speed into [MIN_SPEED, MAX_SPEED]. Returns true if it changed.
    pub fn clamp_speed(&mut self) -> bool {
        let before = self.speed;
        self.speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
        self.speed != before
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

/// The multi-phase boss. No behavior of its own; the tick loop drives it.
#[derive(Debug, Clone)]
pub struct Boss {
    pub pos: Vec2,
    /// Position to return to after the scripted post-hit recoil
    pub home: Vec2,
    pub lives: i32,
    /// Only hittable while dazed; otherwise contact penalizes the avatar
    pub dazed: bool,
    pub visible: bool,
    pub color: BossColor,
    /// Latch preventing redundant color events
    pub color_synced: bool,
    /// Tick at which the recoiled boss snaps back to `home`
    pub return_at: Option<u64>,
    pub defeated: bool,
}

impl Boss {
    pub fn new() -> Self {
        let pos = Vec2::new(BOSS_START_POS.0, BOSS_START_POS.1);
        Self {
            pos,
            home: pos,
            lives: BOSS_START_LIVES,
            dazed: false,
            visible: false,
            color: BossColor::Black,
            color_synced: false,
            return_at: None,
            defeated: false,
        }
    }

    /// Whether collision checks against the boss should run at all
    pub fn in_play(&self) -> bool {
        self.visible && !self.defeated
    }
}

impl Default for Boss {
    fn default() -> Self {
        Self::new()
    }
}

/// A collectible bubble; only its position matters
#[derive(Debug, Clone, Copy)]
pub struct Bubble {
    pub pos: Vec2,
}

impl Bubble {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    /// Relocate to a fresh uniformly random arena position
    pub fn respawn(&mut self, rng: &mut Pcg32) {
        self.pos = random_arena_pos(rng);
    }
}

/// Uniform random position inside the arena bounds
pub fn random_arena_pos(rng: &mut Pcg32) -> Vec2 {
    Vec2::new(
        rng.random_range(ARENA_X_MIN..=ARENA_X_MAX),
        rng.random_range(ARENA_Y_MIN..=ARENA_Y_MAX),
    )
}

/// Complete game state, owned by the entry point and passed to `tick`
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG for bubble respawn positions
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Score as of the previous daze-threshold evaluation. Scores landing in
    /// `(last_daze_score, score)` were jumped over without an exact match.
    pub last_daze_score: u32,
    pub avatar: Avatar,
    pub boss: Boss,
    pub point_bubble: Bubble,
    pub slow_bubble: Bubble,
    /// "Decided to show" flag; placement happens in the visibility flush step
    pub slow_bubble_pending: bool,
    /// Latch so a score multiple only spawns one slow bubble
    pub slow_bubble_spawned: bool,
    /// Raised asynchronously by the unstick key, honored once per tick
    pub unstick_requested: bool,
    /// Raised when a slow charge is consumed; flushed as display events
    pub display_dirty: bool,
}

impl GameState {
    /// Create a fresh game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let point_bubble = Bubble {
            pos: random_arena_pos(&mut rng),
        };
        Self {
            seed,
            rng,
            time_ticks: 0,
            phase: GamePhase::Playing,
            score: 0,
            last_daze_score: 0,
            avatar: Avatar::new(),
            boss: Boss::new(),
            point_bubble,
            slow_bubble: Bubble::at(SLOW_BUBBLE_PARKED.0, SLOW_BUBBLE_PARKED.1),
            slow_bubble_pending: false,
            slow_bubble_spawned: false,
            unstick_requested: false,
            display_dirty: false,
        }
    }

    /// Apply the Ignore decision: resume play with effectively unbounded lives
    pub fn ignore_ending(&mut self) {
        self.avatar.lives = IGNORE_LIVES;
        self.phase = GamePhase::Playing;
        log::info!("ending ignored, resuming with {} lives", IGNORE_LIVES);
    }

    /// Recenter the avatar in the arena (unstick, post-boss-hit)
    pub fn recenter_avatar(&mut self) {
        self.avatar.pos = arena_center();
    }
}
