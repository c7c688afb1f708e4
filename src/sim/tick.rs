//! Per-tick simulation update
//!
//! Advances the world by one discrete step. Order matters: later steps may
//! override mutations made earlier in the same tick (e.g. the unstick check
//! runs after the boundary check so a stuck avatar does not bleed lives on
//! the tick it recovers).

use glam::Vec2;

use super::collision::{out_of_bounds_x, out_of_bounds_y, within_box};
use super::state::{BossColor, GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::input::InputEvent;

/// Advance the game state by one tick, draining this tick's input events.
///
/// Returns the presentation events produced by the tick. In the `Ended`
/// phase the sim is inert until the driver applies an `EndDecision`.
pub fn tick(state: &mut GameState, events: &[InputEvent]) -> Vec<GameEvent> {
    let mut out = Vec::new();
    if state.phase == GamePhase::Ended {
        return out;
    }

    state.time_ticks += 1;

    apply_input(state, events);
    state.avatar.advance();
    boundary_check(state, &mut out);
    unstick_check(state, &mut out);
    if state.avatar.clamp_speed() {
        out.push(GameEvent::SpeedChanged(state.avatar.speed));
    }
    if lives_validation(state, &mut out) {
        return out;
    }
    point_bubble_collision(state, &mut out);
    boss_update(state, &mut out);
    slow_bubble_spawn(state, &mut out);
    slow_bubble_visibility(state, &mut out);
    display_flush(state, &mut out);

    out
}

/// Step 0: apply the input events queued since the previous tick
fn apply_input(state: &mut GameState, events: &[InputEvent]) {
    for event in events {
        match event {
            InputEvent::EnableMovement => state.avatar.movement_enabled = true,
            InputEvent::DisableMovement => state.avatar.movement_enabled = false,
            InputEvent::Unstick => {
                state.unstick_requested = true;
                state.avatar.lives = START_LIVES;
                state.avatar.movement_enabled = false;
            }
            InputEvent::UseSlowCharge => {
                if state.avatar.slow_charges >= 1 && state.avatar.speed > MIN_SPEED {
                    state.avatar.slow_charges -= 1;
                    state.avatar.change_speed(-SLOW_CHARGE_SPEED_DROP);
                    state.display_dirty = true;
                }
            }
            InputEvent::TurnLeft => state.avatar.turn_left(),
            InputEvent::TurnRight => state.avatar.turn_right(),
        }
    }
}

/// Step 2: bounce off arena edges, one life per offending axis
fn boundary_check(state: &mut GameState, out: &mut Vec<GameEvent>) {
    if out_of_bounds_x(state.avatar.pos) {
        state.avatar.reverse();
        state.avatar.lives -= 1;
        out.push(GameEvent::LivesChanged(state.avatar.lives));
    }
    if out_of_bounds_y(state.avatar.pos) {
        state.avatar.reverse();
        state.avatar.lives -= 1;
        out.push(GameEvent::LivesChanged(state.avatar.lives));
    }
}

/// Step 3: honor a pending unstick request
fn unstick_check(state: &mut GameState, out: &mut Vec<GameEvent>) {
    if state.unstick_requested {
        state.recenter_avatar();
        state.avatar.lives = START_LIVES;
        state.unstick_requested = false;
        out.push(GameEvent::AvatarRecentered(state.avatar.pos));
        out.push(GameEvent::LivesChanged(state.avatar.lives));
    }
}

/// Step 5: end the session when lives run out. Returns true if it did.
fn lives_validation(state: &mut GameState, out: &mut Vec<GameEvent>) -> bool {
    if state.avatar.lives <= 0 {
        state.avatar.movement_enabled = false;
        state.avatar.pos = Vec2::new(AVATAR_OFFSCREEN.0, AVATAR_OFFSCREEN.1);
        state.phase = GamePhase::Ended;
        out.push(GameEvent::AvatarRecentered(state.avatar.pos));
        out.push(GameEvent::GameEnded { score: state.score });
        log::info!("game over at score {}", state.score);
        return true;
    }
    false
}

/// Step 6: collect the point bubble
fn point_bubble_collision(state: &mut GameState, out: &mut Vec<GameEvent>) {
    if !within_box(state.avatar.pos, state.point_bubble.pos, BUBBLE_HALF_WIDTH) {
        return;
    }
    state.point_bubble.respawn(&mut state.rng);
    state.score += POINT_BUBBLE_SCORE;
    state.avatar.change_speed(POINT_BUBBLE_SPEED_BOOST);
    out.push(GameEvent::PointBubbleMoved(state.point_bubble.pos));
    out.push(GameEvent::ScoreChanged(state.score));
    out.push(GameEvent::SpeedChanged(state.avatar.speed.min(MAX_SPEED)));
    if state.avatar.lives < START_LIVES {
        state.avatar.lives = START_LIVES;
        out.push(GameEvent::LivesChanged(state.avatar.lives));
    }
}

/// Steps 7-9: boss activation, color sync, daze thresholds, recoil, collision
fn boss_update(state: &mut GameState, out: &mut Vec<GameEvent>) {
    if state.score >= BOSS_ACTIVATION_SCORE && !state.boss.visible {
        state.boss.visible = true;
        state.boss.color_synced = false;
        out.push(GameEvent::BossShown);
        log::info!("boss activated at score {}", state.score);
    }
    if !state.boss.in_play() {
        return;
    }

    // Color reflects the daze state decided on the previous tick; a daze
    // change below is picked up on the next sync.
    if !state.boss.color_synced {
        let want = if state.boss.dazed {
            BossColor::Gold
        } else {
            BossColor::Black
        };
        state.boss.color = want;
        state.boss.color_synced = true;
        out.push(GameEvent::BossColor(want));
    }

    daze_thresholds(state, out);

    // Scripted recoil return
    if let Some(return_at) = state.boss.return_at {
        if state.time_ticks >= return_at {
            state.boss.pos = state.boss.home;
            state.boss.return_at = None;
            out.push(GameEvent::BossMoved(state.boss.pos));
        }
    }

    boss_collision(state, out);
}

/// Step 8: exact-match daze thresholds, plus the periodic re-arm above the
/// last fixed threshold. A threshold jumped over between evaluations (boss
/// hits and slow-bubble pickups add score after this step runs, so the jump
/// is only visible here on the following tick) is surfaced instead of
/// silently skipped.
fn daze_thresholds(state: &mut GameState, out: &mut Vec<GameEvent>) {
    let score = state.score;
    let last_fixed = *DAZE_THRESHOLDS.last().unwrap_or(&0);

    if DAZE_THRESHOLDS.contains(&score) {
        arm_daze(state);
    } else if score > last_fixed && state.boss.lives > 1 && score % DAZE_REPEAT_MODULUS == 0 {
        arm_daze(state);
    }

    for &threshold in DAZE_THRESHOLDS.iter() {
        if threshold > state.last_daze_score && threshold < score {
            log::warn!(
                "daze threshold {} skipped (score jumped {} -> {})",
                threshold,
                state.last_daze_score,
                score
            );
            out.push(GameEvent::ThresholdMissed { threshold });
        }
    }
    state.last_daze_score = score;
}

fn arm_daze(state: &mut GameState) {
    if !state.boss.dazed {
        log::info!("boss dazed at score {}", state.score);
    }
    state.boss.dazed = true;
    state.boss.color_synced = false;
}

/// Step 9: boss blocks the point bubble; avatar contact hits or hurts
fn boss_collision(state: &mut GameState, out: &mut Vec<GameEvent>) {
    // The boss physically blocks the point bubble
    if within_box(state.point_bubble.pos, state.boss.pos, BOSS_HALF_WIDTH) {
        state.point_bubble.respawn(&mut state.rng);
        out.push(GameEvent::PointBubbleMoved(state.point_bubble.pos));
    }

    if !within_box(state.avatar.pos, state.boss.pos, BOSS_HALF_WIDTH) {
        return;
    }

    if !state.boss.dazed {
        state.avatar.lives -= BOSS_CONTACT_PENALTY;
        out.push(GameEvent::LivesChanged(state.avatar.lives));
        return;
    }

    state.boss.lives -= 1;
    state.boss.dazed = false;
    state.boss.color_synced = false;
    state.recenter_avatar();
    out.push(GameEvent::AvatarRecentered(state.avatar.pos));

    if state.boss.lives >= 1 {
        // Scripted recoil away along the boss facing, then return
        state.boss.home = state.boss.pos;
        state.boss.pos -= Vec2::X * BOSS_RETREAT_DISTANCE;
        state.boss.return_at = Some(state.time_ticks + BOSS_RETURN_DELAY_TICKS);
        state.avatar.change_speed(-BOSS_HIT_SPEED_PENALTY);
        state.score += BOSS_HIT_SCORE;
        out.push(GameEvent::BossMoved(state.boss.pos));
        log::info!("boss hit, {} lives left", state.boss.lives);
    } else {
        state.boss.defeated = true;
        state.boss.return_at = None;
        state.boss.pos = Vec2::new(BOSS_DEFEATED_POS.0, BOSS_DEFEATED_POS.1);
        state.avatar.change_speed(-BOSS_KILL_SPEED_PENALTY);
        state.score += BOSS_KILL_SCORE;
        out.push(GameEvent::BossMoved(state.boss.pos));
        out.push(GameEvent::BossDefeated);
        log::info!("boss defeated at score {}", state.score);
    }

    out.push(GameEvent::ScoreChanged(state.score));
    out.push(GameEvent::SpeedChanged(state.avatar.speed.max(MIN_SPEED)));
}

/// Step 10: spawn trigger and pickup for the slow bubble
fn slow_bubble_spawn(state: &mut GameState, out: &mut Vec<GameEvent>) {
    if state.score < SLOW_BUBBLE_SCORE_FLOOR {
        return;
    }
    if state.score % SLOW_BUBBLE_SCORE_STEP == 0 && !state.slow_bubble_spawned {
        state.slow_bubble_pending = true;
        state.slow_bubble_spawned = true;
        log::info!("slow bubble queued at score {}", state.score);
    }
    if within_box(state.avatar.pos, state.slow_bubble.pos, BUBBLE_HALF_WIDTH) {
        state.avatar.slow_charges += 1;
        state.slow_bubble.pos = Vec2::new(SLOW_BUBBLE_PARKED.0, SLOW_BUBBLE_PARKED.1);
        state.score += SLOW_BUBBLE_SCORE;
        state.slow_bubble_spawned = false;
        out.push(GameEvent::SlowBubbleMoved(state.slow_bubble.pos));
        out.push(GameEvent::SlowChargesChanged(state.avatar.slow_charges));
        out.push(GameEvent::ScoreChanged(state.score));
    }
}

/// Step 11: place a pending slow bubble ("decided to show" vs "placed")
fn slow_bubble_visibility(state: &mut GameState, out: &mut Vec<GameEvent>) {
    if state.slow_bubble_pending {
        state.slow_bubble.respawn(&mut state.rng);
        state.slow_bubble_pending = false;
        out.push(GameEvent::SlowBubbleMoved(state.slow_bubble.pos));
    }
}

/// Step 12: flush displays dirtied by asynchronous slow-charge use
fn display_flush(state: &mut GameState, out: &mut Vec<GameEvent>) {
    if state.display_dirty {
        out.push(GameEvent::SpeedChanged(state.avatar.speed));
        out.push(GameEvent::SlowChargesChanged(state.avatar.slow_charges));
        state.display_dirty = false;
    }
}
