//! Collision tests for the arena
//!
//! Everything is an axis-aligned box: bubbles and the boss are square hitboxes
//! around a center point, the arena itself is a fixed rectangle.

use glam::Vec2;

use crate::consts::*;

/// True if `point` lies inside the square box of the given half-width
/// centered on `center` (edges inclusive).
pub fn within_box(point: Vec2, center: Vec2, half_width: f32) -> bool {
    (center.x - half_width..=center.x + half_width).contains(&point.x)
        && (center.y - half_width..=center.y + half_width).contains(&point.y)
}

/// True if the position is past either vertical arena edge
pub fn out_of_bounds_x(pos: Vec2) -> bool {
    pos.x > ARENA_X_MAX || pos.x < ARENA_X_MIN
}

/// True if the position is past either horizontal arena edge
pub fn out_of_bounds_y(pos: Vec2) -> bool {
    pos.y > ARENA_Y_MAX || pos.y < ARENA_Y_MIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_within_box_hit_and_miss() {
        let center = Vec2::new(100.0, -50.0);
        assert!(within_box(Vec2::new(100.0, -50.0), center, BUBBLE_HALF_WIDTH));
        assert!(within_box(Vec2::new(115.0, -35.0), center, BUBBLE_HALF_WIDTH));
        assert!(!within_box(Vec2::new(115.1, -50.0), center, BUBBLE_HALF_WIDTH));
        assert!(!within_box(Vec2::new(100.0, -66.0), center, BUBBLE_HALF_WIDTH));
    }

    #[test]
    fn test_within_box_boss_is_wider() {
        let center = Vec2::ZERO;
        let p = Vec2::new(30.0, 30.0);
        assert!(!within_box(p, center, BUBBLE_HALF_WIDTH));
        assert!(within_box(p, center, BOSS_HALF_WIDTH));
    }

    #[test]
    fn test_out_of_bounds_edges() {
        assert!(!out_of_bounds_x(Vec2::new(314.0, 0.0)));
        assert!(out_of_bounds_x(Vec2::new(314.1, 0.0)));
        assert!(out_of_bounds_x(Vec2::new(-322.1, 0.0)));
        assert!(!out_of_bounds_y(Vec2::new(0.0, -264.0)));
        assert!(out_of_bounds_y(Vec2::new(0.0, 264.5)));
    }

    proptest! {
        #[test]
        fn prop_within_box_is_symmetric(
            ax in -400.0f32..400.0, ay in -300.0f32..300.0,
            bx in -400.0f32..400.0, by in -300.0f32..300.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            // Same half-width on both sides means overlap is symmetric
            prop_assert_eq!(
                within_box(a, b, BUBBLE_HALF_WIDTH),
                within_box(b, a, BUBBLE_HALF_WIDTH)
            );
        }

        #[test]
        fn prop_in_bounds_positions_are_in_bounds(
            x in ARENA_X_MIN..=ARENA_X_MAX,
            y in ARENA_Y_MIN..=ARENA_Y_MAX,
        ) {
            let p = Vec2::new(x, y);
            prop_assert!(!out_of_bounds_x(p));
            prop_assert!(!out_of_bounds_y(p));
        }
    }
}
