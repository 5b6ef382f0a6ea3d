//! Derived view values: perspective scale, draw order and camera scroll.
//! Pure functions of authoritative positions; nothing here feeds back into
//! the simulation.

use super::state::GameState;
use crate::consts::*;

/// Perspective scale for a depth coordinate: 0.6 at the far edge of the
/// band, 1.0 at the near edge.
#[inline]
pub fn depth_scale(y: f32) -> f32 {
    let t = ((y - DEPTH_MIN) / (DEPTH_MAX - DEPTH_MIN)).clamp(0.0, 1.0);
    SCALE_FAR + (SCALE_NEAR - SCALE_FAR) * t
}

/// Draw order key: larger is nearer and drawn later
#[inline]
pub fn depth_key(y: f32) -> f32 {
    y
}

/// Horizontal scroll keeping the player `CAMERA_LEAD` from the left edge,
/// bounded to the world.
#[inline]
pub fn camera_scroll(player_x: f32, world_width: f32) -> f32 {
    let max_scroll = (world_width - VIEWPORT_WIDTH).max(0.0);
    (player_x - CAMERA_LEAD).clamp(0.0, max_scroll)
}

pub fn update_camera(state: &mut GameState) {
    state.camera_x = camera_scroll(state.player.pos.x, state.level.bounds.width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_depth_scale_edges() {
        assert!((depth_scale(200.0) - 0.6).abs() < 1e-6);
        assert!((depth_scale(350.0) - 0.8).abs() < 1e-6);
        assert!((depth_scale(500.0) - 1.0).abs() < 1e-6);
        // Outside the band saturates
        assert!((depth_scale(100.0) - 0.6).abs() < 1e-6);
        assert!((depth_scale(900.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_nearer_draws_later() {
        assert!(depth_key(450.0) > depth_key(300.0));
    }

    #[test]
    fn test_camera_scroll() {
        assert_eq!(camera_scroll(100.0, WORLD_WIDTH), 0.0);
        assert_eq!(camera_scroll(1000.0, WORLD_WIDTH), 600.0);
        assert_eq!(camera_scroll(2900.0, WORLD_WIDTH), 2200.0);
    }

    proptest! {
        #[test]
        fn prop_camera_within_world(x in 0.0f32..=3000.0) {
            let scroll = camera_scroll(x, WORLD_WIDTH);
            prop_assert!((0.0..=2200.0).contains(&scroll));
        }

        #[test]
        fn prop_scale_bounded_and_monotonic(a in -1000.0f32..2000.0, b in -1000.0f32..2000.0) {
            let (sa, sb) = (depth_scale(a), depth_scale(b));
            prop_assert!((0.6..=1.0).contains(&sa));
            if a <= b {
                prop_assert!(sa <= sb + 1e-6);
            }
        }
    }
}
