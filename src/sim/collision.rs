//! Overlap tests for the corridor's flat geometry
//!
//! Everything in the brawler is either an axis-aligned box (bodies, zones)
//! or a circle (pickups), measured on the ground plane: x along the
//! corridor, y along the depth axis. Jump lift is not part of these tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle described by its center and full size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(cx, cy),
            size: Vec2::new(width, height),
        }
    }

    /// Rectangle of the given size centered on `pos`
    pub fn around(pos: Vec2, size: Vec2) -> Self {
        Self { center: pos, size }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents()
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents()
    }

    /// Closest point inside the rectangle to `p`
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }
}

/// Circle on the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(cx: f32, cy: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(cx, cy),
            radius,
        }
    }
}

/// Two boxes overlap when their extents intersect on both axes.
/// Touching edges count as contact.
pub fn rect_rect_overlap(a: &Rect, b: &Rect) -> bool {
    let delta = (a.center - b.center).abs();
    let reach = a.half_extents() + b.half_extents();
    delta.x <= reach.x && delta.y <= reach.y
}

/// Circle vs box using the closest point on the box
pub fn circle_rect_overlap(circle: &Circle, rect: &Rect) -> bool {
    let closest = rect.clamp_point(circle.center);
    closest.distance_squared(circle.center) <= circle.radius * circle.radius
}

/// Strict range test (`distance < range`), matching melee reach semantics
#[inline]
pub fn within_range(a: Vec2, b: Vec2, range: f32) -> bool {
    a.distance_squared(b) < range * range
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap() {
        let exit = Rect::new(2700.0, 400.0, 200.0, 200.0);
        let player = Rect::new(2590.0, 400.0, 32.0, 48.0);
        // Right edge at 2606, exit left edge at 2600
        assert!(rect_rect_overlap(&player, &exit));

        let far = Rect::new(2500.0, 400.0, 32.0, 48.0);
        assert!(!rect_rect_overlap(&far, &exit));
    }

    #[test]
    fn test_rect_overlap_depth_axis() {
        let exit = Rect::new(2700.0, 400.0, 200.0, 200.0);
        // Inside horizontally, but above the zone on the depth axis
        let player = Rect::new(2700.0, 250.0, 32.0, 48.0);
        assert!(!rect_rect_overlap(&player, &exit));
    }

    #[test]
    fn test_circle_rect_overlap() {
        let player = Rect::new(400.0, 440.0, 32.0, 48.0);
        // Item 10 units below the player's bottom edge (464), radius 12
        assert!(circle_rect_overlap(&Circle::new(400.0, 474.0, 12.0), &player));
        assert!(!circle_rect_overlap(&Circle::new(400.0, 480.0, 12.0), &player));
        // Corner case: diagonal distance counts, not per-axis distance
        assert!(!circle_rect_overlap(&Circle::new(426.0, 474.0, 12.0), &player));
    }

    #[test]
    fn test_within_range_is_strict() {
        let a = Vec2::new(0.0, 0.0);
        assert!(within_range(a, Vec2::new(59.9, 0.0), 60.0));
        assert!(!within_range(a, Vec2::new(60.0, 0.0), 60.0));
        assert!(within_range(a, Vec2::new(30.0, 40.0), 60.0));
    }
}
