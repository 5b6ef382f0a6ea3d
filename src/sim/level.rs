//! Static level description
//!
//! The corridor, its zones, ladders and spawn points are fixed constants.
//! Only the backdrop skyline is seeded, so two runs with the same seed draw
//! the same city.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Climbable ladder; `height` extends downward from `top_y`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ladder {
    pub x: f32,
    pub top_y: f32,
    pub height: f32,
}

impl Ladder {
    pub const fn new(x: f32, top_y: f32, height: f32) -> Self {
        Self { x, top_y, height }
    }

    #[inline]
    pub fn bottom_y(&self) -> f32 {
        self.top_y + self.height
    }

    /// Close enough horizontally and within the ladder's vertical span
    pub fn in_reach(&self, pos: Vec2) -> bool {
        (pos.x - self.x).abs() < LADDER_REACH && pos.y >= self.top_y && pos.y <= self.bottom_y()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    Start,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub kind: ZoneKind,
    pub bounds: Rect,
}

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Restores 25 health, capped at full
    Health,
    /// Worth 10 points
    Coin,
}

/// Horizontal and depth limits of the playable corridor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub depth_min: f32,
    pub depth_max: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            depth_min: DEPTH_MIN,
            depth_max: DEPTH_MAX,
        }
    }
}

/// Background building silhouette (drawn behind the far edge of the band)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

const BUILDING_COUNT: usize = 5;
const BUILDING_SPACING: f32 = 200.0;
const BUILDING_WIDTH: f32 = 150.0;
const BUILDING_MIN_HEIGHT: f32 = 150.0;
const BUILDING_HEIGHT_JITTER: f32 = 100.0;

const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 400.0);

const LADDERS: [Ladder; 2] = [Ladder::new(600.0, 350.0, 150.0), Ladder::new(1200.0, 300.0, 200.0)];

const ENEMY_SPAWNS: [Vec2; 5] = [
    Vec2::new(500.0, 400.0),
    Vec2::new(800.0, 450.0),
    Vec2::new(1200.0, 420.0),
    Vec2::new(1600.0, 380.0),
    Vec2::new(2000.0, 400.0),
];

const ITEM_SPAWNS: [(Vec2, ItemKind); 5] = [
    (Vec2::new(400.0, 450.0), ItemKind::Health),
    (Vec2::new(1500.0, 450.0), ItemKind::Health),
    (Vec2::new(800.0, 440.0), ItemKind::Coin),
    (Vec2::new(900.0, 440.0), ItemKind::Coin),
    (Vec2::new(1000.0, 440.0), ItemKind::Coin),
];

/// Read-only world description handed to the simulation at level start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelCatalog {
    pub bounds: WorldBounds,
    /// Floor strip drawn under the near edge of the depth band. Renderer
    /// geometry only; ground contact is the player's `lift` reaching zero.
    pub ground: Rect,
    pub zones: Vec<Zone>,
    pub ladders: Vec<Ladder>,
    pub player_spawn: Vec2,
    pub enemy_spawns: Vec<Vec2>,
    pub item_spawns: Vec<(Vec2, ItemKind)>,
    pub backdrop: Vec<Building>,
}

impl LevelCatalog {
    /// The one and only level, with a skyline generated from `seed`
    pub fn corridor(seed: u64) -> Self {
        Self {
            bounds: WorldBounds::default(),
            ground: Rect::new(400.0, 516.0, WORLD_WIDTH, 32.0),
            zones: vec![
                Zone {
                    kind: ZoneKind::Start,
                    bounds: Rect::new(150.0, 400.0, 200.0, 200.0),
                },
                Zone {
                    kind: ZoneKind::Exit,
                    bounds: Rect::new(2700.0, 400.0, 200.0, 200.0),
                },
            ],
            ladders: LADDERS.to_vec(),
            player_spawn: PLAYER_SPAWN,
            enemy_spawns: ENEMY_SPAWNS.to_vec(),
            item_spawns: ITEM_SPAWNS.to_vec(),
            backdrop: generate_backdrop(seed),
        }
    }

    pub fn ladders(&self) -> &[Ladder] {
        &self.ladders
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// First ladder (in catalog order) that `pos` can climb
    pub fn ladder_at(&self, pos: Vec2) -> Option<&Ladder> {
        ladder_in_reach(&self.ladders, pos)
    }

    fn zone(&self, kind: ZoneKind) -> Option<Rect> {
        self.zones.iter().find(|z| z.kind == kind).map(|z| z.bounds)
    }

    pub fn start_zone(&self) -> Option<Rect> {
        self.zone(ZoneKind::Start)
    }

    pub fn exit_zone(&self) -> Option<Rect> {
        self.zone(ZoneKind::Exit)
    }
}

/// First ladder in `ladders` that `pos` can climb. Earlier entries win
/// where ladders overlap.
pub fn ladder_in_reach(ladders: &[Ladder], pos: Vec2) -> Option<&Ladder> {
    ladders.iter().find(|ladder| ladder.in_reach(pos))
}

fn generate_backdrop(seed: u64) -> Vec<Building> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..BUILDING_COUNT)
        .map(|i| Building {
            x: i as f32 * BUILDING_SPACING + 50.0,
            width: BUILDING_WIDTH,
            height: BUILDING_MIN_HEIGHT + rng.random_range(0.0..BUILDING_HEIGHT_JITTER),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_reach() {
        let ladder = Ladder::new(600.0, 350.0, 150.0);
        assert!(ladder.in_reach(Vec2::new(590.0, 360.0)));
        assert!(ladder.in_reach(Vec2::new(600.0, 500.0)));
        // Exactly 30 away is out of reach
        assert!(!ladder.in_reach(Vec2::new(630.0, 400.0)));
        assert!(!ladder.in_reach(Vec2::new(600.0, 349.0)));
    }

    #[test]
    fn test_ladder_at_prefers_catalog_order() {
        let mut level = LevelCatalog::corridor(1);
        level.ladders = vec![Ladder::new(600.0, 300.0, 200.0), Ladder::new(610.0, 300.0, 200.0)];
        let found = level.ladder_at(Vec2::new(605.0, 400.0)).copied();
        assert_eq!(found, Some(Ladder::new(600.0, 300.0, 200.0)));
    }

    #[test]
    fn test_ground_sits_under_depth_band() {
        let level = LevelCatalog::corridor(1);
        assert_eq!(level.ground.min().y, DEPTH_MAX);
        assert_eq!(level.ground.size.x, WORLD_WIDTH);
    }

    #[test]
    fn test_zones() {
        let level = LevelCatalog::corridor(1);
        let exit = level.exit_zone().unwrap();
        assert_eq!(exit.center, Vec2::new(2700.0, 400.0));
        assert!(level.start_zone().is_some());
    }

    #[test]
    fn test_backdrop_is_seeded() {
        let a = LevelCatalog::corridor(42);
        let b = LevelCatalog::corridor(42);
        assert_eq!(a.backdrop, b.backdrop);
        assert_eq!(a.backdrop.len(), BUILDING_COUNT);
        for building in &a.backdrop {
            assert!(building.height >= 150.0 && building.height < 250.0);
        }
    }
}
