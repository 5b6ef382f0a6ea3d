//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes only from the caller's clock
//! - Seeded RNG only
//! - Stable iteration order (slot order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod enemy_ai;
pub mod items;
pub mod level;
pub mod movement;
pub mod schedule;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod view;

pub use collision::{Circle, Rect, circle_rect_overlap, rect_rect_overlap, within_range};
pub use enemy_ai::EnemyMode;
pub use level::{ItemKind, Ladder, LevelCatalog, WorldBounds, Zone, ZoneKind, ladder_in_reach};
pub use schedule::{Deferred, Scheduler};
pub use snapshot::{EntityInstance, EntityPose, EntityRef, HealthBand, HudSnapshot, RenderSnapshot};
pub use state::{Clock, Enemy, EnemyId, GameEvent, GameState, Item, ItemId, Outcome, Player};
pub use tick::{InputEdges, TickInput, tick};
pub use view::{camera_scroll, depth_key, depth_scale};
