//! Per-tick outputs for renderers and the HUD
//!
//! The simulation never draws. Instead it hands out a depth-sorted list of
//! entity poses (and a GPU-friendly instance form of the same data) plus a
//! small HUD readout.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::level::ItemKind;
use super::state::{EnemyId, GameState, ItemId, Outcome};
use super::view::{depth_key, depth_scale};
use crate::Settings;
use crate::consts::*;

/// Red wash applied to anything that was just struck (0xRRGGBB)
pub const HIT_TINT: u32 = 0xff0000;

/// Which simulation entity a pose belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityRef {
    Player,
    Enemy(EnemyId),
    Item(ItemId, ItemKind),
}

impl EntityRef {
    fn instance_kind(&self) -> u32 {
        match self {
            EntityRef::Player => 0,
            EntityRef::Enemy(_) => 1,
            EntityRef::Item(_, ItemKind::Health) => 2,
            EntityRef::Item(_, ItemKind::Coin) => 3,
        }
    }
}

/// Where and how to draw one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityPose {
    pub entity: EntityRef,
    /// World position on the ground plane
    pub x: f32,
    pub y: f32,
    /// Height above the floor (jumps)
    pub lift: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub depth_key: f32,
    pub tint: Option<u32>,
}

/// GPU instance layout for one entity pose
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct EntityInstance {
    /// Screen position (camera applied, lift raised)
    pub position: [f32; 2],
    pub scale: [f32; 2],
    pub depth: f32,
    /// 0 player, 1 enemy, 2 health pack, 3 coin
    pub kind: u32,
    /// 0xRRGGBB, or 0xffffff when untinted
    pub tint: u32,
    pub _pad: u32,
}

/// Everything a renderer needs for one frame, back to front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub camera_x: f32,
    pub entities: Vec<EntityPose>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, settings: &Settings) -> Self {
        let flash = settings.effective_hit_flash();
        let tint = |hit: bool| (flash && hit).then_some(HIT_TINT);

        let mut entities = Vec::with_capacity(1 + state.enemies.len() + state.items.len());

        let player = &state.player;
        let scale = depth_scale(player.pos.y);
        let stretch = if player.punching && settings.effective_punch_stretch() {
            PUNCH_STRETCH
        } else {
            1.0
        };
        entities.push(EntityPose {
            entity: EntityRef::Player,
            x: player.pos.x,
            y: player.pos.y,
            lift: player.lift,
            scale_x: scale * stretch,
            scale_y: scale,
            depth_key: depth_key(player.pos.y),
            tint: tint(player.hit_flash),
        });

        for (id, enemy) in &state.enemies {
            let scale = depth_scale(enemy.pos.y);
            entities.push(EntityPose {
                entity: EntityRef::Enemy(id),
                x: enemy.pos.x,
                y: enemy.pos.y,
                lift: 0.0,
                scale_x: scale,
                scale_y: scale,
                depth_key: depth_key(enemy.pos.y),
                tint: tint(enemy.hit_flash),
            });
        }

        for (id, item) in &state.items {
            let scale = depth_scale(item.pos.y);
            entities.push(EntityPose {
                entity: EntityRef::Item(id, item.kind),
                x: item.pos.x,
                y: item.pos.y,
                lift: 0.0,
                scale_x: scale,
                scale_y: scale,
                depth_key: depth_key(item.pos.y),
                tint: None,
            });
        }

        // Stable sort keeps player-before-enemies-before-items on ties
        entities.sort_by(|a, b| a.depth_key.total_cmp(&b.depth_key));

        Self {
            camera_x: state.camera_x,
            entities,
        }
    }

    /// Flatten poses into instance data for upload
    pub fn instances(&self) -> Vec<EntityInstance> {
        self.entities
            .iter()
            .map(|pose| EntityInstance {
                position: [pose.x - self.camera_x, pose.y - pose.lift],
                scale: [pose.scale_x, pose.scale_y],
                depth: pose.depth_key,
                kind: pose.entity.instance_kind(),
                tint: pose.tint.unwrap_or(0xffffff),
                _pad: 0,
            })
            .collect()
    }
}

/// Colour band for the health readout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthBand {
    Healthy,
    Warning,
    Critical,
}

impl HealthBand {
    pub fn for_health(health: i32) -> Self {
        if health < 30 {
            HealthBand::Critical
        } else if health < 60 {
            HealthBand::Warning
        } else {
            HealthBand::Healthy
        }
    }

    /// Text colour (0xRRGGBB)
    pub fn color(&self) -> u32 {
        match self {
            HealthBand::Healthy => 0x00ff00,
            HealthBand::Warning => 0xffaa00,
            HealthBand::Critical => 0xff0000,
        }
    }
}

/// HUD readout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub health: i32,
    pub score: u64,
    /// None when colour bands are disabled
    pub band: Option<HealthBand>,
    pub outcome: Outcome,
}

impl HudSnapshot {
    pub fn capture(state: &GameState, settings: &Settings) -> Self {
        Self {
            health: state.player.health,
            score: state.score,
            band: settings
                .hud_color_bands
                .then(|| HealthBand::for_health(state.player.health)),
            outcome: state.outcome,
        }
    }

    pub fn health_label(&self) -> String {
        format!("HP: {}", self.health)
    }

    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }
}
