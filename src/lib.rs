//! Corridor Brawler - a pseudo-3D side-scrolling brawler core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, combat, AI, game state)
//! - `settings`: Presentation preferences loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal frame step for drivers that have no clock of their own (ms)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// World extents
    pub const WORLD_WIDTH: f32 = 3000.0;
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    /// Depth band: y is reinterpreted as near/far distance
    pub const DEPTH_MIN: f32 = 200.0;
    pub const DEPTH_MAX: f32 = 500.0;

    /// Perspective scale at the far and near edges of the depth band
    pub const SCALE_FAR: f32 = 0.6;
    pub const SCALE_NEAR: f32 = 1.0;
    /// Horizontal stretch of the player pose mid-punch
    pub const PUNCH_STRETCH: f32 = 1.2;

    /// Player body
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Horizontal walk speed (units/s)
    pub const WALK_SPEED: f32 = 200.0;
    /// Depth step per tick while walking up/down the corridor
    pub const DEPTH_STEP: f32 = 2.0;
    /// Upward impulse applied on jump (units/s, negative is up)
    pub const JUMP_VELOCITY: f32 = -300.0;
    /// Pull back to the floor while airborne (units/s²)
    pub const GRAVITY: f32 = 800.0;

    /// Ladders
    pub const LADDER_REACH: f32 = 30.0;
    pub const CLIMB_STEP: f32 = 3.0;

    /// Punch
    pub const PUNCH_DURATION_MS: f64 = 200.0;
    pub const PUNCH_RANGE: f32 = 60.0;
    pub const PUNCH_DAMAGE: i32 = 25;
    pub const KNOCKBACK_SPEED: f32 = 300.0;
    pub const HIT_FLASH_MS: f64 = 100.0;
    pub const KILL_SCORE: u64 = 100;

    /// Enemies
    pub const ENEMY_HEALTH: i32 = 50;
    pub const ENEMY_SIGHT_RANGE: f32 = 300.0;
    pub const ENEMY_ATTACK_RANGE: f32 = 60.0;
    pub const ENEMY_CHASE_SPEED: f32 = 80.0;
    /// Horizontal gap under which the enemy stops walking
    pub const ENEMY_STOP_DX: f32 = 50.0;
    /// Depth gap under which the enemy stops aligning
    pub const ENEMY_ALIGN_DY: f32 = 20.0;
    pub const ENEMY_DEPTH_STEP: f32 = 1.5;
    pub const ENEMY_ATTACK_COOLDOWN_MS: f64 = 1500.0;
    pub const ENEMY_DAMAGE: i32 = 10;

    /// Items
    pub const ITEM_RADIUS: f32 = 12.0;
    pub const HEALTH_PACK_RESTORE: i32 = 25;
    pub const COIN_SCORE: u64 = 10;

    /// Delay between a terminal outcome and the expected scene restart
    pub const RESTART_DELAY_MS: f64 = 2000.0;

    /// Camera lead: the player is kept this far from the left edge
    pub const CAMERA_LEAD: f32 = 400.0;
}

/// Clamp a depth coordinate into the depth band
#[inline]
pub fn clamp_depth(y: f32) -> f32 {
    y.clamp(consts::DEPTH_MIN, consts::DEPTH_MAX)
}

