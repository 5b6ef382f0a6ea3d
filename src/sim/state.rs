//! Game state and core simulation types
//!
//! Everything a level instance owns lives in [`GameState`]. A restart builds a
//! fresh instance instead of resetting this one in place.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};

use super::collision::{Circle, Rect};
use super::level::{ItemKind, LevelCatalog};
use super::schedule::{Deferred, Scheduler};
use crate::consts::*;

new_key_type! {
    /// Stable handle for enemies; stale after the enemy is removed.
    pub struct EnemyId;
    /// Stable handle for pickups.
    pub struct ItemId;
}

/// Where the level instance stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    /// Player health reached zero
    GameOver,
    /// Player reached the exit zone
    LevelComplete,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::Playing
    }

    /// Banner text shown over the frozen scene
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Outcome::Playing => None,
            Outcome::GameOver => Some("GAME OVER"),
            Outcome::LevelComplete => Some("LEVEL COMPLETE!"),
        }
    }
}

/// External clock reading for one tick (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Clock {
    pub now: f64,
    pub delta: f64,
}

impl Clock {
    pub fn new(now: f64, delta: f64) -> Self {
        Self { now, delta }
    }
}

/// Things that happened during a tick, drained by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PunchStarted,
    EnemyHit { id: EnemyId, health: i32 },
    EnemyDefeated { id: EnemyId },
    PlayerDamaged { health: i32 },
    ItemCollected { id: ItemId, kind: ItemKind },
    /// Emitted exactly once per level instance
    Terminal { outcome: Outcome },
    /// The restart delay after the terminal outcome has elapsed
    RestartDue { outcome: Outcome },
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Ground position: x along the corridor, y on the depth axis
    pub pos: Vec2,
    /// x: walk/knockback speed, y: jump speed (units/s, negative is up)
    pub vel: Vec2,
    /// Height above the floor while jumping
    pub lift: f32,
    pub health: i32,
    pub climbing: bool,
    pub punching: bool,
    pub can_move: bool,
    /// Red tint after being struck
    pub hit_flash: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            lift: 0.0,
            health: PLAYER_MAX_HEALTH,
            climbing: false,
            punching: false,
            can_move: true,
            hit_flash: false,
        }
    }

    /// Collision box on the ground plane
    pub fn body(&self) -> Rect {
        Rect::around(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }

    /// Apply damage, flooring at zero. Returns the new health.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount).clamp(0, PLAYER_MAX_HEALTH);
        self.health
    }

    /// Restore health, capping at full. Returns the new health.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.health = (self.health + amount).clamp(0, PLAYER_MAX_HEALTH);
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// A melee enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: i32,
    /// Clock time of the last attack; 0 means "long ago"
    pub last_attack_ms: f64,
    /// Knockback velocity is active until the recover event fires
    pub knocked_back: bool,
    pub hit_flash: bool,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            health: ENEMY_HEALTH,
            last_attack_ms: 0.0,
            knocked_back: false,
            hit_flash: false,
        }
    }

    /// Apply damage, flooring at zero. Returns true when the enemy is dead.
    pub fn take_hit(&mut self, damage: i32) -> bool {
        self.health = (self.health - damage).max(0);
        self.health <= 0
    }

    pub fn attack_ready(&self, now: f64) -> bool {
        now - self.last_attack_ms > ENEMY_ATTACK_COOLDOWN_MS
    }
}

/// A one-shot pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub pos: Vec2,
    pub kind: ItemKind,
}

impl Item {
    pub fn shape(&self) -> Circle {
        Circle {
            center: self.pos,
            radius: ITEM_RADIUS,
        }
    }
}

/// Complete state of one level instance (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the level was generated from
    pub seed: u64,
    pub level: LevelCatalog,
    pub player: Player,
    /// Live enemies; dead ones are removed
    pub enemies: SlotMap<EnemyId, Enemy>,
    /// Uncollected items
    pub items: SlotMap<ItemId, Item>,
    pub score: u64,
    pub outcome: Outcome,
    /// Latest clock reading seen (ms, monotonic)
    pub now_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Horizontal scroll of the viewport
    pub camera_x: f32,
    pub scheduler: Scheduler,
    /// Enemies already struck by the current punch
    pub swing_hits: Vec<EnemyId>,
    /// Events produced since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a fresh level instance
    pub fn new(seed: u64) -> Self {
        Self::with_level(seed, LevelCatalog::corridor(seed))
    }

    /// Start a level instance from an explicit catalog
    pub fn with_level(seed: u64, level: LevelCatalog) -> Self {
        let mut enemies = SlotMap::with_key();
        for &pos in &level.enemy_spawns {
            enemies.insert(Enemy::new(pos));
        }
        let mut items = SlotMap::with_key();
        for &(pos, kind) in &level.item_spawns {
            items.insert(Item { pos, kind });
        }

        log::info!(
            "Level start (seed {}): {} enemies, {} items, {} ladders",
            seed,
            enemies.len(),
            items.len(),
            level.ladders.len()
        );

        Self {
            seed,
            player: Player::new(level.player_spawn),
            level,
            enemies,
            items,
            score: 0,
            outcome: Outcome::Playing,
            now_ms: 0.0,
            time_ticks: 0,
            camera_x: 0.0,
            scheduler: Scheduler::new(),
            swing_hits: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.outcome == Outcome::Playing
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move to a terminal outcome. Only the first call has any effect.
    pub fn finish(&mut self, outcome: Outcome) -> bool {
        if self.outcome.is_terminal() || !outcome.is_terminal() {
            return false;
        }

        self.outcome = outcome;
        self.player.can_move = false;
        self.player.vel = Vec2::ZERO;
        self.scheduler
            .schedule(self.now_ms + RESTART_DELAY_MS, Deferred::RestartDue);
        self.emit(GameEvent::Terminal { outcome });

        log::info!(
            "{:?} at tick {} (score {}, health {})",
            outcome,
            self.time_ticks,
            self.score,
            self.player.health
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_level() {
        let state = GameState::new(7);
        assert_eq!(state.player.pos, Vec2::new(100.0, 400.0));
        assert_eq!(state.player.health, 100);
        assert!(state.player.can_move);
        assert_eq!(state.enemies.len(), 5);
        assert_eq!(state.items.len(), 5);
        assert!(state.enemies.values().all(|e| e.health == 50));
        assert_eq!(state.outcome, Outcome::Playing);
    }

    #[test]
    fn test_player_health_clamps() {
        let mut player = Player::new(Vec2::new(0.0, 400.0));
        player.health = 90;
        assert_eq!(player.heal(25), 100);
        player.health = 5;
        assert_eq!(player.take_damage(10), 0);
        assert!(player.is_dead());
    }

    #[test]
    fn test_enemy_health_floors() {
        let mut enemy = Enemy::new(Vec2::ZERO);
        assert!(!enemy.take_hit(25));
        assert!(enemy.take_hit(40));
        assert_eq!(enemy.health, 0);
    }

    #[test]
    fn test_finish_is_one_way() {
        let mut state = GameState::new(1);
        assert!(state.finish(Outcome::GameOver));
        assert!(!state.finish(Outcome::LevelComplete));
        assert!(!state.finish(Outcome::GameOver));
        assert_eq!(state.outcome, Outcome::GameOver);
        assert!(!state.player.can_move);

        let terminals = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::Terminal { .. }))
            .count();
        assert_eq!(terminals, 1);
        assert!(state.scheduler.is_pending(Deferred::RestartDue));
    }

    #[test]
    fn test_finish_rejects_playing() {
        let mut state = GameState::new(1);
        assert!(!state.finish(Outcome::Playing));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_banner() {
        assert_eq!(Outcome::Playing.banner(), None);
        assert_eq!(Outcome::GameOver.banner(), Some("GAME OVER"));
        assert_eq!(Outcome::LevelComplete.banner(), Some("LEVEL COMPLETE!"));
    }
}
