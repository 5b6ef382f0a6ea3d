//! Enemy behaviour: chase the player along the corridor, drift toward the
//! player's depth lane, and strike on a cooldown when in reach.

use serde::{Deserialize, Serialize};

use super::schedule::Deferred;
use super::state::{EnemyId, GameEvent, GameState, Outcome};
use crate::clamp_depth;
use crate::consts::*;

/// What an enemy is doing this tick, derived from distance and cooldown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyMode {
    /// Player out of sight
    Idle,
    /// Closing the gap
    Chasing,
    /// In reach with the cooldown elapsed
    Attacking,
    /// In reach, waiting on the cooldown
    Cooling,
}

pub fn classify(distance: f32, attack_ready: bool) -> EnemyMode {
    if distance >= ENEMY_SIGHT_RANGE {
        EnemyMode::Idle
    } else if distance >= ENEMY_ATTACK_RANGE {
        EnemyMode::Chasing
    } else if attack_ready {
        EnemyMode::Attacking
    } else {
        EnemyMode::Cooling
    }
}

/// Run every live enemy for one tick.
///
/// Stops as soon as the player is defeated so no enemy acts on a finished
/// level.
pub fn update_enemies(state: &mut GameState) {
    let now = state.now_ms;
    let ids: Vec<EnemyId> = state.enemies.keys().collect();

    for id in ids {
        if !state.is_playing() {
            break;
        }

        let target = state.player.pos;
        let Some(enemy) = state.enemies.get_mut(id) else {
            continue;
        };

        let delta = target - enemy.pos;
        let mode = classify(delta.length(), enemy.attack_ready(now));

        if mode == EnemyMode::Idle {
            if !enemy.knocked_back {
                enemy.vel.x = 0.0;
            }
            continue;
        }

        // Knockback owns the horizontal velocity until it is cleared
        if !enemy.knocked_back {
            enemy.vel.x = if delta.x.abs() > ENEMY_STOP_DX {
                ENEMY_CHASE_SPEED * delta.x.signum()
            } else {
                0.0
            };
        }

        if delta.y.abs() > ENEMY_ALIGN_DY {
            enemy.pos.y = clamp_depth(enemy.pos.y + ENEMY_DEPTH_STEP * delta.y.signum());
        }

        if mode == EnemyMode::Attacking {
            enemy.last_attack_ms = now;
            strike_player(state);
        }
    }
}

fn strike_player(state: &mut GameState) {
    let health = state.player.take_damage(ENEMY_DAMAGE);
    state.player.hit_flash = true;
    state
        .scheduler
        .schedule(state.now_ms + HIT_FLASH_MS, Deferred::PlayerRecover);
    state.emit(GameEvent::PlayerDamaged { health });

    if state.player.is_dead() {
        state.finish(Outcome::GameOver);
    }
}
