//! Punching: lockout window, hit detection, knockback and enemy deaths

use super::collision::within_range;
use super::schedule::Deferred;
use super::state::{EnemyId, GameEvent, GameState};
use super::tick::TickInput;
use crate::consts::*;

/// Start a punch on the press edge. Ignored while a punch is already
/// running or the player is locked out.
pub fn start_punch(state: &mut GameState, input: &TickInput) -> bool {
    let player = &mut state.player;
    if !input.punch || player.punching || !player.can_move {
        return false;
    }

    player.punching = true;
    player.can_move = false;
    state.swing_hits.clear();
    state
        .scheduler
        .schedule(state.now_ms + PUNCH_DURATION_MS, Deferred::PunchUnlock);
    state.emit(GameEvent::PunchStarted);
    log::debug!("Punch at ({:.0}, {:.0})", state.player.pos.x, state.player.pos.y);
    true
}

/// Land the active punch on every enemy in reach.
///
/// Each enemy can be struck at most once per swing. Enemies brought to zero
/// health are removed and pay out once, after the scan.
pub fn resolve_punch(state: &mut GameState) {
    if !state.player.punching {
        return;
    }

    let origin = state.player.pos;
    let now = state.now_ms;
    let mut struck: Vec<(EnemyId, i32)> = Vec::new();

    for (id, enemy) in state.enemies.iter_mut() {
        if state.swing_hits.contains(&id) || !within_range(origin, enemy.pos, PUNCH_RANGE) {
            continue;
        }

        enemy.take_hit(PUNCH_DAMAGE);
        let direction = if enemy.pos.x > origin.x { 1.0 } else { -1.0 };
        enemy.vel.x = direction * KNOCKBACK_SPEED;
        enemy.knocked_back = true;
        enemy.hit_flash = true;

        state.swing_hits.push(id);
        state
            .scheduler
            .schedule(now + HIT_FLASH_MS, Deferred::EnemyRecover(id));
        struck.push((id, enemy.health));
    }

    for (id, health) in struck {
        state.emit(GameEvent::EnemyHit { id, health });
        if health <= 0 && state.enemies.remove(id).is_some() {
            state.score += KILL_SCORE;
            state.emit(GameEvent::EnemyDefeated { id });
            log::debug!("Enemy defeated, score {}", state.score);
        }
    }
}

/// Lockout over: both flags flip together. A terminal outcome keeps the
/// player frozen.
pub fn end_punch(state: &mut GameState) {
    let player = &mut state.player;
    player.punching = false;
    player.can_move = !state.outcome.is_terminal();
}

/// Clear knockback and tint on a struck enemy, if it is still alive
pub fn recover_enemy(state: &mut GameState, id: EnemyId) {
    if let Some(enemy) = state.enemies.get_mut(id) {
        enemy.hit_flash = false;
        enemy.knocked_back = false;
        enemy.vel.x = 0.0;
    }
}
