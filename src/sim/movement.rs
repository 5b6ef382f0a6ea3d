//! Player locomotion: walking, depth stepping, jumping and ladders
//!
//! Horizontal motion is a velocity (units/s) integrated with the frame delta.
//! Depth and ladder motion are fixed per-tick position steps.

use super::level::{Ladder, WorldBounds, ladder_in_reach};
use super::state::{Enemy, Player};
use super::tick::TickInput;
use crate::clamp_depth;
use crate::consts::*;

/// Walk and depth-step from held intents. Does nothing during lockout.
pub fn steer(player: &mut Player, input: &TickInput) {
    if !player.can_move {
        return;
    }

    // Left wins when both are held
    player.vel.x = if input.left {
        -WALK_SPEED
    } else if input.right {
        WALK_SPEED
    } else {
        0.0
    };

    if !player.climbing {
        if input.up {
            player.pos.y = clamp_depth(player.pos.y - DEPTH_STEP);
        } else if input.down {
            player.pos.y = clamp_depth(player.pos.y + DEPTH_STEP);
        }
    }
}

/// Re-evaluate climbing against every ladder and apply the climb step.
///
/// The first ladder in catalog order that is within reach wins. The flag is
/// recomputed from scratch each tick.
pub fn resolve_ladders(player: &mut Player, ladders: &[Ladder], input: &TickInput) {
    let Some(ladder) = ladder_in_reach(ladders, player.pos) else {
        player.climbing = false;
        return;
    };

    player.climbing = true;
    // The ladder holds the player: no fall, no lift
    player.vel.y = 0.0;
    player.lift = 0.0;

    if !player.can_move {
        return;
    }

    if input.up {
        player.pos.y = clamp_depth((player.pos.y - CLIMB_STEP).max(ladder.top_y));
    } else if input.down {
        player.pos.y = clamp_depth((player.pos.y + CLIMB_STEP).min(ladder.bottom_y()));
    }
}

/// Jump on the press edge; never from a ladder
pub fn jump(player: &mut Player, input: &TickInput) {
    if input.jump && player.can_move && !player.climbing {
        player.vel.y = JUMP_VELOCITY;
    }
}

/// Advance the player's velocity-driven motion by `dt_ms`
pub fn integrate_player(player: &mut Player, bounds: &WorldBounds, dt_ms: f64) {
    let dt = (dt_ms / 1000.0) as f32;

    player.pos.x = (player.pos.x + player.vel.x * dt).clamp(0.0, bounds.width);
    player.pos.y = player.pos.y.clamp(bounds.depth_min, bounds.depth_max);

    if player.climbing || (player.lift <= 0.0 && player.vel.y == 0.0) {
        return;
    }

    // Jump arc: negative vel.y raises the lift
    player.lift -= player.vel.y * dt;
    player.vel.y += GRAVITY * dt;
    if player.lift <= 0.0 {
        player.lift = 0.0;
        player.vel.y = 0.0;
    }
}

/// Advance an enemy's horizontal motion by `dt_ms`
pub fn integrate_enemy(enemy: &mut Enemy, bounds: &WorldBounds, dt_ms: f64) {
    let dt = (dt_ms / 1000.0) as f32;
    enemy.pos.x = (enemy.pos.x + enemy.vel.x * dt).clamp(0.0, bounds.width);
}
