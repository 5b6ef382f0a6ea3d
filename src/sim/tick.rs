//! Per-tick simulation pipeline
//!
//! Advances one level instance by one externally clocked step. The stage
//! order is fixed: later stages read what earlier ones wrote (combat runs on
//! the ladder-resolved position, enemies act after knockback and deaths).

use serde::{Deserialize, Serialize};

use super::collision::rect_rect_overlap;
use super::schedule::Deferred;
use super::state::{Clock, GameEvent, GameState, Outcome};
use super::{combat, enemy_ai, items, movement, view};

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held: walk left (wins over right)
    pub left: bool,
    /// Held: walk right
    pub right: bool,
    /// Held: step away from the camera / climb up (wins over down)
    pub up: bool,
    /// Held: step toward the camera / climb down
    pub down: bool,
    /// Pressed this tick (edge)
    pub jump: bool,
    /// Pressed this tick (edge)
    pub punch: bool,
}

/// Turns held jump/punch keys into press edges for drivers that only see
/// key state.
#[derive(Debug, Clone, Default)]
pub struct InputEdges {
    jump_held: bool,
    punch_held: bool,
}

impl InputEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// `held.jump` / `held.punch` are key states; the result carries edges
    pub fn sample(&mut self, held: &TickInput) -> TickInput {
        let input = TickInput {
            jump: held.jump && !self.jump_held,
            punch: held.punch && !self.punch_held,
            ..*held
        };
        self.jump_held = held.jump;
        self.punch_held = held.punch;
        input
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, clock: Clock) {
    state.events.clear();
    let dt = advance_clock(state, clock);
    state.time_ticks += 1;

    for effect in state.scheduler.drain_due(state.now_ms) {
        apply_deferred(state, effect);
    }

    // A finished level is frozen; only deferred effects keep draining
    if !state.is_playing() {
        return;
    }

    movement::steer(&mut state.player, input);
    movement::resolve_ladders(&mut state.player, &state.level.ladders, input);
    movement::jump(&mut state.player, input);
    movement::integrate_player(&mut state.player, &state.level.bounds, dt);
    for enemy in state.enemies.values_mut() {
        movement::integrate_enemy(enemy, &state.level.bounds, dt);
    }

    combat::start_punch(state, input);
    combat::resolve_punch(state);

    enemy_ai::update_enemies(state);

    if state.is_playing() {
        items::collect_items(state);
        check_exit(state);
    }

    view::update_camera(state);
}

/// Take the external clock reading. Time never runs backwards and deltas
/// are never negative. Returns the delta to integrate with.
fn advance_clock(state: &mut GameState, clock: Clock) -> f64 {
    if !clock.now.is_finite() {
        log::warn!("Clock reading {} is not finite, holding time", clock.now);
    } else if clock.now < state.now_ms {
        log::warn!(
            "Clock went backwards ({} < {}), holding time",
            clock.now,
            state.now_ms
        );
    } else {
        state.now_ms = clock.now;
    }

    if clock.delta.is_finite() { clock.delta.max(0.0) } else { 0.0 }
}

fn apply_deferred(state: &mut GameState, effect: Deferred) {
    match effect {
        Deferred::PunchUnlock => combat::end_punch(state),
        Deferred::PlayerRecover => state.player.hit_flash = false,
        Deferred::EnemyRecover(id) => combat::recover_enemy(state, id),
        Deferred::RestartDue => {
            log::info!("Restart due after {:?}", state.outcome);
            state.emit(GameEvent::RestartDue {
                outcome: state.outcome,
            });
        }
    }
}

fn check_exit(state: &mut GameState) {
    let Some(exit) = state.level.exit_zone() else {
        return;
    };
    if rect_rect_overlap(&state.player.body(), &exit) {
        state.finish(Outcome::LevelComplete);
    }
}
