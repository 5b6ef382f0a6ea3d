//! Corridor Brawler headless driver
//!
//! Runs one level with a scripted player at a fixed 60 Hz clock and logs
//! what happens. Usage: `corridor-brawler [settings.json]`

use std::path::Path;

use corridor_brawler::Settings;
use corridor_brawler::consts::FRAME_MS;
use corridor_brawler::sim::{
    Clock, GameEvent, GameState, HudSnapshot, InputEdges, RenderSnapshot, TickInput, tick,
};

/// Give up after this much game time (ms)
const MAX_RUN_MS: f64 = 120_000.0;

fn main() {
    env_logger::init();
    log::info!("Corridor Brawler (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let seed = 0x5eed;
    let mut state = GameState::new(seed);
    let mut edges = InputEdges::new();
    let mut now = 0.0;
    let mut frame: u64 = 0;

    while now < MAX_RUN_MS {
        now += FRAME_MS;
        frame += 1;

        let held = autopilot(&state, frame);
        let input = edges.sample(&held);
        tick(&mut state, &input, Clock::new(now, FRAME_MS));

        let mut restart = false;
        for event in state.drain_events() {
            if settings.log_events {
                log::info!("[{:>6.0} ms] {:?}", now, event);
            }
            match event {
                GameEvent::Terminal { outcome } => {
                    log::info!("{}", outcome.banner().unwrap_or_default());
                }
                GameEvent::RestartDue { .. } => restart = true,
                _ => {}
            }
        }

        if frame % 60 == 0 {
            let hud = HudSnapshot::capture(&state, &settings);
            let view = RenderSnapshot::capture(&state, &settings);
            log::info!(
                "{} {} | x={:.0} y={:.0} camera={:.0} entities={}",
                hud.health_label(),
                hud.score_label(),
                state.player.pos.x,
                state.player.pos.y,
                view.camera_x,
                view.entities.len()
            );
        }

        if restart {
            break;
        }
    }

    let hud = HudSnapshot::capture(&state, &settings);
    log::info!(
        "Finished: {:?} after {:.1}s, {} {}",
        state.outcome,
        now / 1000.0,
        hud.health_label(),
        hud.score_label()
    );
}

/// Walk right, line up with the nearest enemy ahead and punch it
fn autopilot(state: &GameState, frame: u64) -> TickInput {
    let player = state.player.pos;
    let nearest = state
        .enemies
        .values()
        .map(|e| e.pos)
        .filter(|pos| (pos.x - player.x).abs() < 150.0)
        .min_by(|a, b| a.distance(player).total_cmp(&b.distance(player)));

    let Some(target) = nearest else {
        return TickInput {
            right: true,
            ..Default::default()
        };
    };

    let dy = target.y - player.y;
    TickInput {
        right: target.x - player.x > 40.0,
        up: dy < -10.0,
        down: dy > 10.0,
        // Release every other frame so the press edges keep coming
        punch: player.distance(target) < 55.0 && frame % 2 == 0,
        ..Default::default()
    }
}
