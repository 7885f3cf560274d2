//! Nova Strike headless demo driver
//!
//! Stands in for a presentation layer: runs a scripted session at a fixed
//! 60 Hz timestep, steering with a simple autopilot, and logs the event
//! stream. Pass a seed as the first argument to replay a session.

use nova_strike::consts::{BOUNDS_X, BOUNDS_Y, SIM_DT};
use nova_strike::persistence::JsonFileStore;
use nova_strike::sim::{FrameInput, Game, GameEvent, GamePhase};

/// Ten simulated minutes, in frames
const MAX_FRAMES: u64 = 60 * 600;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);

    let store = JsonFileStore::open("highscore.json");
    let mut game = Game::new(seed, Box::new(store));
    log::info!("Session started with seed {seed}");

    let mut frame = 0u64;
    while game.state.phase != GamePhase::GameOver && frame < MAX_FRAMES {
        let input = autopilot(&game, frame);
        for event in game.advance(SIM_DT, &input) {
            log_event(&event);
        }
        frame += 1;
    }

    println!(
        "seed {}: {} points (best {}), reached stage {} in {:.1}s",
        seed,
        game.ledger.score(),
        game.ledger.high_score(),
        game.state.stage,
        frame as f32 * SIM_DT,
    );
}

/// Chase the closest enemy laterally so shots connect; weave when the field
/// is empty. Always firing.
fn autopilot(game: &Game, frame: u64) -> FrameInput {
    let t = frame as f32 * SIM_DT;
    let target = game
        .state
        .enemies
        .iter()
        .filter(|e| e.active)
        .max_by(|a, b| {
            a.pos
                .z
                .partial_cmp(&b.pos.z)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match target {
        Some(enemy) => FrameInput {
            move_x: (enemy.pos.x / BOUNDS_X).clamp(-1.0, 1.0),
            move_y: (enemy.pos.y / BOUNDS_Y).clamp(-1.0, 1.0),
            shoot: true,
        },
        None => FrameInput {
            move_x: (t * 0.7).sin(),
            move_y: (t * 0.4).sin() * 0.5,
            shoot: true,
        },
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::StageClear {
            stage,
            score,
            bonus,
        } => log::info!("stage {stage} clear: {score} points (+{bonus} bonus)"),
        GameEvent::StageChanged { stage } => log::info!("entering stage {stage}"),
        GameEvent::GameOver { score, stage } => {
            log::info!("game over: {score} points at stage {stage}")
        }
        GameEvent::HpChanged { hp } => log::info!("hp {hp}"),
        GameEvent::ScoreChanged { score } => log::debug!("score {score}"),
        GameEvent::EntitySpawned { id, kind, pos } => {
            log::trace!("spawn #{id} {kind:?} at {pos}")
        }
        GameEvent::EntityDestroyed { id } => log::trace!("despawn #{id}"),
    }
}
