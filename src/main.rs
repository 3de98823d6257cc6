//! Alien Invaders headless host
//!
//! Runs the session at a fixed 60 Hz with a simple autopilot in place of a
//! keyboard, logging phase changes and sounds. Useful for soak-testing the
//! simulation without a display.
//!
//! Usage: `alien-invaders [config.json] [seed]`

use anyhow::{Context, Result};

use alien_invaders::audio::{AudioManager, LogSink};
use alien_invaders::renderer::Scene;
use alien_invaders::{Config, Key, KeyState, Phase, Session};

/// Frame time of the host loop
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after ten simulated minutes
const MAX_FRAMES: u64 = 60 * 60 * 10;

/// Pick keys for this frame: steer under the nearest front-line alien and shoot
fn autopilot(session: &Session, frame: u64) -> KeyState {
    let mut keys = KeyState::new();
    match session.phase() {
        // Tap 's' on alternate frames so the edge trigger sees a fresh press
        Phase::Inactive if frame % 2 == 0 => keys.press(Key::Start),
        Phase::Active => {
            let Some(wave) = session.wave() else {
                return keys;
            };
            let ship_x = wave.ship().pos.x;
            let target = wave
                .formation()
                .front_line()
                .into_iter()
                .map(|alien| alien.pos.x)
                .min_by(|a, b| {
                    (a - ship_x)
                        .abs()
                        .partial_cmp(&(b - ship_x).abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            if let Some(x) = target {
                let tolerance = wave.config().ship_speed;
                if x > ship_x + tolerance {
                    keys.press(Key::Right);
                } else if x < ship_x - tolerance {
                    keys.press(Key::Left);
                } else {
                    keys.press(Key::Fire);
                }
            }
        }
        _ => {}
    }
    keys
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::load(&path).with_context(|| format!("loading {path}"))?,
        None => Config::default(),
    };
    let seed = match args.next() {
        Some(s) => s.parse::<u64>().with_context(|| format!("invalid seed '{s}'"))?,
        None => rand::random(),
    };
    log::info!("Starting headless run with seed {}", seed);

    let mut session = Session::with_seed(config, seed);
    let mut audio = AudioManager::new(LogSink);
    let mut vertex_bytes = 0usize;

    for frame in 0..MAX_FRAMES {
        let keys = autopilot(&session, frame);
        session.update(&keys, FRAME_DT)?;
        audio.play_events(&session.drain_events());

        let scene = Scene::build(&session);
        vertex_bytes = vertex_bytes.max(scene.vertex_bytes().len());

        if session.phase() == Phase::Complete {
            log::info!(
                "Finished after {} frames: {} (lives: {})",
                frame,
                session.message().unwrap_or_default(),
                session.lives().unwrap_or(0)
            );
            log::info!("Peak vertex buffer: {} bytes", vertex_bytes);
            return Ok(());
        }
    }

    log::warn!("Stopped after {} frames without a result", MAX_FRAMES);
    Ok(())
}
