//! Alien Invaders - a single-wave arcade combat simulation
//!
//! Core modules:
//! - `sim`: Wave simulation (ship, formation, bolts, collisions)
//! - `session`: Phase state machine driven by edge-triggered keys
//! - `input`: Keyboard abstraction consumed by the core
//! - `config`: Tunable constants, loadable from JSON
//! - `renderer`: Read-only scene builder (vertices + labels)
//! - `audio`: Sound triggers for game events

pub mod audio;
pub mod config;
pub mod error;
pub mod input;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::Config;
pub use error::{ConfigError, SimError};
pub use input::{InputState, Key, KeyState};
pub use session::{Outcome, Phase, Session};

/// Default game configuration constants
pub mod consts {
    /// Board dimensions
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 700.0;

    /// Ship geometry (the ship's bottom edge sits at SHIP_BOTTOM)
    pub const SHIP_WIDTH: f32 = 44.0;
    pub const SHIP_HEIGHT: f32 = 44.0;
    pub const SHIP_BOTTOM: f32 = 32.0;
    /// Horizontal pixels per frame while a direction key is held
    pub const SHIP_MOVEMENT: f32 = 5.0;
    pub const SHIP_LIVES: u32 = 3;

    /// Aliens below this y have breached the defenses
    pub const DEFENSE_LINE: f32 = 100.0;

    /// Alien geometry
    pub const ALIEN_WIDTH: f32 = 33.0;
    pub const ALIEN_HEIGHT: f32 = 33.0;
    pub const ALIEN_H_SEP: f32 = 16.0;
    pub const ALIEN_V_SEP: f32 = 16.0;
    /// Gap between the top of the board and the top row
    pub const ALIEN_CEILING: f32 = 100.0;
    pub const ALIEN_ROWS: usize = 5;
    pub const ALIENS_IN_ROW: usize = 12;
    /// Number of alien sprites; the kind cycles every two rows
    pub const ALIEN_KINDS: u8 = 3;

    /// Formation walk per step
    pub const ALIEN_H_WALK: f32 = ALIEN_WIDTH / 4.0;
    pub const ALIEN_V_WALK: f32 = ALIEN_HEIGHT / 2.0;
    /// Seconds between formation steps
    pub const ALIEN_SPEED: f32 = 1.0;

    /// Bolt geometry and speed (pixels per frame)
    pub const BOLT_WIDTH: f32 = 4.0;
    pub const BOLT_HEIGHT: f32 = 16.0;
    pub const BOLT_SPEED: f32 = 10.0;
    /// Upper bound on formation steps between alien shots
    pub const BOLT_RATE: u32 = 5;
}

/// Wrap a horizontal coordinate into `[0, width)`
#[inline]
pub fn wrap_x(x: f32, width: f32) -> f32 {
    let wrapped = x.rem_euclid(width);
    // rem_euclid can round up to exactly `width` for tiny negative inputs
    if wrapped >= width { 0.0 } else { wrapped }
}
