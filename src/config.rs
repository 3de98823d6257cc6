//! Game configuration
//!
//! Loaded once before the first wave is built, then shared read-only.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable constants for a game
///
/// Missing fields in a JSON bundle fall back to the defaults in [`crate::consts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Board ===
    pub game_width: f32,
    pub game_height: f32,
    /// y coordinate of the defense line
    pub defense_line: f32,

    // === Ship ===
    pub ship_width: f32,
    pub ship_height: f32,
    /// y of the ship's bottom edge
    pub ship_bottom: f32,
    /// Pixels per frame
    pub ship_speed: f32,
    pub ship_lives: u32,

    // === Formation ===
    pub alien_rows: usize,
    pub aliens_in_row: usize,
    pub alien_width: f32,
    pub alien_height: f32,
    pub alien_h_sep: f32,
    pub alien_v_sep: f32,
    pub alien_ceiling: f32,
    pub alien_kinds: u8,
    pub alien_h_walk: f32,
    pub alien_v_walk: f32,
    /// Seconds between formation steps
    pub alien_step_interval: f32,

    // === Bolts ===
    pub bolt_width: f32,
    pub bolt_height: f32,
    /// Pixels per frame
    pub bolt_speed: f32,
    /// Alien shots happen every 1..=bolt_rate formation steps
    pub bolt_rate: u32,

    // === Session ===
    /// Pause the session whenever the ship loses a life but survives
    pub pause_on_hit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game_width: GAME_WIDTH,
            game_height: GAME_HEIGHT,
            defense_line: DEFENSE_LINE,

            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_bottom: SHIP_BOTTOM,
            ship_speed: SHIP_MOVEMENT,
            ship_lives: SHIP_LIVES,

            alien_rows: ALIEN_ROWS,
            aliens_in_row: ALIENS_IN_ROW,
            alien_width: ALIEN_WIDTH,
            alien_height: ALIEN_HEIGHT,
            alien_h_sep: ALIEN_H_SEP,
            alien_v_sep: ALIEN_V_SEP,
            alien_ceiling: ALIEN_CEILING,
            alien_kinds: ALIEN_KINDS,
            alien_h_walk: ALIEN_H_WALK,
            alien_v_walk: ALIEN_V_WALK,
            alien_step_interval: ALIEN_SPEED,

            bolt_width: BOLT_WIDTH,
            bolt_height: BOLT_HEIGHT,
            bolt_speed: BOLT_SPEED,
            bolt_rate: BOLT_RATE,

            pause_on_hit: false,
        }
    }
}

impl Config {
    /// Parse and validate a JSON bundle
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON bundle from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject bundles the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(msg.to_string()))
        };

        if self.alien_rows == 0 || self.aliens_in_row == 0 {
            return invalid("formation must have at least one row and column");
        }
        if self.alien_kinds == 0 {
            return invalid("alien_kinds must be at least 1");
        }
        if self.bolt_rate == 0 {
            return invalid("bolt_rate must be at least 1");
        }
        let positive = [
            ("game_width", self.game_width),
            ("game_height", self.game_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
            ("bolt_width", self.bolt_width),
            ("bolt_height", self.bolt_height),
            ("bolt_speed", self.bolt_speed),
            ("alien_step_interval", self.alien_step_interval),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be > 0, got {value}")));
            }
        }
        if !(0.0..self.game_height).contains(&self.defense_line) {
            return invalid("defense_line must lie inside the board");
        }
        Ok(())
    }

    /// An alien whose centre is at or below this y has breached the defenses
    #[inline]
    pub fn breach_line(&self) -> f32 {
        self.defense_line + self.alien_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ship_lives, 3);
        assert_eq!(config.alien_rows * config.aliens_in_row, 60);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{ "alien_rows": 2, "bolt_rate": 1 }"#).unwrap();
        assert_eq!(config.alien_rows, 2);
        assert_eq!(config.bolt_rate, 1);
        assert_eq!(config.game_width, GAME_WIDTH);
    }

    #[test]
    fn test_rejects_invalid_bundles() {
        assert!(matches!(
            Config::from_json(r#"{ "aliens_in_row": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "bolt_speed": -1.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "defense_line": 9000.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
