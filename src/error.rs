//! Error types for the simulation and configuration loading

use thiserror::Error;

/// Rejected simulation calls
///
/// A rejected call leaves all state exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimError {
    /// Elapsed time was negative, NaN, or infinite
    #[error("invalid frame delta: {0} (must be finite and >= 0)")]
    InvalidDelta(f32),
}

impl SimError {
    /// Check a frame delta before it reaches any accumulator
    pub fn check_delta(dt: f32) -> Result<(), SimError> {
        if dt.is_finite() && dt >= 0.0 {
            Ok(())
        } else {
            Err(SimError::InvalidDelta(dt))
        }
    }
}

/// Failures while loading a configuration bundle
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
