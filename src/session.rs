//! Session state machine
//!
//! Interprets edge-triggered keys to move between game phases and owns the
//! [`Wave`] while a game is in progress. Presentation (banner text, overlays)
//! is derived from [`Session::phase`] at draw time and never stored here.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::SimError;
use crate::input::{InputState, Key};
use crate::sim::{GameEvent, Wave};

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to press start
    Inactive,
    /// A fresh wave was built; becomes Active next frame
    NewWave,
    /// Normal gameplay
    Active,
    /// Wave frozen, still visible
    Paused,
    /// Resuming; becomes Active next frame
    Continue,
    /// Wave over, won or lost
    Complete,
}

/// Something that can move the session to another phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A key was pressed this frame (edge-triggered)
    Press(Key),
    /// Unconditional next-frame progression
    Advance,
    /// The wave reached a terminal state
    WaveOver,
    /// The ship lost a life but survived
    ShipHit,
}

impl Phase {
    /// Transition table; `None` means the trigger is ignored in this phase
    pub fn transition(self, trigger: Trigger) -> Option<Phase> {
        use Phase::*;
        use Trigger::*;

        match (self, trigger) {
            (Inactive, Press(Key::Start)) => Some(NewWave),
            (NewWave, Advance) => Some(Active),
            (Active, Press(Key::Pause)) => Some(Paused),
            (Active, WaveOver) => Some(Complete),
            (Active, ShipHit) => Some(Paused),
            (Paused, Press(Key::Continue)) => Some(Continue),
            (Continue, Advance) => Some(Active),
            (Complete, Press(Key::Start)) => Some(NewWave),
            _ => None,
        }
    }

    /// Whether a wave exists in this phase
    pub fn has_wave(self) -> bool {
        self != Phase::Inactive
    }
}

/// How a completed wave ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Keys that can trigger a phase change, in priority order
const PHASE_KEYS: [Key; 3] = [Key::Start, Key::Pause, Key::Continue];

/// The game session
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    phase: Phase,
    /// Present iff `phase != Inactive`
    wave: Option<Wave>,
    /// Held-key count seen on the previous frame
    last_key_count: usize,
    outcome: Option<Outcome>,
    /// Base seed for reproducible waves (entropy when `None`)
    seed: Option<u64>,
    waves_started: u64,
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            phase: Phase::Inactive,
            wave: None,
            last_key_count: 0,
            outcome: None,
            seed: None,
            waves_started: 0,
            events: Vec::new(),
        }
    }

    /// Session whose waves are seeded from `seed` (one derived seed per wave)
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(config)
        }
    }

    /// Advance one frame
    ///
    /// While Active the wave is updated with the same input; in every other
    /// phase the wave is left untouched.
    pub fn update(&mut self, input: &dyn InputState, dt: f32) -> Result<(), SimError> {
        if let Err(err) = SimError::check_delta(dt) {
            log::warn!("Rejected frame: {}", err);
            return Err(err);
        }

        let pressed = self.pressed_key(input);

        match self.phase {
            Phase::Inactive | Phase::Paused | Phase::Complete => {
                if let Some(key) = pressed {
                    self.fire(Trigger::Press(key));
                }
            }
            Phase::NewWave | Phase::Continue => {
                self.fire(Trigger::Advance);
            }
            Phase::Active => self.update_active(input, pressed, dt)?,
        }

        Ok(())
    }

    fn update_active(
        &mut self,
        input: &dyn InputState,
        pressed: Option<Key>,
        dt: f32,
    ) -> Result<(), SimError> {
        let Some(wave) = self.wave.as_ref() else {
            return Ok(());
        };

        if wave.is_game_over() {
            self.fire(Trigger::WaveOver);
            return Ok(());
        }
        if let Some(key) = pressed {
            if self.fire(Trigger::Press(key)) {
                return Ok(());
            }
        }

        let Some(wave) = self.wave.as_mut() else {
            return Ok(());
        };
        let lives_before = wave.lives();
        wave.update(input, dt)?;
        self.events.extend(wave.drain_events());

        let lives = wave.lives();
        if self.config.pause_on_hit && lives < lives_before && lives > 0 {
            self.fire(Trigger::ShipHit);
        }
        Ok(())
    }

    /// The phase key pressed this frame, if the held-key count just rose from zero
    fn pressed_key(&mut self, input: &dyn InputState) -> Option<Key> {
        let count = input.key_count();
        let edge = count > 0 && self.last_key_count == 0;
        self.last_key_count = count;
        if !edge {
            return None;
        }
        PHASE_KEYS.into_iter().find(|&key| input.is_key_down(key))
    }

    /// Apply a trigger; returns true if the phase changed
    fn fire(&mut self, trigger: Trigger) -> bool {
        let Some(next) = self.phase.transition(trigger) else {
            return false;
        };
        log::info!("Phase {:?} -> {:?} ({:?})", self.phase, next, trigger);
        self.enter(next);
        true
    }

    fn enter(&mut self, next: Phase) {
        match next {
            Phase::NewWave => {
                let wave = match self.seed {
                    Some(seed) => Wave::with_seed(&self.config, seed.wrapping_add(self.waves_started)),
                    None => Wave::new(&self.config),
                };
                self.waves_started += 1;
                self.wave = Some(wave);
                self.outcome = None;
                self.events.clear();
            }
            Phase::Complete => {
                let lives = self.lives().unwrap_or(0);
                let outcome = if lives > 0 { Outcome::Won } else { Outcome::Lost };
                log::info!("Wave complete: {:?} with {} lives", outcome, lives);
                self.outcome = Some(outcome);
            }
            Phase::Inactive => self.wave = None,
            Phase::Active | Phase::Paused | Phase::Continue => {}
        }
        self.phase = next;
        debug_assert_eq!(self.phase.has_wave(), self.wave.is_some());
    }

    // === Queries ===

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn wave(&self) -> Option<&Wave> {
        self.wave.as_ref()
    }

    /// Direct wave access for scripted scenarios and tooling
    pub fn wave_mut(&mut self) -> Option<&mut Wave> {
        self.wave.as_mut()
    }

    /// Lives left in the current wave (`None` while Inactive)
    pub fn lives(&self) -> Option<u32> {
        self.wave.as_ref().map(Wave::lives)
    }

    /// Result of the last completed wave
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn has_won(&self) -> bool {
        self.outcome == Some(Outcome::Won)
    }

    /// Centre-screen banner for the current phase
    pub fn message(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Inactive => Some("Press 'S' to start"),
            Phase::NewWave | Phase::Active => None,
            Phase::Paused => Some("Paused"),
            Phase::Continue => Some("Starting..."),
            Phase::Complete => match self.outcome {
                Some(Outcome::Won) => Some("You won! Press 'S' to play again"),
                _ => Some("You lost! Press 'S' to try again"),
            },
        }
    }

    /// Take the game events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
