//! Audio triggers
//!
//! The simulation only reports [`GameEvent`]s. This module maps them to sound
//! effects and hands them to whatever backend the host provides. Playback is
//! fire-and-forget and never feeds back into the simulation.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Alien destroyed by a player bolt
    AlienBlast,
    /// Ship hit by an alien bolt
    ShipBlast,
    /// Player fired
    PlayerPew,
    /// An alien fired
    AlienPew,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::AlienDestroyed => SoundEffect::AlienBlast,
            GameEvent::ShipHit => SoundEffect::ShipBlast,
            GameEvent::PlayerFired => SoundEffect::PlayerPew,
            GameEvent::AlienFired => SoundEffect::AlienPew,
        }
    }
}

impl SoundEffect {
    /// Asset name a backend would load for this effect
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::AlienBlast => "blast1.wav",
            SoundEffect::ShipBlast => "blast2.wav",
            SoundEffect::PlayerPew => "pew1.wav",
            SoundEffect::AlienPew => "pew2.wav",
        }
    }
}

/// A playback backend
pub trait AudioSink {
    /// Start playing `effect` at `volume` (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that only logs what it would play (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {} at {:.2}", effect.asset(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect (silently dropped when muted)
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Play the effect for every event, in order
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for &event in events {
            self.play(event.into());
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(SoundEffect, f32)>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push((effect, volume));
        }
    }

    #[test]
    fn test_events_map_to_effects() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_master_volume(1.0);
        audio.play_events(&[GameEvent::PlayerFired, GameEvent::AlienDestroyed]);

        assert_eq!(
            audio.sink().0,
            vec![(SoundEffect::PlayerPew, 1.0), (SoundEffect::AlienBlast, 1.0)]
        );
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_muted(true);
        audio.play(SoundEffect::ShipBlast);
        assert!(audio.sink().0.is_empty());

        audio.set_muted(false);
        audio.set_sfx_volume(0.0);
        audio.play(SoundEffect::ShipBlast);
        assert!(audio.sink().0.is_empty());
    }
}
