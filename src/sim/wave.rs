//! Per-frame wave simulation
//!
//! A `Wave` owns the ship, the formation and every bolt for one playthrough.
//! Build a new one for every new game; pausing is done by simply not calling
//! [`Wave::update`].

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bolts;
use super::collision::{resolve_alien_hits, resolve_ship_hits};
use super::formation::{Direction, Formation, MarchStep};
use super::state::{Bolt, GameEvent, Ship};
use crate::config::Config;
use crate::error::SimError;
use crate::input::{InputState, Key};
use crate::wrap_x;

/// One wave of aliens against the player's ship
#[derive(Debug, Clone)]
pub struct Wave {
    config: Config,
    ship: Ship,
    formation: Formation,
    bolts: Vec<Bolt>,
    lives: u32,
    /// Seconds accumulated since the last formation step
    step_timer: f32,
    /// Formation steps left before the next alien shot
    shot_countdown: u32,
    rng: Pcg32,
    /// Events since the last drain
    events: Vec<GameEvent>,
}

impl Wave {
    /// Build a fresh wave with an entropy-seeded RNG
    pub fn new(config: &Config) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// Build a fresh wave with a fixed seed (deterministic replays and tests)
    pub fn with_seed(config: &Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let shot_countdown = bolts::next_countdown(config.bolt_rate, &mut rng);
        let formation = Formation::new(config);
        log::info!(
            "New wave: {}x{} aliens, {} lives",
            formation.rows(),
            formation.columns(),
            config.ship_lives
        );
        Self {
            config: config.clone(),
            ship: Ship::new(config),
            formation,
            bolts: Vec::new(),
            lives: config.ship_lives,
            step_timer: 0.0,
            shot_countdown,
            rng,
            events: Vec::new(),
        }
    }

    /// Advance the wave by one frame
    ///
    /// `dt` is the elapsed time in seconds since the previous frame. It only
    /// feeds the formation step timer; ship and bolts move a fixed amount per
    /// frame.
    pub fn update(&mut self, input: &dyn InputState, dt: f32) -> Result<(), SimError> {
        SimError::check_delta(dt)?;

        self.move_ship(input);

        if input.is_key_down(Key::Fire)
            && bolts::try_fire_player(&mut self.bolts, &self.ship, &self.config)
        {
            self.events.push(GameEvent::PlayerFired);
        }
        bolts::advance(&mut self.bolts, self.config.game_height);

        self.resolve_collisions();

        if !self.player_won() {
            self.step_timer += dt;
            if self.step_timer > self.config.alien_step_interval {
                self.step_timer = 0.0;
                self.formation.step();
                self.alien_fire();
            }
        }

        Ok(())
    }

    fn move_ship(&mut self, input: &dyn InputState) {
        let mut dx = 0.0;
        if input.is_key_down(Key::Right) {
            dx += self.config.ship_speed;
        }
        if input.is_key_down(Key::Left) {
            dx -= self.config.ship_speed;
        }
        self.ship.pos.x = wrap_x(self.ship.pos.x + dx, self.config.game_width);
    }

    fn resolve_collisions(&mut self) {
        let destroyed = resolve_alien_hits(&mut self.bolts, &mut self.formation);
        for _ in 0..destroyed {
            self.events.push(GameEvent::AlienDestroyed);
        }
        if destroyed > 0 {
            log::debug!(
                "{} alien(s) destroyed, {} remaining",
                destroyed,
                self.formation.occupied_count()
            );
        }

        let hits = resolve_ship_hits(&mut self.bolts, &self.ship);
        for _ in 0..hits {
            self.events.push(GameEvent::ShipHit);
        }
        if hits > 0 {
            self.lives = self.lives.saturating_sub(hits);
            log::debug!("Ship hit, {} lives left", self.lives);
        }

        if self.formation.has_breached() && self.lives > 0 {
            log::info!("Defense line breached");
            self.lives = 0;
        }
    }

    /// Count down to the next alien shot; runs once per formation step
    fn alien_fire(&mut self) {
        self.shot_countdown = self.shot_countdown.saturating_sub(1);
        if self.shot_countdown > 0 {
            return;
        }
        if let Some(shooter) = bolts::pick_shooter(&self.formation, &mut self.rng) {
            bolts::fire_alien(&mut self.bolts, &shooter, &self.config);
            self.events.push(GameEvent::AlienFired);
            log::debug!("Alien fired from ({:.1}, {:.1})", shooter.pos.x, shooter.pos.y);
        }
        self.shot_countdown = bolts::next_countdown(self.config.bolt_rate, &mut self.rng);
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Queries ===

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// True once every alien has been destroyed
    pub fn player_won(&self) -> bool {
        self.formation.is_empty()
    }

    pub fn is_game_over(&self) -> bool {
        self.lives == 0 || self.player_won()
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn bolts(&self) -> &[Bolt] {
        &self.bolts
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn direction(&self) -> Direction {
        self.formation.direction()
    }

    pub fn defense_line(&self) -> f32 {
        self.config.defense_line
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn shot_countdown(&self) -> u32 {
        self.shot_countdown
    }

    /// Direct formation access for scripted scenarios
    pub fn formation_mut(&mut self) -> &mut Formation {
        &mut self.formation
    }

    /// Direct bolt access for scripted scenarios
    pub fn bolts_mut(&mut self) -> &mut Vec<Bolt> {
        &mut self.bolts
    }

    /// Force a formation step, bypassing the timer
    pub fn force_step(&mut self) -> MarchStep {
        self.formation.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyState;
    use crate::sim::state::Owner;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn wave() -> Wave {
        Wave::with_seed(&Config::default(), 12345)
    }

    fn clear_all(wave: &mut Wave) {
        let formation = wave.formation_mut();
        for row in 0..formation.rows() {
            for col in 0..formation.columns() {
                formation.clear(row, col);
            }
        }
    }

    #[test]
    fn test_fresh_wave() {
        let wave = wave();
        let config = Config::default();
        assert_eq!(wave.lives(), 3);
        assert_eq!(
            wave.formation().occupied_count(),
            config.alien_rows * config.aliens_in_row
        );
        assert!(wave.bolts().is_empty());
        assert!(!wave.is_game_over());
        assert!((1..=config.bolt_rate).contains(&wave.shot_countdown()));
    }

    #[test]
    fn test_ship_movement_and_cancel() {
        let mut wave = wave();
        let start = wave.ship().pos.x;

        wave.update(&KeyState::with(&[Key::Right]), DT).unwrap();
        assert_eq!(wave.ship().pos.x, start + 5.0);

        wave.update(&KeyState::with(&[Key::Left, Key::Right]), DT).unwrap();
        assert_eq!(wave.ship().pos.x, start + 5.0);

        wave.update(&KeyState::with(&[Key::Left]), DT).unwrap();
        assert_eq!(wave.ship().pos.x, start);
    }

    #[test]
    fn test_ship_wraps_around() {
        let mut wave = wave();
        wave.ship.pos.x = 2.0;
        wave.update(&KeyState::with(&[Key::Left]), DT).unwrap();
        assert_eq!(wave.ship().pos.x, 797.0);

        wave.ship.pos.x = 798.0;
        wave.update(&KeyState::with(&[Key::Right]), DT).unwrap();
        assert_eq!(wave.ship().pos.x, 3.0);
    }

    #[test]
    fn test_holding_fire_spawns_one_bolt() {
        let mut wave = wave();
        let fire = KeyState::with(&[Key::Fire]);

        wave.update(&fire, DT).unwrap();
        wave.update(&fire, DT).unwrap();

        assert_eq!(bolts::player_bolt_count(wave.bolts()), 1);
        assert_eq!(wave.drain_events(), vec![GameEvent::PlayerFired]);
        assert!(wave.drain_events().is_empty());
    }

    #[test]
    fn test_enemy_bolt_costs_one_life() {
        let mut wave = wave();
        let config = wave.config().clone();
        // Placed so that it overlaps the ship after advancing one frame
        let pos = Vec2::new(wave.ship().pos.x, wave.ship().pos.y + config.bolt_speed);
        wave.bolts_mut()
            .push(Bolt::new(pos, -config.bolt_speed, config.bolt_width, config.bolt_height));

        wave.update(&KeyState::new(), DT).unwrap();

        assert_eq!(wave.lives(), 2);
        assert!(wave.bolts().iter().all(|b| b.owner() != Owner::Alien));
        assert!(wave.drain_events().contains(&GameEvent::ShipHit));
    }

    #[test]
    fn test_breach_forces_loss() {
        let mut wave = wave();
        let breach = wave.config().breach_line();
        // March a lone alien down onto the defense line
        let mut fresh = Formation::new(&Config::default());
        for row in 0..fresh.rows() {
            for col in 0..fresh.columns() {
                if (row, col) != (0, 0) {
                    fresh.clear(row, col);
                }
            }
        }
        while fresh.lowest().unwrap() > breach {
            fresh.step();
        }
        *wave.formation_mut() = fresh;

        wave.update(&KeyState::new(), DT).unwrap();
        assert_eq!(wave.lives(), 0);
        assert!(wave.is_game_over());
    }

    #[test]
    fn test_formation_steps_on_timer() {
        let mut wave = wave();
        let idle = KeyState::new();
        let x0 = wave.formation().leftmost().unwrap();

        // 0.9s: not enough yet
        for _ in 0..54 {
            wave.update(&idle, DT).unwrap();
        }
        assert_eq!(wave.formation().leftmost().unwrap(), x0);

        // Push past one second
        wave.update(&idle, 0.2).unwrap();
        assert_eq!(
            wave.formation().leftmost().unwrap(),
            x0 + wave.config().alien_h_walk
        );
        assert_eq!(wave.step_timer, 0.0);
    }

    #[test]
    fn test_aliens_fire_within_bolt_rate_steps() {
        let mut wave = wave();
        let idle = KeyState::new();
        let rate = wave.config().bolt_rate;

        for _ in 0..rate {
            wave.update(&idle, 2.0).unwrap();
        }
        assert!(wave.drain_events().contains(&GameEvent::AlienFired));
        assert!(wave.bolts().iter().any(|b| !b.is_player_bolt()));
    }

    #[test]
    fn test_won_wave_stops_stepping() {
        let mut wave = wave();
        clear_all(&mut wave);
        assert!(wave.player_won());
        assert!(wave.is_game_over());

        wave.update(&KeyState::new(), 5.0).unwrap();
        assert_eq!(wave.step_timer, 0.0);
        assert!(wave.bolts().is_empty());
    }

    #[test]
    fn test_invalid_delta_rejected_without_side_effects() {
        let mut wave = wave();
        let x = wave.ship().pos.x;
        let err = wave.update(&KeyState::with(&[Key::Right, Key::Fire]), -1.0);
        assert_eq!(err, Err(SimError::InvalidDelta(-1.0)));
        assert_eq!(wave.ship().pos.x, x);
        assert!(wave.bolts().is_empty());
        assert!(wave.update(&KeyState::new(), f32::NAN).is_err());
    }

    #[test]
    fn test_determinism() {
        let mut wave1 = Wave::with_seed(&Config::default(), 99999);
        let mut wave2 = Wave::with_seed(&Config::default(), 99999);
        let inputs = [
            KeyState::with(&[Key::Fire]),
            KeyState::with(&[Key::Left]),
            KeyState::new(),
            KeyState::with(&[Key::Right, Key::Fire]),
        ];

        for _ in 0..50 {
            for input in &inputs {
                wave1.update(input, 0.3).unwrap();
                wave2.update(input, 0.3).unwrap();
            }
        }

        assert_eq!(wave1.lives(), wave2.lives());
        assert_eq!(wave1.bolts(), wave2.bolts());
        assert_eq!(
            wave1.formation().occupied_count(),
            wave2.formation().occupied_count()
        );
        assert_eq!(wave1.ship().pos, wave2.ship().pos);
    }
}
