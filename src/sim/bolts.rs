//! Projectile system: spawning, motion, culling, and shooter selection

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::formation::Formation;
use super::state::{Alien, Bolt, Ship};
use crate::config::Config;

/// Number of live bolts fired by the player
pub fn player_bolt_count(bolts: &[Bolt]) -> usize {
    bolts.iter().filter(|b| b.is_player_bolt()).count()
}

/// Fire a player bolt from the ship's nose, unless one is already in flight
///
/// Returns true if a bolt was spawned.
pub fn try_fire_player(bolts: &mut Vec<Bolt>, ship: &Ship, config: &Config) -> bool {
    if player_bolt_count(bolts) > 0 {
        return false;
    }
    let y = config.ship_bottom + config.ship_height + config.bolt_height / 2.0;
    bolts.push(Bolt::new(
        Vec2::new(ship.pos.x, y),
        config.bolt_speed,
        config.bolt_width,
        config.bolt_height,
    ));
    true
}

/// Fire an alien bolt straight down from the shooter's centre
pub fn fire_alien(bolts: &mut Vec<Bolt>, shooter: &Alien, config: &Config) {
    bolts.push(Bolt::new(
        shooter.pos,
        -config.bolt_speed,
        config.bolt_width,
        config.bolt_height,
    ));
}

/// Move every bolt one frame and drop the ones that left the board
pub fn advance(bolts: &mut Vec<Bolt>, board_height: f32) {
    for bolt in bolts.iter_mut() {
        bolt.advance();
    }
    bolts.retain(|bolt| {
        let half = bolt.height / 2.0;
        if bolt.is_player_bolt() {
            bolt.pos.y - half <= board_height
        } else {
            bolt.pos.y + half >= 0.0
        }
    });
}

/// Pick a random shooter among the front-most alien of each column
///
/// Returns `None` when no aliens remain.
pub fn pick_shooter<R: Rng + ?Sized>(formation: &Formation, rng: &mut R) -> Option<Alien> {
    formation.front_line().choose(rng).copied()
}

/// Draw the number of formation steps until the next alien shot
pub fn next_countdown<R: Rng + ?Sized>(bolt_rate: u32, rng: &mut R) -> u32 {
    rng.random_range(1..=bolt_rate.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_single_player_bolt() {
        let config = Config::default();
        let ship = Ship::new(&config);
        let mut bolts = Vec::new();

        assert!(try_fire_player(&mut bolts, &ship, &config));
        assert!(!try_fire_player(&mut bolts, &ship, &config));
        assert_eq!(player_bolt_count(&bolts), 1);
        assert_eq!(bolts[0].pos.x, ship.pos.x);
        assert!(bolts[0].velocity() > 0.0);
    }

    #[test]
    fn test_alien_bolts_do_not_block_player_fire() {
        let config = Config::default();
        let ship = Ship::new(&config);
        let formation = Formation::new(&config);
        let shooter = formation.front_line()[0];
        let mut bolts = Vec::new();

        fire_alien(&mut bolts, &shooter, &config);
        assert_eq!(player_bolt_count(&bolts), 0);
        assert!(try_fire_player(&mut bolts, &ship, &config));
        assert_eq!(bolts.len(), 2);
    }

    #[test]
    fn test_advance_culls_offscreen() {
        let config = Config::default();
        let h = config.bolt_height;
        let mut bolts = vec![
            Bolt::new(Vec2::new(0.0, config.game_height + h / 2.0 - 1.0), 10.0, 4.0, h),
            Bolt::new(Vec2::new(0.0, 300.0), 10.0, 4.0, h),
            Bolt::new(Vec2::new(0.0, -h / 2.0 + 1.0), -10.0, 4.0, h),
            Bolt::new(Vec2::new(0.0, 300.0), -10.0, 4.0, h),
        ];

        advance(&mut bolts, config.game_height);
        assert_eq!(bolts.len(), 2);
        assert_eq!(bolts[0].pos.y, 310.0);
        assert_eq!(bolts[1].pos.y, 290.0);
    }

    #[test]
    fn test_pick_shooter_from_front_line() {
        let config = Config::default();
        let mut formation = Formation::new(&config);
        let mut rng = Pcg32::seed_from_u64(7);
        let bottom_y = formation.cell(0, 0).alien().unwrap().pos.y;

        for _ in 0..50 {
            let shooter = pick_shooter(&formation, &mut rng).unwrap();
            assert_eq!(shooter.pos.y, bottom_y);
        }

        for row in 0..formation.rows() {
            for col in 0..formation.columns() {
                formation.clear(row, col);
            }
        }
        assert!(pick_shooter(&formation, &mut rng).is_none());
    }

    #[test]
    fn test_countdown_range() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let n = next_countdown(5, &mut rng);
            assert!((1..=5).contains(&n));
        }
        assert_eq!(next_countdown(1, &mut rng), 1);
    }
}
