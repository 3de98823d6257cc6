//! Entity model for a wave
//!
//! Ship, aliens and bolts are plain values. Positions are centre points in a
//! y-up coordinate system: the ship sits near y = 0, the formation starts near
//! the top of the board.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Axis-aligned bounding box about a centre point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Bounds {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half_extents: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Rectangle overlap (touching edges count as a hit)
    pub fn overlaps(&self, other: &Bounds) -> bool {
        let delta = (self.center - other.center).abs();
        let reach = self.half_extents + other.half_extents;
        delta.x <= reach.x && delta.y <= reach.y
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Ship {
    /// Ship centred horizontally, bottom edge on `ship_bottom`
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::new(
                config.game_width / 2.0,
                config.ship_bottom + config.ship_height / 2.0,
            ),
            width: config.ship_width,
            height: config.ship_height,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.width, self.height)
    }
}

/// A single invader
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Alien {
    pub pos: Vec2,
    /// Sprite index (cosmetic)
    pub kind: u8,
    pub width: f32,
    pub height: f32,
}

impl Alien {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.width, self.height)
    }
}

/// Who fired a bolt, derived from the sign of its velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Alien,
}

/// A laser bolt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bolt {
    pub pos: Vec2,
    /// Vertical pixels per frame; positive moves up (player), negative down (alien)
    vel: f32,
    pub width: f32,
    pub height: f32,
}

impl Bolt {
    /// Create a bolt; `vel` must be nonzero since its sign encodes the owner
    pub fn new(pos: Vec2, vel: f32, width: f32, height: f32) -> Self {
        debug_assert!(vel != 0.0, "bolt velocity must be nonzero");
        Self {
            pos,
            vel,
            width,
            height,
        }
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.vel
    }

    #[inline]
    pub fn owner(&self) -> Owner {
        if self.vel > 0.0 {
            Owner::Player
        } else {
            Owner::Alien
        }
    }

    #[inline]
    pub fn is_player_bolt(&self) -> bool {
        self.owner() == Owner::Player
    }

    /// Move one frame along the velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos.y += self.vel;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.width, self.height)
    }
}

/// Discrete things that happened during an update (for audio/effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    AlienDestroyed,
    ShipHit,
    PlayerFired,
    AlienFired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_overlap() {
        let a = Bounds::new(Vec2::new(0.0, 0.0), 10.0, 10.0);
        let b = Bounds::new(Vec2::new(9.0, 0.0), 10.0, 10.0);
        let c = Bounds::new(Vec2::new(0.0, 10.5), 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert_eq!(a.min(), Vec2::new(-5.0, -5.0));
        assert_eq!(a.max(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_bolt_owner_from_velocity() {
        let mut up = Bolt::new(Vec2::ZERO, 10.0, 4.0, 16.0);
        let down = Bolt::new(Vec2::ZERO, -10.0, 4.0, 16.0);
        assert_eq!(up.owner(), Owner::Player);
        assert_eq!(down.owner(), Owner::Alien);

        up.advance();
        assert_eq!(up.pos.y, 10.0);
    }

    #[test]
    fn test_ship_starts_centered() {
        let config = Config::default();
        let ship = Ship::new(&config);
        assert_eq!(ship.pos.x, config.game_width / 2.0);
        assert_eq!(ship.bounds().min().y, config.ship_bottom);
    }
}
