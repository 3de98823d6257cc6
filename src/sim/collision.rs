//! Collision detection and response
//!
//! All hit tests are axis-aligned rectangle overlaps about entity centres.

use super::formation::Formation;
use super::state::{Bolt, Ship};

/// Resolve player bolts against the formation
///
/// Each bolt destroys at most the first alien it overlaps (bottom row first,
/// left to right) and is consumed by the hit. Returns the number of aliens
/// destroyed.
pub fn resolve_alien_hits(bolts: &mut Vec<Bolt>, formation: &mut Formation) -> usize {
    let mut destroyed = 0;
    bolts.retain(|bolt| {
        if !bolt.is_player_bolt() {
            return true;
        }
        let bounds = bolt.bounds();
        let hit = formation
            .occupied()
            .find(|(_, _, alien)| alien.bounds().overlaps(&bounds))
            .map(|(row, col, _)| (row, col));
        match hit {
            Some((row, col)) => {
                formation.clear(row, col);
                destroyed += 1;
                false
            }
            None => true,
        }
    });
    destroyed
}

/// Resolve alien bolts against the ship
///
/// Every overlapping alien bolt is removed. Returns the number of hits.
pub fn resolve_ship_hits(bolts: &mut Vec<Bolt>, ship: &Ship) -> u32 {
    let ship_bounds = ship.bounds();
    let before = bolts.len();
    bolts.retain(|bolt| bolt.is_player_bolt() || !bolt.bounds().overlaps(&ship_bounds));
    (before - bolts.len()) as u32
}
