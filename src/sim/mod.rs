//! Wave simulation module
//!
//! All gameplay logic for a single wave lives here:
//! - Per-frame ship and bolt motion
//! - Formation marching on a fixed step timer
//! - Seeded RNG only (alien shooter selection and fire rate)
//! - No rendering or platform dependencies

pub mod bolts;
pub mod collision;
pub mod formation;
pub mod state;
pub mod wave;

pub use formation::{Cell, Direction, Formation, MarchStep};
pub use state::{Alien, Bolt, Bounds, GameEvent, Owner, Ship};
pub use wave::Wave;
