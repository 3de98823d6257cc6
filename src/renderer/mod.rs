//! Rendering adapter
//!
//! Turns a read-only view of the session into GPU-ready vertices and text
//! labels. Nothing here can mutate simulation state.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Label, Scene};
pub use vertex::Vertex;
