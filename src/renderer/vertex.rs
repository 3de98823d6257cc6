//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SHIP: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const DEFENSE_LINE: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const PLAYER_BOLT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const ALIEN_BOLT: [f32; 4] = [1.0, 0.3, 0.2, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Alien colors, indexed by kind (wraps)
    pub const ALIENS: [[f32; 4]; 3] = [
        [0.4, 0.7, 1.0, 1.0],
        [0.9, 0.4, 0.9, 1.0],
        [0.9, 0.85, 0.3, 1.0],
    ];

    pub fn alien(kind: u8) -> [f32; 4] {
        ALIENS[kind as usize % ALIENS.len()]
    }
}
