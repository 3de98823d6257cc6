//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Bounds;

/// Two triangles covering an axis-aligned rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Filled bounding box of an entity
pub fn bounds(b: &Bounds, color: [f32; 4]) -> [Vertex; 6] {
    rect(b.min(), b.max(), color)
}

/// Horizontal line of the given thickness
pub fn hline(x0: f32, x1: f32, y: f32, thickness: f32, color: [f32; 4]) -> [Vertex; 6] {
    let half = thickness / 2.0;
    rect(Vec2::new(x0, y - half), Vec2::new(x1, y + half), color)
}
