//! Per-frame scene building
//!
//! `Scene::build` borrows the session immutably, so drawing any number of
//! times (including while paused) cannot change the game.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::session::{Phase, Session};
use crate::sim::Wave;

/// Thickness of the defense line in pixels
const DEFENSE_LINE_THICKNESS: f32 = 1.0;

/// A piece of text to draw
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// Centre of the text
    pub pos: Vec2,
    pub font_size: f32,
    pub color: [f32; 4],
}

/// Everything the display needs for one frame
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Triangle list
    pub vertices: Vec<Vertex>,
    pub labels: Vec<Label>,
    pub clear_color: [f32; 4],
}

impl Scene {
    pub fn build(session: &Session) -> Self {
        let config = session.config();
        let width = config.game_width;
        let height = config.game_height;
        let mut scene = Scene {
            clear_color: colors::BACKGROUND,
            ..Default::default()
        };

        // The finished wave is hidden behind the result banner
        if let Some(wave) = session.wave() {
            if session.phase() != Phase::Complete {
                scene.push_wave(wave);
            }
        }

        match session.message() {
            Some(text) => {
                let font_size = match session.phase() {
                    Phase::Paused => 70.0,
                    Phase::Complete => 40.0,
                    _ => 24.0,
                };
                scene.labels.push(Label {
                    text: text.to_string(),
                    pos: Vec2::new(width / 2.0, height / 2.0),
                    font_size,
                    color: colors::TEXT,
                });
            }
            None => {
                scene.labels.push(Label {
                    text: "Press 'P' to pause or 'C' to continue".to_string(),
                    pos: Vec2::new(width / 2.0, height - config.alien_ceiling / 4.0),
                    font_size: 12.0,
                    color: colors::TEXT,
                });
            }
        }

        if let Some(lives) = session.lives() {
            scene.labels.push(Label {
                text: format!("Player lives: {}", lives),
                pos: Vec2::new(7.0 * width / 8.0, config.alien_ceiling / 4.0),
                font_size: 12.0,
                color: colors::TEXT,
            });
        }

        scene
    }

    fn push_wave(&mut self, wave: &Wave) {
        for (_, _, alien) in wave.formation().occupied() {
            self.vertices
                .extend(shapes::bounds(&alien.bounds(), colors::alien(alien.kind)));
        }

        self.vertices
            .extend(shapes::bounds(&wave.ship().bounds(), colors::SHIP));

        self.vertices.extend(shapes::hline(
            0.0,
            wave.config().game_width,
            wave.defense_line(),
            DEFENSE_LINE_THICKNESS,
            colors::DEFENSE_LINE,
        ));

        for bolt in wave.bolts() {
            let color = if bolt.is_player_bolt() {
                colors::PLAYER_BOLT
            } else {
                colors::ALIEN_BOLT
            };
            self.vertices.extend(shapes::bounds(&bolt.bounds(), color));
        }
    }

    /// Raw vertex bytes for upload to a GPU buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
