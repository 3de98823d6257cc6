//! Alien formation and its marching algorithm
//!
//! The formation is a fixed `rows x columns` grid. Row 0 is the bottom row
//! (closest to the defense line). Cells only ever go from occupied to empty.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Alien;
use crate::config::Config;

/// A grid slot: an alien or nothing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Occupied(Alien),
    Empty,
}

impl Cell {
    pub fn alien(&self) -> Option<&Alien> {
        match self {
            Cell::Occupied(alien) => Some(alien),
            Cell::Empty => None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }
}

/// Marching direction of the formation
///
/// The descending states only exist for the duration of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    MovingRight,
    MovingLeft,
    DescendingFromRight,
    DescendingFromLeft,
}

impl Direction {
    /// Horizontal sign of motion (0 while descending)
    pub fn sign(&self) -> f32 {
        match self {
            Direction::MovingRight => 1.0,
            Direction::MovingLeft => -1.0,
            Direction::DescendingFromRight | Direction::DescendingFromLeft => 0.0,
        }
    }

    /// Direction to resume after a descent
    fn after_descent(&self) -> Self {
        match self {
            Direction::DescendingFromRight => Direction::MovingLeft,
            Direction::DescendingFromLeft => Direction::MovingRight,
            other => *other,
        }
    }
}

/// What a single formation step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarchStep {
    /// Moved sideways in the given direction
    Shifted(Direction),
    /// Hit a wall and stepped down (DescendingFromRight or DescendingFromLeft)
    Descended(Direction),
    /// Formation already breached the defense line (or is empty)
    Halted,
}

/// The grid of aliens for one wave
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    cells: Vec<Vec<Cell>>,
    columns: usize,
    direction: Direction,
    h_walk: f32,
    v_walk: f32,
    /// Rightmost x the formation may reach while moving right
    right_limit: f32,
    /// Leftmost x the formation may reach while moving left
    left_limit: f32,
    breach_line: f32,
}

impl Formation {
    /// Build a full formation, bottom row first
    pub fn new(config: &Config) -> Self {
        let w = config.alien_width;
        let h = config.alien_height;
        let rows = config.alien_rows;
        let base_y = config.game_height
            - config.alien_ceiling
            - rows as f32 * (config.alien_v_sep + h);

        let cells = (0..rows)
            .map(|row| {
                let y = base_y + h / 2.0 + row as f32 * (h + config.alien_v_sep);
                let kind = ((row / 2) % config.alien_kinds as usize) as u8;
                (0..config.aliens_in_row)
                    .map(|col| {
                        let x = config.alien_h_sep + w / 2.0 + col as f32 * (config.alien_h_sep + w);
                        Cell::Occupied(Alien {
                            pos: Vec2::new(x, y),
                            kind,
                            width: w,
                            height: h,
                        })
                    })
                    .collect()
            })
            .collect();

        Self {
            cells,
            columns: config.aliens_in_row,
            direction: Direction::MovingRight,
            h_walk: config.alien_h_walk,
            v_walk: config.alien_v_walk,
            right_limit: config.game_width - w / 2.0 - config.alien_h_sep,
            left_limit: w / 2.0 + config.alien_h_sep,
            breach_line: config.breach_line(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell at (row, col); panics outside the grid
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    /// Empty a cell; panics outside the grid
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }

    /// All occupied cells with their (row, col), bottom row first, left to right
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, &Alien)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.alien().map(|a| (row, col, a)))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().next().is_none()
    }

    /// Largest alien x, if any alien remains
    pub fn rightmost(&self) -> Option<f32> {
        self.occupied().map(|(_, _, a)| a.pos.x).reduce(f32::max)
    }

    /// Smallest alien x, if any alien remains
    pub fn leftmost(&self) -> Option<f32> {
        self.occupied().map(|(_, _, a)| a.pos.x).reduce(f32::min)
    }

    /// Smallest alien y, if any alien remains
    pub fn lowest(&self) -> Option<f32> {
        self.occupied().map(|(_, _, a)| a.pos.y).reduce(f32::min)
    }

    /// Whether any alien has reached the defense line
    pub fn has_breached(&self) -> bool {
        self.lowest().is_some_and(|y| y <= self.breach_line)
    }

    /// The lowest remaining alien in each column (empty columns are skipped)
    pub fn front_line(&self) -> Vec<Alien> {
        (0..self.columns)
            .filter_map(|col| {
                self.cells
                    .iter()
                    .find_map(|row| row[col].alien().copied())
            })
            .collect()
    }

    /// Advance the formation by one march step
    pub fn step(&mut self) -> MarchStep {
        let (Some(rightmost), Some(leftmost)) = (self.rightmost(), self.leftmost()) else {
            return MarchStep::Halted;
        };
        if self.has_breached() {
            return MarchStep::Halted;
        }

        match self.direction {
            Direction::MovingRight if rightmost >= self.right_limit => {
                self.descend(Direction::DescendingFromRight)
            }
            Direction::MovingLeft if leftmost <= self.left_limit => {
                self.descend(Direction::DescendingFromLeft)
            }
            direction => {
                let dx = direction.sign() * self.h_walk;
                self.for_each_alien(|alien| alien.pos.x += dx);
                MarchStep::Shifted(direction)
            }
        }
    }

    fn descend(&mut self, via: Direction) -> MarchStep {
        self.direction = via;
        let dy = self.v_walk;
        self.for_each_alien(|alien| alien.pos.y -= dy);
        log::debug!("Formation descended ({:?})", via);
        self.direction = via.after_descent();
        MarchStep::Descended(via)
    }

    fn for_each_alien(&mut self, mut f: impl FnMut(&mut Alien)) {
        for cell in self.cells.iter_mut().flatten() {
            if let Cell::Occupied(alien) = cell {
                f(alien);
            }
        }
    }
}
