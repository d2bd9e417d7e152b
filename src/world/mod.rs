pub mod food;
pub mod occupancy;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A cell coordinate. Always within `[0, grid_size)` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Orthogonal neighbor test on raw coordinates. The grid does not wrap here,
    /// so cells on opposite edges are never adjacent.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&Direction::Up)
    }
}

/// Square toroidal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0, "grid size must be positive");
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Applies `delta` and wraps both coordinates back into the grid.
    pub fn wrap_move(&self, pos: Position, delta: (i64, i64)) -> Position {
        let size = self.size as i64;
        let x = (pos.x as i64 + delta.0).rem_euclid(size);
        let y = (pos.y as i64 + delta.1).rem_euclid(size);
        Position::new(x as usize, y as usize)
    }

    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        self.wrap_move(pos, direction.delta())
    }

    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let x = rng.gen_range(0..self.size);
        let y = rng.gen_range(0..self.size);
        Position::new(x, y)
    }
}
