use serde::{Deserialize, Serialize};

use crate::types::offset_within;
use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step as `(d_row, d_col)`.
    pub const fn delta(self) -> Delta {
        use Direction::*;
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }
}

/// Board position addressed by reveal and mark commands.
///
/// Always inside `[0, rows) x [0, cols)`: moves that would leave the board are
/// dropped as a whole, nothing is clamped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    position: Coord2,
    bounds: Coord2,
}

impl Cursor {
    /// Cursor at the origin of a board of `bounds = (rows, cols)`.
    pub fn new(bounds: Coord2) -> Self {
        Self {
            position: (0, 0),
            bounds,
        }
    }

    pub fn position(&self) -> Coord2 {
        self.position
    }

    pub fn bounds(&self) -> Coord2 {
        self.bounds
    }

    pub fn step(&mut self, direction: Direction) -> bool {
        self.move_by(direction.delta())
    }

    /// Moves by `delta` if the target is on the board, returns whether it moved.
    pub fn move_by(&mut self, delta: Delta) -> bool {
        match offset_within(self.position, delta, self.bounds) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }
}
