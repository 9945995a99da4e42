use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Contents of a single maze cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Open,
    /// Walkable, but hurts the player on entry.
    Trap,
}

impl Cell {
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Open | Self::Trap)
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    pub const fn is_trap(self) -> bool {
        matches!(self, Self::Trap)
    }

    pub const fn to_char(self) -> char {
        use Cell::*;
        match self {
            Wall => '#',
            Open => '.',
            Trap => '^',
        }
    }

    pub const fn from_char(glyph: char) -> Option<Self> {
        use Cell::*;
        match glyph {
            '#' => Some(Wall),
            '.' => Some(Open),
            '^' => Some(Trap),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Wall
    }
}

/// Builds a grid from text rows, top row first, one glyph per cell.
pub fn parse_grid(rows: &[&str]) -> Result<Array2<Cell>> {
    let cols = rows.first().map_or(0, |row| row.chars().count());
    let max_side = usize::from(Coord::MAX);
    if rows.len() > max_side || cols > max_side {
        return Err(GameError::InvalidDimensions);
    }

    let mut cells = Vec::with_capacity(rows.len() * cols);
    for row in rows {
        let before = cells.len();
        for glyph in row.chars() {
            cells.push(Cell::from_char(glyph).ok_or(GameError::InvalidGlyph(glyph))?);
        }
        if cells.len() - before != cols {
            return Err(GameError::InvalidGridShape);
        }
    }

    Array2::from_shape_vec((rows.len(), cols), cells).map_err(|_| GameError::InvalidGridShape)
}
