use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Maze must be at least 5x5 with the exit strictly inside the border")]
    InvalidDimensions,
    #[error("Unknown cell glyph {0:?}")]
    InvalidGlyph(char),
    #[error("Grid rows have different lengths")]
    InvalidGridShape,
    #[error("Too many traps, requested {requested} but only {available} cells are eligible")]
    TooManyTraps {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Exit is not reachable from start")]
    Unreachable,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
