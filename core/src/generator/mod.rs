use serde::{Deserialize, Serialize};

use crate::*;
pub use backtrack::*;

mod backtrack;

pub trait MazeGenerator {
    fn generate(self, config: MazeConfig) -> Result<Maze>;
}

/// How to handle a trap request larger than the number of eligible cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrapPolicy {
    /// Place as many traps as fit.
    Saturate,
    /// Fail with [`GameError::TooManyTraps`].
    Strict,
}

impl Default for TrapPolicy {
    fn default() -> Self {
        Self::Saturate
    }
}
