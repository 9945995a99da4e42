#![no_std]

extern crate alloc;

use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use pathing::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod error;
mod generator;
mod pathing;
mod session;
mod tile;
mod types;

/// Smallest supported side length, leaving room for a border and one passage.
pub const MIN_SIDE: Coord = 5;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// `(cols, rows)`
    pub size: Coord2,
    pub traps: CellCount,
}

impl MazeConfig {
    pub const fn new_unchecked(size: Coord2, traps: CellCount) -> Self {
        Self { size, traps }
    }

    pub fn new((cols, rows): Coord2, traps: CellCount) -> Self {
        let cols = cols.clamp(MIN_SIDE, Coord::MAX);
        let rows = rows.clamp(MIN_SIDE, Coord::MAX);
        Self::new_unchecked((cols, rows), traps)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn start(&self) -> Coord2 {
        (1, 1)
    }

    pub const fn exit(&self) -> Coord2 {
        (self.size.0.saturating_sub(2), self.size.1.saturating_sub(2))
    }

    pub fn validate(&self) -> Result<()> {
        let (cols, rows) = self.size;
        if cols < MIN_SIDE || rows < MIN_SIDE {
            return Err(GameError::InvalidDimensions);
        }
        Ok(())
    }
}

/// A generated level: the grid plus its fixed endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    grid: Array2<Cell>,
    start: Coord2,
    exit: Coord2,
    /// Shortest start-to-exit path computed before traps were placed.
    solution: Path,
    trap_count: CellCount,
}

impl Maze {
    pub(crate) fn new_unchecked(
        grid: Array2<Cell>,
        start: Coord2,
        exit: Coord2,
        solution: Path,
    ) -> Self {
        let trap_count = count_cells(&grid, Cell::is_trap);
        Self {
            grid,
            start,
            exit,
            solution,
            trap_count,
        }
    }

    /// Wraps a hand-made grid, requiring passable endpoints joined by some path.
    ///
    /// Either side longer than [`Coord::MAX`] is rejected as [`GameError::InvalidDimensions`].
    pub fn from_grid(grid: Array2<Cell>, start: Coord2, exit: Coord2) -> Result<Self> {
        let max_side = usize::from(Coord::MAX);
        let (nd_rows, nd_cols) = grid.dim();
        if nd_rows > max_side || nd_cols > max_side {
            return Err(GameError::InvalidDimensions);
        }

        let (cols, rows) = grid_size(&grid);
        for (x, y) in [start, exit] {
            if x >= cols || y >= rows || !grid[(x, y).to_nd_index()].is_passable() {
                return Err(GameError::InvalidCoords);
            }
        }

        let solution = shortest_path(&grid, start, exit);
        if solution.is_empty() {
            return Err(GameError::Unreachable);
        }
        Ok(Self::new_unchecked(grid, start, exit, solution))
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.grid)
    }

    pub fn cols(&self) -> Coord {
        self.size().0
    }

    pub fn rows(&self) -> Coord {
        self.size().1
    }

    pub fn start(&self) -> Coord2 {
        self.start
    }

    pub fn exit(&self) -> Coord2 {
        self.exit
    }

    pub fn solution(&self) -> &[Coord2] {
        &self.solution
    }

    pub fn trap_count(&self) -> CellCount {
        self.trap_count
    }

    pub fn grid(&self) -> &Array2<Cell> {
        &self.grid
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords.to_nd_index()]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Shortest path over the current grid, reflecting any broken walls.
    pub fn shortest_path(&self, from: Coord2, to: Coord2) -> Path {
        shortest_path(&self.grid, from, to)
    }

    /// Turns a wall into an open cell; returns `false` if there was no wall.
    pub fn break_wall(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.grid[coords.to_nd_index()];
        if !cell.is_wall() {
            return Ok(false);
        }
        *cell = Cell::Open;
        Ok(true)
    }

    /// Number of walkable cells, traps included.
    pub fn open_cell_count(&self) -> CellCount {
        count_cells(&self.grid, Cell::is_passable)
    }

    /// Number of orthogonally adjacent pairs of walkable cells.
    pub fn passage_count(&self) -> CellCount {
        let (cols, rows) = self.size();
        let mut passages: CellCount = 0;
        for y in 0..rows {
            for x in 0..cols {
                if !self.cell_at((x, y)).is_passable() {
                    continue;
                }
                let right = x + 1 < cols && self.cell_at((x + 1, y)).is_passable();
                let down = y + 1 < rows && self.cell_at((x, y + 1)).is_passable();
                passages += CellCount::from(right) + CellCount::from(down);
            }
        }
        passages
    }

    /// Whether the walkable cells form a single tree rooted at the start.
    pub fn is_perfect(&self) -> bool {
        let open = self.open_cell_count();
        open == reachable_count(&self.grid, self.start) && open == self.passage_count() + 1
    }
}

impl Index<Coord2> for Maze {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.grid[coords.to_nd_index()]
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (cols, rows) = self.size();
        for y in 0..rows {
            for x in 0..cols {
                let glyph = match (x, y) {
                    coords if coords == self.start => 'S',
                    coords if coords == self.exit => 'E',
                    coords => self.cell_at(coords).to_char(),
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn count_cells(grid: &Array2<Cell>, predicate: fn(Cell) -> bool) -> CellCount {
    grid.iter()
        .filter(|&&cell| predicate(cell))
        .count()
        .try_into()
        .unwrap_or(CellCount::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const LOOP: [&str; 5] = [
        "#####", //
        "#...#",
        "#.#.#",
        "#...#",
        "#####",
    ];

    const TREE: [&str; 5] = [
        "#####", //
        "#...#",
        "###.#",
        "#.^.#",
        "#####",
    ];

    #[test]
    fn config_clamps_small_sides() {
        let config = MazeConfig::new((2, 40), 3);

        assert_eq!(config.size, (MIN_SIDE, 40));
        assert_eq!(config.exit(), (3, 38));
        assert!(MazeConfig::new_unchecked((4, 9), 0).validate().is_err());
    }

    #[test]
    fn from_grid_computes_solution() {
        let maze = Maze::from_grid(parse_grid(&TREE).unwrap(), (1, 1), (1, 3)).unwrap();

        assert_eq!(maze.solution().len(), 7);
        assert_eq!(maze.trap_count(), 1);
        assert_eq!(maze.size(), (5, 5));
    }

    #[test]
    fn from_grid_rejects_disconnected_exit() {
        let grid = parse_grid(&["#####", "#.#.#", "#####"]).unwrap();

        assert_eq!(
            Maze::from_grid(grid, (1, 1), (3, 1)),
            Err(GameError::Unreachable)
        );
    }

    #[test]
    fn from_grid_rejects_walled_endpoint() {
        let grid = parse_grid(&TREE).unwrap();

        assert_eq!(
            Maze::from_grid(grid, (0, 0), (1, 3)),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn from_grid_rejects_oversized_grid() {
        let corridor = |cols: usize| {
            let mut grid = Array2::from_elem((3, cols), Cell::Wall);
            grid.row_mut(1).fill(Cell::Open);
            grid
        };

        assert_eq!(
            Maze::from_grid(corridor(300), (0, 1), (254, 1)),
            Err(GameError::InvalidDimensions)
        );

        let widest = Maze::from_grid(corridor(255), (0, 1), (254, 1)).unwrap();
        assert_eq!(widest.size(), (255, 3));
        assert!(widest.is_perfect());
    }

    #[test]
    fn perfect_maze_detection() {
        let tree = Maze::from_grid(parse_grid(&TREE).unwrap(), (1, 1), (1, 3)).unwrap();
        let cyclic = Maze::from_grid(parse_grid(&LOOP).unwrap(), (1, 1), (3, 3)).unwrap();

        assert_eq!(tree.open_cell_count(), 7);
        assert_eq!(tree.passage_count(), 6);
        assert!(tree.is_perfect());

        assert_eq!(cyclic.open_cell_count(), 8);
        assert_eq!(cyclic.passage_count(), 8);
        assert!(!cyclic.is_perfect());
    }

    #[test]
    fn break_wall_only_affects_walls() {
        let mut maze = Maze::from_grid(parse_grid(&TREE).unwrap(), (1, 1), (1, 3)).unwrap();

        assert_eq!(maze.break_wall((1, 2)), Ok(true));
        assert_eq!(maze.cell_at((1, 2)), Cell::Open);
        assert_eq!(maze.break_wall((1, 2)), Ok(false));
        assert_eq!(maze.break_wall((9, 2)), Err(GameError::InvalidCoords));
        assert_eq!(maze.shortest_path((1, 1), (1, 3)).len(), 3);
        assert_eq!(maze.solution().len(), 7);
    }

    #[test]
    fn display_marks_endpoints() {
        let maze = Maze::from_grid(parse_grid(&TREE).unwrap(), (1, 1), (1, 3)).unwrap();

        assert_eq!(
            maze.to_string(),
            "#####\n#S..#\n###.#\n#E^.#\n#####\n"
        );
    }
}
