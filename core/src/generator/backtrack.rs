use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Carves a perfect maze with a randomized depth-first backtracker over the odd-coordinate lattice, then scatters
/// traps on open cells away from the shortest start-to-exit path.
#[derive(Clone, Debug, PartialEq)]
pub struct BacktrackMazeGenerator {
    seed: u64,
    trap_policy: TrapPolicy,
}

impl BacktrackMazeGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            trap_policy: TrapPolicy::default(),
        }
    }

    pub fn with_trap_policy(self, trap_policy: TrapPolicy) -> Self {
        Self {
            trap_policy,
            ..self
        }
    }
}

impl MazeGenerator for BacktrackMazeGenerator {
    fn generate(self, config: MazeConfig) -> Result<Maze> {
        config.validate()?;

        let (cols, rows) = config.size;
        let start = config.start();
        let exit = config.exit();
        let mut grid: Array2<Cell> = Array2::default((usize::from(rows), usize::from(cols)));
        let mut rng = SmallRng::seed_from_u64(self.seed);

        grid[start.to_nd_index()] = Cell::Open;
        let steps = carve_passages(&mut grid, start, &mut rng);
        link_exit(&mut grid, exit);
        log::debug!(
            "Carved {}x{} maze from seed {} in {} steps",
            cols,
            rows,
            self.seed,
            steps
        );

        let solution = shortest_path(&grid, start, exit);
        if solution.is_empty() {
            log::error!("Carved maze leaves exit {:?} unreachable", exit);
            return Err(GameError::Unreachable);
        }

        let placed = place_traps(
            &mut grid,
            &solution,
            config.traps,
            self.trap_policy,
            &mut rng,
        )?;
        let maze = Maze::new_unchecked(grid, start, exit, solution);

        // double check trap count
        if maze.trap_count() != placed {
            log::warn!(
                "Generated maze trap count mismatch, actual: {}, placed: {}",
                maze.trap_count(),
                placed
            );
        }
        Ok(maze)
    }
}

/// One level of the carving walk: a cell and the order it tries its neighbours in.
struct CarveFrame {
    cell: Coord2,
    directions: [Direction; 4],
    next: usize,
}

impl CarveFrame {
    fn new(cell: Coord2, rng: &mut SmallRng) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Self {
            cell,
            directions,
            next: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction = self.directions.get(self.next).copied();
        self.next += 1;
        direction
    }
}

/// Opens the lattice reachable from `start` two cells at a time, returning the number of carving steps.
///
/// Cells are only ever carved into while still walls, so no cycles are introduced.
fn carve_passages(grid: &mut Array2<Cell>, start: Coord2, rng: &mut SmallRng) -> CellCount {
    let bounds = grid_size(grid);
    let (cols, rows) = bounds;
    let interior = |(x, y): Coord2| x > 0 && y > 0 && x < cols - 1 && y < rows - 1;

    let mut stack = vec![CarveFrame::new(start, rng)];
    let mut steps: CellCount = 0;

    while let Some(frame) = stack.last_mut() {
        let cell = frame.cell;
        let Some(direction) = frame.next_direction() else {
            stack.pop();
            continue;
        };

        let Some(target) = direction.step(cell, 2, bounds) else {
            continue;
        };
        if !interior(target) || !grid[target.to_nd_index()].is_wall() {
            continue;
        }

        if let Some(between) = direction.step(cell, 1, bounds) {
            grid[between.to_nd_index()] = Cell::Open;
        }
        grid[target.to_nd_index()] = Cell::Open;
        steps += 1;
        stack.push(CarveFrame::new(target, rng));
    }

    steps
}

/// Opens the exit and, when it lies on even coordinates off the lattice, the single cell joining it to the lattice.
fn link_exit(grid: &mut Array2<Cell>, exit: Coord2) {
    grid[exit.to_nd_index()] = Cell::Open;

    let (x, y) = exit;
    if x % 2 == 0 && y % 2 == 0 {
        grid[(x - 1, y).to_nd_index()] = Cell::Open;
    }
}

fn place_traps(
    grid: &mut Array2<Cell>,
    solution: &[Coord2],
    requested: CellCount,
    policy: TrapPolicy,
    rng: &mut SmallRng,
) -> Result<CellCount> {
    let mut on_path: Array2<bool> = Array2::default(grid.dim());
    for &coords in solution {
        on_path[coords.to_nd_index()] = true;
    }

    let (cols, rows) = grid_size(grid);
    let mut eligible: Vec<Coord2> = Vec::new();
    for y in 0..rows {
        for x in 0..cols {
            let index = (x, y).to_nd_index();
            if grid[index] == Cell::Open && !on_path[index] {
                eligible.push((x, y));
            }
        }
    }

    let available: CellCount = eligible.len().try_into().unwrap_or(CellCount::MAX);
    let count = if requested <= available {
        requested
    } else {
        match policy {
            TrapPolicy::Strict => {
                return Err(GameError::TooManyTraps {
                    requested,
                    available,
                });
            }
            TrapPolicy::Saturate => {
                log::warn!(
                    "Not enough room for traps, requested {} but only fits {}",
                    requested,
                    available
                );
                available
            }
        }
    };

    for _ in 0..count {
        let pick = rng.random_range(0..eligible.len());
        let coords = eligible.swap_remove(pick);
        grid[coords.to_nd_index()] = Cell::Trap;
    }

    Ok(count)
}
