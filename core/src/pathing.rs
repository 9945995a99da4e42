use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Cells from source to destination inclusive, each step orthogonally adjacent.
///
/// An empty path means the destination cannot be reached.
pub type Path = Vec<Coord2>;

/// Breadth-first search over passable cells, traps included.
///
/// Returns one of the shortest paths from `from` to `to`; ties are broken by the
/// neighbour scan order of [`Direction::ALL`]. Endpoints outside the grid give an
/// empty path.
pub fn shortest_path(grid: &Array2<Cell>, from: Coord2, to: Coord2) -> Path {
    let (cols, rows) = grid_size(grid);
    let in_bounds = |(x, y): Coord2| x < cols && y < rows;
    if !in_bounds(from) || !in_bounds(to) {
        return Path::new();
    }

    let mut visited: Array2<bool> = Array2::default(grid.dim());
    let mut previous: Array2<Option<Coord2>> = Array2::default(grid.dim());
    let mut frontier = VecDeque::from([from]);
    visited[from.to_nd_index()] = true;

    while let Some(coords) = frontier.pop_front() {
        if coords == to {
            return trace_back(&previous, from, to);
        }

        for next in grid.iter_neighbors(coords) {
            let index = next.to_nd_index();
            if visited[index] || grid[index].is_wall() {
                continue;
            }
            visited[index] = true;
            previous[index] = Some(coords);
            frontier.push_back(next);
        }
    }

    log::trace!("No path from {:?} to {:?}", from, to);
    Path::new()
}

/// Number of walkable cells connected to `from`, counting `from` itself.
pub fn reachable_count(grid: &Array2<Cell>, from: Coord2) -> CellCount {
    let (cols, rows) = grid_size(grid);
    if from.0 >= cols || from.1 >= rows || grid[from.to_nd_index()].is_wall() {
        return 0;
    }

    let mut visited: Array2<bool> = Array2::default(grid.dim());
    let mut to_visit = vec![from];
    visited[from.to_nd_index()] = true;
    let mut count: CellCount = 0;

    while let Some(coords) = to_visit.pop() {
        count += 1;
        for next in grid.iter_neighbors(coords) {
            let index = next.to_nd_index();
            if !visited[index] && grid[index].is_passable() {
                visited[index] = true;
                to_visit.push(next);
            }
        }
    }
    count
}

fn trace_back(previous: &Array2<Option<Coord2>>, from: Coord2, to: Coord2) -> Path {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        let Some(prev) = previous[current.to_nd_index()] else {
            break;
        };
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
