use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for maze width, height, and positions.
pub type Coord = u8;

/// Count type used for trap counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Maps `(x, y)` onto the row-major `[y, x]` index of a `(rows, cols)` array.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Size `(cols, rows)` of a grid stored as `(rows, cols)`.
pub(crate) fn grid_size<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    (
        cols.try_into().unwrap_or(Coord::MAX),
        rows.try_into().unwrap_or(Coord::MAX),
    )
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Scan order used by neighbour iteration and path search.
    pub const ALL: [Direction; 4] = [Self::Right, Self::Left, Self::Down, Self::Up];

    pub const fn delta(self) -> (isize, isize) {
        use Direction::*;
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    /// Moves `coords` by `steps` cells in this direction, staying inside `bounds`.
    pub fn step(self, coords: Coord2, steps: isize, bounds: Coord2) -> Option<Coord2> {
        let (dx, dy) = self.delta();
        apply_delta(coords, (dx * steps, dy * steps), bounds)
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, grid_size(self))
    }
}

/// Orthogonal neighbours of a cell, in [`Direction::ALL`] order.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let direction = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            let next_item = direction.step(self.center, 1, self.bounds);
            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
