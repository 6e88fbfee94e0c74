pub mod cursor;
pub mod grid;
pub mod render;

pub use cursor::{Cursor, Direction};
pub use grid::{Cell, Grid};

use tracing::debug;

/// Side length of the square grid needed for values `0..=bound`.
pub fn side_len(bound: u32) -> usize {
    bound.isqrt() as usize + 1
}

/// Row and column where 0 is placed.
pub fn start_index(side: usize) -> usize {
    (side + 1) / 2 - 1
}

/// Values `0..=bound` laid out in a clockwise spiral around 0.
#[derive(Clone, Debug)]
pub struct Spiral {
    bound: u32,
    grid: Grid,
}

impl Spiral {
    pub fn build(bound: u32) -> Self {
        let side = side_len(bound);
        let mut grid = Grid::new(side);
        let mut cursor = Cursor::new(start_index(side));

        for current in 0..=bound {
            let (x, y) = cursor.position();
            grid.set(x, y, Cell::Filled(current));
            if current < bound {
                cursor.advance(current);
            }
        }

        debug!(bound, side, "built spiral");
        Self { bound, grid }
    }

    pub fn bound(&self) -> u32 {
        self.bound
    }

    pub fn side(&self) -> usize {
        self.grid.side
    }

    pub fn center(&self) -> (usize, usize) {
        let start = start_index(self.grid.side);
        (start, start)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.grid.side || y >= self.grid.side {
            return None;
        }
        self.grid.get(x, y).value()
    }

    pub fn position_of(&self, value: u32) -> Option<(usize, usize)> {
        if value > self.bound {
            return None;
        }
        self.grid
            .cells
            .iter()
            .position(|c| *c == Cell::Filled(value))
            .map(|i| (i % self.grid.side, i / self.grid.side))
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_matches_floor_sqrt_plus_one() {
        assert_eq!(side_len(0), 1);
        assert_eq!(side_len(1), 2);
        assert_eq!(side_len(3), 2);
        assert_eq!(side_len(4), 3);
        assert_eq!(side_len(24), 5);
        assert_eq!(side_len(25), 6);
        assert_eq!(side_len(33), 6);
        assert_eq!(side_len(u32::MAX), 65536);
        for n in 0..2000u32 {
            let expected = ((n as f64).sqrt() + 1.0).floor() as usize;
            assert_eq!(side_len(n), expected, "n = {n}");
            assert!(side_len(n) * side_len(n) >= n as usize + 1);
        }
    }

    #[test]
    fn start_is_ceil_half_minus_one() {
        assert_eq!(start_index(1), 0);
        assert_eq!(start_index(2), 0);
        assert_eq!(start_index(3), 1);
        assert_eq!(start_index(4), 1);
        assert_eq!(start_index(5), 2);
        assert_eq!(start_index(6), 2);
        for side in 1..200usize {
            let expected = (side as f64 / 2.0).ceil() as usize - 1;
            assert_eq!(start_index(side), expected, "side = {side}");
        }
    }

    #[test]
    fn zero_sits_at_center() {
        for n in 0..300 {
            let spiral = Spiral::build(n);
            assert_eq!(spiral.position_of(0), Some(spiral.center()), "n = {n}");
            let (cx, cy) = spiral.center();
            assert_eq!(spiral.get(cx, cy), Some(0));
        }
    }

    #[test]
    fn every_value_placed_once() {
        for n in [0, 1, 2, 7, 24, 25, 33, 99, 100, 257] {
            let spiral = Spiral::build(n);
            let mut values: Vec<u32> = spiral
                .grid()
                .cells
                .iter()
                .filter_map(|c| c.value())
                .collect();
            values.sort_unstable();
            assert_eq!(values, (0..=n).collect::<Vec<_>>(), "n = {n}");
        }
    }

    #[test]
    fn single_cell_for_zero() {
        let spiral = Spiral::build(0);
        assert_eq!(spiral.side(), 1);
        assert_eq!(spiral.get(0, 0), Some(0));
        assert_eq!(spiral.get(1, 0), None);
    }

    #[test]
    fn perfect_fill_has_no_empty_cells() {
        let spiral = Spiral::build(24);
        assert!(spiral.grid().cells.iter().all(|c| *c != Cell::Empty));
        assert_eq!(spiral.get(0, 0), Some(20));
        assert_eq!(spiral.get(4, 4), Some(12));
    }

    #[test]
    fn overflow_cells_stay_empty() {
        let spiral = Spiral::build(25);
        assert_eq!(spiral.position_of(25), Some((5, 0)));
        assert_eq!(spiral.get(5, 1), None);
        assert_eq!(spiral.position_of(26), None);
    }
}
