#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled(u32),
}

impl Cell {
    pub fn value(self) -> Option<u32> {
        match self {
            Cell::Empty => None,
            Cell::Filled(v) => Some(v),
        }
    }
}

/// Square, row-major grid of cells.
#[derive(Clone, Debug)]
pub struct Grid {
    pub side: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![Cell::Empty; side * side],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.side && y < self.side);
        y * self.side + x
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: Cell) {
        let idx = self.idx(x, y);
        self.cells[idx] = value;
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.side;
        &self.cells[start..start + self.side]
    }
}
