/// Movement along the spiral. Clockwise order: right, down, left, up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }

    pub fn turned(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }
}

/// Write position plus the leg bookkeeping that decides where to turn.
///
/// `x_legs` and `y_legs` grow 1,1,2,2,3,3,...; a turn is due when the value
/// just written equals their product.
#[derive(Clone, Debug)]
pub struct Cursor {
    pub x: i64,
    pub y: i64,
    pub direction: Direction,
    pub x_legs: u64,
    pub y_legs: u64,
}

impl Cursor {
    pub fn new(start: usize) -> Self {
        Self {
            x: start as i64,
            y: start as i64,
            direction: Direction::Right,
            x_legs: 1,
            y_legs: 1,
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x as usize, self.y as usize)
    }

    pub fn is_turn_point(&self, current: u32) -> bool {
        u64::from(current) == self.x_legs * self.y_legs
    }

    /// Move past `current`, turning first if it ends a leg.
    pub fn advance(&mut self, current: u32) {
        if self.is_turn_point(current) {
            if self.direction.is_horizontal() {
                self.x_legs += 1;
            } else {
                self.y_legs += 1;
            }
            self.direction = self.direction.turned();
        }
        self.step();
    }

    fn step(&mut self) {
        let (dx, dy) = self.direction.delta();
        self.x += dx;
        self.y += dy;
    }
}
