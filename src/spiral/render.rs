use std::fmt::{self, Write};

use super::{Cell, Spiral};

impl Spiral {
    /// Render as right-aligned columns, one row per line. Rows with no values
    /// are dropped and trailing blanks are stripped.
    pub fn render(&self) -> String {
        let width = self.bound().to_string().len();
        let grid = self.grid();

        let mut lines = Vec::with_capacity(grid.side);
        let mut line = String::with_capacity(grid.side * (width + 1));
        for y in 0..grid.side {
            line.clear();
            for cell in grid.row(y) {
                match cell {
                    Cell::Filled(v) => {
                        let _ = write!(line, "{v:>width$} ");
                    }
                    Cell::Empty => {
                        line.extend(std::iter::repeat(' ').take(width + 1));
                    }
                }
            }
            let trimmed = line.trim_end();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }

        lines.join("\n").trim_end().to_string()
    }
}

impl fmt::Display for Spiral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
