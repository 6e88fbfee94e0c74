use tracing::{debug, info};

use crate::commands::{parse_command, Command};
use crate::spiral::Spiral;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Idle,
    Rendered { bound: u32, text: String },
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State behind the full-screen prompt.
pub struct Session {
    pub input: String,
    pub outcome: Outcome,
    /// (rows, cols) scrolled into the rendered spiral.
    pub scroll: (u16, u16),
}

impl Session {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            outcome: Outcome::Idle,
            scroll: (0, 0),
        }
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn submit(&mut self) -> Flow {
        let line = std::mem::take(&mut self.input);
        match parse_command(&line) {
            Ok(Command::Quit) => {
                info!("quit requested");
                return Flow::Quit;
            }
            Ok(Command::Build(bound)) => {
                let text = Spiral::build(bound).render();
                self.outcome = Outcome::Rendered { bound, text };
            }
            Err(err) => {
                debug!(%err, input = line.as_str(), "invalid input");
                self.outcome = Outcome::Invalid(err.to_string());
            }
        }
        self.scroll = (0, 0);
        Flow::Continue
    }

    /// Scroll within the rendered spiral, clamped to its extent.
    pub fn scroll_by(&mut self, rows: i32, cols: i32) {
        let (max_rows, max_cols) = self.extent();
        let clamp = |cur: u16, delta: i32, max: u16| -> u16 {
            (cur as i32 + delta).clamp(0, max as i32) as u16
        };
        self.scroll = (
            clamp(self.scroll.0, rows, max_rows),
            clamp(self.scroll.1, cols, max_cols),
        );
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = (0, 0);
    }

    fn extent(&self) -> (u16, u16) {
        match &self.outcome {
            Outcome::Rendered { text, .. } => {
                let rows = text.lines().count().saturating_sub(1);
                let cols = text.lines().map(str::len).max().unwrap_or(0).saturating_sub(1);
                (
                    rows.min(u16::MAX as usize) as u16,
                    cols.min(u16::MAX as usize) as u16,
                )
            }
            _ => (0, 0),
        }
    }
}
