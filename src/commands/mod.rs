use thiserror::Error;
use tracing::debug;

use crate::QUIT_COMMAND;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Build(u32),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid positive integer value.")]
    InvalidNumber,
    #[error("Please enter a positive integer.")]
    Negative,
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    if line.eq_ignore_ascii_case(QUIT_COMMAND) {
        return Ok(Command::Quit);
    }
    parse_bound(line).map(Command::Build)
}

/// Accepts anything that fits a signed 32-bit integer, then rejects negatives.
pub fn parse_bound(text: &str) -> Result<u32, InputError> {
    let value: i32 = text.trim().parse().map_err(|_| {
        debug!(input = text, "rejected non-numeric bound");
        InputError::InvalidNumber
    })?;
    u32::try_from(value).map_err(|_| {
        debug!(value, "rejected negative bound");
        InputError::Negative
    })
}
