pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod io;
pub mod logging;
pub mod spiral;
pub mod ui;

pub use commands::{parse_bound, parse_command, Command, InputError};
pub use config::{
    APP_TITLE, CONTROLS_H, INPUT_H, MIN_PANE_WIDTH, PAGE_STEP, POLL_MS, PROMPT, QUIT_COMMAND,
};
pub use spiral::Spiral;
