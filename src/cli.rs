use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "number-spiral", version)]
#[command(about = "Print the integers 0..=N as a clockwise spiral")]
pub struct Cli {
    /// Print the spiral for this upper bound and exit
    #[arg(value_name = "BOUND", allow_negative_numbers = true)]
    pub bound: Option<String>,

    /// Use a line-oriented prompt on stdin/stdout instead of the full-screen UI
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn interactive(&self) -> bool {
        self.bound.is_none() && !self.plain
    }
}
