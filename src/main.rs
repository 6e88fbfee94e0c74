use std::error::Error;
use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use number_spiral::cli::Cli;
use number_spiral::{app, io, logging, parse_bound, Spiral};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(&cli) {
        eprintln!("number-spiral: cannot set up logging: {err}");
        return ExitCode::from(1);
    }

    if let Some(bound) = &cli.bound {
        return match parse_bound(bound) {
            Ok(bound) => {
                println!("{}", Spiral::build(bound));
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::from(1)
            }
        };
    }

    let result: Result<(), Box<dyn Error>> = if cli.plain {
        io::run_plain(stdin().lock(), &mut stdout()).map_err(Into::into)
    } else {
        app::run()
    };

    if let Err(err) = result {
        error!(%err, "session failed");
        eprintln!("number-spiral error: {err}");
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
