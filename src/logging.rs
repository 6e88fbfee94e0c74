use std::error::Error;
use std::fs::File;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,number_spiral=debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `-v` when set.
///
/// The full-screen UI owns the terminal, so without `--log-file` it gets no
/// subscriber at all.
pub fn init(cli: &Cli) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()?;
        }
        None if cli.interactive() => {}
        None => builder.with_writer(io::stderr).try_init()?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "info,number_spiral=debug");
        assert_eq!(default_filter(5), "trace");
    }

    #[test]
    fn file_logging_installs_subscriber() {
        let path = std::env::temp_dir().join(format!("number-spiral-{}.log", std::process::id()));
        let cli = Cli {
            bound: None,
            plain: false,
            verbose: 1,
            log_file: Some(path.clone()),
        };
        assert!(init(&cli).is_ok());
        tracing::info!("subscriber ready");
        assert!(path.exists());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn full_screen_without_file_skips_subscriber() {
        let cli = Cli {
            bound: None,
            plain: false,
            verbose: 0,
            log_file: None,
        };
        assert!(init(&cli).is_ok());
    }
}
