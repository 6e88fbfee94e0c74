use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::commands::{parse_command, Command};
use crate::spiral::Spiral;
use crate::PROMPT;

/// Line-oriented prompt loop. Ends on the quit command or end of input.
pub fn run_plain<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => {
                info!("quit requested");
                return Ok(());
            }
            Ok(Command::Build(bound)) => {
                write!(out, "{}", Spiral::build(bound))?;
            }
            Err(err) => {
                debug!(%err, "invalid input");
                writeln!(out, "\n{err}")?;
            }
        }
        write!(out, "\n{PROMPT}")?;
        out.flush()?;
    }
    debug!("input closed");
    Ok(())
}
