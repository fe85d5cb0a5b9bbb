//! Command-line front end: query the pointer once and print `x,y`.

mod commands;
#[cfg(test)]
mod test_support;
mod util;

use clap::Parser;
use pointerpos_runtime::PointerQuery;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

pub use commands::position::format_position;
pub use util::CliResult;

#[derive(Parser, Debug)]
#[command(
    name = "pointerpos",
    version,
    about = "Print the current global pointer position as x,y",
    long_about = "Print the current global pointer position as x,y.\n\n\
                  Coordinates are rounded to the nearest whole display unit (ties to even). \
                  Exits with status 1 and prints nothing to stdout if the position cannot be read."
)]
pub struct Cli {}

pub fn run() -> CliResult<()> {
    let _cli = Cli::parse();
    init_tracing();

    let query = PointerQuery::new();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with(&query, &mut handle)
}

/// Performs the query and writes the line to `out`. Nothing is written when
/// the query fails.
pub fn run_with(query: &PointerQuery, out: &mut impl Write) -> CliResult<()> {
    let line = commands::position::run(query)?;
    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Ignore the error when a subscriber is already installed (tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
