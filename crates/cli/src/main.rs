// The library target owns these; the binary only drives it.
use anyhow as _;
use clap as _;
use pointerpos_core as _;
use pointerpos_runtime as _;
use tracing_subscriber as _;
#[cfg(test)]
use pointerpos_platform_mock as _;
#[cfg(test)]
use rstest as _;
#[cfg(test)]
use serial_test as _;

fn main() {
    if let Err(error) = pointerpos_cli::run() {
        // run() installs the subscriber right after argument parsing, so the
        // failure lands on stderr and stdout stays empty.
        tracing::error!(%error, "pointer position unavailable");
        std::process::exit(1);
    }
}
