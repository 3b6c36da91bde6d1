// CLI module
// Command-line interface, argument parsing and log setup

mod args;

pub use args::{Arithmetic, CliArgs};

use clap::Parser;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// If parsing fails (wrong number of files, unknown option, or --help),
/// clap prints the usage text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Log filter for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing for the binary
///
/// Logs go to stderr so stdout carries only the report. `RUST_LOG`, when
/// set, takes precedence over the verbosity flag.
pub fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    debug!("compute-sales started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
