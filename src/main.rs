//! Sales Total Calculator CLI
//!
//! Command-line interface for computing total sales from JSON input files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- priceCatalogue.json salesRecord.json
//! cargo run -- --output results.txt priceCatalogue.json salesRecord.json
//! cargo run -- --arithmetic decimal -vv priceCatalogue.json salesRecord.json
//! ```
//!
//! The report is printed to stdout and written to `SalesResults.txt` (or the
//! `--output` path). Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed JSON, invalid data, write failure)
//! - 2: Usage error (wrong number of arguments, unknown option)

use compute_sales::cli;
use compute_sales::pipeline;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    cli::init_logging(args.verbose);

    let config = args.to_run_config();

    // Report goes to stdout; nothing is written if loading or computing fails
    let mut console = std::io::stdout();
    if let Err(e) = pipeline::run(&config, &mut console) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
