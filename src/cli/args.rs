use crate::io::DEFAULT_RESULTS_FILE;
use crate::pipeline::RunConfig;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Compute total sales from a price catalogue and a sales record file
#[derive(Parser, Debug)]
#[command(name = "compute-sales")]
#[command(about = "Compute total sales from a price catalogue and sales records", long_about = None)]
pub struct CliArgs {
    /// JSON file with the product price catalogue
    #[arg(
        value_name = "PRICE_CATALOGUE",
        help = "Path to the price catalogue JSON file"
    )]
    pub price_catalogue: PathBuf,

    /// JSON file with the sales records
    #[arg(value_name = "SALES_RECORD", help = "Path to the sales record JSON file")]
    pub sales_record: PathBuf,

    /// Where the results are persisted
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = DEFAULT_RESULTS_FILE,
        help = "Results file to write (overwritten if it exists)"
    )]
    pub output: PathBuf,

    /// Numeric representation for the running total
    #[arg(
        long = "arithmetic",
        value_name = "MODE",
        default_value = "float",
        help = "Arithmetic mode: 'float' matches previous reports, 'decimal' is exact"
    )]
    pub arithmetic: Arithmetic,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available arithmetic modes for the sales total
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Arithmetic {
    Float,
    Decimal,
}

impl CliArgs {
    /// Create a RunConfig from CLI arguments
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig {
            price_catalogue: self.price_catalogue.clone(),
            sales_record: self.sales_record.clone(),
            output: self.output.clone(),
            arithmetic: self.arithmetic,
        }
    }
}
