//! Sales computation pipeline
//!
//! Orchestrates a single run: load both documents, compute, then report.
//!
//! # Design
//!
//! The pipeline only sequences the steps, delegating:
//! - JSON loading to `io::json_loader`
//! - The join and sum to `core::aggregator`
//! - Formatting and output to `io::report`
//!
//! Any failure before the report is formatted ends the run, so a failed run
//! never creates or modifies the results file. Timing is a local `Instant`
//! covering loading and computation.

use crate::cli::Arithmetic;
use crate::core::compute;
use crate::io::{
    format_report, load_catalogue, load_sales, print_report, write_report_file, ReportContext,
    DEFAULT_RESULTS_FILE,
};
use crate::types::{ComputationResult, SalesError};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Price catalogue JSON file
    pub price_catalogue: PathBuf,

    /// Sales record JSON file
    pub sales_record: PathBuf,

    /// Results file, overwritten on success
    pub output: PathBuf,

    /// Numeric representation for the total
    pub arithmetic: Arithmetic,
}

impl RunConfig {
    /// Config with the default results file and float arithmetic
    pub fn new(price_catalogue: impl Into<PathBuf>, sales_record: impl Into<PathBuf>) -> Self {
        RunConfig {
            price_catalogue: price_catalogue.into(),
            sales_record: sales_record.into(),
            output: PathBuf::from(DEFAULT_RESULTS_FILE),
            arithmetic: Arithmetic::Float,
        }
    }
}

/// Run the pipeline and write the report
///
/// # Arguments
///
/// * `config` - Input paths, results file and arithmetic mode
/// * `console` - Writer receiving the report lines (stdout in the binary)
///
/// # Returns
///
/// * `Ok(ComputationResult)` once the report has been printed and persisted
/// * `Err(SalesError)` on the first failure; nothing is written in that case
///   unless the failure is in writing the report itself
pub fn run(config: &RunConfig, console: &mut dyn Write) -> Result<ComputationResult, SalesError> {
    let started = Instant::now();

    let price_catalogue = load_catalogue(&config.price_catalogue)?;
    let sales = load_sales(&config.sales_record)?;

    let result = compute(&price_catalogue, &sales, config.arithmetic)?;
    let context = ReportContext::now(started.elapsed());

    if result.total.is_zero() && !result.unmatched.is_empty() {
        warn!("No sale matched the price catalogue");
    }
    info!(
        total = %result.total,
        unmatched = result.unmatched.len(),
        elapsed_ms = context.elapsed.as_millis() as u64,
        "Sales computed"
    );

    let lines = format_report(&result, &context);
    print_report(&lines, console)?;
    write_report_file(&lines, &config.output)?;
    info!(path = %config.output.display(), "Results written");

    Ok(result)
}
