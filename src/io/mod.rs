//! I/O module
//!
//! Handles JSON input loading and report output.
//!
//! # Components
//!
//! - `json_loader` - Reads and parses the catalogue and sales documents
//! - `report` - Report formatting, console printing and results file

pub mod json_loader;
pub mod report;

pub use json_loader::{load_catalogue, load_json, load_sales};
pub use report::{
    format_report, print_report, write_report_file, ReportContext, DEFAULT_RESULTS_FILE,
};
