//! Report formatting and output
//!
//! Turns a `ComputationResult` into the report lines shown to the operator,
//! prints them, and persists them to the results file.
//!
//! Formatting is pure (no I/O) for easy testing; the clock is read by the
//! caller and passed in through `ReportContext`.

use crate::types::{ComputationResult, SalesError};
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Default name of the persisted results file
pub const DEFAULT_RESULTS_FILE: &str = "SalesResults.txt";

/// Timestamp layout used in the report header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Run metadata shown alongside the result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportContext {
    /// When the report was produced (local time)
    pub timestamp: NaiveDateTime,

    /// Wall-clock time spent loading and computing
    pub elapsed: Duration,
}

impl ReportContext {
    /// Context stamped with the current local time
    pub fn now(elapsed: Duration) -> Self {
        ReportContext {
            timestamp: Local::now().naive_local(),
            elapsed,
        }
    }
}

/// Format the report lines
///
/// Produces, in order: a header with the timestamp, the total formatted to
/// two decimal places, the execution time in seconds, the invalid-records
/// header, then one indented line per unmatched sale in input order.
pub fn format_report(result: &ComputationResult, context: &ReportContext) -> Vec<String> {
    let mut lines = Vec::with_capacity(4 + result.unmatched.len());

    lines.push(format!(
        "Sales Results (computed on {}):",
        context.timestamp.format(TIMESTAMP_FORMAT)
    ));
    lines.push(format!("Total Sales Amount: ${}", result.total));
    lines.push(format!(
        "Execution Time: {:.2} seconds",
        context.elapsed.as_secs_f64()
    ));
    lines.push("Invalid Sales Records:".to_string());
    lines.extend(result.unmatched.iter().map(|sale| format!("  {}", sale)));

    lines
}

/// Print report lines to the console, one per line
pub fn print_report(lines: &[String], output: &mut dyn Write) -> Result<(), SalesError> {
    for line in lines {
        writeln!(output, "{}", line).map_err(|e| SalesError::output_write("console", &e))?;
    }

    output
        .flush()
        .map_err(|e| SalesError::output_write("console", &e))
}

/// Persist report lines, overwriting any existing file
///
/// Lines are joined with `\n`; no trailing newline is added.
pub fn write_report_file(lines: &[String], path: &Path) -> Result<(), SalesError> {
    fs::write(path, lines.join("\n"))
        .map_err(|e| SalesError::output_write(&path.display().to_string(), &e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SaleRecord, SalesTotal};
    use chrono::NaiveDate;
    use rstest::rstest;
    use serde_json::json;

    fn context(elapsed: Duration) -> ReportContext {
        ReportContext {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 7)
                .and_then(|date| date.and_hms_opt(9, 5, 1))
                .unwrap(),
            elapsed,
        }
    }

    fn sale(value: serde_json::Value) -> SaleRecord {
        SaleRecord::try_from(value).unwrap()
    }

    #[test]
    fn test_format_report_without_unmatched() {
        let result = ComputationResult {
            total: SalesTotal::Float(19.98),
            unmatched: vec![],
        };

        let lines = format_report(&result, &context(Duration::from_millis(10)));

        assert_eq!(
            lines,
            vec![
                "Sales Results (computed on 2024-03-07 09:05:01):",
                "Total Sales Amount: $19.98",
                "Execution Time: 0.01 seconds",
                "Invalid Sales Records:",
            ]
        );
    }

    #[test]
    fn test_format_report_lists_unmatched_in_order() {
        let result = ComputationResult {
            total: SalesTotal::Float(0.0),
            unmatched: vec![
                sale(json!({"Product": "Gadget", "Quantity": 1})),
                sale(json!({"SALE_ID": 7, "Product": "Gizmo", "Quantity": 2.5})),
            ],
        };

        let lines = format_report(&result, &context(Duration::ZERO));

        assert_eq!(lines[1], "Total Sales Amount: $0.00");
        assert_eq!(lines[3], "Invalid Sales Records:");
        assert_eq!(lines[4], r#"  {"Product":"Gadget","Quantity":1}"#);
        assert_eq!(lines[5], r#"  {"SALE_ID":7,"Product":"Gizmo","Quantity":2.5}"#);
        assert_eq!(lines.len(), 6);
    }

    #[rstest]
    #[case::zero(Duration::ZERO, "Execution Time: 0.00 seconds")]
    #[case::rounds_down(Duration::from_millis(1234), "Execution Time: 1.23 seconds")]
    #[case::rounds_up(Duration::from_millis(1236), "Execution Time: 1.24 seconds")]
    fn test_execution_time_line(#[case] elapsed: Duration, #[case] expected: &str) {
        let result = ComputationResult {
            total: SalesTotal::Float(0.0),
            unmatched: vec![],
        };

        let lines = format_report(&result, &context(elapsed));

        assert_eq!(lines[2], expected);
    }

    #[test]
    fn test_print_report_writes_each_line() {
        let lines = vec!["first".to_string(), "second".to_string()];
        let mut output = Vec::new();

        print_report(&lines, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_write_report_file_overwrites_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_RESULTS_FILE);
        fs::write(&path, "stale content that is longer than the report").unwrap();

        let lines = vec!["first".to_string(), "second".to_string()];
        write_report_file(&lines, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond");
    }

    #[test]
    fn test_write_report_file_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_RESULTS_FILE);

        let result = write_report_file(&["line".to_string()], &path);

        assert!(matches!(result, Err(SalesError::OutputWrite { .. })));
    }
}
