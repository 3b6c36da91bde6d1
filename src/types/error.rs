//! Error types for the sales calculator
//!
//! This module defines all error types that can occur while loading the input
//! documents, computing the sales total and writing the report.
//!
//! # Error Categories
//!
//! - **Input Errors**: File not found, unreadable file, malformed JSON
//! - **Data Errors**: Values of the wrong type, required fields missing
//! - **Output Errors**: Console or results file could not be written
//!
//! Every error is terminal for a run: nothing is retried, and no report is
//! written once an error has been raised.

use std::path::Path;
use thiserror::Error;

/// Main error type for the sales calculator
///
/// Each variant carries enough context (file path, record position, field
/// name) to point the operator at the offending input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SalesError {
    /// Input file does not exist
    #[error("File not found: {path}")]
    NotFound {
        /// The path that was not found
        path: String,
    },

    /// Input file exists but its content is not valid JSON
    #[error("Invalid JSON format in file {path}{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedInput {
        /// The path of the malformed file
        path: String,
        /// Line number where parsing failed (if available)
        line: Option<usize>,
        /// Description of the parsing error
        message: String,
    },

    /// Input file could not be read for a reason other than absence
    #[error("I/O error reading {path}: {message}")]
    Io {
        /// The path that failed
        path: String,
        /// Description of the I/O error
        message: String,
    },

    /// A value cannot take part in the computation
    ///
    /// Raised for non-array documents, non-object records, non-string titles
    /// and non-numeric prices or quantities.
    #[error("Type mismatch in {context}: {message}")]
    TypeMismatch {
        /// Where the value was found (e.g. "sale record 3")
        context: String,
        /// What was expected and what was found
        message: String,
    },

    /// A required field is absent
    #[error("Missing field '{field}' in {context}")]
    MissingField {
        /// Where the field was expected
        context: String,
        /// Name of the missing field
        field: String,
    },

    /// Writing the report failed
    #[error("Failed to write {target}: {message}")]
    OutputWrite {
        /// Console or results file path
        target: String,
        /// Description of the I/O error
        message: String,
    },
}

impl SalesError {
    /// Create a NotFound error
    pub fn not_found(path: &Path) -> Self {
        SalesError::NotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a MalformedInput error from a serde_json parse failure
    pub fn malformed_input(path: &Path, error: &serde_json::Error) -> Self {
        // serde_json reports line 0 when no position applies
        let line = Some(error.line()).filter(|&l| l > 0);

        SalesError::MalformedInput {
            path: path.display().to_string(),
            line,
            message: error.to_string(),
        }
    }

    /// Create an Io error
    pub fn io(path: &Path, error: &std::io::Error) -> Self {
        SalesError::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a TypeMismatch error
    pub fn type_mismatch(context: &str, message: impl Into<String>) -> Self {
        SalesError::TypeMismatch {
            context: context.to_string(),
            message: message.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(context: &str, field: &str) -> Self {
        SalesError::MissingField {
            context: context.to_string(),
            field: field.to_string(),
        }
    }

    /// Create an OutputWrite error
    pub fn output_write(target: &str, error: &std::io::Error) -> Self {
        SalesError::OutputWrite {
            target: target.to_string(),
            message: error.to_string(),
        }
    }

    /// Whether this error was raised while loading an input file
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SalesError::NotFound { .. } | SalesError::MalformedInput { .. } | SalesError::Io { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::not_found(
        SalesError::NotFound { path: "prices.json".to_string() },
        "File not found: prices.json"
    )]
    #[case::malformed_with_line(
        SalesError::MalformedInput { path: "sales.json".to_string(), line: Some(3), message: "EOF while parsing".to_string() },
        "Invalid JSON format in file sales.json at line 3: EOF while parsing"
    )]
    #[case::malformed_without_line(
        SalesError::MalformedInput { path: "sales.json".to_string(), line: None, message: "bad".to_string() },
        "Invalid JSON format in file sales.json: bad"
    )]
    #[case::io(
        SalesError::Io { path: "dir".to_string(), message: "Is a directory".to_string() },
        "I/O error reading dir: Is a directory"
    )]
    #[case::type_mismatch(
        SalesError::TypeMismatch { context: "sale record 2".to_string(), message: "expected a number for 'Quantity', found string".to_string() },
        "Type mismatch in sale record 2: expected a number for 'Quantity', found string"
    )]
    #[case::missing_field(
        SalesError::MissingField { context: "price catalogue entry 0".to_string(), field: "price".to_string() },
        "Missing field 'price' in price catalogue entry 0"
    )]
    #[case::output_write(
        SalesError::OutputWrite { target: "SalesResults.txt".to_string(), message: "Permission denied".to_string() },
        "Failed to write SalesResults.txt: Permission denied"
    )]
    fn test_error_display(#[case] error: SalesError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::not_found(SalesError::not_found(Path::new("a.json")), true)]
    #[case::io(
        SalesError::io(Path::new("a.json"), &std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")),
        true
    )]
    #[case::type_mismatch(SalesError::type_mismatch("sales", "expected an array"), false)]
    #[case::missing_field(SalesError::missing_field("sale record 0", "Quantity"), false)]
    fn test_is_input_error(#[case] error: SalesError, #[case] expected: bool) {
        assert_eq!(error.is_input_error(), expected);
    }

    #[test]
    fn test_malformed_input_keeps_line_number() {
        let parse_error = serde_json::from_str::<serde_json::Value>("[\n{\"title\": }")
            .expect_err("input is not valid JSON");
        let error = SalesError::malformed_input(Path::new("prices.json"), &parse_error);

        match error {
            SalesError::MalformedInput { path, line, .. } => {
                assert_eq!(path, "prices.json");
                assert_eq!(line, Some(2));
            }
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }
}
