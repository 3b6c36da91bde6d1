//! JSON document loader
//!
//! Reads an input file and parses it into a generic `serde_json::Value`.
//! The whole document is read at once; inputs are small batch files.
//!
//! # Error Handling
//!
//! - Missing file: `SalesError::NotFound`
//! - Any other read failure (permissions, directory): `SalesError::Io`
//! - Content that is not valid JSON, including invalid UTF-8:
//!   `SalesError::MalformedInput`
//!
//! No partial value is ever returned.

use crate::types::SalesError;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Load and parse a JSON document
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Returns
///
/// * `Ok(Value)` - The parsed document
/// * `Err(SalesError)` - `NotFound`, `Io` or `MalformedInput`, naming the path
pub fn load_json(path: &Path) -> Result<Value, SalesError> {
    let contents = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SalesError::not_found(path),
        _ => SalesError::io(path, &e),
    })?;

    serde_json::from_slice(&contents).map_err(|e| SalesError::malformed_input(path, &e))
}

/// Load the price catalogue document
pub fn load_catalogue(path: &Path) -> Result<Value, SalesError> {
    let catalogue = load_json(path)?;
    debug!(
        path = %path.display(),
        entries = catalogue.as_array().map(Vec::len),
        "Loaded price catalogue"
    );
    Ok(catalogue)
}

/// Load the sales record document
pub fn load_sales(path: &Path) -> Result<Value, SalesError> {
    let sales = load_json(path)?;
    debug!(
        path = %path.display(),
        records = sales.as_array().map(Vec::len),
        "Loaded sales records"
    );
    Ok(sales)
}
