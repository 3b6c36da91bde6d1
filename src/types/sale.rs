//! Sale record and catalogue field definitions
//!
//! Sale records are kept as opaque JSON objects: only `Product` and
//! `Quantity` are interpreted, every other field is carried along untouched
//! so unmatched records can be echoed exactly as they were read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Catalogue field holding the product title
pub const TITLE_FIELD: &str = "title";

/// Catalogue field holding the unit price
pub const PRICE_FIELD: &str = "price";

/// Sale field naming the product sold
pub const PRODUCT_FIELD: &str = "Product";

/// Sale field holding the quantity sold
pub const QUANTITY_FIELD: &str = "Quantity";

/// A single sale record as read from the sales document
///
/// Field order is preserved, so serializing the record reproduces the input
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleRecord(Map<String, Value>);

impl SaleRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        SaleRecord(fields)
    }

    /// The product title, if present and a string
    pub fn product(&self) -> Option<&str> {
        self.0.get(PRODUCT_FIELD).and_then(Value::as_str)
    }

    /// The raw quantity value, if present
    pub fn quantity(&self) -> Option<&Value> {
        self.0.get(QUANTITY_FIELD)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl TryFrom<Value> for SaleRecord {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(SaleRecord(fields)),
            other => Err(other),
        }
    }
}

/// Compact JSON rendering, as shown in the report
impl fmt::Display for SaleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Human-readable name of a JSON value's type, for diagnostics
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
