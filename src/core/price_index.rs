//! Price index for product lookups
//!
//! This module provides the PriceIndex component: a title to unit price map
//! built once from the price catalogue for each computation and discarded
//! afterwards.
//!
//! # Duplicate Handling
//!
//! The catalogue format does not enforce unique titles. When a title appears
//! more than once, the last entry wins and replaces the earlier price.

use crate::types::{value_kind, SalesError, PRICE_FIELD, TITLE_FIELD};
use serde_json::{Number, Value};
use std::collections::HashMap;
use tracing::debug;

/// Price index for the sales join
///
/// Maintains a HashMap of product title to unit price. Prices are kept as
/// JSON numbers so either arithmetic mode can convert them losslessly.
#[derive(Debug, Clone, Default)]
pub struct PriceIndex {
    /// Map of product title to unit price
    prices: HashMap<String, Number>,
}

impl PriceIndex {
    /// Create a new empty price index
    pub fn new() -> Self {
        PriceIndex {
            prices: HashMap::new(),
        }
    }

    /// Build the index from a parsed price catalogue
    ///
    /// # Arguments
    ///
    /// * `catalogue` - The parsed catalogue document, expected to be an array
    ///   of `{"title": string, "price": number}` objects
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document is not an array, or an entry is not an object
    /// - An entry lacks `title` or `price`
    /// - A `title` is not a string or a `price` is not a number
    pub fn from_catalogue(catalogue: &Value) -> Result<Self, SalesError> {
        let entries = catalogue.as_array().ok_or_else(|| {
            SalesError::type_mismatch(
                "price catalogue",
                format!("expected an array, found {}", value_kind(catalogue)),
            )
        })?;

        let mut index = PriceIndex::new();

        for (position, entry) in entries.iter().enumerate() {
            let context = format!("price catalogue entry {}", position);

            let fields = entry.as_object().ok_or_else(|| {
                SalesError::type_mismatch(
                    &context,
                    format!("expected an object, found {}", value_kind(entry)),
                )
            })?;

            let title = fields
                .get(TITLE_FIELD)
                .ok_or_else(|| SalesError::missing_field(&context, TITLE_FIELD))?;
            let title = title.as_str().ok_or_else(|| {
                SalesError::type_mismatch(
                    &context,
                    format!(
                        "expected a string for '{}', found {}",
                        TITLE_FIELD,
                        value_kind(title)
                    ),
                )
            })?;

            let price = match fields.get(PRICE_FIELD) {
                Some(Value::Number(price)) => price.clone(),
                Some(other) => {
                    return Err(SalesError::type_mismatch(
                        &context,
                        format!(
                            "expected a number for '{}', found {}",
                            PRICE_FIELD,
                            value_kind(other)
                        ),
                    ))
                }
                None => return Err(SalesError::missing_field(&context, PRICE_FIELD)),
            };

            index.insert(title, price);
        }

        Ok(index)
    }

    /// Insert a price, replacing any earlier price for the same title
    pub fn insert(&mut self, title: &str, price: Number) {
        if let Some(previous) = self.prices.insert(title.to_string(), price) {
            debug!(title, %previous, "Duplicate catalogue title, keeping last price");
        }
    }

    /// Look up the unit price for a product title
    pub fn get(&self, title: &str) -> Option<&Number> {
        self.prices.get(title)
    }

    /// Number of distinct titles in the index
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_new_index_is_empty() {
        let index = PriceIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.get("Widget").is_none());
    }

    #[test]
    fn test_from_catalogue_indexes_titles() {
        let catalogue = json!([
            {"title": "A", "price": 1.0},
            {"title": "B", "price": 2.5}
        ]);

        let index = PriceIndex::from_catalogue(&catalogue).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("A").and_then(Number::as_f64), Some(1.0));
        assert_eq!(index.get("B").and_then(Number::as_f64), Some(2.5));
    }

    #[test]
    fn test_duplicate_title_last_entry_wins() {
        let catalogue = json!([
            {"title": "A", "price": 1.0},
            {"title": "B", "price": 4.0},
            {"title": "A", "price": 2.0}
        ]);

        let index = PriceIndex::from_catalogue(&catalogue).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("A").and_then(Number::as_f64), Some(2.0));
    }

    #[test]
    fn test_extra_catalogue_fields_are_ignored() {
        let catalogue = json!([
            {"category": "furniture", "title": "Chair", "type": "indoor", "price": 63.47}
        ]);

        let index = PriceIndex::from_catalogue(&catalogue).unwrap();
        assert_eq!(index.get("Chair").and_then(Number::as_f64), Some(63.47));
    }

    #[test]
    fn test_empty_catalogue() {
        let index = PriceIndex::from_catalogue(&json!([])).unwrap();
        assert!(index.is_empty());
    }

    #[rstest]
    #[case::not_array(json!({"title": "A", "price": 1.0}), "price catalogue")]
    #[case::entry_not_object(json!(["A"]), "price catalogue entry 0")]
    #[case::title_not_string(json!([{"title": 7, "price": 1.0}]), "price catalogue entry 0")]
    #[case::price_not_number(json!([{"title": "A", "price": "1.00"}]), "price catalogue entry 0")]
    #[case::price_null(json!([{"title": "A", "price": 1}, {"title": "B", "price": null}]), "price catalogue entry 1")]
    fn test_type_mismatch(#[case] catalogue: Value, #[case] expected_context: &str) {
        let result = PriceIndex::from_catalogue(&catalogue);
        match result {
            Err(SalesError::TypeMismatch { context, .. }) => {
                assert_eq!(context, expected_context)
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
    }

    #[rstest]
    #[case::missing_title(json!([{"price": 1.0}]), "title")]
    #[case::missing_price(json!([{"title": "A"}]), "price")]
    fn test_missing_field(#[case] catalogue: Value, #[case] expected_field: &str) {
        let result = PriceIndex::from_catalogue(&catalogue);
        assert_eq!(
            result.unwrap_err(),
            SalesError::missing_field("price catalogue entry 0", expected_field)
        );
    }
}
