//! Sales aggregation
//!
//! This module joins the sales list against the price catalogue and reduces
//! the matched sales to a single total, collecting the unmatched ones.
//!
//! The aggregator enforces these rules:
//! - A sale is unmatched if and only if its `Product` is not a catalogue title.
//!   A missing, null or non-string `Product` is unmatched, not an error.
//! - Unmatched sales are kept verbatim and in input order.
//! - A matched sale must carry a numeric `Quantity`.

use crate::cli::Arithmetic;
use crate::core::accumulator::create_accumulator;
use crate::core::price_index::PriceIndex;
use crate::types::{
    value_kind, ComputationResult, SaleRecord, SalesError, PRODUCT_FIELD, QUANTITY_FIELD,
};
use serde_json::Value;
use tracing::{debug, trace};

/// Compute the sales total and the unmatched sales
///
/// Builds a fresh price index from the catalogue, then walks the sales once
/// in input order. Pure: inputs are not modified and calling it twice with
/// the same inputs gives the same result.
///
/// # Arguments
///
/// * `price_catalogue` - Parsed catalogue document (array of title/price objects)
/// * `sales` - Parsed sales document (array of sale objects)
/// * `arithmetic` - Numeric representation used for the running total
///
/// # Errors
///
/// Returns an error if:
/// - Either document is not an array, or an element is not an object
/// - A catalogue entry is malformed (see [`PriceIndex::from_catalogue`])
/// - A matched sale lacks `Quantity` (`MissingField`)
/// - A matched sale's `Quantity` is not a number (`TypeMismatch`)
pub fn compute(
    price_catalogue: &Value,
    sales: &Value,
    arithmetic: Arithmetic,
) -> Result<ComputationResult, SalesError> {
    let index = PriceIndex::from_catalogue(price_catalogue)?;

    let records = sales.as_array().ok_or_else(|| {
        SalesError::type_mismatch(
            "sales records",
            format!("expected an array, found {}", value_kind(sales)),
        )
    })?;

    let mut accumulator = create_accumulator(arithmetic);
    let mut unmatched = Vec::new();

    for (position, sale) in records.iter().enumerate() {
        let context = format!("sale record {}", position);

        let fields = sale.as_object().ok_or_else(|| {
            SalesError::type_mismatch(
                &context,
                format!("expected an object, found {}", value_kind(sale)),
            )
        })?;

        let product = fields.get(PRODUCT_FIELD).and_then(Value::as_str);
        let Some(price) = product.and_then(|title| index.get(title)) else {
            trace!(position, ?product, "Sale does not match the catalogue");
            unmatched.push(SaleRecord::new(fields.clone()));
            continue;
        };

        let quantity = match fields.get(QUANTITY_FIELD) {
            Some(Value::Number(quantity)) => quantity,
            Some(other) => {
                return Err(SalesError::type_mismatch(
                    &context,
                    format!(
                        "expected a number for '{}', found {}",
                        QUANTITY_FIELD,
                        value_kind(other)
                    ),
                ))
            }
            None => return Err(SalesError::missing_field(&context, QUANTITY_FIELD)),
        };

        trace!(position, ?product, %price, %quantity, "Sale matched");
        accumulator.add_product(price, quantity, &context)?;
    }

    debug!(
        catalogue_titles = index.len(),
        sales = records.len(),
        unmatched = unmatched.len(),
        "Aggregation complete"
    );

    Ok(ComputationResult {
        total: accumulator.total(),
        unmatched,
    })
}

/// Compute with the default floating-point arithmetic
pub fn compute_default(
    price_catalogue: &Value,
    sales: &Value,
) -> Result<ComputationResult, SalesError> {
    compute(price_catalogue, sales, Arithmetic::Float)
}
