//! Running-total arithmetic
//!
//! The aggregator delegates every `price * quantity` product and the running
//! sum to an `Accumulator`, selected at runtime from the arithmetic mode.
//!
//! - `FloatAccumulator` sums in `f64` and leaves rounding to output time, so
//!   totals match earlier reports bit for bit.
//! - `DecimalAccumulator` sums in `rust_decimal::Decimal`, which is exact for
//!   decimal fractions such as prices.

use crate::cli::Arithmetic;
use crate::types::{SalesError, SalesTotal};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Number;

/// Accumulates the monetary value of matched sales
pub trait Accumulator {
    /// Add `price * quantity` to the running total
    ///
    /// `context` names the sale record for error messages.
    fn add_product(
        &mut self,
        price: &Number,
        quantity: &Number,
        context: &str,
    ) -> Result<(), SalesError>;

    /// The total accumulated so far
    fn total(&self) -> SalesTotal;
}

/// Create the accumulator for an arithmetic mode
pub fn create_accumulator(arithmetic: Arithmetic) -> Box<dyn Accumulator> {
    match arithmetic {
        Arithmetic::Float => Box::new(FloatAccumulator::default()),
        Arithmetic::Decimal => Box::new(DecimalAccumulator::default()),
    }
}

/// Floating-point accumulator
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatAccumulator {
    total: f64,
}

impl Accumulator for FloatAccumulator {
    fn add_product(
        &mut self,
        price: &Number,
        quantity: &Number,
        context: &str,
    ) -> Result<(), SalesError> {
        let price = price.as_f64().ok_or_else(|| {
            SalesError::type_mismatch(context, format!("price {} is not representable", price))
        })?;
        let quantity = quantity.as_f64().ok_or_else(|| {
            SalesError::type_mismatch(
                context,
                format!("quantity {} is not representable", quantity),
            )
        })?;

        self.total += price * quantity;
        Ok(())
    }

    fn total(&self) -> SalesTotal {
        SalesTotal::Float(self.total)
    }
}

/// Exact decimal accumulator
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalAccumulator {
    total: Decimal,
}

impl Accumulator for DecimalAccumulator {
    fn add_product(
        &mut self,
        price: &Number,
        quantity: &Number,
        context: &str,
    ) -> Result<(), SalesError> {
        let price = to_decimal(price).ok_or_else(|| {
            SalesError::type_mismatch(context, format!("price {} is out of decimal range", price))
        })?;
        let quantity = to_decimal(quantity).ok_or_else(|| {
            SalesError::type_mismatch(
                context,
                format!("quantity {} is out of decimal range", quantity),
            )
        })?;

        self.total = price
            .checked_mul(quantity)
            .and_then(|amount| self.total.checked_add(amount))
            .ok_or_else(|| {
                SalesError::type_mismatch(context, "arithmetic overflow accumulating total")
            })?;
        Ok(())
    }

    fn total(&self) -> SalesTotal {
        SalesTotal::Decimal(self.total)
    }
}

/// Convert a JSON number to a Decimal
///
/// Integers convert exactly. Floats go through `Decimal::from_f64`, which
/// drops binary representation noise (`9.99` stays `9.99`).
fn to_decimal(number: &Number) -> Option<Decimal> {
    if let Some(value) = number.as_i64() {
        Some(Decimal::from(value))
    } else if let Some(value) = number.as_u64() {
        Some(Decimal::from(value))
    } else {
        number.as_f64().and_then(Decimal::from_f64)
    }
}
