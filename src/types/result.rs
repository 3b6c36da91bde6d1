//! Computation result types
//!
//! A `ComputationResult` is produced once per run by the aggregator and is
//! consumed, unchanged, by the reporting step.

use super::sale::SaleRecord;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Total monetary value of all matched sales
///
/// The variant reflects the arithmetic mode the total was accumulated in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalesTotal {
    /// Binary floating-point accumulation (report-compatible default)
    Float(f64),

    /// Exact decimal accumulation
    Decimal(Decimal),
}

impl SalesTotal {
    /// Whether no value has been accumulated
    pub fn is_zero(&self) -> bool {
        match self {
            SalesTotal::Float(value) => *value == 0.0,
            SalesTotal::Decimal(value) => value.is_zero(),
        }
    }
}

/// Formats the total with exactly two decimal places
///
/// Floating totals are rounded only here, at output time. Decimal totals
/// round half away from zero.
impl fmt::Display for SalesTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalesTotal::Float(value) => write!(f, "{:.2}", value),
            SalesTotal::Decimal(value) => write!(
                f,
                "{:.2}",
                value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            ),
        }
    }
}

/// Outcome of joining the sales list against the price catalogue
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationResult {
    /// Sum of `price * Quantity` over every matched sale
    pub total: SalesTotal,

    /// Sales whose product is absent from the catalogue, in input order
    pub unmatched: Vec<SaleRecord>,
}
