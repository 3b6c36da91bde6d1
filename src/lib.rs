//! Sales Total Calculator Library
//! # Overview
//!
//! This library joins a JSON sales record list against a JSON price catalogue,
//! sums the value of every sale whose product is in the catalogue, and
//! collects the sales that reference unknown products.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (SaleRecord, ComputationResult, SalesError)
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`core`] - Business logic components:
//!   - [`core::aggregator`] - The join, sum and unmatched partition
//!   - [`core::price_index`] - Title to price lookup, last entry wins
//!   - [`core::accumulator`] - Float and decimal running totals
//! - [`io`] - JSON loading and report output
//! - [`pipeline`] - Load, compute and report orchestration
//!
//! # Input Documents
//!
//! - **Price catalogue**: `[{"title": "Widget", "price": 9.99}, ...]`
//! - **Sales records**: `[{"Product": "Widget", "Quantity": 2, ...}, ...]`,
//!   extra fields are allowed and echoed verbatim for unmatched sales
//!
//! # Example
//!
//! ```
//! use compute_sales::core::compute_default;
//! use serde_json::json;
//!
//! let catalogue = json!([{"title": "Widget", "price": 9.99}]);
//! let sales = json!([
//!     {"Product": "Widget", "Quantity": 2},
//!     {"Product": "Gadget", "Quantity": 1}
//! ]);
//!
//! let result = compute_default(&catalogue, &sales).unwrap();
//! assert_eq!(result.total.to_string(), "19.98");
//! assert_eq!(result.unmatched.len(), 1);
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{compute, compute_default, PriceIndex};
pub use pipeline::{run, RunConfig};
pub use types::{ComputationResult, SaleRecord, SalesError, SalesTotal};
