//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `sale`: Sale records and the JSON field names the join relies on
//! - `result`: The computation result and its total
//! - `error`: Error types for the sales calculator

pub mod error;
pub mod result;
pub mod sale;

pub use error::SalesError;
pub use result::{ComputationResult, SalesTotal};
pub use sale::{
    value_kind, SaleRecord, PRICE_FIELD, PRODUCT_FIELD, QUANTITY_FIELD, TITLE_FIELD,
};
