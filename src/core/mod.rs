//! Core business logic module
//!
//! This module contains the sales computation components:
//! - `aggregator` - Joins sales against the catalogue and sums the matches
//! - `price_index` - Title to price lookup built from the catalogue
//! - `accumulator` - Float and decimal running-total arithmetic

pub mod accumulator;
pub mod aggregator;
pub mod price_index;

pub use accumulator::{create_accumulator, Accumulator, DecimalAccumulator, FloatAccumulator};
pub use aggregator::{compute, compute_default};
pub use price_index::PriceIndex;
