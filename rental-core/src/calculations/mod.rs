//! Profitability calculations for rental units.
//!
//! [`derive`] runs the per-unit waterfall and [`aggregate`] sums the results
//! into portfolio totals. Both are pure; callers own all state.

pub mod aggregation;
pub mod common;
pub mod derivation;

pub use aggregation::aggregate;
pub use derivation::{RentalWaterfall, derive};
