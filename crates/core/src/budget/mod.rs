//! Budget line items, totals and variance analysis.

pub mod aggregate;
pub mod error;
pub mod line_items;
pub mod types;
pub mod variance;


pub use aggregate::{Aggregator, Totals};
pub use error::{BudgetError, MissingSide};
pub use line_items::{AccountPolarity, LineItem, LineItemSet};
pub use types::{
    DimensionVariance, LineVariance, NEUTRAL_BAND_PERCENT, SIGNIFICANT_VARIANCE_PERCENT,
    VarianceResult, VarianceStatus,
};
pub use variance::VarianceCalculator;
