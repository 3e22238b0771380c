//! Narrative findings derived from budget variances.
//!
//! Thresholds are fixed constants:
//! - `INSIGHT_THRESHOLD_PERCENT` (5%) for revenue and expense totals
//! - `SIGNIFICANT_VARIANCE_PERCENT` (10%) for the account scan

pub mod engine;
pub mod types;

pub use engine::InsightEngine;
pub use types::{
    INSIGHT_THRESHOLD_PERCENT, Insight, InsightKind, RECOMMENDATIONS, SIGNIFICANT_SCAN_ACCOUNTS,
    Severity,
};
