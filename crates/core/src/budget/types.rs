//! Variance data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregate::Totals;
use super::line_items::LineItem;

/// Below this absolute percentage a variance is classified neutral.
pub const NEUTRAL_BAND_PERCENT: Decimal = Decimal::TWO;

/// Above this absolute percentage a line-item variance is significant.
pub const SIGNIFICANT_VARIANCE_PERCENT: Decimal = Decimal::TEN;

/// Variance status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Favorable variance (under budget for expenses, over target for revenue).
    Favorable,
    /// Unfavorable variance (over budget for expenses, under target for revenue).
    Unfavorable,
    /// Within the neutral band.
    Neutral,
}

/// Variance of one aggregate dimension (revenue, expenses or net income).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionVariance {
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Actual amount.
    pub actual: Decimal,
    /// Actual minus budgeted.
    pub absolute_variance: Decimal,
    /// Variance as a percentage of the budgeted amount, zero when nothing was budgeted.
    pub percentage_variance: Decimal,
    /// Favorability classification.
    pub status: VarianceStatus,
}

/// Variance of a single line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineVariance {
    /// Line item.
    pub item: LineItem,
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Actual amount.
    pub actual: Decimal,
    /// Actual minus budgeted.
    pub absolute_variance: Decimal,
    /// Variance as a percentage of the budgeted amount, zero when nothing was budgeted.
    pub percentage_variance: Decimal,
    /// Favorability classification.
    pub status: VarianceStatus,
    /// Budget is positive and the variance exceeds the significance threshold.
    pub is_significant: bool,
}

/// Budget vs actual comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceResult {
    /// Budget totals.
    pub budget: Totals,
    /// Actual totals.
    pub actual: Totals,
    /// Revenue variance.
    pub revenue: DimensionVariance,
    /// Expense variance.
    pub expenses: DimensionVariance,
    /// Net income variance.
    pub net_income: DimensionVariance,
    /// Line items with a non-zero budget or actual, in schema order.
    pub lines: Vec<LineVariance>,
}

impl VarianceResult {
    /// Looks up the variance row of a line item.
    ///
    /// Returns `None` when the item had neither budget nor actual.
    #[must_use]
    pub fn line(&self, item: LineItem) -> Option<&LineVariance> {
        self.lines.iter().find(|line| line.item == item)
    }

    /// Line items flagged as significant.
    pub fn significant_lines(&self) -> impl Iterator<Item = &LineVariance> {
        self.lines.iter().filter(|line| line.is_significant)
    }
}
