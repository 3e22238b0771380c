//! Totals of a line-item set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_items::{LineItem, LineItemSet};

/// Revenue, expense and net income totals of one [`LineItemSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of revenue line items.
    pub total_revenue: Decimal,
    /// Sum of expense line items.
    pub total_expenses: Decimal,
    /// Revenue minus expenses.
    pub net_income: Decimal,
}

impl Totals {
    /// A dataset counts as present when either total is positive.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.total_revenue > Decimal::ZERO || self.total_expenses > Decimal::ZERO
    }
}

/// Sums line-item sets.
pub struct Aggregator;

impl Aggregator {
    /// Aggregates a line-item set into its totals.
    ///
    /// Sums saturate at the `Decimal` range; use [`Aggregator::checked_aggregate`]
    /// where an out-of-range total must be reported.
    #[must_use]
    pub fn aggregate(set: &LineItemSet) -> Totals {
        let total_revenue = set.total_revenue();
        let total_expenses = set.total_expenses();

        Totals {
            total_revenue,
            total_expenses,
            net_income: total_revenue.saturating_sub(total_expenses),
        }
    }

    /// Aggregates with exact arithmetic, `None` if any total overflows.
    #[must_use]
    pub fn checked_aggregate(set: &LineItemSet) -> Option<Totals> {
        let total_revenue = set.checked_sum(&LineItem::REVENUE)?;
        let total_expenses = set.checked_sum(&LineItem::EXPENSES)?;

        Some(Totals {
            total_revenue,
            total_expenses,
            net_income: total_revenue.checked_sub(total_expenses)?,
        })
    }
}
