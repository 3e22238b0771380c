//! Full budget-vs-actual pipeline: totals, variances, insights.

use budget_trainer_shared::Currency;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::budget::{BudgetError, LineItemSet, VarianceCalculator, VarianceResult};
use crate::insights::{Insight, InsightEngine};

/// Variances and findings for one budget/actual pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Aggregate and per-line variances.
    pub variance: VarianceResult,
    /// Ordered findings.
    pub insights: Vec<Insight>,
}

/// Compares `actual` against `budget` and derives findings.
///
/// # Errors
///
/// Returns `BudgetError::MissingData` if either side is empty.
pub fn analyze(
    budget: &LineItemSet,
    actual: &LineItemSet,
    currency: Currency,
) -> Result<Analysis, BudgetError> {
    let variance = VarianceCalculator::compare(budget, actual)?;
    let insights = InsightEngine::new(currency).generate(budget, actual, &variance);

    info!(
        revenue_status = ?variance.revenue.status,
        expense_status = ?variance.expenses.status,
        profit_status = ?variance.net_income.status,
        insights = insights.len(),
        "variance analysis completed"
    );

    Ok(Analysis { variance, insights })
}
