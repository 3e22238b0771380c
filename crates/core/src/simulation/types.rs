//! Simulation data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::scenario::ScenarioAdjustment;
use crate::budget::{LineItemSet, Totals};

/// Result of running a scenario against a budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Scenario name (`custom` for caller-supplied percentages).
    pub scenario_name: String,
    /// Adjustment that was applied.
    pub adjustment: ScenarioAdjustment,
    /// Projected line items, usable as actuals.
    pub projected: LineItemSet,
    /// Budget totals.
    pub budget_totals: Totals,
    /// Projected totals.
    pub projected_totals: Totals,
    /// Projected minus budgeted revenue.
    pub revenue_change: Decimal,
    /// Projected minus budgeted expenses.
    pub expense_change: Decimal,
    /// Projected minus budgeted net income.
    pub profit_change: Decimal,
}
