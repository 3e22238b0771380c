//! Turns a variance result into an ordered list of findings.

use budget_trainer_shared::{Currency, Money, Percent};
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{
    INSIGHT_THRESHOLD_PERCENT, Insight, InsightKind, RECOMMENDATIONS, SIGNIFICANT_SCAN_ACCOUNTS,
    Severity,
};
use crate::budget::{LineItemSet, VarianceCalculator, VarianceResult};

/// Generates narrative findings from a budget comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightEngine {
    currency: Currency,
}

impl InsightEngine {
    /// Creates an engine formatting amounts in `currency`.
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Generates findings in a fixed order: revenue, expenses, net income,
    /// significant accounts, recommendations.
    #[must_use]
    pub fn generate(
        &self,
        budget: &LineItemSet,
        actual: &LineItemSet,
        variance: &VarianceResult,
    ) -> Vec<Insight> {
        let mut insights = Vec::new();

        insights.extend(self.revenue_insight(variance));
        insights.extend(self.expense_insight(variance));
        insights.extend(self.net_income_insight(variance));
        insights.extend(self.significant_variances(budget, actual));
        insights.push(Self::recommendations());

        debug!(count = insights.len(), "insights generated");
        insights
    }

    fn revenue_insight(&self, variance: &VarianceResult) -> Option<Insight> {
        let amount = variance.revenue.absolute_variance;
        let pct = variance.revenue.percentage_variance;
        if pct.abs() <= INSIGHT_THRESHOLD_PERCENT {
            return None;
        }

        let (severity, title, message) = if amount > Decimal::ZERO {
            (
                Severity::Positive,
                "Revenue Performance",
                format!(
                    "Actual revenue exceeded budget by {} ({}). Sales performed strongly or the market expanded.",
                    self.money(amount),
                    Percent(pct)
                ),
            )
        } else {
            (
                Severity::Warning,
                "Revenue Shortfall",
                format!(
                    "Actual revenue fell short of budget by {} ({}). Review sales strategy, market conditions and pricing.",
                    self.money(amount.abs()),
                    Percent(pct.abs())
                ),
            )
        };

        Some(Self::total_insight(InsightKind::Revenue, severity, title, message, amount, pct))
    }

    fn expense_insight(&self, variance: &VarianceResult) -> Option<Insight> {
        let amount = variance.expenses.absolute_variance;
        let pct = variance.expenses.percentage_variance;
        if pct.abs() <= INSIGHT_THRESHOLD_PERCENT {
            return None;
        }

        let (severity, title, message) = if amount < Decimal::ZERO {
            (
                Severity::Positive,
                "Cost Management",
                format!(
                    "Actual expenses were {} ({}) below budget. Costs were well controlled.",
                    self.money(amount.abs()),
                    Percent(pct.abs())
                ),
            )
        } else {
            (
                Severity::Warning,
                "Cost Overrun",
                format!(
                    "Actual expenses exceeded budget by {} ({}). Review expense categories for savings.",
                    self.money(amount),
                    Percent(pct)
                ),
            )
        };

        Some(Self::total_insight(InsightKind::Expense, severity, title, message, amount, pct))
    }

    fn net_income_insight(&self, variance: &VarianceResult) -> Option<Insight> {
        let amount = variance.net_income.absolute_variance;
        let pct = variance.net_income.percentage_variance;

        let (severity, title, message) = match amount.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => (
                Severity::Positive,
                "Profitability",
                format!(
                    "Net income exceeded expectations by {}. Overall financial performance was strong.",
                    self.money(amount)
                ),
            ),
            std::cmp::Ordering::Less => (
                Severity::Error,
                "Profitability Concern",
                format!(
                    "Net income fell short by {}. Focus on growing revenue and optimizing costs.",
                    self.money(amount.abs())
                ),
            ),
            std::cmp::Ordering::Equal => return None,
        };

        Some(Self::total_insight(InsightKind::NetIncome, severity, title, message, amount, pct))
    }

    /// Accounts with a zero or negative budget are skipped, so an account
    /// that spent without a budget never shows up here.
    fn significant_variances(&self, budget: &LineItemSet, actual: &LineItemSet) -> Vec<Insight> {
        SIGNIFICANT_SCAN_ACCOUNTS
            .iter()
            .filter_map(|&(item, name)| {
                let budgeted = budget.get(item);
                if budgeted <= Decimal::ZERO {
                    return None;
                }

                let amount = actual.get(item).checked_sub(budgeted)?;
                let pct = VarianceCalculator::percentage_of(amount, budgeted)?;
                if !VarianceCalculator::is_significant(budgeted, pct) {
                    return None;
                }

                Some(Insight {
                    kind: InsightKind::SignificantVariance,
                    severity: Severity::Warning,
                    title: "Significant Variance".to_string(),
                    message: format!(
                        "{name}: {} variance ({})",
                        Percent(pct.abs()),
                        self.money(amount)
                    ),
                    details: Vec::new(),
                    item: Some(item),
                    amount: Some(amount),
                    percentage: Some(pct),
                })
            })
            .collect()
    }

    fn recommendations() -> Insight {
        Insight {
            kind: InsightKind::Recommendations,
            severity: Severity::Positive,
            title: "Recommendations".to_string(),
            message: "Next steps for budget management:".to_string(),
            details: RECOMMENDATIONS.iter().map(ToString::to_string).collect(),
            item: None,
            amount: None,
            percentage: None,
        }
    }

    fn total_insight(
        kind: InsightKind,
        severity: Severity,
        title: &str,
        message: String,
        amount: Decimal,
        pct: Decimal,
    ) -> Insight {
        Insight {
            kind,
            severity,
            title: title.to_string(),
            message,
            details: Vec::new(),
            item: None,
            amount: Some(amount),
            percentage: Some(pct),
        }
    }

    fn money(&self, amount: Decimal) -> Money {
        Money::new(amount, self.currency)
    }
}
