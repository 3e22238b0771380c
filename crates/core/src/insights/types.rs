//! Insight data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::budget::LineItem;

/// Above this absolute percentage the revenue/expense totals get a finding.
pub const INSIGHT_THRESHOLD_PERCENT: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Accounts checked by the significant-variance scan, with the names used in findings.
pub const SIGNIFICANT_SCAN_ACCOUNTS: [(LineItem, &str); 5] = [
    (LineItem::Sales, "Sales Revenue"),
    (LineItem::Service, "Service Revenue"),
    (LineItem::Marketing, "Marketing Expenses"),
    (LineItem::Travel, "Travel Expenses"),
    (LineItem::OtherExpenses, "Other Expenses"),
];

/// Closing recommendations appended to every analysis.
pub const RECOMMENDATIONS: [&str; 4] = [
    "Focus on accounts with variances greater than 10%",
    "Investigate root causes of significant variances",
    "Update future budgets based on these insights",
    "Implement regular monitoring for early variance detection",
];

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Good news.
    Positive,
    /// Worth attention.
    Warning,
    /// Hurts profitability.
    Error,
}

impl Severity {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a finding is about. Emission order follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Total revenue vs budget.
    Revenue,
    /// Total expenses vs budget.
    Expense,
    /// Net income vs budget.
    NetIncome,
    /// One account beyond the significance threshold.
    SignificantVariance,
    /// Generic closing advice.
    Recommendations,
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Topic.
    pub kind: InsightKind,
    /// Severity.
    pub severity: Severity,
    /// Short heading.
    pub title: String,
    /// Full sentence(s).
    pub message: String,
    /// Bullet points (recommendations only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    /// Account the finding refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<LineItem>,
    /// Variance amount the finding refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Variance percentage the finding refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
}
