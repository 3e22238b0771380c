//! The fixed revenue/expense line-item schema.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Whether a higher amount helps or hurts profitability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountPolarity {
    /// Revenue-like: a positive variance is favorable.
    Revenue,
    /// Expense-like: a negative variance is favorable.
    Expense,
}

/// One named field of a [`LineItemSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItem {
    /// Product sales revenue.
    Sales,
    /// Service revenue.
    Service,
    /// Any other revenue.
    OtherRevenue,
    /// Salaries and wages.
    Salaries,
    /// Rent and utilities.
    Rent,
    /// Marketing spend.
    Marketing,
    /// Office supplies.
    Supplies,
    /// Travel.
    Travel,
    /// Insurance.
    Insurance,
    /// Depreciation.
    Depreciation,
    /// Any other expense.
    OtherExpenses,
}

impl LineItem {
    /// Every line item, revenue first, in display order.
    pub const ALL: [Self; 11] = [
        Self::Sales,
        Self::Service,
        Self::OtherRevenue,
        Self::Salaries,
        Self::Rent,
        Self::Marketing,
        Self::Supplies,
        Self::Travel,
        Self::Insurance,
        Self::Depreciation,
        Self::OtherExpenses,
    ];

    /// Revenue line items.
    pub const REVENUE: [Self; 3] = [Self::Sales, Self::Service, Self::OtherRevenue];

    /// Expense line items.
    pub const EXPENSES: [Self; 8] = [
        Self::Salaries,
        Self::Rent,
        Self::Marketing,
        Self::Supplies,
        Self::Travel,
        Self::Insurance,
        Self::Depreciation,
        Self::OtherExpenses,
    ];

    /// Account polarity of this line item.
    #[must_use]
    pub const fn polarity(self) -> AccountPolarity {
        match self {
            Self::Sales | Self::Service | Self::OtherRevenue => AccountPolarity::Revenue,
            _ => AccountPolarity::Expense,
        }
    }

    /// Label shown in the detailed variance table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales Revenue",
            Self::Service => "Service Revenue",
            Self::OtherRevenue => "Other Revenue",
            Self::Salaries => "Salaries & Wages",
            Self::Rent => "Rent & Utilities",
            Self::Marketing => "Marketing",
            Self::Supplies => "Office Supplies",
            Self::Travel => "Travel",
            Self::Insurance => "Insurance",
            Self::Depreciation => "Depreciation",
            Self::OtherExpenses => "Other Expenses",
        }
    }

    /// Canonical raw-input key (kebab-case).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Service => "service",
            Self::OtherRevenue => "other-revenue",
            Self::Salaries => "salaries",
            Self::Rent => "rent",
            Self::Marketing => "marketing",
            Self::Supplies => "supplies",
            Self::Travel => "travel",
            Self::Insurance => "insurance",
            Self::Depreciation => "depreciation",
            Self::OtherExpenses => "other-expenses",
        }
    }
}

impl FromStr for LineItem {
    type Err = String;

    /// Accepts kebab-case, snake_case and camelCase keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "sales" => Ok(Self::Sales),
            "service" => Ok(Self::Service),
            "otherrevenue" => Ok(Self::OtherRevenue),
            "salaries" => Ok(Self::Salaries),
            "rent" => Ok(Self::Rent),
            "marketing" => Ok(Self::Marketing),
            "supplies" => Ok(Self::Supplies),
            "travel" => Ok(Self::Travel),
            "insurance" => Ok(Self::Insurance),
            "depreciation" => Ok(Self::Depreciation),
            "otherexpenses" => Ok(Self::OtherExpenses),
            _ => Err(format!("Unknown line item: {s}")),
        }
    }
}

/// One side (budget or actual) of the plan for a single period.
///
/// Totals are never stored; [`LineItemSet::total_revenue`] and friends always
/// recompute from the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineItemSet {
    /// Product sales revenue.
    pub sales: Decimal,
    /// Service revenue.
    pub service: Decimal,
    /// Other revenue.
    pub other_revenue: Decimal,
    /// Salaries and wages.
    pub salaries: Decimal,
    /// Rent and utilities.
    pub rent: Decimal,
    /// Marketing.
    pub marketing: Decimal,
    /// Office supplies.
    pub supplies: Decimal,
    /// Travel.
    pub travel: Decimal,
    /// Insurance.
    pub insurance: Decimal,
    /// Depreciation.
    pub depreciation: Decimal,
    /// Other expenses.
    pub other_expenses: Decimal,
}

impl LineItemSet {
    /// Builds a set from raw key/value input.
    ///
    /// Absent and non-numeric entries default to zero; unknown keys are
    /// ignored. Negative numbers are kept as entered.
    pub fn from_raw<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut set = Self::default();
        for (key, value) in entries {
            let key = key.as_ref();
            match key.parse::<LineItem>() {
                Ok(item) => *set.slot_mut(item) = parse_amount(value.as_ref()),
                Err(_) => debug!(key, "ignoring unknown line item key"),
            }
        }
        set
    }

    /// The trainer's sample budget.
    #[must_use]
    pub fn sample_budget() -> Self {
        Self {
            sales: Decimal::new(500_000, 0),
            service: Decimal::new(150_000, 0),
            other_revenue: Decimal::new(25_000, 0),
            salaries: Decimal::new(200_000, 0),
            rent: Decimal::new(48_000, 0),
            marketing: Decimal::new(30_000, 0),
            supplies: Decimal::new(12_000, 0),
            travel: Decimal::new(15_000, 0),
            insurance: Decimal::new(18_000, 0),
            depreciation: Decimal::new(25_000, 0),
            other_expenses: Decimal::new(20_000, 0),
        }
    }

    /// Returns the amount for a line item.
    #[must_use]
    pub const fn get(&self, item: LineItem) -> Decimal {
        match item {
            LineItem::Sales => self.sales,
            LineItem::Service => self.service,
            LineItem::OtherRevenue => self.other_revenue,
            LineItem::Salaries => self.salaries,
            LineItem::Rent => self.rent,
            LineItem::Marketing => self.marketing,
            LineItem::Supplies => self.supplies,
            LineItem::Travel => self.travel,
            LineItem::Insurance => self.insurance,
            LineItem::Depreciation => self.depreciation,
            LineItem::OtherExpenses => self.other_expenses,
        }
    }

    /// Returns a copy with one line item replaced.
    #[must_use]
    pub fn with_value(mut self, item: LineItem, value: Decimal) -> Self {
        *self.slot_mut(item) = value;
        self
    }

    /// Builds a set by computing every field, stopping at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(LineItem) -> Result<Decimal, E>) -> Result<Self, E> {
        let mut set = Self::default();
        for item in LineItem::ALL {
            *set.slot_mut(item) = f(item)?;
        }
        Ok(set)
    }

    /// Sum of the revenue fields, saturating at the `Decimal` range.
    #[must_use]
    pub fn total_revenue(&self) -> Decimal {
        self.saturating_sum(&LineItem::REVENUE)
    }

    /// Sum of the expense fields, saturating at the `Decimal` range.
    #[must_use]
    pub fn total_expenses(&self) -> Decimal {
        self.saturating_sum(&LineItem::EXPENSES)
    }

    /// Total revenue minus total expenses, saturating at the `Decimal` range.
    #[must_use]
    pub fn net_income(&self) -> Decimal {
        self.total_revenue().saturating_sub(self.total_expenses())
    }

    /// Exact sum of `items`, `None` on overflow.
    pub(crate) fn checked_sum(&self, items: &[LineItem]) -> Option<Decimal> {
        items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(self.get(*item)))
    }

    fn saturating_sum(&self, items: &[LineItem]) -> Decimal {
        items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(self.get(*item)))
    }

    fn slot_mut(&mut self, item: LineItem) -> &mut Decimal {
        match item {
            LineItem::Sales => &mut self.sales,
            LineItem::Service => &mut self.service,
            LineItem::OtherRevenue => &mut self.other_revenue,
            LineItem::Salaries => &mut self.salaries,
            LineItem::Rent => &mut self.rent,
            LineItem::Marketing => &mut self.marketing,
            LineItem::Supplies => &mut self.supplies,
            LineItem::Travel => &mut self.travel,
            LineItem::Insurance => &mut self.insurance,
            LineItem::Depreciation => &mut self.depreciation,
            LineItem::OtherExpenses => &mut self.other_expenses,
        }
    }
}

/// Parses a user-entered amount, falling back to zero.
pub(crate) fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}
