//! Simulation scenario types.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::SimulationError;
use crate::budget::LineItem;

/// One of the four adjustment percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKnob {
    /// Applies to every revenue line.
    Revenue,
    /// Applies to the general expense pool (everything but salaries and marketing).
    Expenses,
    /// Applies to salaries only.
    Salaries,
    /// Applies to marketing only.
    Marketing,
}

impl AdjustmentKnob {
    /// Knob that drives a given line item.
    #[must_use]
    pub const fn for_item(item: LineItem) -> Self {
        match item {
            LineItem::Sales | LineItem::Service | LineItem::OtherRevenue => Self::Revenue,
            LineItem::Salaries => Self::Salaries,
            LineItem::Marketing => Self::Marketing,
            LineItem::Rent
            | LineItem::Supplies
            | LineItem::Travel
            | LineItem::Insurance
            | LineItem::Depreciation
            | LineItem::OtherExpenses => Self::Expenses,
        }
    }
}

impl fmt::Display for AdjustmentKnob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revenue => write!(f, "revenue"),
            Self::Expenses => write!(f, "expenses"),
            Self::Salaries => write!(f, "salaries"),
            Self::Marketing => write!(f, "marketing"),
        }
    }
}

impl FromStr for AdjustmentKnob {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "revenue" => Ok(Self::Revenue),
            "expenses" | "expense" => Ok(Self::Expenses),
            "salaries" | "salary" => Ok(Self::Salaries),
            "marketing" => Ok(Self::Marketing),
            _ => Err(format!("Unknown adjustment: {s}")),
        }
    }
}

/// Percentage adjustments applied to a budget (e.g. `15` for +15%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioAdjustment {
    /// Revenue change in percent.
    pub revenue: Decimal,
    /// General expense change in percent.
    pub expenses: Decimal,
    /// Salary change in percent.
    pub salaries: Decimal,
    /// Marketing change in percent.
    pub marketing: Decimal,
}

impl ScenarioAdjustment {
    /// Creates an adjustment from whole percentages.
    #[must_use]
    pub fn new(revenue: i64, expenses: i64, salaries: i64, marketing: i64) -> Self {
        Self {
            revenue: Decimal::from(revenue),
            expenses: Decimal::from(expenses),
            salaries: Decimal::from(salaries),
            marketing: Decimal::from(marketing),
        }
    }

    /// Percentage for a knob.
    #[must_use]
    pub const fn percent(&self, knob: AdjustmentKnob) -> Decimal {
        match knob {
            AdjustmentKnob::Revenue => self.revenue,
            AdjustmentKnob::Expenses => self.expenses,
            AdjustmentKnob::Salaries => self.salaries,
            AdjustmentKnob::Marketing => self.marketing,
        }
    }

    /// Percentage applied to a line item.
    #[must_use]
    pub const fn percent_for(&self, item: LineItem) -> Decimal {
        self.percent(AdjustmentKnob::for_item(item))
    }

    /// True if any knob is below -100%, which drives amounts negative.
    #[must_use]
    pub fn drives_negative(&self) -> bool {
        let floor = -Decimal::ONE_HUNDRED;
        [self.revenue, self.expenses, self.salaries, self.marketing]
            .iter()
            .any(|pct| *pct < floor)
    }

    /// Parses raw knob input, rejecting non-numeric values.
    ///
    /// Blank values count as absent and become zero. Unknown keys are ignored.
    pub fn try_from_raw<I, K, V>(entries: I) -> Result<Self, SimulationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut adjustment = Self::default();
        for (key, value) in entries {
            let Ok(knob) = key.as_ref().parse::<AdjustmentKnob>() else {
                debug!(key = key.as_ref(), "ignoring unknown adjustment key");
                continue;
            };
            let raw = value.as_ref().trim();
            let pct = if raw.is_empty() {
                Decimal::ZERO
            } else {
                parse_percent(raw).ok_or_else(|| SimulationError::InvalidAdjustment {
                    knob,
                    value: raw.to_string(),
                })?
            };
            *adjustment.slot_mut(knob) = pct;
        }
        Ok(adjustment)
    }

    /// Parses raw knob input, defaulting non-numeric values to zero.
    pub fn from_raw<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut adjustment = Self::default();
        for (key, value) in entries {
            let Ok(knob) = key.as_ref().parse::<AdjustmentKnob>() else {
                debug!(key = key.as_ref(), "ignoring unknown adjustment key");
                continue;
            };
            let raw = value.as_ref().trim();
            let pct = parse_percent(raw).unwrap_or_else(|| {
                if !raw.is_empty() {
                    warn!(%knob, value = raw, "non-numeric adjustment, using 0%");
                }
                Decimal::ZERO
            });
            *adjustment.slot_mut(knob) = pct;
        }
        adjustment
    }

    fn slot_mut(&mut self, knob: AdjustmentKnob) -> &mut Decimal {
        match knob {
            AdjustmentKnob::Revenue => &mut self.revenue,
            AdjustmentKnob::Expenses => &mut self.expenses,
            AdjustmentKnob::Salaries => &mut self.salaries,
            AdjustmentKnob::Marketing => &mut self.marketing,
        }
    }
}

fn parse_percent(raw: &str) -> Option<Decimal> {
    let raw = raw.trim().trim_end_matches('%').trim_start_matches('+');
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Named, fixed scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioPreset {
    /// Strong sales, leaner costs.
    Optimistic,
    /// Revenue drop with rising costs.
    Pessimistic,
    /// Small drift on everything.
    Realistic,
    /// Severe revenue collapse.
    Crisis,
    /// Expansion: revenue and spend both rise.
    Growth,
}

impl ScenarioPreset {
    /// Every preset.
    pub const ALL: [Self; 5] = [
        Self::Optimistic,
        Self::Pessimistic,
        Self::Realistic,
        Self::Crisis,
        Self::Growth,
    ];

    /// The preset's fixed adjustment.
    #[must_use]
    pub fn adjustment(self) -> ScenarioAdjustment {
        match self {
            Self::Optimistic => ScenarioAdjustment::new(15, -5, 0, 20),
            Self::Pessimistic => ScenarioAdjustment::new(-20, 10, 5, -30),
            Self::Realistic => ScenarioAdjustment::new(2, 3, 2, 0),
            Self::Crisis => ScenarioAdjustment::new(-35, 15, -10, -50),
            Self::Growth => ScenarioAdjustment::new(25, 8, 15, 40),
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Optimistic => "optimistic",
            Self::Pessimistic => "pessimistic",
            Self::Realistic => "realistic",
            Self::Crisis => "crisis",
            Self::Growth => "growth",
        }
    }
}

impl FromStr for ScenarioPreset {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| SimulationError::UnknownScenario(s.to_string()))
    }
}

/// A scenario to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// A named preset.
    Preset(ScenarioPreset),
    /// Caller-supplied percentages.
    Custom(ScenarioAdjustment),
}

impl Scenario {
    /// Display name (`custom` for caller-supplied percentages).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Preset(preset) => preset.name(),
            Self::Custom(_) => "custom",
        }
    }

    /// Adjustment this scenario applies.
    #[must_use]
    pub fn adjustment(&self) -> ScenarioAdjustment {
        match self {
            Self::Preset(preset) => preset.adjustment(),
            Self::Custom(adjustment) => *adjustment,
        }
    }
}
