//! Scenario projector: budget plus adjustments gives projected actuals.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use super::error::SimulationError;
use super::scenario::{Scenario, ScenarioAdjustment};
use super::types::ScenarioOutcome;
use crate::budget::{Aggregator, LineItemSet};

/// Projects "actual" figures from a budget.
pub struct ScenarioProjector;

impl ScenarioProjector {
    /// Scales a value by `1 + pct / 100`, rounded to whole currency units
    /// with halves away from zero. `None` if the result leaves the `Decimal`
    /// range.
    #[must_use]
    pub fn apply_percentage(value: Decimal, pct: Decimal) -> Option<Decimal> {
        let multiplier = Decimal::ONE.checked_add(pct.checked_div(Decimal::ONE_HUNDRED)?)?;
        let scaled = value.checked_mul(multiplier)?;
        Some(scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Projects a fresh line-item set from the budget.
    ///
    /// Knobs below -100% yield negative amounts; they are passed through.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::Overflow` if a projected amount does not fit
    /// in a `Decimal`.
    pub fn project(
        budget: &LineItemSet,
        adjustment: &ScenarioAdjustment,
    ) -> Result<LineItemSet, SimulationError> {
        if adjustment.drives_negative() {
            warn!(
                ?adjustment,
                "adjustment below -100% will produce negative amounts"
            );
        }

        LineItemSet::try_from_fn(|item| {
            Self::apply_percentage(budget.get(item), adjustment.percent_for(item))
                .ok_or(SimulationError::Overflow)
        })
    }

    /// Runs a scenario and summarizes the change against the budget.
    ///
    /// # Errors
    ///
    /// Presets need a budget with revenue; custom adjustments run against
    /// any budget, including an expense-only one.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::MissingBudget` for a preset on a budget with
    /// no revenue, and `SimulationError::Overflow` if a projected amount,
    /// total or change does not fit in a `Decimal`.
    pub fn simulate(
        budget: &LineItemSet,
        scenario: &Scenario,
    ) -> Result<ScenarioOutcome, SimulationError> {
        if matches!(scenario, Scenario::Preset(_)) && budget.total_revenue().is_zero() {
            return Err(SimulationError::MissingBudget);
        }

        let adjustment = scenario.adjustment();
        let projected = Self::project(budget, &adjustment)?;
        let budget_totals =
            Aggregator::checked_aggregate(budget).ok_or(SimulationError::Overflow)?;
        let projected_totals =
            Aggregator::checked_aggregate(&projected).ok_or(SimulationError::Overflow)?;

        let change = |after: Decimal, before: Decimal| {
            after.checked_sub(before).ok_or(SimulationError::Overflow)
        };
        let outcome = ScenarioOutcome {
            scenario_name: scenario.name().to_string(),
            adjustment,
            projected,
            budget_totals,
            projected_totals,
            revenue_change: change(projected_totals.total_revenue, budget_totals.total_revenue)?,
            expense_change: change(projected_totals.total_expenses, budget_totals.total_expenses)?,
            profit_change: change(projected_totals.net_income, budget_totals.net_income)?,
        };

        debug!(
            scenario = %outcome.scenario_name,
            profit_change = %outcome.profit_change,
            "scenario simulated"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::LineItem;
    use crate::simulation::scenario::ScenarioPreset;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percentage_increase() {
        assert_eq!(
            ScenarioProjector::apply_percentage(dec!(100), dec!(10)),
            Some(dec!(110))
        );
    }

    #[test]
    fn test_percentage_decrease() {
        assert_eq!(
            ScenarioProjector::apply_percentage(dec!(100), dec!(-10)),
            Some(dec!(90))
        );
    }

    #[test]
    fn test_rounds_to_whole_units() {
        assert_eq!(
            ScenarioProjector::apply_percentage(dec!(333), dec!(2.5)),
            Some(dec!(341))
        );
        // 10 * 1.05 = 10.5 rounds away from zero.
        assert_eq!(
            ScenarioProjector::apply_percentage(dec!(10), dec!(5)),
            Some(dec!(11))
        );
    }

    #[test]
    fn test_optimistic_sample_budget() {
        let budget = LineItemSet::sample_budget();
        let projected =
            ScenarioProjector::project(&budget, &ScenarioPreset::Optimistic.adjustment()).unwrap();

        assert_eq!(projected.sales, dec!(575000));
        assert_eq!(projected.service, dec!(172500));
        assert_eq!(projected.marketing, dec!(36000));
        assert_eq!(projected.salaries, dec!(200000));
        assert_eq!(projected.rent, dec!(45600));
        assert_eq!(projected.other_expenses, dec!(19000));
    }

    #[test]
    fn test_project_leaves_budget_untouched() {
        let budget = LineItemSet::sample_budget();
        let _ = ScenarioProjector::project(&budget, &ScenarioPreset::Crisis.adjustment()).unwrap();

        assert_eq!(budget, LineItemSet::sample_budget());
    }

    #[test]
    fn test_below_minus_hundred_goes_negative() {
        let budget = LineItemSet::sample_budget();
        let projected =
            ScenarioProjector::project(&budget, &ScenarioAdjustment::new(0, 0, 0, -150)).unwrap();

        assert_eq!(projected.marketing, dec!(-15000));
    }

    #[test]
    fn test_simulate_reports_changes() {
        let budget = LineItemSet::sample_budget();
        let outcome =
            ScenarioProjector::simulate(&budget, &Scenario::Preset(ScenarioPreset::Optimistic))
                .unwrap();

        // Revenue 675,000 * 1.15
        assert_eq!(outcome.projected_totals.total_revenue, dec!(776250));
        assert_eq!(outcome.revenue_change, dec!(101250));
        // Pool 138,000 * -5% = -6,900; marketing +6,000.
        assert_eq!(outcome.expense_change, dec!(-900));
        assert_eq!(outcome.profit_change, dec!(102150));
        assert_eq!(outcome.scenario_name, "optimistic");
    }

    #[test]
    fn test_simulate_custom() {
        let budget = LineItemSet::sample_budget();
        let custom = ScenarioAdjustment::new(0, 0, 10, 0);
        let outcome = ScenarioProjector::simulate(&budget, &Scenario::Custom(custom)).unwrap();

        assert_eq!(outcome.scenario_name, "custom");
        assert_eq!(outcome.projected.get(LineItem::Salaries), dec!(220000));
        assert_eq!(outcome.expense_change, dec!(20000));
        assert_eq!(outcome.profit_change, dec!(-20000));
    }

    #[test]
    fn test_preset_without_revenue_is_refused() {
        let budget = LineItemSet::default().with_value(LineItem::Rent, dec!(1000));
        let err = ScenarioProjector::simulate(&budget, &Scenario::Preset(ScenarioPreset::Growth))
            .unwrap_err();

        assert_eq!(err, SimulationError::MissingBudget);
    }

    #[test]
    fn test_custom_runs_on_expense_only_budget() {
        let budget = LineItemSet::default().with_value(LineItem::Rent, dec!(1000));
        let custom = ScenarioAdjustment::new(0, 10, 0, 0);

        let outcome = ScenarioProjector::simulate(&budget, &Scenario::Custom(custom)).unwrap();

        assert_eq!(outcome.projected.rent, dec!(1100));
        assert_eq!(outcome.expense_change, dec!(100));
        assert_eq!(outcome.profit_change, dec!(-100));
    }

    #[test]
    fn test_huge_adjustment_reports_overflow() {
        let budget = LineItemSet::sample_budget();
        let adjustment = ScenarioAdjustment::from_raw([("revenue", "1e26")]);

        assert_eq!(
            ScenarioProjector::project(&budget, &adjustment),
            Err(SimulationError::Overflow)
        );
        assert_eq!(
            ScenarioProjector::simulate(&budget, &Scenario::Custom(adjustment)),
            Err(SimulationError::Overflow)
        );
    }

    #[test]
    fn test_apply_percentage_overflow() {
        assert_eq!(ScenarioProjector::apply_percentage(Decimal::MAX, dec!(50)), None);
        assert_eq!(
            ScenarioProjector::apply_percentage(Decimal::MAX, Decimal::ZERO),
            Some(Decimal::MAX)
        );
    }
}
