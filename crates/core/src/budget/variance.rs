//! Budget vs actual variance calculations.

use rust_decimal::Decimal;
use tracing::debug;

use super::aggregate::{Aggregator, Totals};
use super::error::{BudgetError, MissingSide};
use super::line_items::{AccountPolarity, LineItem, LineItemSet};
use super::types::{
    DimensionVariance, LineVariance, NEUTRAL_BAND_PERCENT, SIGNIFICANT_VARIANCE_PERCENT,
    VarianceResult, VarianceStatus,
};

/// Compares budget and actual line-item sets.
pub struct VarianceCalculator;

impl VarianceCalculator {
    /// Compares a budget against actuals.
    ///
    /// Variances are always `actual - budget`. Favorability depends on the
    /// account polarity:
    ///   - Revenue and net income: positive variance is favorable
    ///   - Expenses: negative variance (under budget) is favorable
    ///
    /// Anything within the ±2% neutral band is neutral. Line items with
    /// neither a budget nor an actual amount are left out of `lines`.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::MissingData` if either side has no positive
    /// revenue or expense total, and `BudgetError::Overflow` if a total,
    /// variance or percentage does not fit in a `Decimal`.
    pub fn compare(
        budget: &LineItemSet,
        actual: &LineItemSet,
    ) -> Result<VarianceResult, BudgetError> {
        let presence = (
            Aggregator::aggregate(budget).is_present(),
            Aggregator::aggregate(actual).is_present(),
        );
        let missing = match presence {
            (true, true) => None,
            (false, true) => Some(MissingSide::Budget),
            (true, false) => Some(MissingSide::Actual),
            (false, false) => Some(MissingSide::Both),
        };
        if let Some(side) = missing {
            return Err(BudgetError::MissingData(side));
        }

        let (Some(budget_totals), Some(actual_totals)) = (
            Aggregator::checked_aggregate(budget),
            Aggregator::checked_aggregate(actual),
        ) else {
            return Err(BudgetError::Overflow);
        };

        let result = Self::compare_totals(budget_totals, actual_totals, budget, actual)?;
        debug!(
            revenue_variance = %result.revenue.absolute_variance,
            expense_variance = %result.expenses.absolute_variance,
            profit_variance = %result.net_income.absolute_variance,
            lines = result.lines.len(),
            "variance computed"
        );
        Ok(result)
    }

    fn compare_totals(
        budget_totals: Totals,
        actual_totals: Totals,
        budget: &LineItemSet,
        actual: &LineItemSet,
    ) -> Result<VarianceResult, BudgetError> {
        let revenue = Self::dimension(
            budget_totals.total_revenue,
            actual_totals.total_revenue,
            AccountPolarity::Revenue,
        )?;
        let expenses = Self::dimension(
            budget_totals.total_expenses,
            actual_totals.total_expenses,
            AccountPolarity::Expense,
        )?;
        let net_income = Self::net_income(budget_totals.net_income, actual_totals.net_income)?;

        let lines = LineItem::ALL
            .into_iter()
            .filter_map(|item| Self::line(item, budget.get(item), actual.get(item)).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(VarianceResult {
            budget: budget_totals,
            actual: actual_totals,
            revenue,
            expenses,
            net_income,
            lines,
        })
    }

    /// Variance of one line item, `Ok(None)` when both amounts are zero.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::Overflow` if the variance or percentage does not
    /// fit in a `Decimal`.
    pub fn line(
        item: LineItem,
        budgeted: Decimal,
        actual: Decimal,
    ) -> Result<Option<LineVariance>, BudgetError> {
        if budgeted.is_zero() && actual.is_zero() {
            return Ok(None);
        }

        let (absolute_variance, percentage_variance) = Self::variance(budgeted, actual, budgeted)?;

        Ok(Some(LineVariance {
            item,
            budgeted,
            actual,
            absolute_variance,
            percentage_variance,
            status: Self::classify(item.polarity(), absolute_variance, percentage_variance),
            is_significant: Self::is_significant(budgeted, percentage_variance),
        }))
    }

    fn dimension(
        budgeted: Decimal,
        actual: Decimal,
        polarity: AccountPolarity,
    ) -> Result<DimensionVariance, BudgetError> {
        let (absolute_variance, percentage_variance) = Self::variance(budgeted, actual, budgeted)?;

        Ok(DimensionVariance {
            budgeted,
            actual,
            absolute_variance,
            percentage_variance,
            status: Self::classify(polarity, absolute_variance, percentage_variance),
        })
    }

    /// Net income can be negative, so the percentage is taken against its
    /// magnitude to keep the sign of the variance.
    fn net_income(budgeted: Decimal, actual: Decimal) -> Result<DimensionVariance, BudgetError> {
        let (absolute_variance, percentage_variance) =
            Self::variance(budgeted, actual, budgeted.abs())?;

        Ok(DimensionVariance {
            budgeted,
            actual,
            absolute_variance,
            percentage_variance,
            status: Self::classify(
                AccountPolarity::Revenue,
                absolute_variance,
                percentage_variance,
            ),
        })
    }

    /// `actual - budgeted` and its percentage of `base`.
    fn variance(
        budgeted: Decimal,
        actual: Decimal,
        base: Decimal,
    ) -> Result<(Decimal, Decimal), BudgetError> {
        let absolute = actual.checked_sub(budgeted).ok_or(BudgetError::Overflow)?;
        let pct = Self::percentage_of(absolute, base).ok_or(BudgetError::Overflow)?;
        Ok((absolute, pct))
    }

    /// `variance / base * 100`, or zero when the base is zero.
    ///
    /// Returns `None` when the result does not fit in a `Decimal`, as with a
    /// tiny base and a large variance.
    #[must_use]
    pub fn percentage_of(variance: Decimal, base: Decimal) -> Option<Decimal> {
        if base.is_zero() {
            return Some(Decimal::ZERO);
        }
        variance
            .checked_div(base)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }

    /// Classifies a variance by polarity, honoring the neutral band.
    #[must_use]
    pub fn classify(
        polarity: AccountPolarity,
        absolute_variance: Decimal,
        percentage_variance: Decimal,
    ) -> VarianceStatus {
        if percentage_variance.abs() < NEUTRAL_BAND_PERCENT {
            return VarianceStatus::Neutral;
        }

        let favorable = match polarity {
            AccountPolarity::Revenue => absolute_variance > Decimal::ZERO,
            AccountPolarity::Expense => absolute_variance < Decimal::ZERO,
        };

        if favorable {
            VarianceStatus::Favorable
        } else {
            VarianceStatus::Unfavorable
        }
    }

    /// Significant when something was budgeted and the variance is beyond ±10%.
    #[must_use]
    pub fn is_significant(budgeted: Decimal, percentage_variance: Decimal) -> bool {
        budgeted > Decimal::ZERO && percentage_variance.abs() > SIGNIFICANT_VARIANCE_PERCENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn sample_actuals() -> LineItemSet {
        LineItemSet {
            sales: dec!(560000),
            service: dec!(165000),
            other_revenue: dec!(25000),
            salaries: dec!(205000),
            rent: dec!(48000),
            marketing: dec!(36000),
            supplies: dec!(11000),
            travel: dec!(12000),
            insurance: dec!(18000),
            depreciation: dec!(25000),
            other_expenses: dec!(20500),
        }
    }

    #[test]
    fn test_revenue_variance_favorable() {
        let result =
            VarianceCalculator::compare(&LineItemSet::sample_budget(), &sample_actuals()).unwrap();

        assert_eq!(result.revenue.budgeted, dec!(675000));
        assert_eq!(result.revenue.actual, dec!(750000));
        assert_eq!(result.revenue.absolute_variance, dec!(75000));
        assert_eq!(result.revenue.percentage_variance.round_dp(2), dec!(11.11));
        assert_eq!(result.revenue.status, VarianceStatus::Favorable);
    }

    #[test]
    fn test_expense_variance_just_outside_neutral_band() {
        let result =
            VarianceCalculator::compare(&LineItemSet::sample_budget(), &sample_actuals()).unwrap();

        // 375500 vs 368000 is about +2.04%, just outside the band.
        assert_eq!(result.expenses.absolute_variance, dec!(7500));
        assert_eq!(result.expenses.status, VarianceStatus::Unfavorable);

        let other = result.line(LineItem::OtherExpenses).unwrap();
        assert_eq!(other.percentage_variance, dec!(2.5));
        assert_eq!(other.status, VarianceStatus::Unfavorable);

        let salaries = result.line(LineItem::Salaries).unwrap();
        assert_eq!(salaries.percentage_variance, dec!(2.5));

        let rent = result.line(LineItem::Rent).unwrap();
        assert_eq!(rent.status, VarianceStatus::Neutral);
    }

    #[test]
    fn test_net_income_uses_absolute_budget() {
        let budget = LineItemSet::default()
            .with_value(LineItem::Sales, dec!(1000))
            .with_value(LineItem::Rent, dec!(2000));
        let actual = LineItemSet::default()
            .with_value(LineItem::Sales, dec!(1500))
            .with_value(LineItem::Rent, dec!(2000));

        let result = VarianceCalculator::compare(&budget, &actual).unwrap();

        // Loss shrank from -1000 to -500: an improvement of +50%.
        assert_eq!(result.net_income.budgeted, dec!(-1000));
        assert_eq!(result.net_income.absolute_variance, dec!(500));
        assert_eq!(result.net_income.percentage_variance, dec!(50));
        assert_eq!(result.net_income.status, VarianceStatus::Favorable);
    }

    #[test]
    fn test_zero_budget_line_has_zero_percentage() {
        let budget = LineItemSet::sample_budget().with_value(LineItem::OtherExpenses, dec!(0));
        let actual = budget.with_value(LineItem::OtherExpenses, dec!(500));

        let result = VarianceCalculator::compare(&budget, &actual).unwrap();
        let line = result.line(LineItem::OtherExpenses).unwrap();

        assert_eq!(line.absolute_variance, dec!(500));
        assert_eq!(line.percentage_variance, Decimal::ZERO);
        assert_eq!(line.status, VarianceStatus::Neutral);
        assert!(!line.is_significant);
    }

    #[test]
    fn test_zero_zero_lines_are_excluded() {
        let budget = LineItemSet::sample_budget().with_value(LineItem::Travel, dec!(0));
        let actual = budget;

        let result = VarianceCalculator::compare(&budget, &actual).unwrap();

        assert!(result.line(LineItem::Travel).is_none());
        assert_eq!(result.lines.len(), LineItem::ALL.len() - 1);
    }

    #[test]
    fn test_lines_keep_schema_order() {
        let budget = LineItemSet::sample_budget();
        let result = VarianceCalculator::compare(&budget, &sample_actuals()).unwrap();
        let items: Vec<LineItem> = result.lines.iter().map(|line| line.item).collect();

        assert_eq!(items, LineItem::ALL.to_vec());
    }

    #[test]
    fn test_marketing_is_significant() {
        let result =
            VarianceCalculator::compare(&LineItemSet::sample_budget(), &sample_actuals()).unwrap();
        let marketing = result.line(LineItem::Marketing).unwrap();

        assert_eq!(marketing.percentage_variance, dec!(20));
        assert!(marketing.is_significant);
        assert_eq!(marketing.status, VarianceStatus::Unfavorable);

        let significant: Vec<LineItem> = result.significant_lines().map(|l| l.item).collect();
        // Service is exactly +10%, which is not beyond the threshold.
        assert_eq!(
            significant,
            vec![LineItem::Sales, LineItem::Marketing, LineItem::Travel]
        );
    }

    #[rstest]
    #[case(AccountPolarity::Revenue, dec!(100), dec!(5), VarianceStatus::Favorable)]
    #[case(AccountPolarity::Revenue, dec!(-100), dec!(-5), VarianceStatus::Unfavorable)]
    #[case(AccountPolarity::Expense, dec!(-100), dec!(-5), VarianceStatus::Favorable)]
    #[case(AccountPolarity::Expense, dec!(100), dec!(5), VarianceStatus::Unfavorable)]
    #[case(AccountPolarity::Revenue, dec!(100), dec!(1.99), VarianceStatus::Neutral)]
    #[case(AccountPolarity::Expense, dec!(100), dec!(-1.99), VarianceStatus::Neutral)]
    #[case(AccountPolarity::Revenue, dec!(100), dec!(2), VarianceStatus::Favorable)]
    #[case(AccountPolarity::Expense, dec!(100), dec!(2), VarianceStatus::Unfavorable)]
    fn test_classification_table(
        #[case] polarity: AccountPolarity,
        #[case] variance: Decimal,
        #[case] percentage: Decimal,
        #[case] expected: VarianceStatus,
    ) {
        assert_eq!(
            VarianceCalculator::classify(polarity, variance, percentage),
            expected
        );
    }

    #[test]
    fn test_tiny_budget_reports_overflow() {
        let budget = LineItemSet::from_raw([("sales", "0.0000000000000000000001")]);
        let actual = LineItemSet::from_raw([("sales", "10000000")]);

        let err = VarianceCalculator::compare(&budget, &actual).unwrap_err();

        assert_eq!(err, BudgetError::Overflow);
    }

    #[test]
    fn test_out_of_range_totals_report_overflow() {
        let budget = LineItemSet::sample_budget()
            .with_value(LineItem::Sales, Decimal::MAX)
            .with_value(LineItem::Service, Decimal::MAX);

        let err = VarianceCalculator::compare(&budget, &sample_actuals()).unwrap_err();

        assert_eq!(err, BudgetError::Overflow);
    }

    #[test]
    fn test_line_variance_overflow() {
        assert_eq!(
            VarianceCalculator::line(LineItem::Rent, Decimal::MIN, Decimal::MAX),
            Err(BudgetError::Overflow)
        );
        assert_eq!(
            VarianceCalculator::line(LineItem::Rent, Decimal::ZERO, Decimal::ZERO),
            Ok(None)
        );
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(
            VarianceCalculator::percentage_of(dec!(50), dec!(200)),
            Some(dec!(25))
        );
        assert_eq!(
            VarianceCalculator::percentage_of(dec!(50), Decimal::ZERO),
            Some(Decimal::ZERO)
        );
        assert_eq!(
            VarianceCalculator::percentage_of(dec!(10000000), dec!(0.0000000000000000000001)),
            None
        );
    }

    #[test]
    fn test_missing_budget_is_rejected() {
        let err = VarianceCalculator::compare(&LineItemSet::default(), &sample_actuals())
            .unwrap_err();
        assert_eq!(err, BudgetError::MissingData(MissingSide::Budget));
    }

    #[test]
    fn test_missing_actual_is_rejected() {
        let err = VarianceCalculator::compare(&LineItemSet::sample_budget(), &LineItemSet::default())
            .unwrap_err();
        assert_eq!(err, BudgetError::MissingData(MissingSide::Actual));
    }

    #[test]
    fn test_missing_both_is_rejected() {
        let err = VarianceCalculator::compare(&LineItemSet::default(), &LineItemSet::default())
            .unwrap_err();
        assert_eq!(err, BudgetError::MissingData(MissingSide::Both));
    }
}
