//! Randomized practice actuals.

use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::error::SimulationError;
use crate::budget::LineItemSet;

/// Largest variation from budget, in basis points (±20%).
pub const MAX_VARIATION_BPS: i64 = 2_000;

/// Generates plausible actuals around a budget for practice.
pub struct ActualsGenerator;

impl ActualsGenerator {
    /// Draws each line within ±20% of its budget, floored at zero and
    /// rounded to whole currency units.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::MissingBudget` if the budget has no revenue,
    /// and `SimulationError::Overflow` if a varied amount leaves the
    /// `Decimal` range.
    pub fn generate<R: Rng>(
        budget: &LineItemSet,
        rng: &mut R,
    ) -> Result<LineItemSet, SimulationError> {
        if budget.total_revenue().is_zero() {
            return Err(SimulationError::MissingBudget);
        }

        let actual = LineItemSet::try_from_fn(|item| {
            let bps = rng.random_range(-MAX_VARIATION_BPS..=MAX_VARIATION_BPS);
            Self::vary(budget.get(item), bps).ok_or(SimulationError::Overflow)
        })?;

        debug!(
            revenue = %actual.total_revenue(),
            expenses = %actual.total_expenses(),
            "random actuals generated"
        );
        Ok(actual)
    }

    /// Applies a variation given in basis points, `None` on overflow.
    fn vary(amount: Decimal, bps: i64) -> Option<Decimal> {
        let factor = Decimal::ONE.checked_add(Decimal::new(bps, 4))?;
        let varied = amount.checked_mul(factor)?;
        Some(
            varied
                .max(Decimal::ZERO)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}
