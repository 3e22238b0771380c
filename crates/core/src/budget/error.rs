//! Budget error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side of a comparison has no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSide {
    /// Budget figures are missing.
    Budget,
    /// Actual figures are missing.
    Actual,
    /// Neither side has data.
    Both,
}

impl fmt::Display for MissingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Budget => write!(f, "budget"),
            Self::Actual => write!(f, "actual"),
            Self::Both => write!(f, "budget and actual"),
        }
    }
}

/// Budget-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// One or both datasets have no revenue and no expenses.
    #[error("Missing {0} data: enter revenue or expenses before comparing")]
    MissingData(MissingSide),

    /// A total, variance or percentage falls outside the `Decimal` range.
    #[error("Amounts are too large to compare")]
    Overflow,
}
