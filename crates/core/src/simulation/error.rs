//! Simulation error types.

use thiserror::Error;

use super::scenario::AdjustmentKnob;

/// Simulation-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// A scenario percentage is not a number.
    #[error("Invalid {knob} adjustment: {value:?} is not a number")]
    InvalidAdjustment {
        /// Knob that failed to parse.
        knob: AdjustmentKnob,
        /// Raw input.
        value: String,
    },

    /// Unknown preset name.
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    /// The budget has no revenue to project from.
    #[error("Create a budget with revenue before running a scenario")]
    MissingBudget,

    /// A projected amount falls outside the `Decimal` range.
    #[error("Scenario result is too large to represent")]
    Overflow,
}
