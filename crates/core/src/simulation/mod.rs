//! What-if scenario projections.

pub mod engine;
pub mod error;
pub mod random;
pub mod scenario;
pub mod types;


pub use engine::ScenarioProjector;
pub use error::SimulationError;
pub use random::ActualsGenerator;
pub use scenario::{AdjustmentKnob, Scenario, ScenarioAdjustment, ScenarioPreset};
pub use types::ScenarioOutcome;
