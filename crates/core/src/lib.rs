//! Core budgeting logic for the budget trainer.
//!
//! This crate contains pure business logic with ZERO UI, file or database
//! dependencies. Every operation takes plain values and returns fresh values.
//!
//! # Modules
//!
//! - `budget` - Line items, totals and budget vs actual variances
//! - `insights` - Narrative findings derived from variances
//! - `simulation` - What-if scenario projections and practice actuals
//! - `analysis` - The variance + insight pipeline in one call

pub mod analysis;
pub mod budget;
pub mod insights;
pub mod simulation;

pub use analysis::{Analysis, analyze};
