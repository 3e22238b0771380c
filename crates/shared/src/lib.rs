//! Shared types, errors, and configuration for the budget trainer.
//!
//! This crate provides common types used across all other crates:
//! - Money and percentage types with decimal precision and display formatting
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, OutputFormat};
pub use error::{AppError, AppResult};
pub use types::{Currency, Money, Percent};
