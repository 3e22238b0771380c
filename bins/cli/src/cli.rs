//! CLI argument definitions using clap.

use std::path::PathBuf;

use budget_trainer_shared::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// Budget trainer - practice budget vs actual variance analysis
#[derive(Debug, Parser)]
#[command(name = "budget-trainer")]
#[command(about = "Budget variance analysis and scenario simulation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Extra configuration file (TOML, JSON or YAML)
    #[arg(long, global = true, env = "BUDGET_TRAINER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format, overrides `report.format`
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare actuals against a budget
    Analyze {
        /// Budget line items file
        #[arg(short, long)]
        budget: PathBuf,

        /// Actual line items file
        #[arg(short, long)]
        actual: PathBuf,
    },

    /// Project actuals from a budget using a scenario
    Simulate {
        /// Budget line items file
        #[arg(short, long)]
        budget: PathBuf,

        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Print the sample budget
    Sample,

    /// Generate random practice actuals within ±20% of a budget
    RandomActuals {
        /// Budget line items file
        #[arg(short, long)]
        budget: PathBuf,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Preset name or custom percentages.
#[derive(Debug, Args)]
pub struct ScenarioArgs {
    /// Preset: optimistic, pessimistic, realistic, crisis, growth
    #[arg(short, long, conflicts_with_all = ["revenue", "expenses", "salaries", "marketing"])]
    pub scenario: Option<String>,

    /// Revenue change in percent
    #[arg(long, allow_hyphen_values = true)]
    pub revenue: Option<String>,

    /// General expense change in percent
    #[arg(long, allow_hyphen_values = true)]
    pub expenses: Option<String>,

    /// Salary change in percent
    #[arg(long, allow_hyphen_values = true)]
    pub salaries: Option<String>,

    /// Marketing change in percent
    #[arg(long, allow_hyphen_values = true)]
    pub marketing: Option<String>,
}
