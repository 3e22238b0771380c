//! Subcommand handlers.
//!
//! Each handler returns the rendered output so `main` owns printing and
//! exit codes.

use std::path::Path;

use budget_trainer_core::analyze;
use budget_trainer_core::budget::{BudgetError, LineItemSet};
use budget_trainer_core::simulation::{
    ActualsGenerator, Scenario, ScenarioAdjustment, ScenarioPreset, ScenarioProjector,
    SimulationError,
};
use budget_trainer_shared::{AppError, AppResult, Currency, OutputFormat};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use crate::cli::{Commands, ScenarioArgs};
use crate::input::load_line_items;
use crate::report;

/// Settings resolved from config and flags.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Currency used in text output.
    pub currency: Currency,
    /// Text or JSON.
    pub format: OutputFormat,
}

/// Dispatches a parsed subcommand.
pub fn run(command: &Commands, ctx: Context) -> AppResult<String> {
    match command {
        Commands::Analyze { budget, actual } => cmd_analyze(budget, actual, ctx),
        Commands::Simulate { budget, scenario } => cmd_simulate(budget, scenario, ctx),
        Commands::Sample => render_items(&LineItemSet::sample_budget(), ctx),
        Commands::RandomActuals { budget, seed } => cmd_random_actuals(budget, *seed, ctx),
    }
}

fn cmd_analyze(budget: &Path, actual: &Path, ctx: Context) -> AppResult<String> {
    let budget = load_line_items(budget)?;
    let actual = load_line_items(actual)?;

    let analysis = analyze(&budget, &actual, ctx.currency).map_err(budget_error)?;

    match ctx.format {
        OutputFormat::Json => to_json(&analysis),
        OutputFormat::Text => Ok(report::render_analysis(
            &analysis,
            ctx.currency,
            chrono::Local::now().date_naive(),
        )),
    }
}

fn cmd_simulate(budget: &Path, args: &ScenarioArgs, ctx: Context) -> AppResult<String> {
    let budget = load_line_items(budget)?;
    let scenario = resolve_scenario(args)?;
    info!(scenario = scenario.name(), "running scenario");

    let outcome = ScenarioProjector::simulate(&budget, &scenario).map_err(simulation_error)?;

    match ctx.format {
        OutputFormat::Json => to_json(&outcome),
        OutputFormat::Text => Ok(report::render_outcome(&outcome, ctx.currency)),
    }
}

fn cmd_random_actuals(budget: &Path, seed: Option<u64>, ctx: Context) -> AppResult<String> {
    let budget = load_line_items(budget)?;

    let actual = match seed {
        Some(seed) => ActualsGenerator::generate(&budget, &mut StdRng::seed_from_u64(seed)),
        None => ActualsGenerator::generate(&budget, &mut rand::rng()),
    }
    .map_err(simulation_error)?;

    render_items(&actual, ctx)
}

fn render_items(set: &LineItemSet, ctx: Context) -> AppResult<String> {
    match ctx.format {
        OutputFormat::Json => to_json(set),
        OutputFormat::Text => Ok(report::render_line_items(set, ctx.currency)),
    }
}

/// Builds a scenario from a preset name or the custom knob flags.
fn resolve_scenario(args: &ScenarioArgs) -> AppResult<Scenario> {
    if let Some(name) = &args.scenario {
        let preset = name.parse::<ScenarioPreset>().map_err(simulation_error)?;
        return Ok(Scenario::Preset(preset));
    }

    let knobs: Vec<(&str, &str)> = [
        ("revenue", &args.revenue),
        ("expenses", &args.expenses),
        ("salaries", &args.salaries),
        ("marketing", &args.marketing),
    ]
    .into_iter()
    .filter_map(|(knob, value)| value.as_deref().map(|v| (knob, v)))
    .collect();

    if knobs.is_empty() {
        return Err(AppError::Validation(
            "choose --scenario or at least one of --revenue, --expenses, --salaries, --marketing"
                .to_string(),
        ));
    }

    Ok(Scenario::Custom(ScenarioAdjustment::from_raw(knobs)))
}

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))
}

fn budget_error(err: BudgetError) -> AppError {
    match err {
        BudgetError::MissingData(_) => AppError::MissingData(err.to_string()),
        BudgetError::Overflow => AppError::Validation(err.to_string()),
    }
}

fn simulation_error(err: SimulationError) -> AppError {
    match err {
        SimulationError::MissingBudget => AppError::MissingData(err.to_string()),
        SimulationError::InvalidAdjustment { .. }
        | SimulationError::UnknownScenario(_)
        | SimulationError::Overflow => AppError::Validation(err.to_string()),
    }
}
