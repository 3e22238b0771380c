//! Text rendering of command results.

use std::fmt::Write as _;

use budget_trainer_core::Analysis;
use budget_trainer_core::budget::{DimensionVariance, LineItem, LineItemSet, VarianceStatus};
use budget_trainer_core::simulation::ScenarioOutcome;
use budget_trainer_shared::{Currency, Money, Percent};
use chrono::NaiveDate;
use rust_decimal::Decimal;

const RULE: &str = "============================================================";

/// Renders a full variance report.
pub fn render_analysis(analysis: &Analysis, currency: Currency, date: NaiveDate) -> String {
    let mut out = String::new();
    let variance = &analysis.variance;

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "BUDGET VARIANCE ANALYSIS REPORT");
    let _ = writeln!(out, "Generated: {}", date.format("%Y-%m-%d"));
    let _ = writeln!(out, "{RULE}");

    let _ = writeln!(out, "\nSUMMARY");
    for (label, dimension) in [
        ("Revenue", &variance.revenue),
        ("Expenses", &variance.expenses),
        ("Net Income", &variance.net_income),
    ] {
        write_dimension(&mut out, label, dimension, currency);
    }

    let _ = writeln!(out, "\nDETAILED VARIANCES");
    if variance.lines.is_empty() {
        let _ = writeln!(out, "  (no line items)");
    }
    for line in &variance.lines {
        let _ = writeln!(
            out,
            "  {:<20} {:>12} {:>12} {:>13} {:>8}  {}{}",
            line.item.label(),
            money(line.budgeted, currency),
            money(line.actual, currency),
            signed_money(line.absolute_variance, currency),
            signed_percent(line.percentage_variance),
            status_label(line.status),
            if line.is_significant { " *" } else { "" },
        );
    }

    let _ = writeln!(out, "\nINSIGHTS");
    for insight in &analysis.insights {
        let _ = writeln!(out, "  [{}] {}", insight.severity, insight.title);
        let _ = writeln!(out, "    {}", insight.message);
        for detail in &insight.details {
            let _ = writeln!(out, "    - {detail}");
        }
    }

    out
}

/// Renders a scenario projection.
pub fn render_outcome(outcome: &ScenarioOutcome, currency: Currency) -> String {
    let mut out = String::new();
    let adjustment = &outcome.adjustment;

    let _ = writeln!(out, "SCENARIO: {}", outcome.scenario_name);
    let _ = writeln!(
        out,
        "  Revenue {}  Expenses {}  Salaries {}  Marketing {}",
        signed_percent(adjustment.revenue),
        signed_percent(adjustment.expenses),
        signed_percent(adjustment.salaries),
        signed_percent(adjustment.marketing),
    );

    let _ = writeln!(out, "\nPROJECTED IMPACT");
    for (label, before, after, change) in [
        (
            "Revenue",
            outcome.budget_totals.total_revenue,
            outcome.projected_totals.total_revenue,
            outcome.revenue_change,
        ),
        (
            "Expenses",
            outcome.budget_totals.total_expenses,
            outcome.projected_totals.total_expenses,
            outcome.expense_change,
        ),
        (
            "Net Income",
            outcome.budget_totals.net_income,
            outcome.projected_totals.net_income,
            outcome.profit_change,
        ),
    ] {
        let _ = writeln!(
            out,
            "  {:<12} {:>12} -> {:>12}  ({})",
            label,
            money(before, currency),
            money(after, currency),
            signed_money(change, currency),
        );
    }

    let _ = writeln!(out, "\nPROJECTED LINE ITEMS");
    write_items(&mut out, &outcome.projected, currency);
    out
}

/// Renders a line-item set grouped by revenue and expenses.
pub fn render_line_items(set: &LineItemSet, currency: Currency) -> String {
    let mut out = String::new();
    write_items(&mut out, set, currency);
    out
}

fn write_items(out: &mut String, set: &LineItemSet, currency: Currency) {
    let groups: [(&str, &[LineItem], Decimal); 2] = [
        ("Revenue", &LineItem::REVENUE, set.total_revenue()),
        ("Expenses", &LineItem::EXPENSES, set.total_expenses()),
    ];
    for (heading, items, total) in groups {
        let _ = writeln!(out, "  {heading}");
        for item in items {
            let _ = writeln!(
                out,
                "    {:<20} {:>12}",
                item.label(),
                money(set.get(*item), currency)
            );
        }
        let _ = writeln!(out, "    {:<20} {:>12}", "Total", money(total, currency));
    }
    let _ = writeln!(
        out,
        "  {:<22} {:>12}",
        "Net Income",
        money(set.net_income(), currency)
    );
}

fn write_dimension(
    out: &mut String,
    label: &str,
    dimension: &DimensionVariance,
    currency: Currency,
) {
    let _ = writeln!(
        out,
        "  {:<12} budget {:>12}  actual {:>12}  variance {:>13} ({})  {}",
        label,
        money(dimension.budgeted, currency),
        money(dimension.actual, currency),
        signed_money(dimension.absolute_variance, currency),
        signed_percent(dimension.percentage_variance),
        status_label(dimension.status),
    );
}

fn money(amount: Decimal, currency: Currency) -> String {
    Money::new(amount, currency).to_string()
}

fn signed_money(amount: Decimal, currency: Currency) -> String {
    if amount > Decimal::ZERO {
        format!("+{}", money(amount, currency))
    } else {
        money(amount, currency)
    }
}

fn signed_percent(pct: Decimal) -> String {
    if pct > Decimal::ZERO {
        format!("+{}", Percent(pct))
    } else {
        Percent(pct).to_string()
    }
}

const fn status_label(status: VarianceStatus) -> &'static str {
    match status {
        VarianceStatus::Favorable => "favorable",
        VarianceStatus::Unfavorable => "unfavorable",
        VarianceStatus::Neutral => "neutral",
    }
}
