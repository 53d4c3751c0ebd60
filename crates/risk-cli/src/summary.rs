//! Rendering of scoring results: the risk verdict line and the summary
//! tables.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use risk_model::{PredictionResult, RiskLabel};

use crate::commands::{BatchOutcome, ScoreOutcome};

/// The user-facing verdict line, probability formatted as a percentage.
pub fn risk_message(result: &PredictionResult) -> String {
    match result.label {
        RiskLabel::HighRisk => format!(
            "High risk of default (probability: {})",
            result.probability_percent()
        ),
        RiskLabel::LowRisk => format!(
            "Low risk customer (probability: {})",
            result.probability_percent()
        ),
    }
}

pub fn print_score(outcome: &ScoreOutcome) {
    let applicant = &outcome.applicant;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_verdict_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Credit limit"),
        Cell::new(format_amount(applicant.limit_bal)),
    ]);
    table.add_row(vec![
        Cell::new("Gender"),
        Cell::new(applicant.gender.as_str()),
    ]);
    table.add_row(vec![
        Cell::new("Education"),
        Cell::new(applicant.education.as_str()),
    ]);
    table.add_row(vec![
        Cell::new("Marital status"),
        Cell::new(applicant.marital_status.as_str()),
    ]);
    table.add_row(vec![Cell::new("Age"), Cell::new(applicant.age)]);
    table.add_row(vec![
        Cell::new("Last month pending payments"),
        Cell::new(applicant.pay_0),
    ]);
    table.add_row(vec![
        Cell::new("2 months ago pending payments"),
        Cell::new(applicant.pay_2),
    ]);
    table.add_row(vec![
        Cell::new("Last bill amount"),
        Cell::new(format_amount(applicant.bill_amt1)),
    ]);
    table.add_row(vec![
        Cell::new("Last payment amount"),
        Cell::new(format_amount(applicant.pay_amt1)),
    ]);
    println!("{table}");
    println!("{}", risk_message(&outcome.result));
}

pub fn print_batch(outcome: &BatchOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Age"),
        header_cell("Credit limit"),
        header_cell("PAY_0"),
        header_cell("PAY_2"),
        header_cell("Probability"),
        header_cell("Label"),
    ]);
    apply_verdict_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in &outcome.rows {
        table.add_row(vec![
            Cell::new(row.line),
            Cell::new(row.applicant.age),
            Cell::new(format_amount(row.applicant.limit_bal)),
            Cell::new(row.applicant.pay_0),
            Cell::new(row.applicant.pay_2),
            Cell::new(row.result.probability_percent()),
            label_cell(row.result.label),
        ]);
    }
    println!("{table}");
    println!(
        "Scored {} applicants: {} high risk, {} low risk",
        outcome.rows.len(),
        outcome.high_risk,
        outcome.low_risk
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_verdict_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn label_cell(label: RiskLabel) -> Cell {
    match label {
        RiskLabel::HighRisk => Cell::new(label.as_str())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        RiskLabel::LowRisk => Cell::new(label.as_str()).fg(Color::Green),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}
