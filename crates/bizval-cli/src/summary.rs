use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bizval_core::{ASSET_WEIGHT, INCOME_WEIGHT, MARKET_WEIGHT};
use bizval_model::ProfileField;
use bizval_report::{ReportOptions, format_percent, format_weight};

use crate::types::{BatchOutcome, CheckOutcome, EstimateOutcome};

pub fn print_estimate(outcome: &EstimateOutcome, options: &ReportOptions) {
    if let Some(rendered) = &outcome.rendered {
        print!("{rendered}");
        return;
    }
    let export = &outcome.export;
    println!("Business: {}", export.business_name);
    println!("Valuation date: {}", export.valuation_date);
    if let Some(path) = &outcome.written {
        println!("Export: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Approach"),
        header_cell("Weight"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let breakdown = &export.breakdown;
    for (label, weight, value) in [
        ("Asset-based", ASSET_WEIGHT, breakdown.asset_based),
        ("Market-based", MARKET_WEIGHT, breakdown.market_based),
        ("Income-based", INCOME_WEIGHT, breakdown.income_based),
    ] {
        table.add_row(vec![
            Cell::new(label),
            dim_cell(format_weight(weight)),
            amount_cell(value, &options.money(value)),
        ]);
    }
    table.add_row(vec![
        Cell::new("ESTIMATED VALUE")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(options.money(export.estimated_value)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Confidence"),
        dim_cell("-"),
        confidence_cell(export.confidence),
    ]);
    println!("{table}");

    print_list("Positive factors", &export.factors.positive, Color::Green);
    print_list("Negative factors", &export.factors.negative, Color::Red);
    println!();
    println!("Recommendations:");
    for (idx, advice) in export.recommendations.iter().enumerate() {
        println!("  {}. {advice}", idx + 1);
    }
    print_missing(&outcome.missing_required);
}

pub fn print_batch(outcome: &BatchOutcome, options: &ReportOptions) {
    println!("Source: {}", outcome.source.display());
    if let Some(dir) = &outcome.output_dir {
        println!("Output: {}", dir.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record"),
        header_cell("Business"),
        header_cell("Industry"),
        header_cell("Stage"),
        header_cell("Estimate"),
        header_cell("Confidence"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for row in &outcome.rows {
        table.add_row(vec![
            dim_cell(row.record),
            Cell::new(&row.business_name),
            optional_cell(row.industry),
            optional_cell(row.stage),
            amount_cell(row.estimated_value, &options.money(row.estimated_value)),
            confidence_cell(row.confidence),
        ]);
    }
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(options.money(outcome.total_value())).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_check(outcome: &CheckOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Provided"),
        header_cell("Missing"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for status in &outcome.steps {
        let provided = format!("{}/{}", status.provided, status.total);
        let provided = if status.is_complete() {
            Cell::new(provided).fg(Color::Green)
        } else {
            Cell::new(provided).fg(Color::Yellow)
        };
        let missing = if status.missing.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(field_labels(&status.missing))
        };
        table.add_row(vec![Cell::new(status.step.as_str()), provided, missing]);
    }
    println!("{table}");
    println!("Completeness: {:.1}%", outcome.completeness);
    println!("Confidence: {}", format_percent(outcome.confidence));
    print_missing(&outcome.missing_required);
}

fn print_list(heading: &str, items: &[String], color: Color) {
    println!();
    println!("{heading}:");
    if items.is_empty() {
        println!("  None identified");
        return;
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    for item in items {
        table.add_row(vec![Cell::new(item).fg(color)]);
    }
    println!("{table}");
}

fn print_missing(missing: &[ProfileField]) {
    if missing.is_empty() {
        return;
    }
    eprintln!("Missing required fields:");
    for field in missing {
        eprintln!("- {}", field.label());
    }
}

fn field_labels(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(ProfileField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn amount_cell(value: f64, formatted: &str) -> Cell {
    if value < 0.0 {
        Cell::new(formatted).fg(Color::Red)
    } else {
        Cell::new(formatted)
    }
}

fn confidence_cell(confidence: u8) -> Cell {
    let color = match confidence {
        75.. => Color::Green,
        50..75 => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(format_percent(confidence)).fg(color)
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
