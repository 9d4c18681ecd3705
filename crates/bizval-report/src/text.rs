//! Plain-text valuation report.

use bizval_core::{ASSET_WEIGHT, INCOME_WEIGHT, MARKET_WEIGHT};
use bizval_model::ValuationExport;

use crate::ReportOptions;
use crate::currency::{format_percent, format_weight};

const TITLE: &str = "Business Valuation Report";
const NONE_IDENTIFIED: &str = "None identified";

/// Render the export as a human-readable report.
pub fn render_text(export: &ValuationExport, options: &ReportOptions) -> String {
    let money = |value: f64| options.money(value);
    let mut lines = vec![
        TITLE.to_string(),
        "=".repeat(TITLE.len()),
        field("Business:", &export.business_name),
        field("Valuation date:", &export.valuation_date.to_string()),
        field("Estimated value:", &money(export.estimated_value)),
        field("Confidence:", &format_percent(export.confidence)),
        field("Method:", &export.method),
        String::new(),
        "Breakdown".to_string(),
    ];
    let breakdown = &export.breakdown;
    for (label, weight, value) in [
        ("Asset-based", ASSET_WEIGHT, breakdown.asset_based),
        ("Market-based", MARKET_WEIGHT, breakdown.market_based),
        ("Income-based", INCOME_WEIGHT, breakdown.income_based),
    ] {
        let label = format!("{label} ({}):", format_weight(weight));
        lines.push(format!("  {label:<21}{}", money(value)));
    }

    push_list(&mut lines, "Positive factors", &export.factors.positive, "+");
    push_list(&mut lines, "Negative factors", &export.factors.negative, "-");

    lines.push(String::new());
    lines.push("Recommendations".to_string());
    for (idx, advice) in export.recommendations.iter().enumerate() {
        lines.push(format!("  {}. {advice}", idx + 1));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn field(label: &str, value: &str) -> String {
    format!("{label:<18}{value}")
}

fn push_list(lines: &mut Vec<String>, heading: &str, items: &[String], marker: &str) {
    lines.push(String::new());
    lines.push(heading.to_string());
    if items.is_empty() {
        lines.push(format!("  {NONE_IDENTIFIED}"));
    }
    for item in items {
        lines.push(format!("  {marker} {item}"));
    }
}
