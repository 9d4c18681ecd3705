use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{debug, info, info_span, warn};

use bizval_core::estimator::confidence_from_completeness;
use bizval_core::{
    DEFAULT_INDUSTRY_MULTIPLIER, DEFAULT_STAGE_FACTOR, INDUSTRY_MULTIPLIERS, STAGE_FACTORS,
    data_completeness, estimate, missing_required, step_status,
};
use bizval_ingest::{load_profile, read_profile_batch};
use bizval_model::{BusinessModel, ProfileField, ValuationExport};
use bizval_report::{ReportFormat, render, write_export};

use crate::cli::{BatchArgs, CheckArgs, EstimateArgs};
use crate::logging::redact_value;
use crate::summary::{align_column, apply_table_style, header_cell};
use crate::types::{BatchOutcome, BatchRow, CheckOutcome, EstimateOutcome};

pub fn run_estimate(args: &EstimateArgs) -> Result<EstimateOutcome> {
    let profile = load_profile(&args.profile)
        .with_context(|| format!("load profile {}", args.profile.display()))?;
    let span = info_span!("estimate", business = %redact_value(&profile.business_name));
    let _guard = span.enter();

    let missing = missing_required(&profile);
    if !missing.is_empty() {
        warn!(
            missing = %field_keys(&missing),
            "required fields missing, confidence is reduced"
        );
    }
    let result = estimate(&profile);
    let export = ValuationExport::new(&profile, &result, args.date.unwrap_or_else(today));
    let options = args.report_options();

    let written = match &args.output {
        Some(path) => {
            let format = args
                .format
                .map_or_else(|| format_for_path(path), ReportFormat::from);
            write_export(path, &export, format, &options)
                .with_context(|| format!("write export {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };
    let rendered = match (args.format, &args.output) {
        (Some(format), None) => Some(render(&export, format.into(), &options).context("render export")?),
        _ => None,
    };
    info!(
        estimated_value = export.estimated_value,
        confidence = export.confidence,
        "estimate complete"
    );
    Ok(EstimateOutcome {
        profile,
        export,
        missing_required: missing,
        written,
        rendered,
    })
}

pub fn run_batch(args: &BatchArgs) -> Result<BatchOutcome> {
    let span = info_span!("batch", source = %args.csv.display());
    let _guard = span.enter();
    let records = read_profile_batch(&args.csv)
        .with_context(|| format!("read batch {}", args.csv.display()))?;
    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
    }
    let date = args.date.unwrap_or_else(today);
    let options = args.report_options();

    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let profile = &record.profile;
        let missing = missing_required(profile);
        if !missing.is_empty() {
            warn!(
                record = record.record,
                missing = %field_keys(&missing),
                "required fields missing"
            );
        }
        let result = estimate(profile);
        let export = ValuationExport::new(profile, &result, date);
        let written = match &args.output_dir {
            Some(dir) => {
                let path = dir.join(export_file_name(record.record, &export.business_name));
                write_export(&path, &export, ReportFormat::Json, &options)
                    .with_context(|| format!("write export for record {}", record.record))?;
                Some(path)
            }
            None => None,
        };
        debug!(
            record = record.record,
            business = %redact_value(&export.business_name),
            estimated_value = export.estimated_value,
            "record estimated"
        );
        rows.push(BatchRow {
            record: record.record,
            business_name: export.business_name,
            industry: profile.industry,
            stage: profile.stage,
            estimated_value: export.estimated_value,
            confidence: export.confidence,
            written,
        });
    }
    info!(profiles = rows.len(), "batch complete");
    Ok(BatchOutcome {
        source: args.csv.clone(),
        rows,
        output_dir: args.output_dir.clone(),
    })
}

pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let profile = load_profile(&args.profile)
        .with_context(|| format!("load profile {}", args.profile.display()))?;
    let completeness = data_completeness(&profile);
    let outcome = CheckOutcome {
        steps: step_status(&profile),
        missing_required: missing_required(&profile),
        completeness,
        confidence: confidence_from_completeness(completeness),
    };
    if !outcome.is_ready() {
        warn!(
            missing = %field_keys(&outcome.missing_required),
            "profile is missing required fields"
        );
    }
    Ok(outcome)
}

pub fn run_catalog() -> Result<()> {
    let mut industries = Table::new();
    industries.set_header(vec![header_cell("Industry"), header_cell("Multiplier")]);
    apply_table_style(&mut industries);
    align_column(&mut industries, 1, CellAlignment::Right);
    for (industry, multiplier) in INDUSTRY_MULTIPLIERS {
        industries.add_row(vec![Cell::new(industry), Cell::new(format!("{multiplier:.1}x"))]);
    }
    industries.add_row(vec![
        Cell::new("(not provided)"),
        Cell::new(format!("{DEFAULT_INDUSTRY_MULTIPLIER:.1}x")),
    ]);
    println!("{industries}");

    let mut stages = Table::new();
    stages.set_header(vec![header_cell("Stage"), header_cell("Factor")]);
    apply_table_style(&mut stages);
    align_column(&mut stages, 1, CellAlignment::Right);
    for (stage, factor) in STAGE_FACTORS {
        stages.add_row(vec![Cell::new(stage), Cell::new(format!("{factor:.2}"))]);
    }
    stages.add_row(vec![
        Cell::new("(not provided)"),
        Cell::new(format!("{DEFAULT_STAGE_FACTOR:.2}")),
    ]);
    println!("{stages}");

    let mut models = Table::new();
    models.set_header(vec![header_cell("Business model")]);
    apply_table_style(&mut models);
    for model in BusinessModel::ALL {
        models.add_row(vec![Cell::new(model)]);
    }
    println!("{models}");
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// JSON for `.json` paths, text for anything else.
fn format_for_path(path: &Path) -> ReportFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
        _ => ReportFormat::Text,
    }
}

fn field_keys(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(ProfileField::key)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `007-acme-analytics.json` for record 7 named "Acme Analytics".
fn export_file_name(record: usize, business_name: &str) -> PathBuf {
    let mut slug = String::new();
    for ch in business_name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "profile" } else { slug };
    PathBuf::from(format!(
        "{record:03}-{slug}.{}",
        ReportFormat::Json.extension()
    ))
}
