use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use clap::Parser;

use bizval_cli::cli::{BatchArgs, CheckArgs, Cli, Command, EstimateArgs, ExportFormatArg};
use bizval_cli::commands::{run_batch, run_check, run_estimate};
use bizval_model::{FormStep, Industry, ProfileField, Stage};

const SCENARIO: &str = r#"{
    "businessName": "Acme Analytics",
    "industry": "Technology",
    "stage": "Growth",
    "revenue": 500000,
    "growth": 25,
    "cashFlow": 10000,
    "assets": 200000,
    "liabilities": 50000,
    "competition": 3,
    "employees": 12
}"#;

fn write_profile(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("profile.json");
    fs::write(&path, contents).expect("write profile");
    path
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("date")
}

fn estimate_args(profile: std::path::PathBuf) -> EstimateArgs {
    EstimateArgs {
        profile,
        format: None,
        output: None,
        date: Some(date()),
        currency: "$".to_string(),
        thousands_separator: ',',
    }
}

#[test]
fn parses_estimate_flags() {
    let cli = Cli::try_parse_from([
        "bizval",
        "-v",
        "estimate",
        "profile.json",
        "--format",
        "json",
        "--date",
        "2026-01-31",
        "--currency",
        "€",
        "--log-format",
        "json",
    ])
    .expect("parse");
    assert!(cli.verbosity.is_present());
    let Command::Estimate(args) = cli.command else {
        panic!("expected estimate");
    };
    assert_eq!(args.profile, Path::new("profile.json"));
    assert_eq!(args.format, Some(ExportFormatArg::Json));
    assert_eq!(args.date, NaiveDate::from_ymd_opt(2026, 1, 31));
    assert_eq!(args.currency, "€");
    assert_eq!(args.thousands_separator, ',');
}

#[test]
fn rejects_malformed_date() {
    let parsed = Cli::try_parse_from(["bizval", "estimate", "p.json", "--date", "17/10/2026"]);
    assert!(parsed.is_err());
}

#[test]
fn parses_batch_and_catalog() {
    let cli = Cli::try_parse_from(["bizval", "batch", "rows.csv", "-o", "out"]).expect("parse");
    let Command::Batch(args) = cli.command else {
        panic!("expected batch");
    };
    assert_eq!(args.output_dir.as_deref(), Some(Path::new("out")));
    assert_eq!(args.currency, "$");

    let cli = Cli::try_parse_from(["bizval", "--log-data", "catalog"]).expect("parse");
    assert!(cli.log_data);
    assert!(matches!(cli.command, Command::Catalog));
}

#[test]
fn estimate_scenario_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome = run_estimate(&estimate_args(write_profile(dir.path(), SCENARIO))).expect("run");

    assert!((outcome.export.estimated_value - 3_054_000.0).abs() < 1e-6);
    assert_eq!(outcome.export.business_name, "Acme Analytics");
    assert_eq!(outcome.export.valuation_date, date());
    assert!(outcome.missing_required.is_empty());
    assert!(outcome.written.is_none());
    assert!(outcome.rendered.is_none());
}

#[test]
fn estimate_writes_json_by_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("valuation.json");
    let mut args = estimate_args(write_profile(dir.path(), SCENARIO));
    args.output = Some(output.clone());

    let outcome = run_estimate(&args).expect("run");
    assert_eq!(outcome.written.as_deref(), Some(output.as_path()));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read")).expect("json");
    assert_eq!(json["businessName"], "Acme Analytics");
    assert_eq!(json["valuationDate"], "2026-10-17");
    assert_eq!(json["confidence"], outcome.export.confidence);
}

#[test]
fn estimate_format_renders_for_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut args = estimate_args(write_profile(dir.path(), SCENARIO));
    args.format = Some(ExportFormatArg::Text);

    let outcome = run_estimate(&args).expect("run");
    let rendered = outcome.rendered.expect("rendered");
    assert!(rendered.starts_with("Business Valuation Report\n"));
    assert!(rendered.contains("$3,054,000"));
}

#[test]
fn estimate_text_uses_configured_separator() {
    let cli = Cli::try_parse_from([
        "bizval",
        "estimate",
        "profile.json",
        "--currency",
        "€",
        "--thousands-separator",
        ".",
    ])
    .expect("parse");
    let Command::Estimate(parsed) = cli.command else {
        panic!("expected estimate");
    };
    assert_eq!(parsed.thousands_separator, '.');

    let dir = tempfile::tempdir().expect("tempdir");
    let mut args = estimate_args(write_profile(dir.path(), SCENARIO));
    args.format = Some(ExportFormatArg::Text);
    args.currency = parsed.currency;
    args.thousands_separator = parsed.thousands_separator;

    let rendered = run_estimate(&args).expect("run").rendered.expect("rendered");
    assert!(rendered.contains("€3.054.000"));
    assert!(!rendered.contains("3,054,000"));
}

#[test]
fn estimate_reports_missing_required_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome =
        run_estimate(&estimate_args(write_profile(dir.path(), r#"{"growth": 12}"#))).expect("run");
    assert_eq!(
        outcome.missing_required,
        vec![
            ProfileField::BusinessName,
            ProfileField::Industry,
            ProfileField::Stage,
            ProfileField::Revenue,
        ]
    );
    assert_eq!(outcome.export.business_name, "Unnamed business");
    assert_eq!(outcome.export.estimated_value, 0.0);
}

#[test]
fn estimate_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let error = run_estimate(&estimate_args(dir.path().join("absent.json"))).unwrap_err();
    assert!(format!("{error:#}").contains("absent.json"));
}

#[test]
fn batch_estimates_every_row_and_writes_exports() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = dir.path().join("profiles.csv");
    fs::write(
        &csv,
        "businessName,industry,stage,revenue,growth,cash_flow,assets,liabilities,competition,employees\n\
         Acme Analytics,Technology,Growth,500000,25,10000,200000,50000,3,12\n\
         ,Retail,,,,,,,,\n",
    )
    .expect("write csv");
    let output_dir = dir.path().join("exports");
    let args = BatchArgs {
        csv: csv.clone(),
        output_dir: Some(output_dir.clone()),
        date: Some(date()),
        currency: "$".to_string(),
        thousands_separator: ',',
    };

    let outcome = run_batch(&args).expect("run");
    assert_eq!(outcome.rows.len(), 2);

    let first = &outcome.rows[0];
    assert_eq!(first.record, 1);
    assert_eq!(first.industry, Some(Industry::Technology));
    assert_eq!(first.stage, Some(Stage::Growth));
    assert!((first.estimated_value - 3_054_000.0).abs() < 1e-6);
    assert_eq!(
        first.written.as_deref(),
        Some(output_dir.join("001-acme-analytics.json").as_path())
    );

    let second = &outcome.rows[1];
    assert_eq!(second.business_name, "Unnamed business");
    assert_eq!(second.estimated_value, 0.0);
    assert!(output_dir.join("002-unnamed-business.json").exists());
    assert!((outcome.total_value() - 3_054_000.0).abs() < 1e-6);
}

#[test]
fn check_lists_steps_and_required_gaps() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args = CheckArgs {
        profile: write_profile(dir.path(), r#"{"businessName": "Solo", "revenue": 1000}"#),
    };

    let outcome = run_check(&args).expect("run");
    assert!(!outcome.is_ready());
    assert_eq!(
        outcome.missing_required,
        vec![ProfileField::Industry, ProfileField::Stage]
    );
    let steps: Vec<FormStep> = outcome.steps.iter().map(|status| status.step).collect();
    assert_eq!(steps, FormStep::ALL.to_vec());
    assert!((outcome.completeness - 12.5).abs() < 1e-9);
    assert_eq!(outcome.confidence, 30);
}

#[test]
fn check_passes_complete_scenario() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome = run_check(&CheckArgs {
        profile: write_profile(dir.path(), SCENARIO),
    })
    .expect("run");
    assert!(outcome.is_ready());
    assert_eq!(outcome.confidence, 70);
}

#[test]
fn check_and_estimate_agree_on_confidence() {
    let dir = tempfile::tempdir().expect("tempdir");
    let profile = write_profile(
        dir.path(),
        r#"{"revenue": -500, "assets": -1, "liabilities": -2, "marketSize": -3, "stage": "Seed"}"#,
    );

    let checked = run_check(&CheckArgs {
        profile: profile.clone(),
    })
    .expect("check");
    let estimated = run_estimate(&estimate_args(profile)).expect("estimate");

    assert_eq!(checked.confidence, estimated.export.confidence);
    // Only the unrecognised stage counts: 1 of 16 fields.
    assert!((checked.completeness - 6.25).abs() < 1e-9);
    assert_eq!(
        checked.missing_required,
        vec![
            ProfileField::BusinessName,
            ProfileField::Industry,
            ProfileField::Revenue,
        ]
    );
}
