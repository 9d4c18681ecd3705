use std::fs;

use bizval_ingest::{IngestError, load_profile, read_profile_batch};
use bizval_model::{Industry, Stage};

#[test]
fn loads_profile_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("profile.json");
    fs::write(
        &path,
        r#"{"businessName": "Acme", "industry": "Finance", "stage": "Exit Ready", "revenue": "2,000,000"}"#,
    )
    .expect("write profile");

    let profile = load_profile(&path).expect("load profile");
    assert_eq!(profile.business_name, "Acme");
    assert_eq!(profile.industry, Some(Industry::Finance));
    assert_eq!(profile.stage, Some(Stage::ExitReady));
    assert_eq!(profile.revenue, 2_000_000.0);
}

#[test]
fn missing_profile_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");
    let err = load_profile(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn malformed_profile_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"revenue\": ").expect("write profile");
    let err = load_profile(&path).unwrap_err();
    assert!(matches!(err, IngestError::Json { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn reads_batch_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("batch.csv");
    fs::write(
        &path,
        "businessName,industry,stage,revenue,growth\n\
         Acme,Technology,Growth,500000,25\n\
         Beta,Retail,Idea,40000,-5\n",
    )
    .expect("write batch");

    let records = read_profile_batch(&path).expect("read batch");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].record, 2);
    assert_eq!(records[1].profile.industry, Some(Industry::Retail));
    assert_eq!(records[1].profile.growth, -5.0);
}
