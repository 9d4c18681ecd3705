use std::path::PathBuf;

use bizval_core::StepStatus;
use bizval_model::{BusinessProfile, Industry, ProfileField, Stage, ValuationExport};

/// Outcome of `bizval estimate`.
#[derive(Debug)]
pub struct EstimateOutcome {
    pub profile: BusinessProfile,
    pub export: ValuationExport,
    pub missing_required: Vec<ProfileField>,
    /// File the export was written to, if any.
    pub written: Option<PathBuf>,
    /// Export rendered for stdout when `--format` is given without `--output`.
    pub rendered: Option<String>,
}

#[derive(Debug)]
pub struct BatchRow {
    pub record: usize,
    pub business_name: String,
    pub industry: Option<Industry>,
    pub stage: Option<Stage>,
    pub estimated_value: f64,
    pub confidence: u8,
    pub written: Option<PathBuf>,
}

/// Outcome of `bizval batch`.
#[derive(Debug)]
pub struct BatchOutcome {
    pub source: PathBuf,
    pub rows: Vec<BatchRow>,
    pub output_dir: Option<PathBuf>,
}

impl BatchOutcome {
    pub fn total_value(&self) -> f64 {
        self.rows.iter().map(|row| row.estimated_value).sum()
    }
}

/// Outcome of `bizval check`.
#[derive(Debug)]
pub struct CheckOutcome {
    pub steps: Vec<StepStatus>,
    pub missing_required: Vec<ProfileField>,
    pub completeness: f64,
    pub confidence: u8,
}

impl CheckOutcome {
    pub fn is_ready(&self) -> bool {
        self.missing_required.is_empty()
    }
}
