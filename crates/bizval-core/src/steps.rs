//! Completeness of a profile, overall and per form step.

use serde::Serialize;

use bizval_model::{BusinessProfile, FormStep, ProfileField};

/// Fields the form insists on before submitting.
pub const REQUIRED_FIELDS: [ProfileField; 4] = [
    ProfileField::BusinessName,
    ProfileField::Industry,
    ProfileField::Stage,
    ProfileField::Revenue,
];

/// Completeness of one form step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStatus {
    pub step: FormStep,
    pub provided: usize,
    pub total: usize,
    pub missing: Vec<ProfileField>,
}

impl StepStatus {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Percentage (0-100) of profile fields that are filled in.
pub fn data_completeness(profile: &BusinessProfile) -> f64 {
    let total = ProfileField::ALL.len();
    let provided = ProfileField::ALL
        .into_iter()
        .filter(|field| profile.is_provided(*field))
        .count();
    provided as f64 * 100.0 / total as f64
}

pub fn step_status(profile: &BusinessProfile) -> Vec<StepStatus> {
    FormStep::ALL
        .into_iter()
        .map(|step| {
            let mut provided = 0;
            let mut missing = Vec::new();
            for field in step.fields() {
                if profile.is_provided(field) {
                    provided += 1;
                } else {
                    missing.push(field);
                }
            }
            StepStatus {
                step,
                provided,
                total: provided + missing.len(),
                missing,
            }
        })
        .collect()
}

/// Required fields left blank. Estimation still runs without them; the
/// score just reflects the gap.
pub fn missing_required(profile: &BusinessProfile) -> Vec<ProfileField> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !profile.is_provided(*field))
        .collect()
}
