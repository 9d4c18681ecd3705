//! Lookup tables for the market-based valuation.
//!
//! Each table is a finite mapping with an explicit default, so lookups are
//! total: a missing or unlisted key yields the default instead of failing.

use bizval_model::{Industry, Stage};

/// Revenue multiple applied when the industry is missing or unlisted.
pub const DEFAULT_INDUSTRY_MULTIPLIER: f64 = 3.0;

/// Stage factor applied when the stage is missing or unlisted.
pub const DEFAULT_STAGE_FACTOR: f64 = 1.0;

/// Revenue multiple by industry.
pub const INDUSTRY_MULTIPLIERS: [(Industry, f64); 11] = [
    (Industry::Technology, 8.0),
    (Industry::Health, 6.0),
    (Industry::Finance, 4.0),
    (Industry::Education, 3.5),
    (Industry::Energy, 3.5),
    (Industry::Media, 3.0),
    (Industry::Manufacturing, 2.5),
    (Industry::RealEstate, 2.5),
    (Industry::Hospitality, 2.0),
    (Industry::Retail, 2.0),
    (Industry::Other, DEFAULT_INDUSTRY_MULTIPLIER),
];

/// Lifecycle discount or premium by stage.
pub const STAGE_FACTORS: [(Stage, f64); 8] = [
    (Stage::Idea, 0.5),
    (Stage::Mvp, 0.7),
    (Stage::EarlyRevenue, 0.9),
    (Stage::Growth, 1.2),
    (Stage::Established, 1.0),
    (Stage::Expansion, 1.1),
    (Stage::ExitReady, 0.95),
    (Stage::Other, DEFAULT_STAGE_FACTOR),
];

pub fn industry_multiplier(industry: Option<Industry>) -> f64 {
    industry
        .and_then(|industry| lookup(&INDUSTRY_MULTIPLIERS, industry))
        .unwrap_or(DEFAULT_INDUSTRY_MULTIPLIER)
}

pub fn stage_factor(stage: Option<Stage>) -> f64 {
    stage
        .and_then(|stage| lookup(&STAGE_FACTORS, stage))
        .unwrap_or(DEFAULT_STAGE_FACTOR)
}

fn lookup<K: PartialEq + Copy>(table: &[(K, f64)], key: K) -> Option<f64> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}
