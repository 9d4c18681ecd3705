//! Business valuation estimator.
//!
//! The estimator is a pure function over [`bizval_model::BusinessProfile`].
//! Callers that want to simulate latency or persist results do so around it.

pub mod estimator;
pub mod steps;
pub mod tables;

pub use estimator::{
    ASSET_WEIGHT, CASH_FLOW_MULTIPLE, CLOSING_RECOMMENDATIONS, INCOME_WEIGHT, MARKET_WEIGHT,
    MAX_CONFIDENCE, MIN_CONFIDENCE, competition_factor, estimate, growth_factor, saturate,
};
pub use steps::{REQUIRED_FIELDS, StepStatus, data_completeness, missing_required, step_status};
pub use tables::{
    DEFAULT_INDUSTRY_MULTIPLIER, DEFAULT_STAGE_FACTOR, INDUSTRY_MULTIPLIERS, STAGE_FACTORS,
    industry_multiplier, stage_factor,
};
