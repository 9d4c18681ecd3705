//! Valuation estimator.
//!
//! `estimate` blends three sub-valuations with fixed weights:
//!
//! - **asset-based**: `max(0, assets - liabilities)`
//! - **market-based**: `revenue * industry * growth * stage`
//! - **income-based**: `cash_flow * 10 * competition`
//!
//! The function is pure and total. Input is sanitized first, every lookup has
//! a default, and no term divides, so an all-zero profile yields zero.
//! Products of very large amounts saturate at `±f64::MAX` instead of
//! overflowing, so every term and the estimate stay finite.

use tracing::debug;

use bizval_model::{BusinessProfile, ValuationBreakdown, ValuationFactors, ValuationResult};

use crate::steps::data_completeness;
use crate::tables::{industry_multiplier, stage_factor};

pub const ASSET_WEIGHT: f64 = 0.20;
pub const MARKET_WEIGHT: f64 = 0.50;
pub const INCOME_WEIGHT: f64 = 0.30;

/// Multiple applied to monthly cash flow for the income-based valuation.
pub const CASH_FLOW_MULTIPLE: f64 = 10.0;

pub const MIN_CONFIDENCE: u8 = 30;
pub const MAX_CONFIDENCE: u8 = 95;

const COMPLETENESS_WEIGHT: f64 = 0.8;
const CONFIDENCE_BASE: f64 = 20.0;

/// Estimate the value of the business described by `profile`.
pub fn estimate(profile: &BusinessProfile) -> ValuationResult {
    let profile = profile.sanitized();
    let breakdown = breakdown(&profile);
    let estimated_value = weighted_value(&breakdown);
    let completeness = data_completeness(&profile);
    let confidence = confidence_from_completeness(completeness);
    debug!(
        asset_based = breakdown.asset_based,
        market_based = breakdown.market_based,
        income_based = breakdown.income_based,
        estimated_value,
        completeness,
        confidence,
        "valuation computed"
    );
    ValuationResult {
        estimated_value,
        confidence,
        breakdown,
        factors: factors(&profile),
        recommendations: recommendations(&profile),
    }
}

/// `max(1, growth / 100 + 1)`. Shrinking businesses are not penalised here.
pub fn growth_factor(growth: f64) -> f64 {
    (growth / 100.0 + 1.0).max(1.0)
}

/// `(11 - competition) / 10`, with competition clamped to 1..=10.
pub fn competition_factor(competition: u8) -> f64 {
    let competition = competition.clamp(1, 10);
    f64::from(11 - competition) / 10.0
}

/// Compute the three sub-valuations of an already sanitized profile.
pub fn breakdown(profile: &BusinessProfile) -> ValuationBreakdown {
    let asset_based = (profile.assets - profile.liabilities).max(0.0);
    let market_based = profile.revenue
        * industry_multiplier(profile.industry)
        * growth_factor(profile.growth)
        * stage_factor(profile.stage);
    let income_based =
        profile.cash_flow * CASH_FLOW_MULTIPLE * competition_factor(profile.competition);
    ValuationBreakdown {
        asset_based: saturate(asset_based),
        market_based: saturate(market_based),
        income_based: saturate(income_based),
    }
}

pub fn weighted_value(breakdown: &ValuationBreakdown) -> f64 {
    saturate(
        ASSET_WEIGHT * breakdown.asset_based
            + MARKET_WEIGHT * breakdown.market_based
            + INCOME_WEIGHT * breakdown.income_based,
    )
}

/// Clamp an overflowed amount back to the largest finite value. NaN is 0.
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-f64::MAX, f64::MAX)
    }
}

/// Map a completeness percentage (0-100) onto the confidence score.
pub fn confidence_from_completeness(completeness: f64) -> u8 {
    let raw = (completeness * COMPLETENESS_WEIGHT + CONFIDENCE_BASE).round();
    let clamped = raw.clamp(f64::from(MIN_CONFIDENCE), f64::from(MAX_CONFIDENCE));
    clamped as u8
}

/// Advice appended to every report regardless of the profile.
pub const CLOSING_RECOMMENDATIONS: [&str; 2] = [
    "Schedule quarterly financial audits to keep records investor-ready",
    "Document intellectual property and core processes to increase transferability",
];

/// Keep the text of every rule whose condition holds, in rule order.
fn triggered(rules: &[(bool, &'static str)]) -> Vec<String> {
    rules
        .iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, text)| (*text).to_string())
        .collect()
}

/// Qualitative factors of a sanitized profile.
pub fn factors(p: &BusinessProfile) -> ValuationFactors {
    let positive = [
        (p.growth > 20.0, "Strong revenue growth rate"),
        (p.revenue > 1_000_000.0, "Established revenue base above $1M"),
        (p.employees > 50, "Substantial team in place"),
        (p.cash_flow > 0.0, "Positive monthly cash flow"),
        // 0 is "not provided", not "no competition".
        ((1..5).contains(&p.competition), "Limited competitive pressure"),
        (
            p.unique_value.chars().count() > 50,
            "Well-articulated unique value proposition",
        ),
    ];
    let negative = [
        (p.growth < 5.0, "Slow or negative growth"),
        (p.revenue < 100_000.0, "Limited revenue below $100K"),
        (p.cash_flow < 0.0, "Negative monthly cash flow"),
        (p.competition > 7, "Highly competitive market"),
        (p.liabilities > p.assets, "Liabilities exceed assets"),
    ];
    ValuationFactors {
        positive: triggered(&positive),
        negative: triggered(&negative),
    }
}

/// Conditional advice followed by the closing recommendations.
pub fn recommendations(p: &BusinessProfile) -> Vec<String> {
    let conditional = [
        (
            p.growth < 10.0,
            "Accelerate growth through new customer acquisition channels and expanded marketing",
        ),
        (
            p.cash_flow < 0.0,
            "Reduce operating costs and improve margins to reach positive cash flow",
        ),
        (
            p.competition > 7,
            "Strengthen differentiation to stand out in a crowded market",
        ),
        (
            p.employees < 10,
            "Invest in key hires to build a team that can scale operations",
        ),
        (
            p.liabilities > p.assets,
            "Restructure or pay down debt to strengthen the balance sheet",
        ),
        (
            p.revenue < 100_000.0,
            "Diversify revenue streams to reduce dependence on a single source",
        ),
    ];
    let mut advice = triggered(&conditional);
    advice.extend(CLOSING_RECOMMENDATIONS.iter().map(|text| (*text).to_string()));
    advice
}
