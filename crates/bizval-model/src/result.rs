use serde::{Deserialize, Serialize};

/// The three sub-valuations blended into the estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationBreakdown {
    /// Assets minus liabilities, never negative.
    pub asset_based: f64,
    /// Revenue scaled by industry, growth and stage multipliers.
    pub market_based: f64,
    /// Monthly cash flow scaled by a fixed multiple and competition discount.
    /// Negative when cash flow is negative.
    pub income_based: f64,
}

/// Qualitative observations about the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationFactors {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl ValuationFactors {
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Output of the estimator. Transient; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub estimated_value: f64,
    /// Heuristic completeness score, 30-95.
    pub confidence: u8,
    pub breakdown: ValuationBreakdown,
    pub factors: ValuationFactors,
    pub recommendations: Vec<String>,
}
