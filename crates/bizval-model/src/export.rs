use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::profile::BusinessProfile;
use crate::result::{ValuationBreakdown, ValuationFactors, ValuationResult};

/// Method description written into every export.
pub const VALUATION_METHOD: &str =
    "Weighted blend of asset-based, market-based, and income-based approaches";

/// Name used when the profile has no business name.
pub const UNNAMED_BUSINESS: &str = "Unnamed business";

/// Exportable valuation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationExport {
    pub business_name: String,
    pub valuation_date: NaiveDate,
    pub estimated_value: f64,
    pub confidence: u8,
    pub method: String,
    pub breakdown: ValuationBreakdown,
    pub factors: ValuationFactors,
    pub recommendations: Vec<String>,
}

impl ValuationExport {
    pub fn new(profile: &BusinessProfile, result: &ValuationResult, date: NaiveDate) -> Self {
        let name = profile.business_name.trim();
        Self {
            business_name: if name.is_empty() {
                UNNAMED_BUSINESS.to_string()
            } else {
                name.to_string()
            },
            valuation_date: date,
            estimated_value: result.estimated_value,
            confidence: result.confidence,
            method: VALUATION_METHOD.to_string(),
            breakdown: result.breakdown,
            factors: result.factors.clone(),
            recommendations: result.recommendations.clone(),
        }
    }
}
