use serde::{Deserialize, Serialize};

use crate::enums::{BusinessModel, Industry, Stage};
use crate::fields::ProfileField;
use crate::lenient::{
    self, deserialize_business_model, deserialize_competition, deserialize_count,
    deserialize_industry, deserialize_number, deserialize_stage, deserialize_text,
};

/// Business profile collected by the valuation form.
///
/// Every field defaults to zero or empty. Monetary amounts are plain
/// numbers; the currency is a display concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessProfile {
    #[serde(deserialize_with = "deserialize_text")]
    pub business_name: String,
    #[serde(deserialize_with = "deserialize_industry")]
    pub industry: Option<Industry>,
    #[serde(deserialize_with = "deserialize_business_model")]
    pub business_model: Option<BusinessModel>,
    #[serde(deserialize_with = "deserialize_stage")]
    pub stage: Option<Stage>,
    /// Annual revenue.
    #[serde(deserialize_with = "deserialize_number")]
    pub revenue: f64,
    /// Trailing growth rate in percent; may be negative.
    #[serde(deserialize_with = "deserialize_number")]
    pub growth: f64,
    /// Monthly net cash flow; may be negative.
    #[serde(deserialize_with = "deserialize_number")]
    pub cash_flow: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub assets: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub liabilities: f64,
    /// Addressable market size. Collected but not priced.
    #[serde(deserialize_with = "deserialize_number")]
    pub market_size: f64,
    /// Self-reported competitive intensity, 1-10. 0 when not provided.
    #[serde(deserialize_with = "deserialize_competition")]
    pub competition: u8,
    #[serde(deserialize_with = "deserialize_count")]
    pub employees: u32,
    #[serde(deserialize_with = "deserialize_text")]
    pub unique_value: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub opportunities: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub risks: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub location: String,
}

impl BusinessProfile {
    /// Copy with non-finite numbers zeroed and negative values of
    /// non-negative amounts zeroed. Growth and cash flow keep their sign.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            revenue: non_negative_amount(self.revenue),
            growth: lenient::finite_or_zero(self.growth),
            cash_flow: lenient::finite_or_zero(self.cash_flow),
            assets: non_negative_amount(self.assets),
            liabilities: non_negative_amount(self.liabilities),
            market_size: non_negative_amount(self.market_size),
            competition: self.competition.min(lenient::COMPETITION_MAX),
            ..self.clone()
        }
    }

    /// Whether the user filled in `field`.
    ///
    /// Zero and blank both read as "not provided": a genuine zero cash flow
    /// cannot be told apart from a blank input. Amounts are judged after the
    /// same coercion as [`sanitized`](Self::sanitized), so the answer is the
    /// same for a raw profile and its sanitized copy.
    pub fn is_provided(&self, field: ProfileField) -> bool {
        let text = |value: &str| !value.trim().is_empty();
        let signed = |value: f64| lenient::finite_or_zero(value) != 0.0;
        let non_negative = |value: f64| non_negative_amount(value) != 0.0;
        match field {
            ProfileField::BusinessName => text(&self.business_name),
            ProfileField::Industry => self.industry.is_some(),
            ProfileField::BusinessModel => self.business_model.is_some(),
            ProfileField::Stage => self.stage.is_some(),
            ProfileField::Location => text(&self.location),
            ProfileField::Employees => self.employees != 0,
            ProfileField::Revenue => non_negative(self.revenue),
            ProfileField::Growth => signed(self.growth),
            ProfileField::CashFlow => signed(self.cash_flow),
            ProfileField::Assets => non_negative(self.assets),
            ProfileField::Liabilities => non_negative(self.liabilities),
            ProfileField::MarketSize => non_negative(self.market_size),
            ProfileField::Competition => self.competition != 0,
            ProfileField::UniqueValue => text(&self.unique_value),
            ProfileField::Opportunities => text(&self.opportunities),
            ProfileField::Risks => text(&self.risks),
        }
    }

    /// Assign a field from raw text with the same coercion rules as JSON input.
    pub fn set_from_text(&mut self, field: ProfileField, raw: &str) {
        match field {
            ProfileField::BusinessName => self.business_name = raw.to_string(),
            ProfileField::Industry => self.industry = Industry::parse_lenient(raw),
            ProfileField::BusinessModel => self.business_model = BusinessModel::parse_lenient(raw),
            ProfileField::Stage => self.stage = Stage::parse_lenient(raw),
            ProfileField::Location => self.location = raw.to_string(),
            ProfileField::Employees => self.employees = lenient::to_count(lenient::parse_number(raw)),
            ProfileField::Revenue => self.revenue = lenient::parse_number(raw),
            ProfileField::Growth => self.growth = lenient::parse_number(raw),
            ProfileField::CashFlow => self.cash_flow = lenient::parse_number(raw),
            ProfileField::Assets => self.assets = lenient::parse_number(raw),
            ProfileField::Liabilities => self.liabilities = lenient::parse_number(raw),
            ProfileField::MarketSize => self.market_size = lenient::parse_number(raw),
            ProfileField::Competition => {
                self.competition = lenient::to_competition(lenient::parse_number(raw));
            }
            ProfileField::UniqueValue => self.unique_value = raw.to_string(),
            ProfileField::Opportunities => self.opportunities = raw.to_string(),
            ProfileField::Risks => self.risks = raw.to_string(),
        }
    }

    /// Fields the user left blank, in form order.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|field| !self.is_provided(*field))
            .collect()
    }
}

/// Amounts that cannot be negative: non-finite and negative values are 0.
fn non_negative_amount(value: f64) -> f64 {
    lenient::finite_or_zero(value).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_zeroes_invalid_amounts() {
        let profile = BusinessProfile {
            revenue: -10.0,
            growth: -15.0,
            cash_flow: f64::NAN,
            assets: f64::INFINITY,
            liabilities: 5.0,
            competition: 12,
            ..BusinessProfile::default()
        };
        let clean = profile.sanitized();
        assert_eq!(clean.revenue, 0.0);
        assert_eq!(clean.growth, -15.0);
        assert_eq!(clean.cash_flow, 0.0);
        assert_eq!(clean.assets, 0.0);
        assert_eq!(clean.liabilities, 5.0);
        assert_eq!(clean.competition, 10);
    }

    #[test]
    fn provided_fields_match_the_sanitized_copy() {
        let profile = BusinessProfile {
            revenue: -500.0,
            growth: f64::NAN,
            cash_flow: -20.0,
            assets: -1.0,
            liabilities: -2.0,
            market_size: -3.0,
            ..BusinessProfile::default()
        };
        let clean = profile.sanitized();
        for field in ProfileField::ALL {
            assert_eq!(
                profile.is_provided(field),
                clean.is_provided(field),
                "{field}"
            );
        }
        assert_eq!(profile.missing_fields().len(), 15);
        assert!(profile.is_provided(ProfileField::CashFlow));
    }

    #[test]
    fn blank_text_is_not_provided() {
        let profile = BusinessProfile {
            business_name: "   ".to_string(),
            location: "\t".to_string(),
            unique_value: " \n ".to_string(),
            risks: " Regulation ".to_string(),
            ..BusinessProfile::default()
        };
        assert!(!profile.is_provided(ProfileField::BusinessName));
        assert!(!profile.is_provided(ProfileField::Location));
        assert!(!profile.is_provided(ProfileField::UniqueValue));
        assert!(profile.is_provided(ProfileField::Risks));
    }

    #[test]
    fn default_profile_has_every_field_missing() {
        let profile = BusinessProfile::default();
        assert_eq!(profile.missing_fields(), ProfileField::ALL.to_vec());
    }

    #[test]
    fn set_from_text_coerces_like_the_form() {
        let mut profile = BusinessProfile::default();
        profile.set_from_text(ProfileField::Revenue, "1,200");
        profile.set_from_text(ProfileField::Employees, "7.9");
        profile.set_from_text(ProfileField::Competition, "99");
        profile.set_from_text(ProfileField::Industry, "Aerospace");
        profile.set_from_text(ProfileField::Stage, "");
        assert_eq!(profile.revenue, 1200.0);
        assert_eq!(profile.employees, 7);
        assert_eq!(profile.competition, 10);
        assert_eq!(profile.industry, Some(Industry::Other));
        assert_eq!(profile.stage, None);
    }
}
