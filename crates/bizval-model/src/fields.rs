//! Field catalog for the business profile and the form steps that collect it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::normalize_label;

/// A step of the multi-step valuation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormStep {
    BasicInfo,
    Financials,
    MarketAnalysis,
    RiskAssessment,
}

impl FormStep {
    pub const ALL: [FormStep; 4] = [
        FormStep::BasicInfo,
        FormStep::Financials,
        FormStep::MarketAnalysis,
        FormStep::RiskAssessment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormStep::BasicInfo => "Basic Info",
            FormStep::Financials => "Financials",
            FormStep::MarketAnalysis => "Market Analysis",
            FormStep::RiskAssessment => "Risk Assessment",
        }
    }

    /// Fields collected by this step, in form order.
    pub fn fields(self) -> impl Iterator<Item = ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(move |field| field.step() == self)
    }
}

impl fmt::Display for FormStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every field of a [`crate::BusinessProfile`].
///
/// Order matches the form and is the order used when listing missing
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    BusinessName,
    Industry,
    BusinessModel,
    Stage,
    Location,
    Employees,
    Revenue,
    Growth,
    CashFlow,
    Assets,
    Liabilities,
    MarketSize,
    Competition,
    UniqueValue,
    Opportunities,
    Risks,
}

impl ProfileField {
    pub const ALL: [ProfileField; 16] = [
        ProfileField::BusinessName,
        ProfileField::Industry,
        ProfileField::BusinessModel,
        ProfileField::Stage,
        ProfileField::Location,
        ProfileField::Employees,
        ProfileField::Revenue,
        ProfileField::Growth,
        ProfileField::CashFlow,
        ProfileField::Assets,
        ProfileField::Liabilities,
        ProfileField::MarketSize,
        ProfileField::Competition,
        ProfileField::UniqueValue,
        ProfileField::Opportunities,
        ProfileField::Risks,
    ];

    /// Wire name used in JSON profiles and CSV headers.
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::BusinessName => "businessName",
            ProfileField::Industry => "industry",
            ProfileField::BusinessModel => "businessModel",
            ProfileField::Stage => "stage",
            ProfileField::Location => "location",
            ProfileField::Employees => "employees",
            ProfileField::Revenue => "revenue",
            ProfileField::Growth => "growth",
            ProfileField::CashFlow => "cashFlow",
            ProfileField::Assets => "assets",
            ProfileField::Liabilities => "liabilities",
            ProfileField::MarketSize => "marketSize",
            ProfileField::Competition => "competition",
            ProfileField::UniqueValue => "uniqueValue",
            ProfileField::Opportunities => "opportunities",
            ProfileField::Risks => "risks",
        }
    }

    /// Human label shown next to the form input.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::BusinessName => "Business name",
            ProfileField::Industry => "Industry",
            ProfileField::BusinessModel => "Business model",
            ProfileField::Stage => "Stage",
            ProfileField::Location => "Location",
            ProfileField::Employees => "Employees",
            ProfileField::Revenue => "Annual revenue",
            ProfileField::Growth => "Growth rate (%)",
            ProfileField::CashFlow => "Monthly cash flow",
            ProfileField::Assets => "Total assets",
            ProfileField::Liabilities => "Total liabilities",
            ProfileField::MarketSize => "Market size",
            ProfileField::Competition => "Competition (1-10)",
            ProfileField::UniqueValue => "Unique value proposition",
            ProfileField::Opportunities => "Opportunities",
            ProfileField::Risks => "Risks",
        }
    }

    pub fn step(&self) -> FormStep {
        match self {
            ProfileField::BusinessName
            | ProfileField::Industry
            | ProfileField::BusinessModel
            | ProfileField::Stage
            | ProfileField::Location
            | ProfileField::Employees => FormStep::BasicInfo,
            ProfileField::Revenue
            | ProfileField::Growth
            | ProfileField::CashFlow
            | ProfileField::Assets
            | ProfileField::Liabilities => FormStep::Financials,
            ProfileField::MarketSize
            | ProfileField::Competition
            | ProfileField::UniqueValue
            | ProfileField::Opportunities => FormStep::MarketAnalysis,
            ProfileField::Risks => FormStep::RiskAssessment,
        }
    }

    /// Match a column header against the wire name, ignoring case and
    /// separators (`cashFlow`, `cash_flow`, `Cash Flow`).
    pub fn from_header(header: &str) -> Option<Self> {
        let key = normalize_label(header);
        if key.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|field| normalize_label(field.key()) == key)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
