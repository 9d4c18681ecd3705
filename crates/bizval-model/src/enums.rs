//! Type-safe enumerations for the categorical profile fields.
//!
//! The form collects these as free-form labels, so every enum parses
//! case-insensitively and ignores punctuation: `"Exit-Ready"`, `"exit ready"`
//! and `"EXIT_READY"` all name the same stage.
//!
//! Two parsing flavours exist:
//!
//! - [`FromStr`] is strict and rejects unknown labels with
//!   [`ModelError::UnknownLabel`].
//! - `parse_lenient` mirrors form semantics: a blank label means "not
//!   provided", an unknown label degrades to `Other`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Reduce a label to lowercase ASCII alphanumerics for comparison.
pub(crate) fn normalize_label(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Industry the business operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Industry {
    Technology,
    Health,
    Finance,
    Education,
    RealEstate,
    Manufacturing,
    Retail,
    Hospitality,
    Energy,
    Media,
    /// Catch-all for anything outside the catalog.
    Other,
}

impl Industry {
    /// Catalog order, as presented by the form.
    pub const ALL: [Industry; 11] = [
        Industry::Technology,
        Industry::Health,
        Industry::Finance,
        Industry::Education,
        Industry::RealEstate,
        Industry::Manufacturing,
        Industry::Retail,
        Industry::Hospitality,
        Industry::Energy,
        Industry::Media,
        Industry::Other,
    ];

    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Health => "Health",
            Industry::Finance => "Finance",
            Industry::Education => "Education",
            Industry::RealEstate => "Real Estate",
            Industry::Manufacturing => "Manufacturing",
            Industry::Retail => "Retail",
            Industry::Hospitality => "Hospitality",
            Industry::Energy => "Energy",
            Industry::Media => "Media",
            Industry::Other => "Other",
        }
    }

    fn from_normalized(key: &str) -> Option<Self> {
        let industry = match key {
            "technology" | "tech" | "software" | "it" => Industry::Technology,
            "health" | "healthcare" | "medical" | "biotech" => Industry::Health,
            "finance" | "fintech" | "financialservices" | "banking" => Industry::Finance,
            "education" | "edtech" => Industry::Education,
            "realestate" | "property" | "proptech" => Industry::RealEstate,
            "manufacturing" | "industrial" => Industry::Manufacturing,
            "retail" | "consumer" => Industry::Retail,
            "hospitality" | "foodbeverage" | "restaurants" | "travel" => Industry::Hospitality,
            "energy" | "cleantech" | "utilities" => Industry::Energy,
            "media" | "entertainment" => Industry::Media,
            "other" => Industry::Other,
            _ => return None,
        };
        Some(industry)
    }

    /// Parse with form semantics: blank is `None`, unknown is `Other`.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self::from_normalized(&normalize_label(raw)).unwrap_or(Industry::Other))
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_normalized(&normalize_label(s)).ok_or_else(|| ModelError::unknown("industry", s))
    }
}

impl TryFrom<String> for Industry {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Industry> for String {
    fn from(value: Industry) -> Self {
        value.as_str().to_string()
    }
}

/// How the business makes money. Collected for completeness, not priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BusinessModel {
    B2bSaas,
    B2cEcommerce,
    Marketplace,
    Subscription,
    Freemium,
    Advertising,
    Licensing,
    Services,
    Other,
}

impl BusinessModel {
    pub const ALL: [BusinessModel; 9] = [
        BusinessModel::B2bSaas,
        BusinessModel::B2cEcommerce,
        BusinessModel::Marketplace,
        BusinessModel::Subscription,
        BusinessModel::Freemium,
        BusinessModel::Advertising,
        BusinessModel::Licensing,
        BusinessModel::Services,
        BusinessModel::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessModel::B2bSaas => "B2B SaaS",
            BusinessModel::B2cEcommerce => "B2C E-commerce",
            BusinessModel::Marketplace => "Marketplace",
            BusinessModel::Subscription => "Subscription",
            BusinessModel::Freemium => "Freemium",
            BusinessModel::Advertising => "Advertising",
            BusinessModel::Licensing => "Licensing",
            BusinessModel::Services => "Services",
            BusinessModel::Other => "Other",
        }
    }

    fn from_normalized(key: &str) -> Option<Self> {
        let model = match key {
            "b2bsaas" | "saas" => BusinessModel::B2bSaas,
            "b2cecommerce" | "ecommerce" => BusinessModel::B2cEcommerce,
            "marketplace" => BusinessModel::Marketplace,
            "subscription" => BusinessModel::Subscription,
            "freemium" => BusinessModel::Freemium,
            "advertising" | "adsupported" => BusinessModel::Advertising,
            "licensing" => BusinessModel::Licensing,
            "services" | "consulting" | "agency" => BusinessModel::Services,
            "other" => BusinessModel::Other,
            _ => return None,
        };
        Some(model)
    }

    /// Parse with form semantics: blank is `None`, unknown is `Other`.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self::from_normalized(&normalize_label(raw)).unwrap_or(BusinessModel::Other))
    }
}

impl fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_normalized(&normalize_label(s))
            .ok_or_else(|| ModelError::unknown("business model", s))
    }
}

impl TryFrom<String> for BusinessModel {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BusinessModel> for String {
    fn from(value: BusinessModel) -> Self {
        value.as_str().to_string()
    }
}

/// Lifecycle phase of the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Stage {
    Idea,
    Mvp,
    EarlyRevenue,
    Growth,
    Established,
    Expansion,
    ExitReady,
    /// A stage the user entered that is outside the catalog.
    Other,
}

impl Stage {
    pub const ALL: [Stage; 8] = [
        Stage::Idea,
        Stage::Mvp,
        Stage::EarlyRevenue,
        Stage::Growth,
        Stage::Established,
        Stage::Expansion,
        Stage::ExitReady,
        Stage::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Idea => "Idea",
            Stage::Mvp => "MVP",
            Stage::EarlyRevenue => "Early Revenue",
            Stage::Growth => "Growth",
            Stage::Established => "Established",
            Stage::Expansion => "Expansion",
            Stage::ExitReady => "Exit-Ready",
            Stage::Other => "Other",
        }
    }

    fn from_normalized(key: &str) -> Option<Self> {
        let stage = match key {
            "idea" | "concept" | "preseed" => Stage::Idea,
            "mvp" | "prototype" => Stage::Mvp,
            "earlyrevenue" | "early" => Stage::EarlyRevenue,
            "growth" | "scaling" => Stage::Growth,
            "established" | "mature" => Stage::Established,
            "expansion" => Stage::Expansion,
            "exitready" | "exit" => Stage::ExitReady,
            "other" => Stage::Other,
            _ => return None,
        };
        Some(stage)
    }

    /// Parse with form semantics: blank is `None`, unknown is `Other`.
    ///
    /// The label itself is user text, so only its length is logged.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let stage = Self::from_normalized(&normalize_label(trimmed)).unwrap_or_else(|| {
            tracing::warn!(
                label_chars = trimmed.chars().count(),
                "unrecognised stage, using the default stage factor"
            );
            Stage::Other
        });
        Some(stage)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_normalized(&normalize_label(s)).ok_or_else(|| ModelError::unknown("stage", s))
    }
}

impl TryFrom<String> for Stage {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Stage> for String {
    fn from(value: Stage) -> Self {
        value.as_str().to_string()
    }
}
