//! Data model for the business valuation estimator.

pub mod enums;
pub mod error;
pub mod export;
pub mod fields;
pub mod lenient;
pub mod profile;
pub mod result;

pub use enums::{BusinessModel, Industry, Stage};
pub use error::{ModelError, Result};
pub use export::{UNNAMED_BUSINESS, VALUATION_METHOD, ValuationExport};
pub use fields::{FormStep, ProfileField};
pub use profile::BusinessProfile;
pub use result::{ValuationBreakdown, ValuationFactors, ValuationResult};
