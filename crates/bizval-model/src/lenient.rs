//! Lenient coercion of form input.
//!
//! Form values arrive as whatever the user typed. Numbers may be real JSON
//! numbers, numeric strings, blanks or nulls. Anything that does not parse to
//! a finite number becomes 0, so the estimator never sees NaN or infinity.

use std::fmt;

use serde::Deserializer;
use serde::de::{self, Visitor};

use crate::enums::{BusinessModel, Industry, Stage};

/// Upper bound of the self-reported competition scale.
pub const COMPETITION_MAX: u8 = 10;

/// Parse a user-entered number. Thousands separators, underscores and a
/// leading `$` are tolerated; everything unparseable is 0.
pub fn parse_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',' && *ch != '_')
        .collect();
    finite_or_zero(cleaned.parse::<f64>().unwrap_or(0.0))
}

pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Truncate to a non-negative count.
pub fn to_count(value: f64) -> u32 {
    let value = finite_or_zero(value);
    if value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value.trunc() as u32
    }
}

/// Truncate to the competition scale; 0 means "not provided".
pub fn to_competition(value: f64) -> u8 {
    let value = finite_or_zero(value);
    if value <= 0.0 {
        0
    } else if value >= f64::from(COMPETITION_MAX) {
        COMPETITION_MAX
    } else {
        value.trunc() as u8
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string, or null")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(finite_or_zero(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        Ok(parse_number(value))
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(TextVisitor)
    }
}

pub fn deserialize_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(NumberVisitor)
}

pub fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    deserialize_number(deserializer).map(to_count)
}

pub fn deserialize_competition<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<u8, D::Error> {
    deserialize_number(deserializer).map(to_competition)
}

pub fn deserialize_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    deserializer.deserialize_any(TextVisitor)
}

pub fn deserialize_industry<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Industry>, D::Error> {
    deserialize_text(deserializer).map(|raw| Industry::parse_lenient(&raw))
}

pub fn deserialize_business_model<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BusinessModel>, D::Error> {
    deserialize_text(deserializer).map(|raw| BusinessModel::parse_lenient(&raw))
}

pub fn deserialize_stage<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Stage>, D::Error> {
    deserialize_text(deserializer).map(|raw| Stage::parse_lenient(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_tolerates_form_formatting() {
        assert_eq!(parse_number("500000"), 500_000.0);
        assert_eq!(parse_number(" $1,250,000 "), 1_250_000.0);
        assert_eq!(parse_number("-12.5"), -12.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("n/a"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
    }

    #[test]
    fn counts_are_truncated_and_non_negative() {
        assert_eq!(to_count(12.9), 12);
        assert_eq!(to_count(-3.0), 0);
        assert_eq!(to_count(f64::NAN), 0);
        assert_eq!(to_count(1e12), u32::MAX);
    }

    #[test]
    fn competition_saturates_at_scale_bounds() {
        assert_eq!(to_competition(0.0), 0);
        assert_eq!(to_competition(3.7), 3);
        assert_eq!(to_competition(42.0), COMPETITION_MAX);
        assert_eq!(to_competition(-1.0), 0);
    }
}
