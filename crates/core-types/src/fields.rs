//! Field codecs for the tabular inputs.
//!
//! Upstream tables are written by tools that do not agree on a timestamp
//! separator or on how to print a decimal, so these modules accept the
//! common variants and always write one canonical form.

use crate::error::CoreError;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const CANONICAL_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Parses a naive timestamp, accepting a space or `T` separator and a bare date.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, CoreError> {
    let trimmed = raw.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ts);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| CoreError::InvalidInput("timestamp".to_string(), raw.to_string()))
}

/// Parses a decimal written either plainly (`123.45`) or in scientific notation (`1.2345e2`).
pub fn parse_decimal(raw: &str) -> Result<Decimal, CoreError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| CoreError::InvalidInput("decimal".to_string(), raw.to_string()))
}

pub mod timestamp {
    use super::{CANONICAL_TIMESTAMP, parse_timestamp};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(CANONICAL_TIMESTAMP))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

pub mod decimal {
    use super::parse_decimal;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_decimal(&raw).map_err(serde::de::Error::custom)
    }
}
