use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{IoError, Result};

pub const INDICATOR: &str = "SI.POV.GINI";
pub const DATE_RANGE: &str = "2011:2020";

const NO_DATA_MESSAGES: &[&str] = &["No data available", "No matches"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LabeledId {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// One row of an indicator response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GiniRecord {
    #[serde(default)]
    pub country: Option<LabeledId>,
    #[serde(default, rename = "countryiso3code")]
    pub country_code: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl GiniRecord {
    pub fn country_name(&self) -> Option<&str> {
        self.country.as_ref().and_then(|country| country.value.as_deref())
    }

    /// Numeric value of the row; numbers and numeric strings both count.
    pub fn numeric_value(&self) -> Option<f64> {
        match self.value.as_ref()? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.date.as_deref()?.trim().parse().ok()
    }

    /// Row carries both a date and a non-null value.
    pub fn has_observation(&self) -> bool {
        let has_date = self.date.as_deref().is_some_and(|date| !date.is_empty());
        let has_value = self.value.as_ref().is_some_and(|value| !value.is_null());
        has_date && has_value
    }
}

/// Parses a `.../indicator/SI.POV.GINI?format=json` response body.
///
/// "No data" answers come back as an empty list rather than an error.
pub fn parse_indicator_response(raw: &str) -> Result<Vec<GiniRecord>> {
    let data: Value = serde_json::from_str(raw)?;
    let items = match data.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => {
            return Err(IoError::UnexpectedShape(
                "expected a non-empty JSON array".to_string(),
            ));
        }
    };

    if let Some(messages) = items[0].get("message").and_then(Value::as_array) {
        let texts: Vec<&str> = messages
            .iter()
            .map(|message| {
                message
                    .get("value")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown error")
            })
            .collect();
        if texts
            .iter()
            .any(|text| NO_DATA_MESSAGES.iter().any(|marker| text.contains(marker)))
        {
            log::info!("API reported no data: {}", texts.join("; "));
            return Ok(Vec::new());
        }
        return Err(IoError::Api(texts.join("\n")));
    }

    match items.as_slice() {
        [_, Value::Null] => Ok(Vec::new()),
        [_, Value::Array(rows)] => Ok(decode_rows(rows)),
        [_, other] => Err(IoError::UnexpectedShape(format!(
            "expected a list of rows, got {}",
            json_kind(other)
        ))),
        [meta] if meta.get("total").and_then(Value::as_u64) == Some(0) => Ok(Vec::new()),
        _ => {
            log::warn!(
                "unexpected response structure (length {}), assuming no data",
                items.len()
            );
            Ok(Vec::new())
        }
    }
}

pub fn read_indicator_file(path: impl AsRef<Path>) -> Result<Vec<GiniRecord>> {
    let raw = fs::read_to_string(path)?;
    parse_indicator_response(&raw)
}

/// Trims and upper-cases a three-letter ISO country code.
pub fn validate_country_code(code: &str) -> Result<String> {
    let normalized = code.trim().to_ascii_uppercase();
    if normalized.len() == 3 && normalized.chars().all(|ch| ch.is_ascii_alphabetic()) {
        Ok(normalized)
    } else {
        Err(IoError::InvalidCountryCode(code.to_string()))
    }
}

fn decode_rows(rows: &[Value]) -> Vec<GiniRecord> {
    rows.iter()
        .filter_map(|row| match GiniRecord::deserialize(row) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("skipping malformed row {row}: {err}");
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
