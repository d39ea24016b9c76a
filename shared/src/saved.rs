//! Saved form codec
//!
//! The last submitted form is kept as a flat JSON object under a fixed key.
//! Reading is lenient: each field is parsed on its own and a bad field is
//! dropped with a warning instead of discarding the whole form.

use crate::models::{Gender, Goal};
use crate::types::RawInput;
use crate::units::UnitSystem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Storage key the form is saved under
pub const STORAGE_KEY: &str = "fitcalc_userdata";

/// The raw form as persisted, values in the system given by `is_metric`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_metric: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_muscle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SavedForm {
    /// Capture a submitted form, stamped with the current time
    pub fn from_input(input: &RawInput) -> Self {
        Self {
            is_metric: Some(input.is_metric),
            gender: input.gender,
            age: input.age,
            goal: input.goal,
            activity: input.activity_multiplier,
            raw_height: input.height_raw,
            raw_weight: input.weight_raw,
            body_fat: input.body_fat_percent,
            raw_muscle: input.muscle_raw,
            saved_at: Some(Utc::now()),
        }
    }

    /// Rebuild the form; a missing unit flag means metric
    pub fn to_input(&self) -> RawInput {
        RawInput {
            gender: self.gender,
            age: self.age,
            goal: self.goal,
            activity_multiplier: self.activity,
            height_raw: self.raw_height,
            weight_raw: self.raw_weight,
            body_fat_percent: self.body_fat,
            muscle_raw: self.raw_muscle,
            is_metric: self.is_metric.unwrap_or(true),
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        UnitSystem::from_is_metric(self.is_metric.unwrap_or(true))
    }

    /// Parse a stored document field by field.
    ///
    /// Never fails: unparsable JSON or a non-object yields an empty form,
    /// and any single malformed field is left unset.
    pub fn parse(json: &str) -> Self {
        match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => Self::from_map(&map),
            Ok(other) => {
                tracing::warn!(kind = json_kind(&other), "Saved form is not an object, ignoring");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saved form is not valid JSON, ignoring");
                Self::default()
            }
        }
    }

    /// Lenient read from an already-parsed object
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            is_metric: read_field(map, "isMetric", parse_bool),
            gender: read_field(map, "gender", parse_from_str::<Gender>),
            age: read_field(map, "age", parse_age),
            goal: read_field(map, "goal", parse_from_str::<Goal>),
            activity: read_field(map, "activity", parse_number),
            raw_height: read_field(map, "rawHeight", parse_number),
            raw_weight: read_field(map, "rawWeight", parse_number),
            body_fat: read_field(map, "bodyFat", parse_number),
            raw_muscle: read_field(map, "rawMuscle", parse_number),
            saved_at: read_field(map, "savedAt", parse_timestamp),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Flip between metric and imperial, converting height, weight and
    /// muscle with one-decimal rounding. Blank fields stay blank.
    pub fn toggle_units(&self) -> Self {
        let from = self.unit_system();
        let to = from.toggled();
        let converted = self.to_input().measurements().convert_to(from, to);

        Self {
            is_metric: Some(to.is_metric()),
            raw_height: converted.height,
            raw_weight: converted.weight,
            raw_muscle: converted.muscle,
            ..self.clone()
        }
    }
}

// ============================================================================
// Field Parsers
// ============================================================================

/// Outcome of reading one field
enum FieldValue<T> {
    Blank,
    Value(T),
}

fn read_field<T>(
    map: &Map<String, Value>,
    key: &str,
    parse: fn(&Value) -> Result<FieldValue<T>, String>,
) -> Option<T> {
    let value = map.get(key)?;
    match parse(value) {
        Ok(FieldValue::Value(v)) => Some(v),
        Ok(FieldValue::Blank) => None,
        Err(reason) => {
            tracing::warn!(field = key, reason = %reason, "Ignoring malformed saved field");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Trimmed string content, or `None` for null and blank strings
fn text(value: &Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.trim().to_string())),
        other => Err(format!("expected a string, got {}", json_kind(other))),
    }
}

fn parse_number(value: &Value) -> Result<FieldValue<f64>, String> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        _ => match text(value)? {
            None => return Ok(FieldValue::Blank),
            Some(s) => Some(s.parse::<f64>().map_err(|_| format!("'{}' is not a number", s))?),
        },
    };
    match number {
        Some(n) if n.is_finite() => Ok(FieldValue::Value(n)),
        _ => Err("not a finite number".to_string()),
    }
}

fn parse_age(value: &Value) -> Result<FieldValue<u32>, String> {
    match parse_number(value)? {
        FieldValue::Blank => Ok(FieldValue::Blank),
        FieldValue::Value(n) if n >= 0.0 && n <= u32::MAX as f64 && n.fract() == 0.0 => {
            Ok(FieldValue::Value(n as u32))
        }
        FieldValue::Value(n) => Err(format!("{} is not a whole number of years", n)),
    }
}

fn parse_bool(value: &Value) -> Result<FieldValue<bool>, String> {
    match value {
        Value::Bool(b) => Ok(FieldValue::Value(*b)),
        _ => match text(value)?.as_deref() {
            None => Ok(FieldValue::Blank),
            Some("true") => Ok(FieldValue::Value(true)),
            Some("false") => Ok(FieldValue::Value(false)),
            Some(other) => Err(format!("'{}' is not a boolean", other)),
        },
    }
}

fn parse_from_str<T: FromStr<Err = String>>(value: &Value) -> Result<FieldValue<T>, String> {
    match text(value)? {
        None => Ok(FieldValue::Blank),
        Some(s) => s.parse::<T>().map(FieldValue::Value),
    }
}

fn parse_timestamp(value: &Value) -> Result<FieldValue<DateTime<Utc>>, String> {
    match text(value)? {
        None => Ok(FieldValue::Blank),
        Some(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| FieldValue::Value(dt.with_timezone(&Utc)))
            .map_err(|e| e.to_string()),
    }
}
