//! Input validation functions
//!
//! This module provides validation utilities for user input.
//! Uses both custom validators and the `validator` crate for derive macros:
//! plain ranges (age, activity, body fat) are declared on `RawInput`, while
//! converted quantities are checked here after normalization.
//! Every failure names the offending field so the caller can point at it.

use crate::errors::CalcError;

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate muscle mass value (in kg)
pub fn validate_muscle_mass(muscle_kg: f64) -> Result<(), String> {
    if muscle_kg.is_nan() || muscle_kg.is_infinite() {
        return Err("Muscle mass must be a valid number".to_string());
    }
    if muscle_kg < 0.0 {
        return Err("Muscle mass cannot be negative".to_string());
    }
    if muscle_kg > 500.0 {
        return Err("Muscle mass must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm (covers infants to tallest recorded humans)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Require a form value to be present and numeric
pub fn require_number(field: &str, value: Option<f64>) -> Result<f64, ValidationError> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(ValidationError::new(field, "must be a valid number")),
        None => Err(ValidationError::new(field, "is required")),
    }
}

/// Require a non-numeric form value to be present
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::new(field, "is required"))
}

/// Attach a field name to a plain validator result
pub fn check(field: &str, result: Result<(), String>) -> Result<(), ValidationError> {
    result.map_err(|message| ValidationError::new(field, &message))
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "gender" => "Gender",
        "age" => "Age",
        "goal" => "Goal",
        "activity_multiplier" | "activity" => "Activity Level",
        "height" | "height_raw" | "height_cm" => "Height",
        "weight" | "weight_raw" | "weight_kg" => "Current Weight",
        "body_fat_percent" | "body_fat" => "Body Fat",
        "muscle" | "muscle_raw" | "muscle_mass_kg" => "Muscle Mass",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

impl From<ValidationError> for CalcError {
    fn from(err: ValidationError) -> Self {
        CalcError::InvalidInput {
            field: err.field,
            label: err.display_label,
            message: err.message,
        }
    }
}

/// Check one field against a `validator` derive result.
///
/// The derive reports failures as a map, so callers that need a fixed
/// precedence ask about each field in their own order.
pub fn check_derived(
    errors: Option<&validator::ValidationErrors>,
    field: &str,
) -> Result<(), ValidationError> {
    let first = errors
        .and_then(|errors| errors.field_errors().get(field).copied())
        .and_then(|errs| errs.first());

    match first {
        Some(e) => {
            let message = e
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string());
            Err(ValidationError::new(field, &message))
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(70.0).is_ok());
        assert!(validate_weight(20.0).is_ok());
        assert!(validate_weight(500.0).is_ok());
        assert!(validate_weight(10.0).is_err());
        assert!(validate_weight(600.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(170.0).is_ok());
        assert!(validate_height_cm(50.0).is_ok());
        assert!(validate_height_cm(300.0).is_ok());

        assert!(validate_height_cm(49.9).is_err());
        assert!(validate_height_cm(300.1).is_err());
        assert!(validate_height_cm(0.0).is_err());
        assert!(validate_height_cm(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_muscle_mass() {
        assert!(validate_muscle_mass(35.0).is_ok());
        assert!(validate_muscle_mass(0.0).is_ok());
        assert!(validate_muscle_mass(-1.0).is_err());
    }

    #[test]
    fn test_require_number() {
        assert_eq!(require_number("height", Some(180.0)).unwrap(), 180.0);

        let missing = require_number("height", None).unwrap_err();
        assert_eq!(missing.field, "height");
        assert_eq!(missing.user_message(), "Height: is required");

        let nan = require_number("weight", Some(f64::NAN)).unwrap_err();
        assert_eq!(nan.message, "must be a valid number");
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("body_fat_percent"), "Body Fat");
        assert_eq!(get_field_display_label("height_raw"), "Height");
        assert_eq!(get_field_display_label("activity_multiplier"), "Activity Level");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    #[test]
    fn test_check_derived_reports_only_the_asked_field() {
        let mut errors = validator::ValidationErrors::new();
        let mut err = validator::ValidationError::new("range");
        err.message = Some("must be between 1 and 150 years".into());
        errors.add("age", err);

        assert!(check_derived(None, "age").is_ok());
        assert!(check_derived(Some(&errors), "goal").is_ok());

        let age = check_derived(Some(&errors), "age").unwrap_err();
        assert_eq!(age.user_message(), "Age: must be between 1 and 150 years");

        // no message falls back to the code
        let mut errors = validator::ValidationErrors::new();
        errors.add("body_fat_percent", validator::ValidationError::new("range"));
        assert_eq!(
            check_derived(Some(&errors), "body_fat_percent").unwrap_err().message,
            "range"
        );
    }

    #[test]
    fn test_validation_error_into_calc_error() {
        let err: CalcError = ValidationError::new("height_raw", "must be at least 50 cm").into();
        assert_eq!(err.field(), Some("height_raw"));
        assert_eq!(err.to_string(), "Invalid input for Height: must be at least 50 cm");
    }

    // Property-based tests
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..20.0) {
            prop_assert!(validate_weight(weight).is_err());
        }

        #[test]
        fn prop_valid_height_range(height in 50.0f64..=300.0) {
            prop_assert!(validate_height_cm(height).is_ok(),
                "Height {} should be valid", height);
        }

        #[test]
        fn prop_invalid_height_above_max(height in 300.1f64..500.0) {
            prop_assert!(validate_height_cm(height).is_err(),
                "Height {} should be invalid (above maximum)", height);
        }
    }
}
