//! FitCalc WASM Module
//!
//! This crate provides WebAssembly bindings so a browser form can run the
//! calculation engine directly.

use fitcalc_shared::{
    calculate_bmr_mifflin, convert, evaluate_json, Gender, HeightUnit, Unit, WeightUnit,
};
use wasm_bindgen::prelude::*;

/// Evaluate a JSON form and return the report as JSON.
///
/// Errors are returned as their display message so they can be shown next
/// to the form.
pub fn evaluate_to_json(input_json: &str) -> Result<String, String> {
    evaluate_json(input_json).map_err(|e| e.to_string())
}

/// Evaluate a JSON form (see `RawInput`) and return a JSON `FitnessReport`
#[wasm_bindgen]
pub fn evaluate(input_json: &str) -> Result<String, JsValue> {
    evaluate_to_json(input_json).map_err(|e| JsValue::from_str(&e))
}

fn convert_between(
    value: f64,
    from: &str,
    to: &str,
    parse: fn(&str) -> Result<Unit, String>,
) -> f64 {
    match (parse(from), parse(to)) {
        (Ok(from), Ok(to)) => convert(value, from, to).unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn parse_length(s: &str) -> Result<Unit, String> {
    s.parse::<HeightUnit>().map(Unit::Length)
}

fn parse_mass(s: &str) -> Result<Unit, String> {
    s.parse::<WeightUnit>().map(Unit::Mass)
}

/// Convert a length between "cm" and "in". Unknown units give NaN.
#[wasm_bindgen]
pub fn convert_length(value: f64, from: &str, to: &str) -> f64 {
    convert_between(value, from, to, parse_length)
}

/// Convert a mass between "kg" and "lbs". Unknown units give NaN.
#[wasm_bindgen]
pub fn convert_mass(value: f64, from: &str, to: &str) -> f64 {
    convert_between(value, from, to, parse_mass)
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    fitcalc_shared::calculate_bmi(weight_kg, height_cm)
}

/// Calculate TDEE (Total Daily Energy Expenditure)
/// Uses Mifflin-St Jeor equation
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_multiplier: f64,
) -> f64 {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    let bmr = calculate_bmr_mifflin(weight_kg, height_cm, age_years, gender);
    fitcalc_shared::calculate_tdee(bmr, activity_multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.86).abs() < 0.1);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_tdee() {
        // BMR 1755 * 1.55
        let tdee = calculate_tdee(75.0, 180.0, 25, true, 1.55);
        assert!((tdee - 2720.25).abs() < 1e-9);
    }

    #[test]
    fn test_conversions() {
        assert!((convert_length(100.0, "cm", "in") - 39.370).abs() < 0.001);
        assert!((convert_mass(100.0, "lbs", "kg") - 45.3592).abs() < 1e-9);
        assert!(convert_length(100.0, "cm", "kg").is_nan());
        assert!(convert_mass(1.0, "stone", "kg").is_nan());
    }

    #[test]
    fn test_evaluate_to_json() {
        let json = r#"{"gender":"male","age":25,"goal":"build","activity_multiplier":1.2,
            "height_raw":180,"weight_raw":75,"body_fat_percent":12,"muscle_raw":35}"#;
        let report: serde_json::Value = serde_json::from_str(&evaluate_to_json(json).unwrap()).unwrap();
        assert_eq!(report["stats"]["goal"], "build");
        assert_eq!(report["meal_plan"]["days"].as_array().map(|d| d.len()), Some(3));

        let err = evaluate_to_json(r#"{"gender":"male"}"#).unwrap_err();
        assert_eq!(err, "Invalid input for Age: is required");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_evaluate_error_is_js_string() {
        let err = evaluate("{}").unwrap_err();
        assert_eq!(err.as_string().as_deref(), Some("Invalid input for Gender: is required"));
    }
}
