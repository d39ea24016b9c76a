//! Health metrics calculations module
//!
//! Provides calculations for BMI, FFMI, BMR, TDEE and goal calories, plus
//! the ideal-value targets shown next to a user's current numbers.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Mifflin-St Jeor for BMR, height-normalized FFMI
//! 3. **Metric Only**: Inputs are kg/cm; conversion happens at the boundary

use crate::models::{Gender, Goal, UserStats};
use serde::{Deserialize, Serialize};

/// Reference height (m) used to normalize FFMI
pub const FFMI_REFERENCE_HEIGHT_M: f64 = 1.8;

/// FFMI height-normalization slope
pub const FFMI_HEIGHT_SLOPE: f64 = 6.1;

/// BMI used for the "ideal weight" target
pub const IDEAL_BMI: f64 = 22.5;

// ============================================================================
// BMI Calculations
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Weight (kg) that yields the given BMI at a height
pub fn weight_for_bmi(bmi: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    bmi * height_m * height_m
}

/// BMI zone, as shaded on the weight/height chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiZone {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiZone {
    pub const ALL: [BmiZone; 4] = [
        BmiZone::Underweight,
        BmiZone::Normal,
        BmiZone::Overweight,
        BmiZone::Obese,
    ];

    /// Get the BMI range for this zone
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiZone::Underweight => (0.0, 18.5),
            BmiZone::Normal => (18.5, 25.0),
            BmiZone::Overweight => (25.0, 30.0),
            BmiZone::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiZone::Underweight => "Underweight",
            BmiZone::Normal => "Normal",
            BmiZone::Overweight => "Overweight",
            BmiZone::Obese => "Obese",
        }
    }

    /// Weight range (kg) covered by this zone at a height
    pub fn weight_range_kg(&self, height_cm: f64) -> (f64, f64) {
        let (low, high) = self.range();
        (weight_for_bmi(low, height_cm), weight_for_bmi(high, height_cm))
    }
}

/// Classify BMI into a zone
pub fn classify_bmi(bmi: f64) -> BmiZone {
    if bmi < 18.5 {
        BmiZone::Underweight
    } else if bmi < 25.0 {
        BmiZone::Normal
    } else if bmi < 30.0 {
        BmiZone::Overweight
    } else {
        BmiZone::Obese
    }
}

// ============================================================================
// FFMI Calculations
// ============================================================================

/// Calculate the height-normalized Fat-Free Mass Index
///
/// FFM = weight × (1 - BF/100)
/// FFMI = FFM / height(m)² + 6.1 × (1.8 - height(m))
///
/// The normalization term is applied at every height, without clamping.
pub fn calculate_ffmi(weight_kg: f64, height_cm: f64, body_fat_percent: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let fat_mass = weight_kg * (body_fat_percent / 100.0);
    let fat_free_mass = weight_kg - fat_mass;
    let raw_ffmi = fat_free_mass / (height_m * height_m);
    raw_ffmi + FFMI_HEIGHT_SLOPE * (FFMI_REFERENCE_HEIGHT_M - height_m)
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity_multiplier: f64) -> f64 {
    bmr * activity_multiplier
}

/// Daily calorie target for a goal: -500 to lose, +300 to build
pub fn calculate_target_calories(tdee: f64, goal: Goal) -> f64 {
    tdee + goal.calorie_adjustment()
}

/// Populate the derived fields of `stats` from its raw measurements.
///
/// No guards: validation happens before the pipeline runs, so a zero
/// height here yields infinities rather than an error.
pub fn compute_metrics(stats: &mut UserStats) {
    stats.bmi = calculate_bmi(stats.weight_kg, stats.height_cm);
    stats.ffmi = calculate_ffmi(stats.weight_kg, stats.height_cm, stats.body_fat_percent);
    stats.bmr = calculate_bmr_mifflin(stats.weight_kg, stats.height_cm, stats.age, stats.gender);
    stats.tdee = calculate_tdee(stats.bmr, stats.activity_multiplier);
    stats.target_calories = calculate_target_calories(stats.tdee, stats.goal);
}

// ============================================================================
// Targets
// ============================================================================

/// Ideal values a user is compared against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyTargets {
    /// Weight at BMI 22.5 for the user's height
    pub ideal_weight_kg: f64,
    /// Ideal body fat range (%)
    pub ideal_body_fat_range: (f64, f64),
    /// Ideal FFMI range
    pub ideal_ffmi_range: (f64, f64),
    /// Healthy BMI range
    pub ideal_bmi_range: (f64, f64),
    /// Single-value body fat target for charts
    pub target_body_fat: f64,
    /// Single-value FFMI target for charts
    pub target_ffmi: f64,
    pub target_bmi: f64,
}

/// Calculate the target table for a height and gender
pub fn calculate_targets(height_cm: f64, gender: Gender) -> BodyTargets {
    let (ideal_body_fat_range, ideal_ffmi_range, target_body_fat, target_ffmi) = match gender {
        Gender::Male => ((12.0, 15.0), (20.0, 22.0), 13.5, 21.0),
        Gender::Female => ((22.0, 25.0), (17.0, 19.0), 23.5, 18.0),
    };

    BodyTargets {
        ideal_weight_kg: weight_for_bmi(IDEAL_BMI, height_cm),
        ideal_body_fat_range,
        ideal_ffmi_range,
        ideal_bmi_range: (21.0, 24.0),
        target_body_fat,
        target_ffmi,
        target_bmi: IDEAL_BMI,
    }
}
