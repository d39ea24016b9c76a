//! Input and output records at the engine boundary

use crate::health_metrics::BodyTargets;
use crate::models::{Gender, Goal, UserStats};
use crate::nutrition::MacroPlan;
use crate::plans::MealPlan;
use crate::scoring::{ScoreReason, ScoreStatus};
use crate::units::{RawMeasurements, UnitSystem};
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_true() -> bool {
    true
}

/// The form as submitted.
///
/// Every field is optional so that a blank form field can be represented;
/// the pipeline rejects missing values before computing anything.
/// `height_raw`, `weight_raw` and `muscle_raw` are in the system chosen by
/// `is_metric`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RawInput {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    #[validate(range(min = 1, max = 150, message = "must be between 1 and 150 years"))]
    pub age: Option<u32>,
    #[serde(default)]
    pub goal: Option<Goal>,
    #[serde(default)]
    #[validate(range(min = 1.0, max = 2.5, message = "must be between 1.0 and 2.5"))]
    pub activity_multiplier: Option<f64>,
    #[serde(default)]
    pub height_raw: Option<f64>,
    #[serde(default)]
    pub weight_raw: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub body_fat_percent: Option<f64>,
    #[serde(default)]
    pub muscle_raw: Option<f64>,
    #[serde(default = "default_true")]
    pub is_metric: bool,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            gender: None,
            age: None,
            goal: None,
            activity_multiplier: None,
            height_raw: None,
            weight_raw: None,
            body_fat_percent: None,
            muscle_raw: None,
            is_metric: true,
        }
    }
}

impl RawInput {
    /// Field names in form order; the first failing one is reported
    pub const FIELD_ORDER: [&'static str; 8] = [
        "gender",
        "age",
        "goal",
        "activity_multiplier",
        "height_raw",
        "weight_raw",
        "body_fat_percent",
        "muscle_raw",
    ];

    pub fn unit_system(&self) -> UnitSystem {
        UnitSystem::from_is_metric(self.is_metric)
    }

    /// The unit-tagged fields
    pub fn measurements(&self) -> RawMeasurements {
        RawMeasurements {
            height: self.height_raw,
            weight: self.weight_raw,
            muscle: self.muscle_raw,
        }
    }

    /// Replace the unit-tagged fields and the unit system
    pub fn with_measurements(mut self, measurements: RawMeasurements, system: UnitSystem) -> Self {
        self.height_raw = measurements.height;
        self.weight_raw = measurements.weight;
        self.muscle_raw = measurements.muscle;
        self.is_metric = system.is_metric();
        self
    }
}

/// Everything the renderers need from one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessReport {
    /// System the input was entered in, used for display
    pub unit_system: UnitSystem,
    /// Normalized (metric) stats with derived metrics filled in
    pub stats: UserStats,
    /// 0-100
    pub score: u32,
    pub status: ScoreStatus,
    pub reasons: Vec<ScoreReason>,
    pub macros: MacroPlan,
    pub meal_plan: MealPlan,
    pub exercise_text: String,
    pub targets: BodyTargets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_input_json_defaults() {
        let input: RawInput = serde_json::from_str(r#"{"gender":"female","age":30}"#).unwrap();
        assert_eq!(input.gender, Some(Gender::Female));
        assert_eq!(input.age, Some(30));
        assert_eq!(input.height_raw, None);
        assert!(input.is_metric);
    }

    #[test]
    fn test_derive_validation_ranges() {
        let mut input = RawInput {
            age: Some(200),
            body_fat_percent: Some(15.0),
            ..RawInput::default()
        };
        assert!(input.validate().is_err());

        input.age = Some(30);
        assert!(input.validate().is_ok());

        input.activity_multiplier = Some(3.0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_with_measurements_switches_system() {
        let input = RawInput::default().with_measurements(
            RawMeasurements {
                height: Some(70.0),
                weight: Some(165.0),
                muscle: None,
            },
            UnitSystem::Imperial,
        );
        assert!(!input.is_metric);
        assert_eq!(input.unit_system(), UnitSystem::Imperial);
        assert_eq!(input.measurements().height, Some(70.0));
    }
}
