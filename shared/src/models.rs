//! Domain models for the FitCalc engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as selected on the form.
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Body-composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Fat loss (calorie deficit)
    Lose,
    #[default]
    Maintain,
    /// Muscle gain (calorie surplus)
    Build,
}

impl Goal {
    /// Daily calorie adjustment applied to TDEE
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::Lose => -500.0,
            Goal::Maintain => 0.0,
            Goal::Build => 300.0,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Lose => write!(f, "lose"),
            Goal::Maintain => write!(f, "maintain"),
            Goal::Build => write!(f, "build"),
        }
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" | "cut" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            "build" | "bulk" => Ok(Goal::Build),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

/// Activity level presets offered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[default]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" | "light" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" | "moderate" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" | "very" => Ok(ActivityLevel::VeryActive),
            "extra_active" | "extra" => Ok(ActivityLevel::ExtraActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// Normalized user statistics (always metric).
///
/// Derived fields start at zero and are filled in by
/// [`compute_metrics`](crate::health_metrics::compute_metrics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub gender: Gender,
    pub age: u32,
    pub goal: Goal,
    pub activity_multiplier: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    pub body_fat_percent: f64,
    /// Muscle mass in kilograms
    pub muscle_mass_kg: f64,
    pub bmi: f64,
    pub ffmi: f64,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
}

impl UserStats {
    /// Create stats from normalized inputs with all derived fields zeroed
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        gender: Gender,
        age: u32,
        goal: Goal,
        activity_multiplier: f64,
        weight_kg: f64,
        height_cm: f64,
        body_fat_percent: f64,
        muscle_mass_kg: f64,
    ) -> Self {
        Self {
            gender,
            age,
            goal,
            activity_multiplier,
            weight_kg,
            height_cm,
            body_fat_percent,
            muscle_mass_kg,
            bmi: 0.0,
            ffmi: 0.0,
            bmr: 0.0,
            tdee: 0.0,
            target_calories: 0.0,
        }
    }

    /// Height in meters
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_parsing() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());

        assert_eq!("lose".parse::<Goal>().unwrap(), Goal::Lose);
        assert_eq!("BUILD".parse::<Goal>().unwrap(), Goal::Build);
        assert!("shred".parse::<Goal>().is_err());

        assert_eq!(
            "very-active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
    }

    #[test]
    fn test_activity_multipliers_ascend() {
        let multipliers: Vec<f64> = ActivityLevel::ALL.iter().map(|a| a.multiplier()).collect();
        assert_eq!(multipliers, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Goal::Build).unwrap(), "\"build\"");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
    }

    #[test]
    fn test_new_stats_zeroes_derived_fields() {
        let stats = UserStats::new(Gender::Male, 25, Goal::Maintain, 1.55, 75.0, 180.0, 15.0, 35.0);
        assert_eq!(stats.bmi, 0.0);
        assert_eq!(stats.target_calories, 0.0);
        assert!((stats.height_m() - 1.8).abs() < 1e-12);
    }
}
