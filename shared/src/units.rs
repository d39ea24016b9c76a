//! Unit conversion and normalization module
//!
//! The engine works in metric internally. Values entered in imperial units
//! are converted once at the input boundary and converted back only when a
//! display string is produced.
//!
//! # Design Principles
//!
//! 1. **Internal Consistency**: All calculations use kg and cm
//! 2. **Type Safety**: Units are explicit in types, not just f64
//! 3. **Conversion at Boundaries**: Convert on input/output, not in business logic
//! 4. **Total Functions**: Missing or non-numeric values pass through untouched

use serde::{Deserialize, Serialize};
use std::fmt;

/// Centimeters per inch
pub const INCHES_TO_CM: f64 = 2.54;

/// Kilograms per pound
pub const LBS_TO_KG: f64 = 0.453592;

// ============================================================================
// Weight Units
// ============================================================================

/// Mass unit (body weight and muscle mass)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * LBS_TO_KG,
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / LBS_TO_KG,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

// ============================================================================
// Height Units
// ============================================================================

/// Length unit (body height)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Inches,
}

impl HeightUnit {
    /// Convert from this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Inches => value * INCHES_TO_CM,
        }
    }

    /// Convert from centimeters to this unit
    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::Inches => cm / INCHES_TO_CM,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Inches => "in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "in" | "inch" | "inches" => Ok(HeightUnit::Inches),
            _ => Err(format!("Unknown height unit: {}", s)),
        }
    }
}

// ============================================================================
// Generic Conversion
// ============================================================================

/// Kind of physical quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Length,
    Mass,
}

/// Any unit the converter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Unit {
    Length(HeightUnit),
    Mass(WeightUnit),
}

impl Unit {
    pub fn kind(&self) -> QuantityKind {
        match self {
            Unit::Length(_) => QuantityKind::Length,
            Unit::Mass(_) => QuantityKind::Mass,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Unit::Length(u) => u.abbreviation(),
            Unit::Mass(u) => u.abbreviation(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(unit) = s.parse::<HeightUnit>() {
            return Ok(Unit::Length(unit));
        }
        if let Ok(unit) = s.parse::<WeightUnit>() {
            return Ok(Unit::Mass(unit));
        }
        Err(format!("Unknown unit: {}", s))
    }
}

/// Convert a value between two units of the same kind.
///
/// Returns `None` when the units measure different quantities (cm -> kg).
pub fn convert(value: f64, from: Unit, to: Unit) -> Option<f64> {
    match (from, to) {
        (Unit::Length(from), Unit::Length(to)) => Some(to.from_cm(from.to_cm(value))),
        (Unit::Mass(from), Unit::Mass(to)) => Some(to.from_kg(from.to_kg(value))),
        _ => None,
    }
}

/// Convert an optional form value, skipping anything that is not a finite number.
///
/// Absent or non-numeric values are returned unchanged; this never fails.
pub fn convert_field(value: Option<f64>, from: Unit, to: Unit) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() => convert(v, from, to).or(Some(v)),
        other => other,
    }
}

/// Round to one decimal place, the precision form fields are shown with
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ============================================================================
// Unit Systems
// ============================================================================

/// Unit system selected on the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn from_is_metric(is_metric: bool) -> Self {
        if is_metric {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    }

    pub fn is_metric(&self) -> bool {
        matches!(self, UnitSystem::Metric)
    }

    /// The other system
    pub fn toggled(&self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    pub fn height_unit(&self) -> HeightUnit {
        match self {
            UnitSystem::Metric => HeightUnit::Cm,
            UnitSystem::Imperial => HeightUnit::Inches,
        }
    }

    pub fn weight_unit(&self) -> WeightUnit {
        match self {
            UnitSystem::Metric => WeightUnit::Kg,
            UnitSystem::Imperial => WeightUnit::Lbs,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

// ============================================================================
// Form Measurements
// ============================================================================

/// The unit-tagged fields of the input form, as entered
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawMeasurements {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub muscle: Option<f64>,
}

impl RawMeasurements {
    /// Convert the form between unit systems the way the unit toggle does:
    /// every converted value is rounded to one decimal, blanks stay blank.
    pub fn convert_to(&self, from: UnitSystem, to: UnitSystem) -> Self {
        if from == to {
            return *self;
        }
        let converted = self.convert_exact(from, to);
        Self {
            height: converted.height.map(round_one_decimal),
            weight: converted.weight.map(round_one_decimal),
            muscle: converted.muscle.map(round_one_decimal),
        }
    }

    fn convert_exact(&self, from: UnitSystem, to: UnitSystem) -> Self {
        let height_from = Unit::Length(from.height_unit());
        let height_to = Unit::Length(to.height_unit());
        let weight_from = Unit::Mass(from.weight_unit());
        let weight_to = Unit::Mass(to.weight_unit());

        Self {
            height: convert_field(self.height, height_from, height_to),
            weight: convert_field(self.weight, weight_from, weight_to),
            muscle: convert_field(self.muscle, weight_from, weight_to),
        }
    }
}

// ============================================================================
// Display Helpers
// ============================================================================

/// Format a metric weight for display in the given system
pub fn format_weight(kg: f64, system: UnitSystem) -> String {
    let unit = system.weight_unit();
    format!("{:.1} {}", unit.from_kg(kg), unit)
}

/// Format a metric height for display in the given system
pub fn format_height(cm: f64, system: UnitSystem) -> String {
    let unit = system.height_unit();
    format!("{:.1} {}", unit.from_cm(cm), unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Weight Unit Tests
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Weight conversion round-trip preserves value
        #[test]
        fn prop_weight_roundtrip_kg(kg in 20.0f64..500.0) {
            let lbs = WeightUnit::Lbs.from_kg(kg);
            let back_to_kg = WeightUnit::Lbs.to_kg(lbs);
            prop_assert!(((kg - back_to_kg) / kg).abs() < 1e-6,
                "Round-trip failed: {} -> {} -> {}", kg, lbs, back_to_kg);
        }

        /// Property: Kg identity conversion
        #[test]
        fn prop_kg_identity(kg in 20.0f64..500.0) {
            prop_assert_eq!(WeightUnit::Kg.to_kg(kg), kg);
            prop_assert_eq!(WeightUnit::Kg.from_kg(kg), kg);
        }

        /// Property: Generic conversion round-trips for both kinds
        #[test]
        fn prop_generic_roundtrip(value in 0.1f64..1000.0) {
            let cm = Unit::Length(HeightUnit::Cm);
            let inch = Unit::Length(HeightUnit::Inches);
            let there = convert(value, cm, inch).unwrap();
            let back = convert(there, inch, cm).unwrap();
            prop_assert!(((value - back) / value).abs() < 1e-6);

            let kg = Unit::Mass(WeightUnit::Kg);
            let lbs = Unit::Mass(WeightUnit::Lbs);
            let there = convert(value, lbs, kg).unwrap();
            let back = convert(there, kg, lbs).unwrap();
            prop_assert!(((value - back) / value).abs() < 1e-6);
        }
    }

    #[test]
    fn test_known_weight_conversions() {
        // 1 kg = 2.20462 lbs
        let lbs = WeightUnit::Lbs.from_kg(1.0);
        assert!((lbs - 2.20462).abs() < 0.001);

        // 100 lbs = 45.3592 kg
        let kg = WeightUnit::Lbs.to_kg(100.0);
        assert!((kg - 45.3592).abs() < 0.001);
    }

    // =========================================================================
    // Height Unit Tests
    // =========================================================================

    #[test]
    fn test_height_roundtrip_100cm() {
        let cm = Unit::Length(HeightUnit::Cm);
        let inch = Unit::Length(HeightUnit::Inches);
        let back = convert(convert(100.0, cm, inch).unwrap(), inch, cm).unwrap();
        assert!((back - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_known_height_conversions() {
        // 180 cm = 70.866 inches
        let inches = HeightUnit::Inches.from_cm(180.0);
        assert!((inches - 70.866).abs() < 0.01);

        // 72 inches = 182.88 cm
        assert!((HeightUnit::Inches.to_cm(72.0) - 182.88).abs() < 0.01);
    }

    // =========================================================================
    // Generic Conversion Tests
    // =========================================================================

    #[test]
    fn test_convert_rejects_mixed_kinds() {
        assert_eq!(convert(10.0, Unit::Length(HeightUnit::Cm), Unit::Mass(WeightUnit::Kg)), None);
    }

    #[test]
    fn test_convert_field_skips_missing_and_nan() {
        let kg = Unit::Mass(WeightUnit::Kg);
        let lbs = Unit::Mass(WeightUnit::Lbs);

        assert_eq!(convert_field(None, lbs, kg), None);
        assert!(convert_field(Some(f64::NAN), lbs, kg).unwrap().is_nan());
        assert_eq!(convert_field(Some(f64::INFINITY), lbs, kg), Some(f64::INFINITY));

        let converted = convert_field(Some(100.0), lbs, kg).unwrap();
        assert!((converted - 45.3592).abs() < 1e-9);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("kg".parse::<Unit>().unwrap(), Unit::Mass(WeightUnit::Kg));
        assert_eq!("lbs".parse::<Unit>().unwrap(), Unit::Mass(WeightUnit::Lbs));
        assert_eq!("pounds".parse::<Unit>().unwrap(), Unit::Mass(WeightUnit::Lbs));
        assert_eq!("in".parse::<Unit>().unwrap(), Unit::Length(HeightUnit::Inches));
        assert_eq!("CM".parse::<Unit>().unwrap(), Unit::Length(HeightUnit::Cm));
        assert!("stone".parse::<Unit>().is_err());
        assert_eq!(Unit::Mass(WeightUnit::Lbs).kind(), QuantityKind::Mass);
    }

    // =========================================================================
    // Unit System Tests
    // =========================================================================

    #[test]
    fn test_unit_system_units() {
        assert_eq!(UnitSystem::Metric.height_unit(), HeightUnit::Cm);
        assert_eq!(UnitSystem::Metric.weight_unit(), WeightUnit::Kg);
        assert_eq!(UnitSystem::Imperial.height_unit(), HeightUnit::Inches);
        assert_eq!(UnitSystem::Imperial.weight_unit(), WeightUnit::Lbs);
        assert_eq!(UnitSystem::from_is_metric(false), UnitSystem::Imperial);
        assert_eq!(UnitSystem::Imperial.toggled(), UnitSystem::Metric);
        assert_eq!("imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
    }

    #[test]
    fn test_toggle_rounds_to_one_decimal() {
        let raw = RawMeasurements {
            height: Some(180.0),
            weight: Some(75.0),
            muscle: Some(35.0),
        };
        let imperial = raw.convert_to(UnitSystem::Metric, UnitSystem::Imperial);
        assert_eq!(imperial.height, Some(70.9));
        assert_eq!(imperial.weight, Some(165.3));
        assert_eq!(imperial.muscle, Some(77.2));
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_weight(75.0, UnitSystem::Metric), "75.0 kg");
        assert_eq!(format_weight(75.0, UnitSystem::Imperial), "165.3 lbs");
        assert_eq!(format_height(180.0, UnitSystem::Metric), "180.0 cm");
        assert_eq!(format_height(180.0, UnitSystem::Imperial), "70.9 in");
    }
}
