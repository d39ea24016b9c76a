//! Macro-nutrient targets and food equivalents

use crate::models::{Goal, UserStats};
use serde::{Deserialize, Serialize};

/// Energy density of protein (kcal/g)
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
/// Energy density of carbohydrate (kcal/g)
pub const CARB_KCAL_PER_G: f64 = 4.0;
/// Energy density of fat (kcal/g)
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Share of daily calories given to each macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroSplit {
    /// Split used for a goal
    pub fn for_goal(goal: Goal) -> Self {
        let (protein, carbs, fat) = match goal {
            Goal::Lose => (0.4, 0.3, 0.3),
            Goal::Build => (0.3, 0.5, 0.2),
            Goal::Maintain => (0.3, 0.4, 0.3),
        };
        Self { protein, carbs, fat }
    }
}

// ============================================================================
// Food Densities
// ============================================================================

/// Grams of protein in 100g cooked chicken breast
pub const CHICKEN_PROTEIN_PER_100G: f64 = 31.0;
/// Grams of protein in one large egg
pub const EGG_PROTEIN_PER_UNIT: f64 = 6.0;
/// Grams of protein in one scoop of whey
pub const WHEY_PROTEIN_PER_SCOOP: f64 = 25.0;
/// Grams of carbohydrate in 100g cooked white rice
pub const RICE_CARBS_PER_100G: f64 = 28.0;
/// Grams of carbohydrate in 100g raw oats
pub const OATS_CARBS_PER_100G: f64 = 66.0;
/// Grams of carbohydrate in one medium banana
pub const BANANA_CARBS_PER_UNIT: f64 = 25.0;
/// Grams of fat in 100g almonds
pub const ALMOND_FAT_PER_100G: f64 = 50.0;
/// Grams of fat in one tablespoon of olive oil
pub const OLIVE_OIL_FAT_PER_TBSP: f64 = 14.0;
/// Grams of fat in one whole avocado
pub const AVOCADO_FAT_PER_UNIT: f64 = 15.0;

/// Daily amounts of single foods that would each cover a macro target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEquivalents {
    pub chicken_breast_g: i64,
    pub eggs: i64,
    /// One decimal
    pub whey_scoops: f64,
    pub cooked_rice_g: i64,
    pub raw_oats_g: i64,
    /// One decimal
    pub bananas: f64,
    pub almonds_g: i64,
    pub olive_oil_tbsp: i64,
    /// One decimal
    pub avocados: f64,
}

fn per_100g(grams: i64, density: f64) -> i64 {
    (grams as f64 / density * 100.0).round() as i64
}

fn whole_units(grams: i64, density: f64) -> i64 {
    (grams as f64 / density).round() as i64
}

fn tenth_units(grams: i64, density: f64) -> f64 {
    (grams as f64 / density * 10.0).round() / 10.0
}

impl FoodEquivalents {
    pub fn from_grams(protein_g: i64, carb_g: i64, fat_g: i64) -> Self {
        Self {
            chicken_breast_g: per_100g(protein_g, CHICKEN_PROTEIN_PER_100G),
            eggs: whole_units(protein_g, EGG_PROTEIN_PER_UNIT),
            whey_scoops: tenth_units(protein_g, WHEY_PROTEIN_PER_SCOOP),
            cooked_rice_g: per_100g(carb_g, RICE_CARBS_PER_100G),
            raw_oats_g: per_100g(carb_g, OATS_CARBS_PER_100G),
            bananas: tenth_units(carb_g, BANANA_CARBS_PER_UNIT),
            almonds_g: per_100g(fat_g, ALMOND_FAT_PER_100G),
            olive_oil_tbsp: whole_units(fat_g, OLIVE_OIL_FAT_PER_TBSP),
            avocados: tenth_units(fat_g, AVOCADO_FAT_PER_UNIT),
        }
    }
}

// ============================================================================
// Macro Plan
// ============================================================================

/// Daily calorie and macro targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroPlan {
    pub calories: i64,
    pub protein_grams: i64,
    pub carb_grams: i64,
    pub fat_grams: i64,
    pub split: MacroSplit,
    pub equivalents: FoodEquivalents,
}

impl MacroPlan {
    /// Calories the rounded gram targets actually add up to
    pub fn gram_calories(&self) -> f64 {
        self.protein_grams as f64 * PROTEIN_KCAL_PER_G
            + self.carb_grams as f64 * CARB_KCAL_PER_G
            + self.fat_grams as f64 * FAT_KCAL_PER_G
    }
}

/// Derive macro targets from the goal calories.
///
/// Each macro is rounded on its own; the rounding error is not
/// reconciled back to the calorie total.
pub fn compute_macros(stats: &UserStats) -> MacroPlan {
    let calories = stats.target_calories.round() as i64;
    let split = MacroSplit::for_goal(stats.goal);
    let kcal = calories as f64;

    let protein_grams = (kcal * split.protein / PROTEIN_KCAL_PER_G).round() as i64;
    let carb_grams = (kcal * split.carbs / CARB_KCAL_PER_G).round() as i64;
    let fat_grams = (kcal * split.fat / FAT_KCAL_PER_G).round() as i64;

    MacroPlan {
        calories,
        protein_grams,
        carb_grams,
        fat_grams,
        split,
        equivalents: FoodEquivalents::from_grams(protein_grams, carb_grams, fat_grams),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use proptest::prelude::*;

    fn stats_with_calories(goal: Goal, target_calories: f64) -> UserStats {
        let mut stats = UserStats::new(Gender::Male, 30, goal, 1.55, 80.0, 180.0, 15.0, 35.0);
        stats.target_calories = target_calories;
        stats
    }

    #[test]
    fn test_splits_sum_to_one() {
        for goal in [Goal::Lose, Goal::Maintain, Goal::Build] {
            let split = MacroSplit::for_goal(goal);
            assert!((split.protein + split.carbs + split.fat - 1.0).abs() < 1e-9);
        }
        assert_eq!(MacroSplit::for_goal(Goal::Lose).protein, 0.4);
        assert_eq!(MacroSplit::for_goal(Goal::Build).carbs, 0.5);
    }

    #[test]
    fn test_maintain_macros() {
        let plan = compute_macros(&stats_with_calories(Goal::Maintain, 2000.0));
        assert_eq!(plan.calories, 2000);
        assert_eq!(plan.protein_grams, 150);
        assert_eq!(plan.carb_grams, 200);
        assert_eq!(plan.fat_grams, 67);
    }

    #[test]
    fn test_calories_are_rounded_first() {
        // 2720.25 -> 2720 kcal
        let plan = compute_macros(&stats_with_calories(Goal::Maintain, 2720.25));
        assert_eq!(plan.calories, 2720);
        assert_eq!(plan.protein_grams, 204);
        assert_eq!(plan.carb_grams, 272);
        assert_eq!(plan.fat_grams, 91);
    }

    #[test]
    fn test_food_equivalents() {
        let eq = FoodEquivalents::from_grams(150, 200, 67);
        assert_eq!(eq.chicken_breast_g, 484);
        assert_eq!(eq.eggs, 25);
        assert_eq!(eq.whey_scoops, 6.0);
        assert_eq!(eq.cooked_rice_g, 714);
        assert_eq!(eq.raw_oats_g, 303);
        assert_eq!(eq.bananas, 8.0);
        assert_eq!(eq.almonds_g, 134);
        assert_eq!(eq.olive_oil_tbsp, 5);
        assert_eq!(eq.avocados, 4.5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: rounded grams stay within a few kcal of the target
        #[test]
        fn prop_gram_calories_close_to_target(
            calories in 1000.0f64..5000.0,
            goal_idx in 0usize..3
        ) {
            let goal = [Goal::Lose, Goal::Maintain, Goal::Build][goal_idx];
            let plan = compute_macros(&stats_with_calories(goal, calories));
            // 0.5g rounding per macro: 2 + 2 + 4.5 kcal at worst
            prop_assert!((plan.gram_calories() - plan.calories as f64).abs() <= 9.0);
        }
    }
}
