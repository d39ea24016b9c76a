//! Meal plans and exercise strategy, selected by goal
//!
//! Pure table lookups; nothing here depends on the user's numbers.

use crate::models::Goal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days in every meal plan
pub const MEAL_PLAN_DAYS: usize = 3;

/// One day of meals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDay {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
}

impl MealDay {
    fn from_row(row: &[&str; 4]) -> Self {
        Self {
            breakfast: row[0].to_string(),
            lunch: row[1].to_string(),
            dinner: row[2].to_string(),
            snack: row[3].to_string(),
        }
    }
}

impl fmt::Display for MealDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Breakfast: {}", self.breakfast)?;
        writeln!(f, "Lunch: {}", self.lunch)?;
        writeln!(f, "Dinner: {}", self.dinner)?;
        write!(f, "Snack: {}", self.snack)
    }
}

/// A multi-day meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub days: Vec<MealDay>,
}

impl MealPlan {
    /// Each day as a multi-line block of text
    pub fn day_texts(&self) -> Vec<String> {
        self.days.iter().map(|day| day.to_string()).collect()
    }
}

type MealTable = [[&'static str; 4]; MEAL_PLAN_DAYS];

const LOSE_MEALS: MealTable = [
    [
        "3 Egg white scramble with spinach, tomatoes, and 1 slice whole wheat toast.",
        "Grilled chicken salad with lots of greens, cucumbers, and a light vinaigrette.",
        "Baked white fish (cod/tilapia) with steamed broccoli and small side of quinoa.",
        "1 cup Greek yogurt.",
    ],
    [
        "Protein oatmeal (1/2 cup oats mixed with 1 scoop protein powder) and berries.",
        "Turkey wrap using a low-carb tortilla, mustard, and mixed greens.",
        "Lean ground beef (96/4) stir-fry with zucchini and bell peppers.",
        "Apple slices with 1 tbsp almond butter.",
    ],
    [
        "Protein smoothie (whey, spinach, half banana, almond milk).",
        "Tuna salad (made with Greek yogurt instead of mayo) over a bed of spinach.",
        "Grilled chicken breast with roasted asparagus.",
        "Cottage cheese with a few almonds.",
    ],
];

const BUILD_MEALS: MealTable = [
    [
        "4 Whole eggs, 2 slices avocado toast, and a glass of whole milk.",
        "Large portion of chicken breast, 1.5 cups jasmine rice, roasted vegetables.",
        "8oz Steak, sweet potato, and green beans cooked in olive oil.",
        "Mass-gainer shake or peanut butter sandwich.",
    ],
    [
        "Large bowl of oatmeal with peanut butter, chia seeds, and protein powder.",
        "8oz Ground turkey, 1.5 cups pasta, side salad with olive oil dressing.",
        "Salmon fillet, 1 cup quinoa, roasted Brussels sprouts.",
        "Trail mix (nuts, dried fruit) and cottage cheese.",
    ],
    [
        "3-Egg omelet with cheese and ham, side of hash browns.",
        "2 Chicken and bean burritos with cheese and guacamole.",
        "Pork tenderloin, mashed potatoes, and buttered peas.",
        "Protein bar and a large banana.",
    ],
];

const MAINTAIN_MEALS: MealTable = [
    [
        "2 Whole eggs, 1 slice avocado toast.",
        "Turkey wrap with mixed greens and a side of fruit.",
        "Lean pork or tofu stir-fry with mixed vegetables and 1 cup rice.",
        "Apple slices with 1 tbsp almond butter.",
    ],
    [
        "Oatmeal with a handful of berries and a drizzle of honey.",
        "Grilled chicken Caesar salad (light dressing).",
        "Baked salmon with a side of couscous and steamed broccoli.",
        "Greek yogurt.",
    ],
    [
        "Protein smoothie (whey, mixed berries, almond milk).",
        "Tuna salad sandwich on whole wheat bread.",
        "Chicken thigh roasted with sweet potatoes and carrots.",
        "Handful of mixed nuts.",
    ],
];

/// Meal plan for a goal
pub fn meal_plan(goal: Goal) -> MealPlan {
    let table = match goal {
        Goal::Lose => &LOSE_MEALS,
        Goal::Build => &BUILD_MEALS,
        Goal::Maintain => &MAINTAIN_MEALS,
    };
    MealPlan {
        days: table.iter().map(MealDay::from_row).collect(),
    }
}

// ============================================================================
// Exercise Strategy
// ============================================================================

/// Training recommendation for a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseStrategy {
    pub title: &'static str,
    /// (focus, advice) pairs
    pub items: &'static [(&'static str, &'static str)],
}

impl ExerciseStrategy {
    /// Title line, blank line, then one bullet per item
    pub fn to_text(&self) -> String {
        let mut text = format!("Goal: {}\n", self.title);
        for (focus, advice) in self.items {
            text.push_str(&format!("\n• {}: {}", focus, advice));
        }
        text
    }
}

const LOSE_STRATEGY: ExerciseStrategy = ExerciseStrategy {
    title: "Preserve Muscle, Burn Fat",
    items: &[
        (
            "Resistance",
            "Lift heavy 3x/week. Focus on compound movements to signal your body to keep muscle.",
        ),
        (
            "Cardio",
            "3-4 sessions of LISS (Low-Intensity Steady State) like walking on an incline or cycling for 45 mins. Burns fat, spares recovery.",
        ),
        ("NEAT", "Hit 10,000 steps daily."),
    ],
};

const BUILD_STRATEGY: ExerciseStrategy = ExerciseStrategy {
    title: "Maximum Hypertrophy (Muscle Growth)",
    items: &[
        (
            "Resistance",
            "Train 4-5x/week using a structured split (e.g., Push/Pull/Legs). Prioritize progressive overload (adding weight or reps each week).",
        ),
        (
            "Cardio",
            "Limit to 1-2 short sessions. Don't burn the calories needed for growth.",
        ),
        (
            "Recovery",
            "Muscle grows in bed, not the gym. Get 8 hours of sleep.",
        ),
    ],
};

const MAINTAIN_STRATEGY: ExerciseStrategy = ExerciseStrategy {
    title: "Maintenance & Health",
    items: &[
        ("Resistance", "Train 3x/week full-body to maintain current mass."),
        (
            "Cardio",
            "2 sessions of moderate cardio (jogging, swimming) for heart health.",
        ),
        (
            "Flexibility",
            "Add 1 session of yoga or deep stretching to maintain mobility.",
        ),
    ],
};

/// Exercise strategy for a goal
pub fn exercise_strategy(goal: Goal) -> ExerciseStrategy {
    match goal {
        Goal::Lose => LOSE_STRATEGY,
        Goal::Build => BUILD_STRATEGY,
        Goal::Maintain => MAINTAIN_STRATEGY,
    }
}

/// Meal plan and exercise text for a goal
pub fn select_plans(goal: Goal) -> (MealPlan, String) {
    (meal_plan(goal), exercise_strategy(goal).to_text())
}
