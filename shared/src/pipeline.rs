//! One-shot evaluation pipeline
//!
//! # Design Principles
//!
//! 1. **Validate first**: every field is checked before any arithmetic, so
//!    NaN and infinities never reach the report.
//! 2. **Metric inside**: raw values are normalized once; everything after
//!    `normalize` works in kg and cm.
//! 3. **Fresh output**: each call builds a new report; nothing is shared
//!    between calls.

use crate::errors::{CalcError, CalcResult};
use crate::health_metrics::{calculate_targets, compute_metrics};
use crate::models::UserStats;
use crate::nutrition::compute_macros;
use crate::plans::select_plans;
use crate::scoring::compute_fitness_score;
use crate::types::{FitnessReport, RawInput};
use crate::validation::{
    check, check_derived, require, require_number, validate_height_cm, validate_muscle_mass,
    validate_weight,
};
use validator::Validate;

/// Validate a raw form and convert it to metric stats with derived fields zeroed.
///
/// Fields are checked one at a time in form order and the first failure is
/// returned. Each field is checked completely before the next: presence,
/// the declared range, then the range of its metric value.
pub fn normalize(input: &RawInput) -> CalcResult<UserStats> {
    let ranges = input.validate().err();
    let ranges = ranges.as_ref();
    let system = input.unit_system();

    let gender = require("gender", input.gender)?;

    let age = require("age", input.age)?;
    check_derived(ranges, "age")?;

    let goal = require("goal", input.goal)?;

    let activity_multiplier = require_number("activity_multiplier", input.activity_multiplier)?;
    check_derived(ranges, "activity_multiplier")?;

    let height_cm = system.height_unit().to_cm(require_number("height_raw", input.height_raw)?);
    check("height_raw", validate_height_cm(height_cm))?;

    let weight_kg = system.weight_unit().to_kg(require_number("weight_raw", input.weight_raw)?);
    check("weight_raw", validate_weight(weight_kg))?;

    let body_fat_percent = require_number("body_fat_percent", input.body_fat_percent)?;
    check_derived(ranges, "body_fat_percent")?;

    let muscle_mass_kg = system.weight_unit().to_kg(require_number("muscle_raw", input.muscle_raw)?);
    check("muscle_raw", validate_muscle_mass(muscle_mass_kg))?;

    Ok(UserStats::new(
        gender,
        age,
        goal,
        activity_multiplier,
        weight_kg,
        height_cm,
        body_fat_percent,
        muscle_mass_kg,
    ))
}

/// Run the full pipeline: normalize, metrics, score, macros, plans, targets
pub fn evaluate(input: &RawInput) -> CalcResult<FitnessReport> {
    let mut stats = normalize(input).map_err(|err| {
        tracing::debug!(error = %err, "Input rejected");
        err
    })?;

    compute_metrics(&mut stats);
    tracing::debug!(
        bmi = stats.bmi,
        ffmi = stats.ffmi,
        bmr = stats.bmr,
        tdee = stats.tdee,
        "Computed metrics"
    );

    let fitness = compute_fitness_score(&stats);
    tracing::debug!(
        score = fitness.score,
        body_fat_score = fitness.body_fat_score,
        muscle_score = fitness.muscle_score,
        "Scored"
    );

    let macros = compute_macros(&stats);
    let (meal_plan, exercise_text) = select_plans(stats.goal);
    let targets = calculate_targets(stats.height_cm, stats.gender);

    Ok(FitnessReport {
        unit_system: input.unit_system(),
        stats,
        score: fitness.score,
        status: fitness.status,
        reasons: fitness.reasons,
        macros,
        meal_plan,
        exercise_text,
        targets,
    })
}

/// JSON in, JSON out, for callers that only speak strings
pub fn evaluate_json(input_json: &str) -> CalcResult<String> {
    let input: RawInput = serde_json::from_str(input_json)?;
    let report = evaluate(&input)?;
    serde_json::to_string(&report).map_err(CalcError::from)
}
