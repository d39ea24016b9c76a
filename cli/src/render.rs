//! Plain-text rendering of a [`FitnessReport`]
//!
//! Values are stored metric; weights and heights are converted back to the
//! unit system the form was entered in only here.

use fitcalc_shared::{
    classify_bmi, format_height, format_weight, BmiZone, FitnessReport, UnitSystem,
};
use std::fmt::Write;

/// Render the full report as terminal text
pub fn render_report(report: &FitnessReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &FitnessReport) -> std::fmt::Result {
    let stats = &report.stats;
    let system = report.unit_system;

    writeln!(out, "Fitness Score: {}/100 ({})", report.score, report.status.label())?;
    for reason in &report.reasons {
        writeln!(out, "  {} {}", reason.kind.symbol(), reason.text)?;
    }

    section(out, "Metrics")?;
    writeln!(
        out,
        "  Height           {}",
        format_height(stats.height_cm, system)
    )?;
    writeln!(out, "  BMI              {:.1} ({})", stats.bmi, classify_bmi(stats.bmi).description())?;
    writeln!(out, "  FFMI             {:.1}", stats.ffmi)?;
    writeln!(out, "  BMR              {:.0} kcal", stats.bmr)?;
    writeln!(out, "  TDEE             {:.0} kcal", stats.tdee)?;
    writeln!(out, "  Target calories  {:.0} kcal", stats.target_calories)?;
    write_bmi_zones(out, stats.height_cm, system)?;

    write_targets(out, report, system)?;
    write_macros(out, report)?;

    section(out, "Meal Plan")?;
    for (i, day) in report.meal_plan.day_texts().iter().enumerate() {
        writeln!(out, "  Day {}", i + 1)?;
        for line in day.lines() {
            writeln!(out, "    {}", line)?;
        }
    }

    section(out, "Exercise")?;
    for line in report.exercise_text.lines() {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.len()))
}

/// Weight band of each BMI zone at the user's height
fn write_bmi_zones(out: &mut String, height_cm: f64, system: UnitSystem) -> std::fmt::Result {
    writeln!(out, "  BMI zones at {}:", format_height(height_cm, system))?;
    for zone in BmiZone::ALL {
        let (low, high) = zone.weight_range_kg(height_cm);
        let band = if high.is_finite() {
            format!("{} - {}", format_weight(low, system), format_weight(high, system))
        } else {
            format!("{}+", format_weight(low, system))
        };
        writeln!(out, "    {:<12} {}", zone.description(), band)?;
    }
    Ok(())
}

fn write_targets(out: &mut String, report: &FitnessReport, system: UnitSystem) -> std::fmt::Result {
    let stats = &report.stats;
    let targets = &report.targets;
    let (bf_low, bf_high) = targets.ideal_body_fat_range;
    let (ffmi_low, ffmi_high) = targets.ideal_ffmi_range;
    let (bmi_low, bmi_high) = targets.ideal_bmi_range;

    section(out, "Targets")?;
    writeln!(out, "  {:<14} {:>12}   {}", "Metric", "Current", "Ideal")?;
    writeln!(
        out,
        "  {:<14} {:>12}   ~ {}",
        "Weight",
        format_weight(stats.weight_kg, system),
        format_weight(targets.ideal_weight_kg, system)
    )?;
    writeln!(
        out,
        "  {:<14} {:>12}   {} - {}%",
        "Body Fat",
        format!("{:.1}%", stats.body_fat_percent),
        bf_low,
        bf_high
    )?;
    writeln!(
        out,
        "  {:<14} {:>12}   {} - {}",
        "Muscle (FFMI)",
        format!("{:.1}", stats.ffmi),
        ffmi_low,
        ffmi_high
    )?;
    writeln!(
        out,
        "  {:<14} {:>12}   {:.1} - {:.1}",
        "BMI",
        format!("{:.1}", stats.bmi),
        bmi_low,
        bmi_high
    )
}

fn write_macros(out: &mut String, report: &FitnessReport) -> std::fmt::Result {
    let macros = &report.macros;
    let eq = &macros.equivalents;

    section(out, "Nutrition")?;
    writeln!(out, "  Target Daily Intake: {} kcal", macros.calories)?;
    writeln!(
        out,
        "  Protein {}g: ~{}g of Chicken Breast OR ~{} Large Eggs OR ~{:.1} Scoops Whey",
        macros.protein_grams, eq.chicken_breast_g, eq.eggs, eq.whey_scoops
    )?;
    writeln!(
        out,
        "  Carbs   {}g: ~{}g of Cooked Rice OR ~{}g of Raw Oats OR ~{:.1} Medium Bananas",
        macros.carb_grams, eq.cooked_rice_g, eq.raw_oats_g, eq.bananas
    )?;
    writeln!(
        out,
        "  Fats    {}g: ~{}g of Almonds OR ~{} Tbsp Olive Oil OR ~{:.1} Whole Avocados",
        macros.fat_grams, eq.almonds_g, eq.olive_oil_tbsp, eq.avocados
    )
}
