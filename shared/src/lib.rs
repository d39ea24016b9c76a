//! FitCalc Shared Library
//!
//! This crate contains the calculation engine used by the CLI and WASM
//! front ends: unit conversion, body metrics, scoring, macros and plans.

pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod nutrition;
pub mod pipeline;
pub mod plans;
pub mod saved;
pub mod scoring;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
pub use nutrition::{compute_macros, FoodEquivalents, MacroPlan, MacroSplit};
pub use pipeline::{evaluate, evaluate_json, normalize};
pub use plans::{select_plans, ExerciseStrategy, MealDay, MealPlan};
pub use saved::{SavedForm, STORAGE_KEY};
pub use scoring::{compute_fitness_score, FitnessScore, ReasonKind, ScoreReason, ScoreStatus};
pub use types::*;

// Export units module items (canonical source for unit types)
pub use units::*;
