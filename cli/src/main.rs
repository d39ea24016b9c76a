//! FitCalc CLI
//!
//! Commands:
//! - calc: Evaluate a form given on the command line and save it
//! - last: Re-evaluate the saved form
//! - convert: Convert a single value between units
//! - toggle: Switch the saved form between metric and imperial
//! - clear: Forget the saved form

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fitcalc_cli::{
    config::AppConfig,
    error::{CliError, CliResult},
    render::render_report,
    state::AppState,
};
use fitcalc_shared::{
    convert, evaluate, ActivityLevel, FitnessReport, Gender, Goal, RawInput, SavedForm, Unit,
    UnitSystem,
};
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// FitCalc - body composition calculator
#[derive(Parser)]
#[command(name = "fitcalc")]
#[command(version)]
#[command(about = "Score body composition and plan calories, macros and training", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a form and save it as the last input
    Calc {
        #[command(flatten)]
        form: FormArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Do not save the form
        #[arg(long)]
        no_save: bool,
    },

    /// Re-evaluate the last saved form
    Last {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a value between units (cm, in, kg, lbs)
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(long)]
        from: Unit,

        #[arg(long)]
        to: Unit,
    },

    /// Switch the saved form between metric and imperial
    Toggle,

    /// Forget the saved form
    Clear,
}

/// Form fields; anything left out is reported by validation
#[derive(Args)]
struct FormArgs {
    /// male or female
    #[arg(long)]
    gender: Option<Gender>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// lose, maintain or build
    #[arg(long)]
    goal: Option<Goal>,

    /// Activity multiplier (e.g. 1.55) or level (sedentary, light, moderate, very, extra)
    #[arg(long, value_parser = parse_activity)]
    activity: Option<f64>,

    /// Height in cm (in with --imperial)
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kg (lbs with --imperial)
    #[arg(long)]
    weight: Option<f64>,

    /// Body fat percentage
    #[arg(long)]
    body_fat: Option<f64>,

    /// Muscle mass in kg (lbs with --imperial)
    #[arg(long)]
    muscle: Option<f64>,

    /// Values are imperial (in / lbs)
    #[arg(long, conflicts_with = "metric")]
    imperial: bool,

    /// Values are metric (cm / kg)
    #[arg(long)]
    metric: bool,
}

impl FormArgs {
    fn into_input(self, default_system: UnitSystem) -> RawInput {
        let system = if self.imperial {
            UnitSystem::Imperial
        } else if self.metric {
            UnitSystem::Metric
        } else {
            default_system
        };

        RawInput {
            gender: self.gender,
            age: self.age,
            goal: self.goal,
            activity_multiplier: self.activity,
            height_raw: self.height,
            weight_raw: self.weight,
            body_fat_percent: self.body_fat,
            muscle_raw: self.muscle,
            is_metric: system.is_metric(),
        }
    }
}

fn parse_activity(s: &str) -> Result<f64, String> {
    if let Ok(multiplier) = s.parse::<f64>() {
        return Ok(multiplier);
    }
    s.parse::<ActivityLevel>().map(|level| level.multiplier())
}

fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    let cli = Cli::parse();

    let json = matches!(
        cli.command,
        Commands::Calc { json: true, .. } | Commands::Last { json: true }
    );

    // Load configuration
    let result = AppConfig::load()
        .map_err(CliError::from)
        .and_then(|config| {
            debug!(
                version = env!("CARGO_PKG_VERSION"),
                env = if AppConfig::is_production() { "production" } else { "development" },
                store = %config.storage.path.display(),
                "Starting FitCalc"
            );
            run(&AppState::new(config), cli.command)
        });

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&err.to_response())?);
            } else {
                eprintln!("error: {}", err);
            }
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

fn run(state: &AppState, command: Commands) -> CliResult<String> {
    match command {
        Commands::Calc { form, json, no_save } => {
            let input = form.into_input(state.default_unit_system());
            // Saved as entered, even when it fails validation below
            if !no_save {
                state.store().save(&SavedForm::from_input(&input))?;
                info!(key = state.store().key(), "Saved form");
            }
            let report = evaluate(&input)?;
            format_output(&report, json)
        }
        Commands::Last { json } => {
            let saved = load_saved(state)?;
            let report = evaluate(&saved.to_input())?;
            format_output(&report, json)
        }
        Commands::Convert { value, from, to } => {
            let converted = convert(value, from, to).ok_or_else(|| {
                CliError::BadRequest(format!("cannot convert {} to {}", from, to))
            })?;
            Ok(format!("{:.2} {}", converted, to))
        }
        Commands::Toggle => {
            let saved = load_saved(state)?;
            let toggled = saved.toggle_units();
            state.store().save(&toggled)?;
            info!(
                from = %saved.unit_system(),
                to = %toggled.unit_system(),
                "Toggled saved form"
            );
            Ok(format!("Saved form is now {}", toggled.unit_system()))
        }
        Commands::Clear => {
            if state.store().clear()? {
                Ok("Saved form cleared".to_string())
            } else {
                warn!(key = state.store().key(), "Nothing to clear");
                Ok("No saved form".to_string())
            }
        }
    }
}

fn load_saved(state: &AppState) -> CliResult<SavedForm> {
    state
        .store()
        .load()?
        .ok_or_else(|| CliError::NoSavedForm(state.store().key().to_string()))
}

fn format_output(report: &FitnessReport, json: bool) -> CliResult<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(render_report(report))
    }
}

/// Initialize tracing/logging
///
/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "fitcalc_cli=warn,fitcalc_shared=warn".into()
        } else {
            "fitcalc_cli=info,fitcalc_shared=info".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
