//! Application error handling
//!
//! This module provides unified error handling for the CLI,
//! converting internal errors to process exit codes and error reports.

use fitcalc_shared::CalcError;
use serde::Serialize;
use thiserror::Error;

/// CLI error type that can be converted to an exit code
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("No saved form found under key '{0}'")]
    NoSavedForm(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error report body, printed instead of a report in `--json` mode
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl CliError {
    /// Process exit code, following the sysexits convention
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Calc(CalcError::InvalidInput { .. }) => 65,
            CliError::Calc(CalcError::Json(_)) => 65,
            CliError::NoSavedForm(_) => 66,
            CliError::BadRequest(_) => 64,
            CliError::Config(_) => 78,
            CliError::Io(_) => 74,
            CliError::Json(_) => 74,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Calc(CalcError::InvalidInput { .. }) => "VALIDATION_ERROR",
            CliError::Calc(CalcError::Json(_)) => "BAD_REQUEST",
            CliError::NoSavedForm(_) => "NOT_FOUND",
            CliError::BadRequest(_) => "BAD_REQUEST",
            CliError::Config(_) => "CONFIG_ERROR",
            CliError::Io(_) | CliError::Json(_) => "STORE_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let field = match self {
            CliError::Calc(err) => err.field().map(str::to_string),
            _ => None,
        };

        ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
                field,
            },
        }
    }
}

/// Result type alias for CLI commands
pub type CliResult<T> = Result<T, CliError>;
