//! Error types for the FitCalc engine

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A required field is missing, non-numeric or out of range
    #[error("Invalid input for {label}: {message}")]
    InvalidInput {
        field: String,
        label: String,
        message: String,
    },

    #[error("Invalid JSON: {0}")]
    Json(String),
}

impl CalcError {
    /// Name of the offending field, if this is an input error
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } => Some(field),
            CalcError::Json(_) => None,
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Json(err.to_string())
    }
}

/// Result type alias for engine operations
pub type CalcResult<T> = Result<T, CalcError>;
