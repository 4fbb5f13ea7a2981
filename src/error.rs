//! Error types for Podium Coach

use thiserror::Error;

/// Errors that can occur while preparing or encoding an analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Field `{field}` is not a valid number: `{value}`")]
    InvalidInput { field: &'static str, value: String },

    #[error("Unknown interview type: {0}")]
    UnknownInterviewType(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
}
