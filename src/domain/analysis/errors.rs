//! Error types for decision analysis.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Reasons an evaluation cannot be run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("At least one criterion is required")]
    EmptyCriteria,

    #[error("At least one option is required")]
    EmptyOptions,
}

impl AnalysisError {
    /// Name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            AnalysisError::EmptyCriteria => "criteria",
            AnalysisError::EmptyOptions => "options",
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string()).with_detail("field", err.field())
    }
}
