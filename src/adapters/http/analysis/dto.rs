//! HTTP DTOs for analysis endpoints.
//!
//! The report is already designed for serialization, so it is re-exported
//! as the response body directly.

pub use crate::domain::analysis::{
    ConfidenceSummary, CriterionSummary, DecisionReport, ExplanationSummary, GapSummary,
    OptionBreakdown, ScoreSummary,
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::handlers::{AlternativeInput, AnalyzeDecisionCommand};
use crate::domain::analysis::CriterionSpec;
use crate::domain::foundation::{CriterionKind, DomainError, ScaleInput};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to evaluate a decision.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub criteria: Vec<CriterionRequest>,
    #[serde(default)]
    pub options: Vec<OptionRequest>,
}

/// One criterion in an analyze request.
#[derive(Debug, Clone, Deserialize)]
pub struct CriterionRequest {
    pub name: String,
    /// Required: `"benefit"` or `"cost"`.
    #[serde(rename = "type")]
    pub kind: CriterionKind,
    #[serde(default)]
    pub dynamic: bool,
    /// Lower is more important; defaults to the criterion's position.
    #[serde(default)]
    pub priority: Option<i64>,
}

/// One option in an analyze request.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionRequest {
    pub name: String,
    /// Numbers, numeric strings, qualitative labels or null, one per criterion.
    #[serde(default)]
    pub values: Vec<Value>,
}

impl AnalyzeRequest {
    /// Converts the request into an application command.
    pub fn into_command(self) -> AnalyzeDecisionCommand {
        let criteria = self
            .criteria
            .into_iter()
            .map(|c| {
                CriterionSpec::new(c.name, c.kind)
                    .with_dynamic(c.dynamic)
                    .with_priority(c.priority)
            })
            .collect();

        let options = self
            .options
            .into_iter()
            .map(|o| AlternativeInput::new(o.name, o.values.into_iter().map(scale_input).collect()))
            .collect();

        AnalyzeDecisionCommand::new(criteria, options).with_goal(self.goal)
    }
}

/// Maps an arbitrary JSON cell to a scale input. Non-scalar values are neutral.
fn scale_input(value: Value) -> ScaleInput {
    match value {
        Value::Number(n) => n.as_f64().map_or(ScaleInput::Missing, ScaleInput::Number),
        Value::String(s) => ScaleInput::Label(s),
        _ => ScaleInput::Missing,
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Liveness probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Builds the body for a domain error.
    ///
    /// Client errors keep their message and details. Internal errors get a
    /// generic message unless `verbose` is set.
    pub fn from_domain(error: &DomainError, verbose: bool) -> Self {
        let expose = verbose || error.code.is_client_error();
        let details = (expose && !error.details.is_empty())
            .then(|| serde_json::to_value(&error.details).ok())
            .flatten();

        Self {
            code: error.code.to_string(),
            message: if expose {
                error.message.clone()
            } else {
                "An internal error occurred".to_string()
            },
            details,
        }
    }
}
