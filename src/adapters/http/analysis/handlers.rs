//! HTTP handlers for analysis endpoints.
//!
//! These handlers connect Axum routes to the application layer's
//! `AnalyzeDecisionHandler`. Each evaluation runs on a blocking thread.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{error, warn};

use crate::application::handlers::AnalyzeDecisionHandler;
use crate::config::AppConfig;
use crate::domain::foundation::DomainError;

use super::dto::{AnalyzeRequest, DecisionReport, ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analysis API error that implements IntoResponse.
#[derive(Debug)]
pub struct AnalysisApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl AnalysisApiError {
    /// Maps a domain error to a status and body.
    pub fn from_domain(error: DomainError, verbose: bool) -> Self {
        let status = if error.code.is_client_error() {
            warn!(error = %error, "Rejected analysis request");
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %error, "Analysis failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        Self {
            status,
            body: ErrorResponse::from_domain(&error, verbose),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing analysis dependencies.
#[derive(Clone)]
pub struct AnalysisAppState {
    pub handler: Arc<AnalyzeDecisionHandler>,
    pub verbose_errors: bool,
}

impl AnalysisAppState {
    pub fn new(handler: AnalyzeDecisionHandler, verbose_errors: bool) -> Self {
        Self {
            handler: Arc::new(handler),
            verbose_errors,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            AnalyzeDecisionHandler::new(config.analysis.clone()),
            config.features.verbose_errors,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/analyze - Evaluate a decision
pub async fn analyze(
    State(state): State<AnalysisAppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<DecisionReport>, AnalysisApiError> {
    let handler = Arc::clone(&state.handler);
    let cmd = request.into_command();

    let report = tokio::task::spawn_blocking(move || handler.handle(cmd))
        .await
        .map_err(|join_error| {
            AnalysisApiError::from_domain(
                DomainError::internal("Evaluation task failed")
                    .with_detail("cause", join_error.to_string()),
                state.verbose_errors,
            )
        })?
        .map_err(|err| AnalysisApiError::from_domain(err, state.verbose_errors))?;

    Ok(Json(report))
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err = AnalysisApiError::from_domain(
            DomainError::validation("options", "At least one option is required"),
            false,
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_map_to_server_error() {
        let err = AnalysisApiError::from_domain(
            DomainError::new(ErrorCode::InternalError, "boom"),
            false,
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
