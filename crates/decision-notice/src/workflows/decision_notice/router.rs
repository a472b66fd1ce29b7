use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::case_data::CaseData;
use super::errors::AdjudicationError;
use super::service::{Benefit, DecisionNoticeService};

/// Router exposing validation, outcome selection, and the question catalog.
pub fn decision_notice_router(service: Arc<DecisionNoticeService>) -> Router {
    Router::new()
        .route("/api/v1/decision-notice/validate", post(validate_handler))
        .route("/api/v1/decision-notice/outcome", post(outcome_handler))
        .route(
            "/api/v1/decision-notice/:benefit/questions",
            get(questions_handler),
        )
        .with_state(service)
}

fn error_response(error: AdjudicationError) -> Response {
    match error {
        AdjudicationError::Validation(errors) => {
            let payload = json!({
                "error": "decision notice failed validation",
                "errors": errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        AdjudicationError::NoticeNotRequested(_) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        AdjudicationError::UnsupportedBenefit(_) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn validate_handler(
    State(service): State<Arc<DecisionNoticeService>>,
    axum::Json(case): axum::Json<CaseData>,
) -> Response {
    match service.validate(&case) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn outcome_handler(
    State(service): State<Arc<DecisionNoticeService>>,
    axum::Json(case): axum::Json<CaseData>,
) -> Response {
    match service.outcome(&case) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn questions_handler(
    State(service): State<Arc<DecisionNoticeService>>,
    Path(benefit): Path<String>,
) -> Response {
    match Benefit::parse(&benefit) {
        Ok(benefit) => {
            let payload = json!({
                "benefit": benefit,
                "activities": service.questions(benefit),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}
