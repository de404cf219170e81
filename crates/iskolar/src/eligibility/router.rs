use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::{EligibilityCriteria, EligibilityEngine, StudentProfile};

/// Request body shared by both endpoints: the raw profile and criteria
/// records exactly as the persistence layer stores them.
#[derive(Debug, Deserialize)]
pub struct EligibilityCheckRequest {
    pub profile: StudentProfile,
    pub criteria: EligibilityCriteria,
}

/// Router builder exposing the eligibility endpoints over one shared,
/// read-only engine.
pub fn eligibility_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/check", post(check_handler))
        .route("/api/v1/eligibility/quick-check", post(quick_check_handler))
        .with_state(engine)
}

pub(crate) async fn check_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    Json(request): Json<EligibilityCheckRequest>,
) -> Response {
    let report = engine.check(&request.profile, &request.criteria);
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn quick_check_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    Json(request): Json<EligibilityCheckRequest>,
) -> Response {
    let eligible = engine.quick_check(&request.profile, &request.criteria);
    (StatusCode::OK, Json(json!({ "eligible": eligible }))).into_response()
}
