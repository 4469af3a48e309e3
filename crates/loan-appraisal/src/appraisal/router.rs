use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use super::compliance::Rulebook;
use super::intake::ApplicationSubmission;
use super::service::{AppraisalEnvelope, AppraisalService, BatchOutcome};
use crate::error::AppError;

/// Router builder exposing HTTP endpoints for appraisal.
pub fn appraisal_router(service: Arc<AppraisalService>) -> Router {
    Router::new()
        .route("/api/v1/appraisals", post(appraise_handler))
        .route("/api/v1/appraisals/batch", post(batch_handler))
        .route("/api/v1/appraisals/rules", get(rules_handler))
        .with_state(service)
}

pub(crate) async fn appraise_handler(
    State(service): State<Arc<AppraisalService>>,
    Json(submission): Json<ApplicationSubmission>,
) -> Result<Json<AppraisalEnvelope>, AppError> {
    Ok(Json(service.appraise(submission)?))
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<AppraisalService>>,
    Json(submissions): Json<Vec<ApplicationSubmission>>,
) -> Result<Json<Vec<BatchOutcome>>, AppError> {
    Ok(Json(service.appraise_batch(submissions)?))
}

pub(crate) async fn rules_handler(State(service): State<Arc<AppraisalService>>) -> Json<Rulebook> {
    Json(service.rules())
}
