use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::super::form::ValidationError;
use super::super::post::compute_post_risk;
use super::super::risk::{self, CoreAssessmentForm};
use super::super::triage::{self, PatientFactorsForm};
use super::domain::{AssessmentId, AssessmentRequest, PostSection};
use super::repository::{AssessmentRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing the scoring engines and assessment sessions.
pub fn screening_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/screening/triage", post(triage_handler))
        .route("/api/v1/screening/core", post(core_handler))
        .route("/api/v1/screening/post", post(post_handler))
        .route("/api/v1/assessments", post(submit_handler::<R>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(fetch_handler::<R>),
        )
        .route(
            "/api/v1/exports/assessments.csv",
            get(export_handler::<R>),
        )
        .with_state(service)
}

fn validation_response(section: Option<&str>, error: &ValidationError) -> Response {
    let payload = json!({
        "error": error.to_string(),
        "field": error.field(),
        "section": section,
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

pub(crate) async fn triage_handler(Json(form): Json<PatientFactorsForm>) -> Response {
    match triage::assess_form(&form) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => validation_response(None, &error),
    }
}

pub(crate) async fn core_handler(Json(form): Json<CoreAssessmentForm>) -> Response {
    match risk::assess_form(&form) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => validation_response(None, &error),
    }
}

pub(crate) async fn post_handler(Json(section): Json<PostSection>) -> Response {
    let result = compute_post_risk(section.core_points, &section.input);
    (StatusCode::OK, Json(result)).into_response()
}

fn service_error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::Validation { section, source } => {
            return validation_response(Some(*section), source);
        }
        AssessmentServiceError::ConsentRequired | AssessmentServiceError::EmptySubmission => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_))
        | AssessmentServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Json(request): Json<AssessmentRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.submit(request) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.get(&AssessmentId(assessment_id)) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn export_handler<R>(State(service): State<Arc<AssessmentService<R>>>) -> Response
where
    R: AssessmentRepository + 'static,
{
    let mut buffer = Vec::new();
    match service.export_csv(&mut buffer) {
        Ok(_) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            buffer,
        )
            .into_response(),
        Err(error) => service_error_response(error),
    }
}
