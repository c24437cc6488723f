use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{Career, RiasecDimension};
use super::intake::AssessmentSubmission;
use super::service::AssessmentService;

/// Router builder exposing scoring and catalog endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessments/score", post(score_handler))
        .route("/api/v1/assessments/breakdown", post(breakdown_handler))
        .route("/api/v1/careers", get(careers_handler))
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response {
    match service.assess(submission) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => bad_request(error.to_string()),
    }
}

pub(crate) async fn breakdown_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response {
    match service.breakdown(submission) {
        Ok(careers) => (StatusCode::OK, axum::Json(careers)).into_response(),
        Err(error) => bad_request(error.to_string()),
    }
}

/// Catalog entry as exposed to admin views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSummaryView {
    pub career_id: String,
    pub career_name: String,
    pub bucket: String,
    pub riasec: String,
    pub primary_subjects: Vec<String>,
    pub long_duration_degree: bool,
    pub vocational: bool,
}

impl From<&Career> for CareerSummaryView {
    fn from(career: &Career) -> Self {
        let mut dimensions: Vec<(&RiasecDimension, &f64)> = career.riasec_weights.iter().collect();
        dimensions.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));

        Self {
            career_id: career.id.clone(),
            career_name: career.name.clone(),
            bucket: career.bucket.clone(),
            riasec: dimensions
                .into_iter()
                .map(|(dimension, _)| dimension.letter())
                .collect(),
            primary_subjects: career.primary_subjects.iter().cloned().collect(),
            long_duration_degree: career.long_duration_degree,
            vocational: career.vocational,
        }
    }
}

pub(crate) async fn careers_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    let careers: Vec<CareerSummaryView> = service
        .catalog()
        .careers()
        .map(|(_, career)| CareerSummaryView::from(career))
        .collect();
    (StatusCode::OK, axum::Json(careers)).into_response()
}

fn bad_request(message: String) -> Response {
    let payload = json!({
        "error": message,
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}
