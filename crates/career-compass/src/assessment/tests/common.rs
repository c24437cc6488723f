use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::assessment::intake::RIASEC_QUESTIONS;
use crate::assessment::{
    normalize, AssessmentInput, AssessmentService, AssessmentSubmission, CareerCatalog,
    CareerScore, EngineConfig, ScoringEngine,
};

pub(super) fn standard_catalog() -> Arc<CareerCatalog> {
    Arc::new(CareerCatalog::standard().expect("bundled catalog loads"))
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(standard_catalog(), EngineConfig::standard()).expect("engine compiles")
}

pub(super) fn service() -> Arc<AssessmentService> {
    Arc::new(AssessmentService::new(Arc::new(engine())))
}

/// Grade 11 CBSE student answering every personality question with 2.
pub(super) fn submission() -> AssessmentSubmission {
    let answers = RIASEC_QUESTIONS
        .iter()
        .map(|id| (id.to_string(), json!(2)))
        .collect();
    AssessmentSubmission {
        user_name: Some("Asha".to_string()),
        school_name: Some("Greenfield Public School".to_string()),
        grade: Some(json!(11)),
        board: Some("CBSE".to_string()),
        answers,
        ..AssessmentSubmission::default()
    }
}

pub(super) fn with_answer(
    mut submission: AssessmentSubmission,
    question: &str,
    value: Value,
) -> AssessmentSubmission {
    submission.answers.insert(question.to_string(), value);
    submission
}

/// Strong in maths and physics, rules out coding, dreams of medicine.
pub(super) fn coding_averse_submission() -> AssessmentSubmission {
    let mut submission = submission();
    submission.subject_scores.insert("Mathematics".to_string(), 90.0);
    submission.subject_scores.insert("Physics".to_string(), 85.0);
    let submission = with_answer(submission, "e_13", json!("I hate coding"));
    with_answer(submission, "e_15", json!("doctor"))
}

/// Only biology reported, so every career that needs other subjects is filtered.
pub(super) fn biology_only_submission() -> AssessmentSubmission {
    let mut submission = submission();
    submission.subject_scores.insert("Biology".to_string(), 80.0);
    submission
}

pub(super) fn input(submission: AssessmentSubmission) -> AssessmentInput {
    normalize(submission).expect("submission is valid").input
}

pub(super) fn find<'a>(careers: &'a [CareerScore], name: &str) -> &'a CareerScore {
    careers
        .iter()
        .find(|score| score.career_name == name)
        .unwrap_or_else(|| panic!("{name} is scored"))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
