use std::collections::BTreeMap;

use serde::Serialize;

use super::super::domain::Confidence;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatchView {
    pub career_name: String,
    pub match_score: u8,
    pub top_reasons: Vec<String>,
    pub study_path: Vec<String>,
    pub first3_steps: Vec<String>,
    pub confidence: Confidence,
    pub what_would_change_recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerBucketView {
    pub bucket_name: String,
    pub bucket_score: u8,
    pub top_careers: Vec<CareerMatchView>,
}

/// Student-facing report handed to the PDF and email services.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    pub grade: u8,
    pub board: String,
    pub vibe_scores: BTreeMap<String, u8>,
    pub edu_stats: BTreeMap<String, u8>,
    pub extracurriculars: Vec<String>,
    pub parents: Vec<String>,
    pub top5_buckets: Vec<CareerBucketView>,
    pub summary_paragraph: String,
}
