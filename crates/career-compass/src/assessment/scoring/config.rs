use serde::{Deserialize, Serialize};

/// Weights, signal deltas, and ranking limits used by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub riasec_weight: f64,
    pub subject_weight: f64,
    pub practical_weight: f64,
    pub context_weight: f64,
    pub neutral_subject_score: f64,
    pub rejected_job_penalty: i32,
    pub enjoyed_activity_bonus: i32,
    pub class_rank_bonus: i32,
    pub class_rank_penalty: i32,
    pub family_support_bonus: i32,
    pub family_opposition_penalty: i32,
    pub vocational_bonus: i32,
    pub vocational_penalty: i32,
    pub long_study_penalty: i32,
    pub dream_career_bonus: i32,
    pub competitive_buckets: Vec<String>,
    pub high_confidence_threshold: u8,
    pub medium_confidence_threshold: u8,
    pub top_buckets: usize,
    pub careers_per_bucket: usize,
}

impl EngineConfig {
    pub fn standard() -> Self {
        Self {
            riasec_weight: 0.4,
            subject_weight: 0.3,
            practical_weight: 0.2,
            context_weight: 0.1,
            neutral_subject_score: 50.0,
            rejected_job_penalty: -50,
            enjoyed_activity_bonus: 10,
            class_rank_bonus: 5,
            class_rank_penalty: -10,
            family_support_bonus: 15,
            family_opposition_penalty: -20,
            vocational_bonus: 25,
            vocational_penalty: -25,
            long_study_penalty: -30,
            dream_career_bonus: 20,
            competitive_buckets: vec![
                "Healthcare".to_string(),
                "Core Tech".to_string(),
                "Law".to_string(),
            ],
            high_confidence_threshold: 75,
            medium_confidence_threshold: 50,
            top_buckets: 5,
            careers_per_bucket: 3,
        }
    }

    pub fn is_competitive(&self, bucket: &str) -> bool {
        self.competitive_buckets
            .iter()
            .any(|name| name.eq_ignore_ascii_case(bucket))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::standard()
    }
}
