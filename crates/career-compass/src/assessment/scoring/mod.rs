//! Career matching engine.
//!
//! `final = 0.4 * riasec + 0.3 * subject + 0.2 * 100 + 0.1 * 100 + practical + context`,
//! clamped to 0..=100. Practical and context start at full marks and are moved by the signed
//! adjustments their rule tables produce.

mod config;
mod context;
mod practical;
mod ranking;
mod riasec;
mod rules;
mod subjects;

pub use config::EngineConfig;
pub use ranking::RankedBucket;
pub use riasec::RiasecProfile;
pub use rules::{Adjustment, Signal};
pub use subjects::SubjectScore;

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::catalog::CareerCatalog;
use super::domain::{AssessmentInput, CareerId, Confidence};
use super::keywords::KeywordError;
use context::FamilyLexicon;
use ranking::{Components, Ranked};
use rules::{apply_rules, AnswerSignals, RuleInput};

/// Per-career breakdown produced by one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerScore {
    #[serde(skip)]
    pub career: CareerId,
    pub career_name: String,
    pub bucket: String,
    pub riasec_score: f64,
    pub subject_score: SubjectScore,
    pub practical_adjustment: i32,
    pub context_adjustment: i32,
    pub adjustments: Vec<Adjustment>,
    pub final_score: u8,
    pub confidence: Confidence,
}

impl Ranked for CareerScore {
    fn rank_score(&self) -> u8 {
        self.final_score
    }

    fn rank_name(&self) -> &str {
        &self.career_name
    }

    fn bucket_name(&self) -> &str {
        &self.bucket
    }
}

/// Every career ranked, plus the buckets selected for the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringOutcome {
    pub profile: RiasecProfile,
    pub careers: Vec<CareerScore>,
    pub buckets: Vec<RankedBucket<CareerScore>>,
}

/// Stateless engine over an immutable catalog.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<CareerCatalog>,
    config: EngineConfig,
    family: FamilyLexicon,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<CareerCatalog>, config: EngineConfig) -> Result<Self, KeywordError> {
        Ok(Self {
            catalog,
            config,
            family: FamilyLexicon::compile()?,
        })
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn score(&self, input: &AssessmentInput) -> ScoringOutcome {
        let profile = RiasecProfile::from_answers(&input.riasec_answers);
        let signals = AnswerSignals::from_input(input, &self.family);

        let mut careers: Vec<CareerScore> = self
            .catalog
            .careers()
            .map(|(id, career)| {
                let rule_input = RuleInput {
                    career,
                    matchers: self.catalog.matchers(id),
                    input,
                    signals: &signals,
                    config: &self.config,
                };

                let riasec_score = profile.alignment(&career.riasec_weights);
                let subject_score = subjects::evaluate(career, input, &self.config);
                let (mut adjustments, practical_adjustment) =
                    apply_rules(&practical::PRACTICAL_RULES, &rule_input);
                let (context_adjustments, context_adjustment) =
                    apply_rules(&context::CONTEXT_RULES, &rule_input);
                adjustments.extend(context_adjustments);

                let components = Components {
                    riasec: riasec_score,
                    subject: subject_score,
                    practical: practical_adjustment,
                    context: context_adjustment,
                };
                let final_score = ranking::final_score(&components, &self.config);

                debug!(
                    career = %career.name,
                    riasec = riasec_score,
                    subject = subject_score.value(),
                    practical = practical_adjustment,
                    context = context_adjustment,
                    final_score,
                    "career scored"
                );

                CareerScore {
                    career: id,
                    career_name: career.name.clone(),
                    bucket: career.bucket.clone(),
                    riasec_score,
                    subject_score,
                    practical_adjustment,
                    context_adjustment,
                    adjustments,
                    final_score,
                    confidence: ranking::confidence(final_score, &self.config),
                }
            })
            .collect();

        careers.sort_by(ranking::rank_order);
        let buckets = ranking::select_buckets(&careers, &self.config);

        ScoringOutcome {
            profile,
            careers,
            buckets,
        }
    }
}
