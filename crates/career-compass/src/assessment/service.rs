use std::sync::Arc;

use tracing::warn;

use super::catalog::CareerCatalog;
use super::intake::{normalize, AssessmentSubmission, NormalizedSubmission, ValidationError};
use super::report::{build_report, StudentReport};
use super::scoring::{CareerScore, ScoringEngine};

/// Service composing the answer normalizer, scoring engine, and report builder.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    engine: Arc<ScoringEngine>,
}

impl AssessmentService {
    pub fn new(engine: Arc<ScoringEngine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn catalog(&self) -> &CareerCatalog {
        self.engine.catalog()
    }

    /// Score a submission and render the student report.
    pub fn assess(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<StudentReport, ValidationError> {
        let NormalizedSubmission { metadata, input } = validated(submission)?;
        let outcome = self.engine.score(&input);
        Ok(build_report(metadata, &input, &outcome, self.engine.catalog()))
    }

    /// Every career's sub-scores and adjustments, in rank order.
    pub fn breakdown(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<Vec<CareerScore>, ValidationError> {
        let NormalizedSubmission { input, .. } = validated(submission)?;
        Ok(self.engine.score(&input).careers)
    }
}

fn validated(submission: AssessmentSubmission) -> Result<NormalizedSubmission, ValidationError> {
    normalize(submission).map_err(|error| {
        warn!(%error, "rejected assessment submission");
        error
    })
}
