//! Career assessment pipeline: answer normalization, career scoring, and report rendering.

pub mod catalog;
pub mod domain;
pub mod intake;
pub(crate) mod keywords;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CareerCatalog, CatalogError};
pub use domain::{
    AssessmentInput, Career, CareerId, ChoiceAnswer, ClassRank, Confidence, EduAnswer,
    LongStudyWillingness, QuestionId, RiasecDimension, Stream, VocationalPreference,
    WorkSetting,
};
pub use intake::{
    normalize, AssessmentSubmission, NormalizedSubmission, StudentMetadata, ValidationError,
};
pub use keywords::KeywordError;
pub use report::{build_report, CareerBucketView, CareerMatchView, StudentReport};
pub use router::{assessment_router, CareerSummaryView};
pub use scoring::{
    Adjustment, CareerScore, EngineConfig, RankedBucket, RiasecProfile, ScoringEngine,
    ScoringOutcome, Signal, SubjectScore,
};
pub use service::AssessmentService;
