//! Career matching engine: turns psychometric and academic assessment answers into ranked,
//! explained career recommendations.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

pub use assessment::{
    assessment_router, AssessmentService, AssessmentSubmission, CareerCatalog, EngineConfig,
    ScoringEngine, StudentReport,
};
pub use error::AppError;
