use career_compass::assessment::{AssessmentService, CareerCatalog, ScoringEngine};
use career_compass::config::ScoringConfig;
use career_compass::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the catalog at `path`, or the bundled catalog when no path is configured.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<CareerCatalog, AppError> {
    let catalog = match path {
        Some(path) => CareerCatalog::from_path(path)?,
        None => CareerCatalog::standard()?,
    };
    Ok(catalog)
}

pub(crate) fn assessment_service(
    catalog: CareerCatalog,
    scoring: &ScoringConfig,
) -> Result<AssessmentService, AppError> {
    let engine = ScoringEngine::new(Arc::new(catalog), scoring.engine_config())?;
    Ok(AssessmentService::new(Arc::new(engine)))
}
