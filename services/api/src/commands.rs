use crate::infra::{assessment_service, load_catalog};
use career_compass::assessment::{AssessmentSubmission, CareerCatalog, CareerSummaryView};
use career_compass::config::AppConfig;
use career_compass::error::AppError;
use clap::Args;
use std::fmt::Write as _;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Catalog CSV to use instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Submission JSON file, or `-` for stdin
    #[arg(long)]
    pub(crate) input: PathBuf,
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Print every career's score breakdown instead of the student report
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog_path = args.catalog.catalog.or(config.catalog.path);
    let catalog = load_catalog(catalog_path.as_deref())?;
    let service = assessment_service(catalog, &config.scoring)?;

    let submission = read_submission(&args.input)?;
    let rendered = if args.breakdown {
        serde_json::to_string_pretty(&service.breakdown(submission)?)?
    } else {
        serde_json::to_string_pretty(&service.assess(submission)?)?
    };

    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_catalog_validate(path: PathBuf) -> Result<(), AppError> {
    let catalog = load_catalog(Some(path.as_path()))?;
    println!("{} is valid", path.display());
    print!("{}", render_bucket_summary(&catalog));
    Ok(())
}

pub(crate) fn run_catalog_list(args: CatalogArgs) -> Result<(), AppError> {
    let path = match args.catalog {
        Some(path) => Some(path),
        None => AppConfig::load()?.catalog.path,
    };
    let catalog = load_catalog(path.as_deref())?;
    print!("{}", render_career_list(&catalog));
    Ok(())
}

fn read_submission(path: &Path) -> Result<AssessmentSubmission, AppError> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

fn render_bucket_summary(catalog: &CareerCatalog) -> String {
    let mut output = format!(
        "{} careers across {} buckets\n",
        catalog.len(),
        catalog.bucket_count()
    );
    for (bucket, careers) in catalog.buckets() {
        let names: Vec<&str> = careers.iter().map(|career| career.name.as_str()).collect();
        let _ = writeln!(output, "  {bucket} ({}): {}", careers.len(), names.join(", "));
    }
    output
}

fn render_career_list(catalog: &CareerCatalog) -> String {
    let mut output = String::new();
    for (_, career) in catalog.careers() {
        let view = CareerSummaryView::from(career);
        let mut flags = Vec::new();
        if view.long_duration_degree {
            flags.push("long study");
        }
        if view.vocational {
            flags.push("vocational");
        }
        let _ = writeln!(
            output,
            "{:<6} {:<26} {:<18} {:<4} {}",
            view.career_id,
            view.career_name,
            view.bucket,
            view.riasec,
            flags.join(", ")
        );
    }
    output
}
