mod narrative;
mod views;

pub use views::{CareerBucketView, CareerMatchView, StudentReport};

use super::catalog::CareerCatalog;
use super::domain::AssessmentInput;
use super::intake::StudentMetadata;
use super::keywords::display_subject;
use super::scoring::{CareerScore, ScoringOutcome};

/// Builds the student-facing report from a scoring outcome. Scores and confidence labels are
/// copied verbatim from the engine.
pub fn build_report(
    metadata: StudentMetadata,
    input: &AssessmentInput,
    outcome: &ScoringOutcome,
    catalog: &CareerCatalog,
) -> StudentReport {
    let top5_buckets = outcome
        .buckets
        .iter()
        .map(|bucket| CareerBucketView {
            bucket_name: bucket.bucket_name.clone(),
            bucket_score: bucket.bucket_score,
            top_careers: bucket
                .careers
                .iter()
                .map(|score| career_view(score, catalog, outcome, input))
                .collect(),
        })
        .collect();

    let edu_stats = input
        .subject_grades
        .iter()
        .map(|(subject, grade)| (display_subject(subject), grade.round() as u8))
        .collect();

    let summary_paragraph = narrative::summary_paragraph(
        metadata.student_name.as_deref(),
        &outcome.profile,
        &outcome.buckets,
    );

    StudentReport {
        student_name: metadata.student_name,
        school_name: metadata.school_name,
        grade: metadata.grade,
        board: metadata.board,
        vibe_scores: outcome.profile.vibe_scores(),
        edu_stats,
        extracurriculars: input.extracurriculars.clone(),
        parents: input.parent_careers.clone(),
        top5_buckets,
        summary_paragraph,
    }
}

fn career_view(
    score: &CareerScore,
    catalog: &CareerCatalog,
    outcome: &ScoringOutcome,
    input: &AssessmentInput,
) -> CareerMatchView {
    let career = catalog.get(score.career);
    CareerMatchView {
        career_name: score.career_name.clone(),
        match_score: score.final_score,
        top_reasons: narrative::top_reasons(score, career, catalog, &outcome.profile, input),
        study_path: narrative::study_path(career),
        first3_steps: narrative::first_steps(career),
        confidence: score.confidence,
        what_would_change_recommendation: narrative::what_would_change(score, career, input),
    }
}
