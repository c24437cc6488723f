//! Human-readable reasons, next steps, and summary text derived from a scored career.

use super::super::catalog::CareerCatalog;
use super::super::domain::{AssessmentInput, Career, RiasecDimension};
use super::super::keywords::{display_subject, TokenizedText};
use super::super::scoring::{CareerScore, RankedBucket, RiasecProfile, Signal};

const MAX_REASONS: usize = 3;
const STUDY_PATH_STEPS: usize = 3;
const STRONG_TRAIT: f64 = 60.0;
const STRONG_SUBJECT: f64 = 75.0;
const WEAK_SUBJECT: f64 = 60.0;

pub(crate) fn top_reasons(
    score: &CareerScore,
    career: &Career,
    catalog: &CareerCatalog,
    profile: &RiasecProfile,
    input: &AssessmentInput,
) -> Vec<String> {
    let mut reasons = Vec::new();

    let mut traits: Vec<(RiasecDimension, f64)> = career
        .riasec_weights
        .iter()
        .map(|(dimension, weight)| (*dimension, *weight))
        .collect();
    traits.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (dimension, _) in traits {
        let value = profile.dimension(dimension);
        if value >= STRONG_TRAIT {
            reasons.push(format!(
                "High {} score ({}%): you like {} activities.",
                dimension.label(),
                value.round() as u8,
                dimension.description()
            ));
        }
    }

    for subject in &career.primary_subjects {
        if let Some(grade) = input.subject_grades.get(subject) {
            if *grade > STRONG_SUBJECT {
                reasons.push(format!(
                    "Strong result in {} ({}%).",
                    display_subject(subject),
                    grade.round() as u8
                ));
            }
        }
    }

    reasons.extend(
        score
            .adjustments
            .iter()
            .filter(|adjustment| adjustment.delta > 0)
            .map(|adjustment| adjustment.reason.clone()),
    );

    let matchers = catalog.matchers(score.career);
    for activity in &input.extracurriculars {
        if matchers.topical.matches(&TokenizedText::new(activity)) {
            reasons.push(format!("Your involvement in {activity} builds relevant experience."));
        }
    }

    for parent in &input.parent_careers {
        let text = TokenizedText::new(parent);
        let same_bucket = catalog.careers().any(|(id, other)| {
            other.bucket == career.bucket && catalog.matchers(id).topical.matches(&text)
        });
        if same_bucket {
            reasons.push(format!(
                "Family experience as {parent} gives you insight into {}.",
                career.bucket
            ));
        }
    }

    if reasons.is_empty() {
        reasons.push(format!(
            "Balanced fit between your personality profile and {}.",
            career.name
        ));
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

pub(crate) fn study_path(career: &Career) -> Vec<String> {
    career
        .study_path
        .iter()
        .take(STUDY_PATH_STEPS)
        .cloned()
        .collect()
}

pub(crate) fn first_steps(career: &Career) -> Vec<String> {
    vec![
        format!("Explore {} through an introductory online course.", career.name),
        format!(
            "Talk to a working {} about what their day looks like.",
            career.name
        ),
        format!(
            "Start a small {} project and keep notes on what you learn.",
            career.bucket
        ),
    ]
}

pub(crate) fn what_would_change(
    score: &CareerScore,
    career: &Career,
    input: &AssessmentInput,
) -> String {
    if score.subject_score.is_disqualified() {
        let subjects: Vec<String> = career
            .primary_subjects
            .iter()
            .map(|subject| display_subject(subject))
            .collect();
        return format!(
            "Taking one of {} would open up {}.",
            subjects.join(", "),
            career.name
        );
    }

    if score
        .adjustments
        .iter()
        .any(|adjustment| adjustment.signal == Signal::RejectedJobs)
    {
        return format!(
            "You ruled out work like this; revisit {} if your interests change.",
            career.name
        );
    }

    let weakest = career
        .primary_subjects
        .iter()
        .filter_map(|subject| input.subject_grades.get(subject).map(|grade| (subject, *grade)))
        .filter(|(_, grade)| *grade < WEAK_SUBJECT)
        .min_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((subject, _)) = weakest {
        return format!(
            "Raising your {} grade above {} would strengthen this match.",
            display_subject(subject),
            WEAK_SUBJECT as u8
        );
    }

    format!(
        "Hands-on experience in {} through an internship or volunteering would raise your confidence.",
        career.bucket
    )
}

pub(crate) fn summary_paragraph(
    student_name: Option<&str>,
    profile: &RiasecProfile,
    buckets: &[RankedBucket<CareerScore>],
) -> String {
    let Some(top) = buckets.first() else {
        return "We could not find a strong match yet. Complete the assessment to receive \
                personalised recommendations."
            .to_string();
    };

    let mut dimensions = RiasecDimension::ordered().to_vec();
    dimensions.sort_by(|a, b| {
        profile
            .dimension(*b)
            .total_cmp(&profile.dimension(*a))
            .then_with(|| a.cmp(b))
    });
    let traits = format!("{} and {}", dimensions[0].label(), dimensions[1].label());

    let opening = match student_name {
        Some(name) => format!("{name}'s strongest fit is {}", top.bucket_name),
        None => format!("Your strongest fit is {}", top.bucket_name),
    };
    let lead = match top.careers.first() {
        Some(career) => format!(
            ", led by {} ({}%)",
            career.career_name, career.final_score
        ),
        None => String::new(),
    };

    format!(
        "{opening}{lead}. Your most prominent traits are {traits}. Use the steps below to test \
         these paths before choosing a stream or course."
    )
}
