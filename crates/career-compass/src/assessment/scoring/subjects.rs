use serde::Serialize;

use super::config::EngineConfig;
use crate::assessment::domain::{AssessmentInput, Career};

/// Academic fit for one career; `Disqualified` contributes zero to the weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "score", rename_all = "snake_case")]
pub enum SubjectScore {
    Scored(f64),
    Disqualified,
}

impl SubjectScore {
    pub fn value(self) -> f64 {
        match self {
            SubjectScore::Scored(score) => score,
            SubjectScore::Disqualified => 0.0,
        }
    }

    pub fn is_disqualified(self) -> bool {
        matches!(self, SubjectScore::Disqualified)
    }
}

pub(crate) fn evaluate(
    career: &Career,
    input: &AssessmentInput,
    config: &EngineConfig,
) -> SubjectScore {
    if career.primary_subjects.is_empty() {
        return SubjectScore::Scored(config.neutral_subject_score);
    }

    // A student who reported no subjects at all is never filtered out.
    if !input.subjects_taken.is_empty()
        && career.primary_subjects.is_disjoint(&input.subjects_taken)
    {
        return SubjectScore::Disqualified;
    }

    let grades: Vec<f64> = career
        .primary_subjects
        .iter()
        .filter(|subject| input.subjects_taken.contains(*subject))
        .filter_map(|subject| input.subject_grades.get(subject).copied())
        .collect();

    if grades.is_empty() {
        return SubjectScore::Scored(config.neutral_subject_score);
    }

    let mean = grades.iter().sum::<f64>() / grades.len() as f64;
    SubjectScore::Scored(mean.clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::RiasecDimension;
    use std::collections::{BTreeMap, BTreeSet};

    fn career(subjects: &[&str]) -> Career {
        Career {
            id: "x".to_string(),
            name: "Doctor".to_string(),
            bucket: "Healthcare".to_string(),
            primary_subjects: subjects.iter().map(|s| s.to_string()).collect(),
            riasec_weights: BTreeMap::from([(RiasecDimension::Investigative, 1.0)]),
            long_duration_degree: true,
            vocational: false,
            match_keywords: BTreeSet::new(),
            study_path: Vec::new(),
        }
    }

    fn input(grades: &[(&str, f64)], extra_taken: &[&str]) -> AssessmentInput {
        let subject_grades: BTreeMap<String, f64> = grades
            .iter()
            .map(|(subject, grade)| (subject.to_string(), *grade))
            .collect();
        let subjects_taken = subject_grades
            .keys()
            .cloned()
            .chain(extra_taken.iter().map(|s| s.to_string()))
            .collect();
        AssessmentInput {
            riasec_answers: BTreeMap::new(),
            edu_stats: BTreeMap::new(),
            subjects_taken,
            subject_grades,
            extracurriculars: Vec::new(),
            parent_careers: Vec::new(),
        }
    }

    #[test]
    fn disjoint_subjects_disqualify() {
        let score = evaluate(
            &career(&["biology"]),
            &input(&[("mathematics", 90.0)], &[]),
            &EngineConfig::standard(),
        );
        assert_eq!(score, SubjectScore::Disqualified);
        assert_eq!(score.value(), 0.0);
    }

    #[test]
    fn averages_grades_of_taken_primary_subjects() {
        let score = evaluate(
            &career(&["biology", "chemistry", "physics"]),
            &input(&[("physics", 85.0), ("chemistry", 75.0), ("mathematics", 10.0)], &[]),
            &EngineConfig::standard(),
        );
        assert_eq!(score, SubjectScore::Scored(80.0));
    }

    #[test]
    fn taken_subjects_without_grades_are_neutral() {
        let score = evaluate(
            &career(&["biology"]),
            &input(&[], &["biology"]),
            &EngineConfig::standard(),
        );
        assert_eq!(score, SubjectScore::Scored(50.0));
    }

    #[test]
    fn careers_without_required_subjects_are_neutral() {
        let score = evaluate(
            &career(&[]),
            &input(&[("mathematics", 95.0)], &[]),
            &EngineConfig::standard(),
        );
        assert_eq!(score, SubjectScore::Scored(50.0));
    }

    #[test]
    fn missing_academic_data_never_disqualifies() {
        let score = evaluate(&career(&["biology"]), &input(&[], &[]), &EngineConfig::standard());
        assert_eq!(score, SubjectScore::Scored(50.0));
    }
}
