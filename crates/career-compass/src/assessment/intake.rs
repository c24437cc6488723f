//! Answer normalizer: turns a raw submission into a fully-typed `AssessmentInput`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::domain::{
    AssessmentInput, ChoiceAnswer, ClassRank, EduAnswer, LongStudyWillingness, Stream,
    VocationalPreference, WorkSetting,
};
use super::keywords::canonical_subject;

/// Score assumed for a personality question that was skipped or answered out of range.
pub const NEUTRAL_RIASEC_ANSWER: u8 = 1;
pub const MAX_RIASEC_ANSWER: u8 = 3;
/// School years accepted in the `grade` field.
pub const SCHOOL_GRADES: std::ops::RangeInclusive<u8> = 1..=12;

pub const RIASEC_QUESTIONS: [&str; 14] = [
    "v_01", "v_02", "v_03", "v_04", "v_05", "v_06", "v_07", "v_08", "v_09", "v_10", "v_11",
    "v_12", "v_13", "v_14",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuestionKind {
    Stream,
    ClassRank,
    Vocational,
    WorkSetting,
    LongStudy,
    Text,
    Flag,
    Grade,
}

const EDU_QUESTIONS: [(&str, QuestionKind); 15] = [
    ("e_01", QuestionKind::Stream),
    ("e_02", QuestionKind::Text),
    ("e_03", QuestionKind::Grade),
    ("e_04", QuestionKind::Text),
    ("e_05", QuestionKind::ClassRank),
    ("e_06", QuestionKind::Flag),
    ("e_07", QuestionKind::Text),
    ("e_08", QuestionKind::Text),
    ("e_09", QuestionKind::Vocational),
    ("e_10", QuestionKind::Flag),
    ("e_11", QuestionKind::WorkSetting),
    ("e_12", QuestionKind::Text),
    ("e_13", QuestionKind::Text),
    ("e_14", QuestionKind::LongStudy),
    ("e_15", QuestionKind::Text),
];

/// Raw submission as received from the submission-handling service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    /// School year; numbers and numeric strings are accepted and checked during normalization.
    #[serde(default)]
    pub grade: Option<Value>,
    #[serde(default)]
    pub board: Option<String>,
    #[serde(default)]
    pub answers: BTreeMap<String, Value>,
    #[serde(default)]
    pub subject_scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub subjects_taken: Vec<String>,
    #[serde(default)]
    pub extracurriculars: Vec<String>,
    #[serde(default)]
    pub parent_careers: Vec<String>,
    #[serde(default)]
    pub study_abroad_preference: Option<bool>,
    #[serde(default)]
    pub work_style_preference: Option<String>,
}

/// Report metadata carried alongside the scored input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentMetadata {
    pub student_name: Option<String>,
    pub school_name: Option<String>,
    pub grade: u8,
    pub board: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSubmission {
    pub metadata: StudentMetadata,
    pub input: AssessmentInput,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("grade is required")]
    MissingGrade,
    #[error("grade must be a whole school year between 1 and 12, got {value}")]
    InvalidGrade { value: String },
    #[error("board is required")]
    MissingBoard,
}

pub fn normalize(submission: AssessmentSubmission) -> Result<NormalizedSubmission, ValidationError> {
    let grade = school_grade(submission.grade.as_ref())?;
    let board = submission
        .board
        .as_deref()
        .map(str::trim)
        .filter(|board| !board.is_empty())
        .ok_or(ValidationError::MissingBoard)?
        .to_string();

    for key in submission.answers.keys() {
        let known = RIASEC_QUESTIONS.contains(&key.as_str())
            || EDU_QUESTIONS.iter().any(|(id, _)| id == key);
        if !known {
            debug!(question = %key, "ignoring unknown answer key");
        }
    }

    let riasec_answers = RIASEC_QUESTIONS
        .iter()
        .map(|id| {
            let score = submission
                .answers
                .get(*id)
                .and_then(riasec_value)
                .unwrap_or(NEUTRAL_RIASEC_ANSWER);
            (id.to_string(), score)
        })
        .collect();

    let edu_stats = EDU_QUESTIONS
        .iter()
        .map(|(id, kind)| {
            let answer = submission.answers.get(*id);
            let value = match (*id, answer) {
                ("e_10", None) => EduAnswer::Flag(submission.study_abroad_preference),
                ("e_11", None) => edu_answer(
                    *kind,
                    submission
                        .work_style_preference
                        .as_ref()
                        .map(|style| Value::String(style.clone()))
                        .as_ref(),
                ),
                _ => edu_answer(*kind, answer),
            };
            (id.to_string(), value)
        })
        .collect();

    let subject_grades = subject_grades(&submission.subject_scores);

    let subjects_taken: BTreeSet<String> = submission
        .subjects_taken
        .iter()
        .map(|subject| canonical_subject(subject))
        .filter(|subject| !subject.is_empty())
        .chain(subject_grades.keys().cloned())
        .collect();

    Ok(NormalizedSubmission {
        metadata: StudentMetadata {
            student_name: non_blank(submission.user_name),
            school_name: non_blank(submission.school_name),
            grade,
            board,
        },
        input: AssessmentInput {
            riasec_answers,
            edu_stats,
            subjects_taken,
            subject_grades,
            extracurriculars: clean_list(submission.extracurriculars),
            parent_careers: clean_list(submission.parent_careers),
        },
    })
}

fn school_grade(value: Option<&Value>) -> Result<u8, ValidationError> {
    let raw = match value {
        None | Some(Value::Null) => return Err(ValidationError::MissingGrade),
        Some(Value::String(text)) if text.trim().is_empty() => {
            return Err(ValidationError::MissingGrade)
        }
        Some(value) => value,
    };

    let number = match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number
        .filter(|grade| grade.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(grade))
        .map(|grade| grade as u8)
        .filter(|grade| SCHOOL_GRADES.contains(grade))
        .ok_or_else(|| ValidationError::InvalidGrade {
            value: raw.to_string(),
        })
}

/// Canonical subject grades; aliases of one subject (`Maths`, `Mathematics`) are averaged.
fn subject_grades(scores: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (subject, grade) in scores {
        let canonical = canonical_subject(subject);
        if canonical.is_empty() || !grade.is_finite() {
            continue;
        }
        grouped
            .entry(canonical)
            .or_default()
            .push(grade.clamp(0.0, 100.0));
    }

    grouped
        .into_iter()
        .map(|(subject, grades)| {
            if grades.len() > 1 {
                debug!(
                    subject = %subject,
                    entries = grades.len(),
                    "averaging duplicate subject grades"
                );
            }
            let average = grades.iter().sum::<f64>() / grades.len() as f64;
            (subject, average)
        })
        .collect()
}

fn riasec_value(value: &Value) -> Option<u8> {
    let raw = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    let rounded = raw.round();
    if rounded.is_finite() && (0.0..=f64::from(MAX_RIASEC_ANSWER)).contains(&rounded) {
        Some(rounded as u8)
    } else {
        None
    }
}

fn edu_answer(kind: QuestionKind, value: Option<&Value>) -> EduAnswer {
    match kind {
        QuestionKind::Text => EduAnswer::Text(text_value(value)),
        QuestionKind::Flag => EduAnswer::Flag(value.and_then(flag_value)),
        QuestionKind::Grade => EduAnswer::Grade(value.and_then(grade_value)),
        QuestionKind::Stream => EduAnswer::Choice(ChoiceAnswer::Stream(
            match choice_key(value).as_str() {
                "sciencepcm" | "pcm" => Stream::SciencePcm,
                "sciencepcb" | "pcb" => Stream::SciencePcb,
                "commerce" => Stream::Commerce,
                "humanities" | "arts" => Stream::Humanities,
                "vocational" => Stream::Vocational,
                _ => Stream::Unspecified,
            },
        )),
        QuestionKind::ClassRank => EduAnswer::Choice(ChoiceAnswer::ClassRank(
            match choice_key(value).as_str() {
                "top1" => ClassRank::Top1,
                "top5" => ClassRank::Top5,
                "top10" => ClassRank::Top10,
                "average" => ClassRank::Average,
                "belowaverage" => ClassRank::BelowAverage,
                _ => ClassRank::Unspecified,
            },
        )),
        QuestionKind::Vocational => EduAnswer::Choice(ChoiceAnswer::VocationalPreference(
            match choice_key(value).as_str() {
                "yesdefinitely" | "definitely" | "yes" => VocationalPreference::YesDefinitely,
                "maybe" | "notsure" => VocationalPreference::Maybe,
                "no" | "notreally" => VocationalPreference::No,
                _ => VocationalPreference::Unspecified,
            },
        )),
        QuestionKind::WorkSetting => EduAnswer::Choice(ChoiceAnswer::WorkSetting(
            match choice_key(value).as_str() {
                "office" => WorkSetting::Office,
                "outdoors" | "outdoor" | "field" => WorkSetting::Outdoors,
                "lab" | "laboratory" => WorkSetting::Lab,
                "studio" => WorkSetting::Studio,
                "flexible" | "remote" | "hybrid" => WorkSetting::Flexible,
                _ => WorkSetting::Unspecified,
            },
        )),
        QuestionKind::LongStudy => EduAnswer::Choice(ChoiceAnswer::LongStudyWillingness(
            match choice_key(value).as_str() {
                "yes" | "yesdefinitely" => LongStudyWillingness::Yes,
                "maybe" | "notsure" => LongStudyWillingness::Maybe,
                "no" => LongStudyWillingness::No,
                _ => LongStudyWillingness::Unspecified,
            },
        )),
    }
}

/// Lowercase alphanumerics only, so `"Yes, definitely"` and `"yes definitely"` compare equal.
fn choice_key(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect(),
        _ => String::new(),
    }
}

fn text_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

fn flag_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Some(true),
            "no" | "n" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn grade_value(value: &Value) -> Option<f64> {
    let raw = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().trim_end_matches('%').trim().parse::<f64>().ok()?,
        _ => return None,
    };
    raw.is_finite().then(|| raw.clamp(0.0, 100.0))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
