use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Holland code personality dimensions used to describe both students and careers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiasecDimension {
    #[serde(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    Conventional,
}

impl RiasecDimension {
    pub const fn ordered() -> [RiasecDimension; 6] {
        [
            RiasecDimension::Realistic,
            RiasecDimension::Investigative,
            RiasecDimension::Artistic,
            RiasecDimension::Social,
            RiasecDimension::Enterprising,
            RiasecDimension::Conventional,
        ]
    }

    pub const fn letter(self) -> char {
        match self {
            RiasecDimension::Realistic => 'R',
            RiasecDimension::Investigative => 'I',
            RiasecDimension::Artistic => 'A',
            RiasecDimension::Social => 'S',
            RiasecDimension::Enterprising => 'E',
            RiasecDimension::Conventional => 'C',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'R' => Some(RiasecDimension::Realistic),
            'I' => Some(RiasecDimension::Investigative),
            'A' => Some(RiasecDimension::Artistic),
            'S' => Some(RiasecDimension::Social),
            'E' => Some(RiasecDimension::Enterprising),
            'C' => Some(RiasecDimension::Conventional),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiasecDimension::Realistic => "Realistic",
            RiasecDimension::Investigative => "Investigative",
            RiasecDimension::Artistic => "Artistic",
            RiasecDimension::Social => "Social",
            RiasecDimension::Enterprising => "Enterprising",
            RiasecDimension::Conventional => "Conventional",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            RiasecDimension::Realistic => "hands-on, practical",
            RiasecDimension::Investigative => "analytical, research-oriented",
            RiasecDimension::Artistic => "creative, expressive",
            RiasecDimension::Social => "helping, people-focused",
            RiasecDimension::Enterprising => "leadership, business-minded",
            RiasecDimension::Conventional => "organized, detail-oriented",
        }
    }

    /// Personality questions (v_01..v_14) that feed this dimension.
    pub const fn questions(self) -> &'static [&'static str] {
        match self {
            RiasecDimension::Realistic => &["v_01", "v_08"],
            RiasecDimension::Investigative => &["v_03", "v_09", "v_14"],
            RiasecDimension::Artistic => &["v_05", "v_10"],
            RiasecDimension::Social => &["v_04", "v_12"],
            RiasecDimension::Enterprising => &["v_06", "v_13"],
            RiasecDimension::Conventional => &["v_02", "v_07", "v_11"],
        }
    }
}

impl fmt::Display for RiasecDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Index of a career inside the catalog arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CareerId(pub(crate) usize);

/// Immutable catalog entry describing one career path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: String,
    pub name: String,
    pub bucket: String,
    pub primary_subjects: BTreeSet<String>,
    pub riasec_weights: BTreeMap<RiasecDimension, f64>,
    pub long_duration_degree: bool,
    pub vocational: bool,
    pub match_keywords: BTreeSet<String>,
    pub study_path: Vec<String>,
}

/// Stable question identifiers, e.g. `v_03` or `e_12`.
pub type QuestionId = String;

/// Typed answer to one of the educational/context questions (e_01..e_15).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EduAnswer {
    Choice(ChoiceAnswer),
    Text(String),
    Flag(Option<bool>),
    Grade(Option<f64>),
}

impl EduAnswer {
    pub fn as_text(&self) -> &str {
        match self {
            EduAnswer::Text(text) => text,
            _ => "",
        }
    }
}

/// Closed answer sets for the enum-valued questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "question", content = "answer", rename_all = "snake_case")]
pub enum ChoiceAnswer {
    Stream(Stream),
    ClassRank(ClassRank),
    VocationalPreference(VocationalPreference),
    WorkSetting(WorkSetting),
    LongStudyWillingness(LongStudyWillingness),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    SciencePcm,
    SciencePcb,
    Commerce,
    Humanities,
    Vocational,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassRank {
    Top1,
    Top5,
    Top10,
    Average,
    BelowAverage,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocationalPreference {
    YesDefinitely,
    Maybe,
    No,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkSetting {
    Office,
    Outdoors,
    Lab,
    Studio,
    Flexible,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongStudyWillingness {
    Yes,
    Maybe,
    No,
    Unspecified,
}

/// Fully normalized assessment; every v_* and e_* key is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub riasec_answers: BTreeMap<QuestionId, u8>,
    pub edu_stats: BTreeMap<QuestionId, EduAnswer>,
    pub subjects_taken: BTreeSet<String>,
    pub subject_grades: BTreeMap<String, f64>,
    pub extracurriculars: Vec<String>,
    pub parent_careers: Vec<String>,
}

impl AssessmentInput {
    pub fn text(&self, question: &str) -> &str {
        self.edu_stats
            .get(question)
            .map(EduAnswer::as_text)
            .unwrap_or("")
    }

    pub fn class_rank(&self) -> ClassRank {
        match self.edu_stats.get("e_05") {
            Some(EduAnswer::Choice(ChoiceAnswer::ClassRank(rank))) => *rank,
            _ => ClassRank::Unspecified,
        }
    }

    pub fn vocational_preference(&self) -> VocationalPreference {
        match self.edu_stats.get("e_09") {
            Some(EduAnswer::Choice(ChoiceAnswer::VocationalPreference(pref))) => *pref,
            _ => VocationalPreference::Unspecified,
        }
    }

    pub fn long_study_willingness(&self) -> LongStudyWillingness {
        match self.edu_stats.get("e_14") {
            Some(EduAnswer::Choice(ChoiceAnswer::LongStudyWillingness(answer))) => *answer,
            _ => LongStudyWillingness::Unspecified,
        }
    }
}

/// Coarse label describing how strongly a recommendation is backed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}
