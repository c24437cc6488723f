use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::context::{FamilyLexicon, FamilyStatement};
use crate::assessment::catalog::CareerMatchers;
use crate::assessment::domain::{AssessmentInput, Career};
use crate::assessment::keywords::TokenizedText;

/// Answer signal that produced an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    EnjoyedActivities,
    RejectedJobs,
    ClassRank,
    FamilySupport,
    FamilyOpposition,
    VocationalPreference,
    LongStudy,
    DreamCareer,
}

/// Signed contribution from a single rule, kept for reasons and audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub signal: Signal,
    pub delta: i32,
    pub reason: String,
}

/// Free-text answers tokenized once per scoring run.
#[derive(Debug, Clone, Default)]
pub(crate) struct AnswerSignals {
    pub(crate) enjoyed: TokenizedText,
    pub(crate) rejected: TokenizedText,
    pub(crate) dream: TokenizedText,
    pub(crate) family: FamilyStatement,
}

impl AnswerSignals {
    pub(crate) fn from_input(input: &AssessmentInput, lexicon: &FamilyLexicon) -> Self {
        Self {
            enjoyed: TokenizedText::new(input.text("e_12")),
            rejected: TokenizedText::new(input.text("e_13")),
            dream: TokenizedText::new(input.text("e_15")),
            family: lexicon.read(input.text("e_08")),
        }
    }
}

/// Everything a rule may look at for one career.
pub(crate) struct RuleInput<'a> {
    pub(crate) career: &'a Career,
    pub(crate) matchers: &'a CareerMatchers,
    pub(crate) input: &'a AssessmentInput,
    pub(crate) signals: &'a AnswerSignals,
    pub(crate) config: &'a EngineConfig,
}

pub(crate) type Rule = fn(&RuleInput<'_>) -> Option<Adjustment>;

/// Applies every rule in order, returning the adjustments that fired and their sum.
pub(crate) fn apply_rules(rules: &[Rule], rule_input: &RuleInput<'_>) -> (Vec<Adjustment>, i32) {
    rules
        .iter()
        .filter_map(|rule| rule(rule_input))
        .fold((Vec::new(), 0), |(mut adjustments, total), adjustment| {
            let total = total + adjustment.delta;
            adjustments.push(adjustment);
            (adjustments, total)
        })
}
