use std::collections::BTreeMap;

use serde::Serialize;

use crate::assessment::domain::{QuestionId, RiasecDimension};
use crate::assessment::intake::{MAX_RIASEC_ANSWER, NEUTRAL_RIASEC_ANSWER};

/// Student's six dimension averages, rescaled to 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiasecProfile {
    dimensions: BTreeMap<RiasecDimension, f64>,
}

impl RiasecProfile {
    pub fn from_answers(answers: &BTreeMap<QuestionId, u8>) -> Self {
        let dimensions = RiasecDimension::ordered()
            .into_iter()
            .map(|dimension| {
                let questions = dimension.questions();
                let total: f64 = questions
                    .iter()
                    .map(|id| {
                        let score = answers.get(*id).copied().unwrap_or(NEUTRAL_RIASEC_ANSWER);
                        f64::from(score.min(MAX_RIASEC_ANSWER))
                    })
                    .sum();
                let mean = total / questions.len() as f64;
                (dimension, 100.0 * mean / f64::from(MAX_RIASEC_ANSWER))
            })
            .collect();

        Self { dimensions }
    }

    pub fn dimension(&self, dimension: RiasecDimension) -> f64 {
        self.dimensions.get(&dimension).copied().unwrap_or(0.0)
    }

    /// Weighted alignment with a career profile; dimensions the career does not list are ignored.
    pub fn alignment(&self, weights: &BTreeMap<RiasecDimension, f64>) -> f64 {
        let total_weight: f64 = weights.values().sum();
        if total_weight <= 0.0 {
            return 0.0;
        }

        let weighted: f64 = weights
            .iter()
            .map(|(dimension, weight)| self.dimension(*dimension) * weight)
            .sum();

        (weighted / total_weight).clamp(0.0, 100.0)
    }

    /// Rounded per-dimension scores keyed by letter for the report.
    pub fn vibe_scores(&self) -> BTreeMap<String, u8> {
        self.dimensions
            .iter()
            .map(|(dimension, value)| (dimension.letter().to_string(), value.round() as u8))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::intake::RIASEC_QUESTIONS;

    fn answers(score: u8) -> BTreeMap<QuestionId, u8> {
        RIASEC_QUESTIONS
            .iter()
            .map(|id| (id.to_string(), score))
            .collect()
    }

    #[test]
    fn uniform_answers_produce_uniform_dimensions() {
        let profile = RiasecProfile::from_answers(&answers(2));
        for dimension in RiasecDimension::ordered() {
            assert!((profile.dimension(dimension) - 200.0 / 3.0).abs() < 1e-9);
        }
        assert_eq!(profile.vibe_scores().get("I"), Some(&67));
    }

    #[test]
    fn alignment_uses_only_listed_dimensions() {
        let mut raw = answers(0);
        for id in RiasecDimension::Investigative.questions() {
            raw.insert(id.to_string(), 3);
        }
        let profile = RiasecProfile::from_answers(&raw);

        let investigative_only = BTreeMap::from([(RiasecDimension::Investigative, 2.0)]);
        assert!((profile.alignment(&investigative_only) - 100.0).abs() < 1e-9);

        let mixed = BTreeMap::from([
            (RiasecDimension::Investigative, 3.0),
            (RiasecDimension::Artistic, 1.0),
        ]);
        assert!((profile.alignment(&mixed) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn missing_answers_count_as_neutral() {
        let profile = RiasecProfile::from_answers(&BTreeMap::new());
        let expected = 100.0 * f64::from(NEUTRAL_RIASEC_ANSWER) / 3.0;
        assert!((profile.dimension(RiasecDimension::Social) - expected).abs() < 1e-9);
    }

    #[test]
    fn alignment_is_zero_for_weightless_profiles() {
        let profile = RiasecProfile::from_answers(&answers(3));
        assert_eq!(profile.alignment(&BTreeMap::new()), 0.0);
    }
}
