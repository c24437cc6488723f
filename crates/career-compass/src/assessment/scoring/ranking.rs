use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use super::config::EngineConfig;
use super::subjects::SubjectScore;
use crate::assessment::domain::Confidence;

/// Raw sub-scores for one career before aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Components {
    pub(crate) riasec: f64,
    pub(crate) subject: SubjectScore,
    pub(crate) practical: i32,
    pub(crate) context: i32,
}

/// Weighted sum with practical/context at full baseline, shifted by the signed adjustments.
pub(crate) fn final_score(components: &Components, config: &EngineConfig) -> u8 {
    let weighted = config.riasec_weight * components.riasec
        + config.subject_weight * components.subject.value()
        + config.practical_weight * 100.0
        + config.context_weight * 100.0
        + f64::from(components.practical)
        + f64::from(components.context);

    weighted.round().clamp(0.0, 100.0) as u8
}

pub(crate) fn confidence(score: u8, config: &EngineConfig) -> Confidence {
    if score >= config.high_confidence_threshold {
        Confidence::High
    } else if score >= config.medium_confidence_threshold {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Anything that can be ranked: a final score and a name used for deterministic ties.
pub(crate) trait Ranked {
    fn rank_score(&self) -> u8;
    fn rank_name(&self) -> &str;
    fn bucket_name(&self) -> &str;
}

/// Highest score first, then name ascending.
pub(crate) fn rank_order<T: Ranked>(a: &T, b: &T) -> Ordering {
    b.rank_score()
        .cmp(&a.rank_score())
        .then_with(|| a.rank_name().cmp(b.rank_name()))
}

/// Buckets chosen for the report, each with its best careers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBucket<T> {
    pub bucket_name: String,
    pub bucket_score: u8,
    pub careers: Vec<T>,
}

/// Groups already-ranked items by bucket, scores each bucket by its best member, and keeps
/// the top buckets with their top careers.
pub(crate) fn select_buckets<T: Ranked + Clone>(
    ranked: &[T],
    config: &EngineConfig,
) -> Vec<RankedBucket<T>> {
    let mut grouped: BTreeMap<&str, Vec<&T>> = BTreeMap::new();
    for item in ranked {
        grouped.entry(item.bucket_name()).or_default().push(item);
    }

    let mut buckets: Vec<RankedBucket<T>> = grouped
        .into_iter()
        .map(|(name, mut members)| {
            members.sort_by(|a, b| rank_order(*a, *b));
            RankedBucket {
                bucket_name: name.to_string(),
                bucket_score: members.first().map(|m| m.rank_score()).unwrap_or(0),
                careers: members
                    .into_iter()
                    .take(config.careers_per_bucket)
                    .cloned()
                    .collect(),
            }
        })
        .collect();

    buckets.sort_by(|a, b| {
        b.bucket_score
            .cmp(&a.bucket_score)
            .then_with(|| a.bucket_name.cmp(&b.bucket_name))
    });
    buckets.truncate(config.top_buckets);
    buckets
}
