//! Immutable career catalog, loaded once at startup and shared read-only across requests.

mod parser;

use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::path::Path;

use tracing::info;

use super::domain::{Career, CareerId};
use super::keywords::{normalize_name, KeywordError, KeywordMatcher};

const STANDARD_CATALOG: &str = include_str!("../../../data/standard_careers.csv");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("career catalog is empty")]
    Empty,
    #[error("career '{name}' appears more than once")]
    DuplicateCareer { name: String },
    #[error("line {line}: missing required field '{field}'")]
    MissingField { line: usize, field: &'static str },
    #[error("career #{position}: missing required field '{field}'")]
    MissingCareerField { position: usize, field: &'static str },
    #[error("career '{career}' has an invalid RIASEC profile: {detail}")]
    InvalidRiasec { career: String, detail: String },
    #[error("career '{career}' has an unrecognised yes/no value '{value}'")]
    InvalidFlag { career: String, value: String },
    #[error("failed to read career catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid career catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Keywords(#[from] KeywordError),
}

/// Matchers compiled from a career's name, bucket, and keyword list.
#[derive(Debug, Clone)]
pub(crate) struct CareerMatchers {
    /// keywords ∪ name ∪ bucket
    pub(crate) topical: KeywordMatcher,
    /// name ∪ bucket
    pub(crate) identity: KeywordMatcher,
}

/// Arena of careers keyed by name, with per-career keyword matchers.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    careers: Vec<Career>,
    matchers: Vec<CareerMatchers>,
    by_name: BTreeMap<String, CareerId>,
    buckets: BTreeMap<String, Vec<CareerId>>,
}

impl CareerCatalog {
    /// Catalog bundled with the crate.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_reader(Cursor::new(STANDARD_CATALOG))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::from_careers(parser::parse_careers(reader)?)
    }

    pub fn from_careers(careers: Vec<Career>) -> Result<Self, CatalogError> {
        if careers.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_name = BTreeMap::new();
        let mut buckets: BTreeMap<String, Vec<CareerId>> = BTreeMap::new();
        let mut matchers = Vec::with_capacity(careers.len());

        for (index, career) in careers.iter().enumerate() {
            let id = CareerId(index);
            validate_career(index + 1, career)?;

            if by_name.insert(normalize_name(&career.name), id).is_some() {
                return Err(CatalogError::DuplicateCareer {
                    name: career.name.clone(),
                });
            }
            buckets.entry(career.bucket.clone()).or_default().push(id);

            let identity = [career.name.as_str(), career.bucket.as_str()];
            matchers.push(CareerMatchers {
                topical: KeywordMatcher::new(
                    career
                        .match_keywords
                        .iter()
                        .map(String::as_str)
                        .chain(identity),
                )?,
                identity: KeywordMatcher::new(identity)?,
            });
        }

        info!(
            careers = careers.len(),
            buckets = buckets.len(),
            "career catalog loaded"
        );

        Ok(Self {
            careers,
            matchers,
            by_name,
            buckets,
        })
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    pub fn careers(&self) -> impl Iterator<Item = (CareerId, &Career)> {
        self.careers
            .iter()
            .enumerate()
            .map(|(index, career)| (CareerId(index), career))
    }

    pub fn get(&self, id: CareerId) -> &Career {
        &self.careers[id.0]
    }

    pub fn find(&self, name: &str) -> Option<&Career> {
        self.by_name
            .get(&normalize_name(name))
            .map(|id| self.get(*id))
    }

    /// Bucket names with their member careers, ordered by bucket name.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, Vec<&Career>)> {
        self.buckets.iter().map(|(name, ids)| {
            (
                name.as_str(),
                ids.iter().map(|id| self.get(*id)).collect::<Vec<_>>(),
            )
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub(crate) fn matchers(&self, id: CareerId) -> &CareerMatchers {
        &self.matchers[id.0]
    }
}

/// `position` is 1-based within the list handed to `from_careers`.
fn validate_career(position: usize, career: &Career) -> Result<(), CatalogError> {
    if career.name.trim().is_empty() {
        return Err(CatalogError::MissingCareerField {
            position,
            field: "Career Name",
        });
    }
    if career.bucket.trim().is_empty() {
        return Err(CatalogError::MissingCareerField {
            position,
            field: "Bucket",
        });
    }

    let weights = &career.riasec_weights;
    if weights.is_empty() {
        return Err(CatalogError::InvalidRiasec {
            career: career.name.clone(),
            detail: "profile is empty".to_string(),
        });
    }
    if weights.values().any(|weight| !weight.is_finite() || *weight < 0.0)
        || weights.values().sum::<f64>() <= 0.0
    {
        return Err(CatalogError::InvalidRiasec {
            career: career.name.clone(),
            detail: "weights must be non-negative with a positive sum".to_string(),
        });
    }

    Ok(())
}
