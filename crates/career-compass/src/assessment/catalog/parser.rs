use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::CatalogError;
use crate::assessment::domain::{Career, RiasecDimension};
use crate::assessment::keywords::canonical_subject;

pub(crate) fn parse_careers<R: Read>(reader: R) -> Result<Vec<Career>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut careers = Vec::new();

    for (index, record) in csv_reader.deserialize::<CareerRow>().enumerate() {
        let row = record?;
        // header is line 1
        careers.push(row.into_career(index + 2)?);
    }

    Ok(careers)
}

#[derive(Debug, Deserialize)]
struct CareerRow {
    #[serde(rename = "Career ID", default)]
    id: String,
    #[serde(rename = "Career Name")]
    name: String,
    #[serde(rename = "Bucket")]
    bucket: String,
    #[serde(rename = "RIASEC")]
    riasec: String,
    #[serde(rename = "Primary Subjects", default)]
    primary_subjects: String,
    #[serde(rename = "Keywords", default)]
    keywords: String,
    #[serde(
        rename = "Long Duration",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    long_duration: Option<String>,
    #[serde(rename = "Vocational", default, deserialize_with = "empty_string_as_none")]
    vocational: Option<String>,
    #[serde(rename = "Study Path", default)]
    study_path: String,
}

impl CareerRow {
    fn into_career(self, line: usize) -> Result<Career, CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::MissingField {
                line,
                field: "Career Name",
            });
        }
        if self.bucket.trim().is_empty() {
            return Err(CatalogError::MissingField {
                line,
                field: "Bucket",
            });
        }

        let riasec_weights =
            parse_riasec(&self.riasec).map_err(|detail| CatalogError::InvalidRiasec {
                career: self.name.clone(),
                detail,
            })?;
        let long_duration_degree = parse_flag(&self.name, self.long_duration.as_deref())?;
        let vocational = parse_flag(&self.name, self.vocational.as_deref())?;

        let id = if self.id.trim().is_empty() {
            format!("row-{line}")
        } else {
            self.id
        };

        Ok(Career {
            id,
            name: self.name,
            bucket: self.bucket,
            primary_subjects: split_list(&self.primary_subjects)
                .map(canonical_subject)
                .collect(),
            riasec_weights,
            long_duration_degree,
            vocational,
            match_keywords: split_list(&self.keywords)
                .map(str::to_string)
                .collect::<BTreeSet<_>>(),
            study_path: split_list(&self.study_path).map(str::to_string).collect(),
        })
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

/// Accepts weighted pairs (`I:3;R:2`) or a bare letter profile (`IRC`, weight 1 each).
pub(crate) fn parse_riasec(value: &str) -> Result<BTreeMap<RiasecDimension, f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("profile is empty".to_string());
    }

    let mut weights = BTreeMap::new();

    if trimmed.contains(':') {
        for pair in split_list(trimmed) {
            let (letter, weight) = pair
                .split_once(':')
                .ok_or_else(|| format!("expected LETTER:WEIGHT, found '{pair}'"))?;
            let dimension = single_dimension(letter)?;
            let weight: f64 = weight
                .trim()
                .parse()
                .map_err(|_| format!("weight '{}' is not a number", weight.trim()))?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(format!("weight for {dimension} must be non-negative"));
            }
            *weights.entry(dimension).or_insert(0.0) += weight;
        }
    } else {
        for letter in trimmed.chars().filter(|c| !c.is_whitespace()) {
            let dimension = RiasecDimension::from_letter(letter)
                .ok_or_else(|| format!("unknown RIASEC letter '{letter}'"))?;
            weights.insert(dimension, 1.0);
        }
    }

    if weights.values().sum::<f64>() <= 0.0 {
        return Err("weights must sum to a positive value".to_string());
    }

    Ok(weights)
}

fn single_dimension(value: &str) -> Result<RiasecDimension, String> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => RiasecDimension::from_letter(letter)
            .ok_or_else(|| format!("unknown RIASEC letter '{letter}'")),
        _ => Err(format!("unknown RIASEC dimension '{}'", value.trim())),
    }
}

fn parse_flag(career: &str, value: Option<&str>) -> Result<bool, CatalogError> {
    match value.map(|raw| raw.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(raw) => match raw.as_str() {
            "yes" | "y" | "true" | "1" => Ok(true),
            "no" | "n" | "false" | "0" => Ok(false),
            _ => Err(CatalogError::InvalidFlag {
                career: career.to_string(),
                value: raw,
            }),
        },
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
