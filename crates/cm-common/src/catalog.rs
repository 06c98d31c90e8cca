//! Prompt and job datasets consumed by the pipeline.
//!
//! Dimension ids and level values stay as raw strings here so that bad data
//! surfaces through [`crate::validate`] instead of failing deserialization.

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{dimensions::Dimension, error::CatalogError, validate::validate_data_integrity};

const BUILTIN_PROMPTS: &str = include_str!("../data/prompts.json");
const BUILTIN_JOBS: &str = include_str!("../data/jobs.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptOption {
    pub text: String,
    pub dimension: String,
    pub nudge_toward: String,
    /// Strength of the nudge, normally in (0, 1].
    pub weight: f64,
}

/// A situational scenario the user reacts to by picking one option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub scenario: String,
    /// Missing in the source data means empty, which validation reports.
    #[serde(default)]
    pub options: Vec<PromptOption>,
}

impl Prompt {
    /// Section the prompt belongs to, taken from its first option.
    pub fn section(&self) -> Option<Dimension> {
        self.options
            .first()
            .and_then(|option| Dimension::from_id(&option.dimension))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub short_description: String,
    /// Dimension id -> accepted level values. A job tolerates a range.
    #[serde(default)]
    pub profile: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlook_note: Option<String>,
}

impl Job {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        short_description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            short_description: short_description.into(),
            profile: BTreeMap::new(),
            typical_education: None,
            outlook_note: None,
        }
    }

    /// Replace the accepted levels for one dimension.
    pub fn with_levels(mut self, dimension: Dimension, levels: &[&str]) -> Self {
        self.profile.insert(
            dimension.as_ref().to_string(),
            levels.iter().map(|level| level.to_string()).collect(),
        );
        self
    }

    pub fn accepted(&self, dimension: Dimension) -> &[String] {
        self.profile
            .get(dimension.as_ref())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn accepts(&self, dimension: Dimension, value: &str) -> bool {
        self.accepted(dimension).iter().any(|level| level == value)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub prompts: Vec<Prompt>,
    pub jobs: Vec<Job>,
}

impl Catalog {
    pub fn new(prompts: Vec<Prompt>, jobs: Vec<Job>) -> Self {
        Self { prompts, jobs }
    }

    /// The prompt and job datasets shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_parts_json(BUILTIN_PROMPTS, BUILTIN_JOBS)
    }

    pub fn from_parts_json(prompts: &str, jobs: &str) -> Result<Self, CatalogError> {
        let prompts = serde_json::from_str(prompts).map_err(|source| CatalogError::Parse {
            what: "prompts",
            source,
        })?;
        let jobs = serde_json::from_str(jobs).map_err(|source| CatalogError::Parse {
            what: "jobs",
            source,
        })?;
        Ok(Self { prompts, jobs })
    }

    /// Parse a single `{"prompts": [...], "jobs": [...]}` document.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
            what: "catalog",
            source,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Vec<String> {
        validate_data_integrity(&self.prompts, &self.jobs)
    }

    /// Startup gate: hand the catalog back only if it passes every integrity check.
    pub fn validated(self) -> Result<Self, CatalogError> {
        let errors = self.validate();
        if errors.is_empty() {
            tracing::debug!(
                prompts = self.prompts.len(),
                jobs = self.jobs.len(),
                "catalog passed integrity checks"
            );
            return Ok(self);
        }

        for error in &errors {
            tracing::warn!(%error, "catalog integrity error");
        }
        Err(CatalogError::Integrity(errors))
    }

    pub fn prompt(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|prompt| prompt.id == id)
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Prompts grouped by section, in registry order.
    pub fn sections(&self) -> Vec<(Dimension, Vec<&Prompt>)> {
        use strum::IntoEnumIterator;

        Dimension::iter()
            .map(|dim| {
                let prompts = self
                    .prompts
                    .iter()
                    .filter(|prompt| prompt.section() == Some(dim))
                    .collect();
                (dim, prompts)
            })
            .collect()
    }
}
