use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::scores::DimensionScores;
use crate::{catalog::Prompt, dimensions::Dimension};

/// The answer recorded for one prompt.
///
/// Anything that is not an integer (fractions, out-of-range numbers,
/// strings, `null`) is kept as-is so it can be reported as an out-of-bounds
/// answer instead of failing the whole response file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionIndex {
    Index(i64),
    Other(serde_json::Value),
}

impl OptionIndex {
    /// Position into a prompt's option list, when the answer is a usable index.
    pub fn position(&self) -> Option<usize> {
        match self {
            OptionIndex::Index(index) => usize::try_from(*index).ok(),
            OptionIndex::Other(_) => None,
        }
    }
}

impl From<i64> for OptionIndex {
    fn from(index: i64) -> Self {
        OptionIndex::Index(index)
    }
}

impl fmt::Display for OptionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionIndex::Index(index) => write!(f, "{index}"),
            OptionIndex::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Prompt id -> chosen option index.
pub type ResponseSet = BTreeMap<String, OptionIndex>;

/// How many prompts of a section were answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionCoverage {
    pub dimension: Dimension,
    pub prompts: usize,
    pub answered: usize,
}

impl SectionCoverage {
    pub fn is_complete(&self) -> bool {
        self.answered >= self.prompts
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Accumulation {
    pub scores: DimensionScores,
    /// Non-fatal problems with the responses; the offending answers were skipped.
    pub warnings: Vec<String>,
    pub coverage: Vec<SectionCoverage>,
}

/// Fold every answered prompt's chosen option into dimension scores.
///
/// Prompts are visited in list order. Missing answers contribute nothing;
/// out-of-range answers are skipped with one warning each.
pub fn process_responses(prompts: &[Prompt], responses: &ResponseSet) -> Accumulation {
    let mut scores = DimensionScores::new();
    let mut warnings = Vec::new();
    let mut coverage: Vec<SectionCoverage> = Dimension::iter()
        .map(|dimension| SectionCoverage {
            dimension,
            prompts: 0,
            answered: 0,
        })
        .collect();

    for prompt in prompts {
        let section = prompt.section();
        if let Some(dim) = section {
            coverage[dim.index()].prompts += 1;
        }

        let Some(chosen) = responses.get(&prompt.id) else {
            continue;
        };

        let option = chosen
            .position()
            .and_then(|index| prompt.options.get(index));
        let Some(option) = option else {
            let warning = format!(
                "Prompt \"{}\": option index {} is out of bounds ({} options)",
                prompt.id,
                chosen,
                prompt.options.len()
            );
            tracing::warn!(prompt_id = %prompt.id, index = %chosen, "skipping out-of-range response");
            warnings.push(warning);
            continue;
        };

        if !scores.apply_nudge(option) {
            let warning = format!(
                "Prompt \"{}\": option {} targets unknown level \"{}\" on dimension \"{}\"",
                prompt.id, chosen, option.nudge_toward, option.dimension
            );
            tracing::warn!(prompt_id = %prompt.id, index = %chosen, "skipping option with unknown target");
            warnings.push(warning);
            continue;
        }

        if let Some(dim) = section {
            coverage[dim.index()].answered += 1;
        }
    }

    for id in responses.keys() {
        if !prompts.iter().any(|prompt| &prompt.id == id) {
            tracing::debug!(prompt_id = %id, "ignoring response for unknown prompt");
        }
    }

    Accumulation {
        scores,
        warnings,
        coverage,
    }
}
