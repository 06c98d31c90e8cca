use serde::Serialize;

use super::weights::ScoringWeights;
use crate::dimensions::Dimension;

/// Verdict for one dimension of one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionFit {
    /// The job accepts the user's level.
    Match,
    /// Ordinal dimension, user's level is one step from an accepted level.
    Adjacent,
    /// Anything else: categorical miss or a gap of two or more steps.
    Mismatch,
}

impl DimensionFit {
    pub fn credit(self, weights: &ScoringWeights) -> f64 {
        match self {
            DimensionFit::Match => weights.full_credit,
            DimensionFit::Adjacent => weights.adjacent_credit,
            DimensionFit::Mismatch => 0.0,
        }
    }

    pub fn mismatch_weight(self, weights: &ScoringWeights) -> f64 {
        match self {
            DimensionFit::Match => 0.0,
            DimensionFit::Adjacent => weights.adjacent_mismatch,
            DimensionFit::Mismatch => weights.full_mismatch,
        }
    }

    pub fn is_match(self) -> bool {
        matches!(self, DimensionFit::Match)
    }
}

/// Compare a user's level against a job's accepted levels on one dimension.
pub fn classify(dimension: Dimension, user_value: &str, accepted: &[String]) -> DimensionFit {
    if accepted.iter().any(|level| level == user_value) {
        return DimensionFit::Match;
    }

    let meta = dimension.meta();
    if !meta.ordinal {
        return DimensionFit::Mismatch;
    }

    let Some(user_rank) = meta.rank_of(user_value) else {
        return DimensionFit::Mismatch;
    };

    let adjacent = accepted
        .iter()
        .filter_map(|level| meta.rank_of(level))
        .any(|rank| rank.abs_diff(user_rank) == 1);

    if adjacent {
        DimensionFit::Adjacent
    } else {
        DimensionFit::Mismatch
    }
}
