//! Job scoring, elimination and ranking.

mod fit;
mod pipeline;
mod scoring;
mod weights;

pub use fit::{DimensionFit, classify};
pub use pipeline::{MatchingEngine, compare_results, match_jobs};
pub use scoring::{FitScorer, MatchResult, score_job};
pub use weights::{DEFAULT_WEIGHTS, ScoringWeights};
