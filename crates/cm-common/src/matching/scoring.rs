use serde::Serialize;

use super::{
    fit::{DimensionFit, classify},
    weights::{DEFAULT_WEIGHTS, ScoringWeights},
};
use crate::{catalog::Job, dimensions::Dimension, scoring::UserProfile};

/// Outcome of scoring one job against one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub job: Job,
    /// Overall fit in [0, 1].
    pub fit_score: f64,
    /// Set when summed primary mismatch weight reaches the threshold.
    pub eliminated: bool,
    pub mismatch_weight: f64,
    /// Plain-language reasons the job matched.
    pub fit_reasons: Vec<String>,
    /// Plain-language reasons the job might not be a perfect fit.
    pub friction_points: Vec<String>,
    /// Per-dimension verdicts, primary dimensions first.
    pub verdicts: Vec<(Dimension, DimensionFit)>,
}

pub fn score_job(job: &Job, profile: &UserProfile) -> MatchResult {
    FitScorer::new(DEFAULT_WEIGHTS).score(job, profile)
}

/// Stateless scorer applying one set of weights.
#[derive(Debug, Clone, Default)]
pub struct FitScorer {
    weights: ScoringWeights,
}

impl FitScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, job: &Job, profile: &UserProfile) -> MatchResult {
        let weights = &self.weights;
        let mut fit_reasons = Vec::new();
        let mut friction_points = Vec::new();
        let mut verdicts = Vec::new();

        let mut primary_count = 0usize;
        let mut primary_credit = 0.0;
        let mut mismatch_weight = 0.0;

        for dim in Dimension::primary() {
            let user_level = profile.level(dim);
            let accepted = job.accepted(dim);
            let fit = classify(dim, user_level.value, accepted);

            let user_label = user_level.label.to_lowercase();
            match fit {
                DimensionFit::Match => fit_reasons.push(format!(
                    "{}: this job fits your preference for {}",
                    dim.label(),
                    user_label
                )),
                DimensionFit::Adjacent => friction_points.push(format!(
                    "{}: you prefer {}, this job is close at {}",
                    dim.label(),
                    user_label,
                    accepted_labels(dim, accepted)
                )),
                DimensionFit::Mismatch => friction_points.push(format!(
                    "{}: you prefer {}, but this job is typically {}",
                    dim.label(),
                    user_label,
                    accepted_labels(dim, accepted)
                )),
            }

            primary_count += 1;
            primary_credit += fit.credit(weights);
            mismatch_weight += fit.mismatch_weight(weights);
            verdicts.push((dim, fit));
        }

        let eliminated = mismatch_weight >= weights.elimination_threshold;

        // Secondary dimensions never eliminate and get no adjacency.
        let mut secondary_bonus = 0.0;
        for dim in Dimension::secondary() {
            let user_level = profile.level(dim);
            if job.accepts(dim, user_level.value) {
                fit_reasons.push(format!(
                    "{}: this job aligns with your value of {}",
                    dim.label(),
                    user_level.label.to_lowercase()
                ));
                secondary_bonus += weights.secondary_bonus;
                verdicts.push((dim, DimensionFit::Match));
            } else {
                verdicts.push((dim, DimensionFit::Mismatch));
            }
        }

        let primary_score = if primary_count == 0 {
            0.0
        } else {
            primary_credit / primary_count as f64
        };
        let fit_score = (primary_score * weights.primary_ceiling + secondary_bonus).min(1.0);

        MatchResult {
            job: job.clone(),
            fit_score,
            eliminated,
            mismatch_weight,
            fit_reasons,
            friction_points,
            verdicts,
        }
    }
}

fn accepted_labels(dimension: Dimension, accepted: &[String]) -> String {
    if accepted.is_empty() {
        return "unspecified".to_string();
    }
    let meta = dimension.meta();
    accepted
        .iter()
        .map(|value| meta.level_label(value).to_lowercase())
        .collect::<Vec<_>>()
        .join(" or ")
}
