use std::cmp::Ordering;

use super::{
    scoring::{FitScorer, MatchResult},
    weights::ScoringWeights,
};
use crate::{catalog::Job, scoring::UserProfile};

/// Scores every job against one profile and orders the results.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    scorer: FitScorer,
}

impl MatchingEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            scorer: FitScorer::new(weights),
        }
    }

    pub fn scorer(&self) -> &FitScorer {
        &self.scorer
    }

    /// Score a single job without ranking.
    pub fn evaluate(&self, job: &Job, profile: &UserProfile) -> MatchResult {
        self.scorer.score(job, profile)
    }

    /// One result per input job: survivors first, then fit score descending.
    /// Equal keys keep input order.
    pub fn rank_jobs(&self, jobs: &[Job], profile: &UserProfile) -> Vec<MatchResult> {
        let mut ranked: Vec<_> = jobs
            .iter()
            .map(|job| self.scorer.score(job, profile))
            .collect();

        // slice::sort_by is stable
        ranked.sort_by(compare_results);

        let eliminated = ranked.iter().filter(|r| r.eliminated).count();
        tracing::debug!(
            jobs = ranked.len(),
            survivors = ranked.len() - eliminated,
            eliminated,
            top = ranked.first().map(|r| r.job.id.as_str()),
            "ranked jobs"
        );

        ranked
    }
}

pub fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    match a.eliminated.cmp(&b.eliminated) {
        Ordering::Equal => b
            .fit_score
            .partial_cmp(&a.fit_score)
            .unwrap_or(Ordering::Equal),
        other => other,
    }
}

/// Rank with the default weights.
pub fn match_jobs(jobs: &[Job], profile: &UserProfile) -> Vec<MatchResult> {
    MatchingEngine::default().rank_jobs(jobs, profile)
}
