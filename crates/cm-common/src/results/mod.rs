//! Turns ranked match results into explainable, job-forward output.
//!
//! Scores are shown as ordinal fit bands rather than percentages, and jobs
//! that did not survive are presented as "less likely", never as rejected.

mod render;

use serde::Serialize;
use strum::{Display, IntoStaticStr};

use crate::{matching::MatchResult, scoring::UserProfile};

pub use render::{DISCLAIMER, EXPLORE_FURTHER, render_results_as_text, render_text};

/// Default number of top matches shown.
pub const DEFAULT_TOP_N: usize = 5;

/// Default number of eliminated jobs shown under "Less Likely Fits".
pub const DEFAULT_LESS_LIKELY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Display, IntoStaticStr)]
pub enum FitBand {
    #[serde(rename = "Strong fit")]
    #[strum(serialize = "Strong fit")]
    Strong,
    #[serde(rename = "Possible fit")]
    #[strum(serialize = "Possible fit")]
    Possible,
    #[serde(rename = "Stretch")]
    #[strum(serialize = "Stretch")]
    Stretch,
    #[serde(rename = "Unlikely fit")]
    #[strum(serialize = "Unlikely fit")]
    Unlikely,
}

impl FitBand {
    pub fn from_score(fit_score: f64) -> Self {
        if fit_score >= 0.85 {
            FitBand::Strong
        } else if fit_score >= 0.65 {
            FitBand::Possible
        } else if fit_score >= 0.45 {
            FitBand::Stretch
        } else {
            FitBand::Unlikely
        }
    }

    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Label of the band a score falls in.
pub fn fit_band(fit_score: f64) -> &'static str {
    FitBand::from_score(fit_score).label()
}

/// One line per dimension: label, chosen level label and its description.
pub fn format_profile_summary(profile: &UserProfile) -> String {
    let mut lines = vec![
        "Here's what we learned about how you work best:".to_string(),
        String::new(),
    ];
    for (dim, level) in profile.iter() {
        lines.push(format!(
            "  {}: {} — {}",
            dim.label(),
            level.label,
            level.description
        ));
    }
    lines.join("\n")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedMatch {
    /// 1-based position within its list.
    pub rank: usize,
    pub job_id: String,
    pub title: String,
    pub description: String,
    /// Kept for debugging and JSON consumers; the text report shows the band.
    pub fit_percent: u32,
    pub fit_band: FitBand,
    pub fit_reasons: Vec<String>,
    pub friction_points: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlook_note: Option<String>,
}

impl FormattedMatch {
    fn from_result(rank: usize, result: &MatchResult) -> Self {
        Self {
            rank,
            job_id: result.job.id.clone(),
            title: result.job.title.clone(),
            description: result.job.short_description.clone(),
            fit_percent: (result.fit_score * 100.0).round() as u32,
            fit_band: FitBand::from_score(result.fit_score),
            fit_reasons: result.fit_reasons.clone(),
            friction_points: result.friction_points.clone(),
            typical_education: result.job.typical_education.clone(),
            outlook_note: result.job.outlook_note.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedResults {
    pub profile_summary: String,
    pub top_matches: Vec<FormattedMatch>,
    /// Every eliminated job, in ranked order.
    pub eliminated: Vec<FormattedMatch>,
}

impl FormattedResults {
    pub fn has_matches(&self) -> bool {
        !self.top_matches.is_empty()
    }
}

/// Split ranked results into the top `top_n` survivors and all eliminated jobs.
///
/// `results` is expected in ranked order, as returned by
/// [`crate::matching::MatchingEngine::rank_jobs`].
pub fn format_results(
    results: &[MatchResult],
    profile: &UserProfile,
    top_n: usize,
) -> FormattedResults {
    let top_matches = results
        .iter()
        .filter(|r| !r.eliminated)
        .take(top_n)
        .enumerate()
        .map(|(i, r)| FormattedMatch::from_result(i + 1, r))
        .collect();

    let eliminated = results
        .iter()
        .filter(|r| r.eliminated)
        .enumerate()
        .map(|(i, r)| FormattedMatch::from_result(i + 1, r))
        .collect();

    FormattedResults {
        profile_summary: format_profile_summary(profile),
        top_matches,
        eliminated,
    }
}
