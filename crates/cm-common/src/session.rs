//! End-to-end run of one response set against a catalog.

use serde::Serialize;

use crate::{
    catalog::Catalog,
    config::ReportConfig,
    dimensions::Dimension,
    matching::{MatchResult, MatchingEngine},
    results::{FormattedResults, format_results, render_text},
    scoring::{ResponseSet, SectionCoverage, UserProfile, process_responses, resolve_profile_detailed},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionOutcome {
    pub profile: UserProfile,
    /// Dimensions that received no answers and use their default level.
    pub defaulted: Vec<Dimension>,
    pub coverage: Vec<SectionCoverage>,
    pub warnings: Vec<String>,
    #[serde(skip)]
    pub ranked: Vec<MatchResult>,
    pub results: FormattedResults,
}

impl SessionOutcome {
    /// Prompts whose answer was applied; skipped and unknown ids are not counted.
    pub fn answered(&self) -> usize {
        answered(&self.coverage)
    }

    pub fn render_text(&self, config: &ReportConfig) -> String {
        render_text(&self.results, config.less_likely_limit)
    }
}

fn answered(coverage: &[SectionCoverage]) -> usize {
    coverage.iter().map(|section| section.answered).sum()
}

/// Accumulate, resolve, rank and format in one pass.
///
/// The catalog is assumed to have passed [`Catalog::validated`].
pub fn run_session(
    catalog: &Catalog,
    responses: &ResponseSet,
    engine: &MatchingEngine,
    config: &ReportConfig,
) -> SessionOutcome {
    let accumulation = process_responses(&catalog.prompts, responses);
    let resolution = resolve_profile_detailed(&accumulation.scores);
    let ranked = engine.rank_jobs(&catalog.jobs, &resolution.profile);
    let results = format_results(&ranked, &resolution.profile, config.top_n);

    tracing::info!(
        answered = answered(&accumulation.coverage),
        responses = responses.len(),
        warnings = accumulation.warnings.len(),
        defaulted = resolution.defaulted.len(),
        top_matches = results.top_matches.len(),
        "session scored"
    );

    SessionOutcome {
        profile: resolution.profile,
        defaulted: resolution.defaulted,
        coverage: accumulation.coverage,
        warnings: accumulation.warnings,
        ranked,
        results,
    }
}
