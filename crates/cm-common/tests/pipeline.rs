use cm_common::{
    Catalog, Dimension, Job, MatchResult, MatchingEngine, OptionIndex, ReportConfig, ResponseSet,
    SessionOutcome, UserProfile, format_results, match_jobs, process_responses,
    render_results_as_text, resolve_profile, run_session, scoring::resolve_profile_detailed,
};

fn responses(pairs: &[(&str, i64)]) -> ResponseSet {
    pairs
        .iter()
        .map(|(id, index)| (id.to_string(), OptionIndex::from(*index)))
        .collect()
}

/// Steady, solo, minimal, predictable, loose, physical, low, security.
fn quiet_builder() -> ResponseSet {
    responses(&[
        ("er-1", 0),
        ("er-2", 0),
        ("er-3", 1),
        ("er-4", 1),
        ("pd-1", 0),
        ("pd-2", 0),
        ("pd-3", 2),
        ("pd-4", 2),
        ("id-1", 0),
        ("id-2", 0),
        ("id-3", 0),
        ("id-4", 1),
        ("sp-1", 0),
        ("sp-2", 0),
        ("sp-3", 1),
        ("sp-4", 2),
        ("rd-1", 0),
        ("rd-2", 0),
        ("rd-3", 1),
        ("rd-4", 0),
        ("plt-1", 0),
        ("plt-2", 0),
        ("plt-3", 2),
        ("plt-4", 1),
        ("ep-1", 0),
        ("ep-2", 0),
        ("ep-3", 2),
        ("ep-4", 1),
        ("wv-1", 3),
        ("wv-2", 1),
        ("wv-3", 3),
        ("wv-4", 0),
    ])
}

/// Burst, crowd, constant, chaotic, moderate rules, organizational, moderate, achievement.
fn social_organizer() -> ResponseSet {
    responses(&[
        ("er-1", 1),
        ("er-2", 1),
        ("er-3", 0),
        ("er-4", 2),
        ("pd-1", 2),
        ("pd-2", 2),
        ("pd-3", 0),
        ("pd-4", 1),
        ("id-1", 2),
        ("id-2", 2),
        ("id-3", 1),
        ("id-4", 0),
        ("sp-1", 2),
        ("sp-2", 2),
        ("sp-3", 0),
        ("sp-4", 1),
        ("rd-1", 1),
        ("rd-2", 1),
        ("rd-3", 2),
        ("rd-4", 2),
        ("plt-1", 3),
        ("plt-2", 3),
        ("plt-3", 0),
        ("plt-4", 2),
        ("ep-1", 1),
        ("ep-2", 1),
        ("ep-3", 1),
        ("ep-4", 2),
        ("wv-1", 0),
        ("wv-2", 3),
        ("wv-3", 0),
        ("wv-4", 3),
    ])
}

fn profile_for(catalog: &Catalog, answers: &ResponseSet) -> UserProfile {
    resolve_profile(&process_responses(&catalog.prompts, answers).scores)
}

fn profile_of(values: [&str; 8]) -> UserProfile {
    let [er, pd, id, sp, rd, plt, ep, wv] = values;
    UserProfile::from_values(&[
        (Dimension::EnergyRhythm, er),
        (Dimension::PeopleDensity, pd),
        (Dimension::InteractionDemand, id),
        (Dimension::SchedulePredictability, sp),
        (Dimension::RuleDensity, rd),
        (Dimension::PrimaryLoadType, plt),
        (Dimension::ErrorPressure, ep),
        (Dimension::WorkValue, wv),
    ])
    .unwrap()
}

fn top_surviving(ranked: &[MatchResult], n: usize) -> Vec<&str> {
    ranked
        .iter()
        .filter(|r| !r.eliminated)
        .take(n)
        .map(|r| r.job.id.as_str())
        .collect()
}

fn surviving(ranked: &[MatchResult]) -> usize {
    ranked.iter().filter(|r| !r.eliminated).count()
}

#[test]
fn quiet_builder_resolves_expected_profile() {
    let catalog = Catalog::builtin().unwrap();
    let acc = process_responses(&catalog.prompts, &quiet_builder());
    assert!(acc.warnings.is_empty());
    assert!(acc.coverage.iter().all(|section| section.is_complete()));

    let resolution = resolve_profile_detailed(&acc.scores);
    assert!(resolution.defaulted.is_empty());

    let values: Vec<_> = resolution.profile.iter().map(|(_, level)| level.value).collect();
    assert_eq!(
        values,
        vec!["steady", "solo", "minimal", "predictable", "loose", "physical", "low", "security"]
    );
}

#[test]
fn quiet_builder_is_matched_to_hands_on_solo_work() {
    let catalog = Catalog::builtin().unwrap();
    let profile = profile_for(&catalog, &quiet_builder());
    let ranked = match_jobs(&catalog.jobs, &profile);

    let top = &ranked[0];
    assert_eq!(top.job.id, "landscaper");
    assert!(!top.eliminated);
    assert!((top.fit_score - 1.0).abs() < 1e-9);

    let event_planner = ranked.iter().find(|r| r.job.id == "event-planner").unwrap();
    assert!(event_planner.eliminated);
    assert!(event_planner.mismatch_weight >= 2.0);
}

#[test]
fn social_organizer_is_matched_to_event_planning() {
    let catalog = Catalog::builtin().unwrap();
    let profile = profile_for(&catalog, &social_organizer());
    assert_eq!(profile.value(Dimension::PrimaryLoadType), "organizational");
    assert_eq!(profile.value(Dimension::WorkValue), "achievement");

    let ranked = match_jobs(&catalog.jobs, &profile);
    assert_eq!(ranked[0].job.id, "event-planner");

    let landscaper = ranked.iter().find(|r| r.job.id == "landscaper").unwrap();
    assert!(landscaper.eliminated);
}

#[test]
fn careful_analyst_is_matched_to_detail_work() {
    let catalog = Catalog::builtin().unwrap();
    let profile = profile_of([
        "steady",
        "solo",
        "minimal",
        "predictable",
        "strict",
        "analytical",
        "high",
        "achievement",
    ]);
    let ranked = match_jobs(&catalog.jobs, &profile);
    let top = top_surviving(&ranked, 5);

    assert!(
        ["lab-technician", "accounting-clerk", "data-analyst"]
            .iter()
            .any(|id| top.contains(id)),
        "top five: {top:?}"
    );
    assert!((ranked[0].fit_score - 1.0).abs() < 1e-9);

    let event_planner = ranked.iter().find(|r| r.job.id == "event-planner").unwrap();
    assert!(event_planner.eliminated);
}

#[test]
fn creative_burst_worker_is_matched_to_creative_work() {
    let catalog = Catalog::builtin().unwrap();
    let profile = profile_of([
        "burst", "solo", "minimal", "variable", "loose", "creative", "low", "security",
    ]);
    let ranked = match_jobs(&catalog.jobs, &profile);
    let top = top_surviving(&ranked, 5);

    assert!(!top.is_empty());
    let creative = ["graphic-designer", "video-editor", "photographer"];
    assert!(creative.contains(&top[0]), "top five: {top:?}");
    assert!(creative.iter().all(|id| top.contains(id)));

    let accounting = ranked.iter().find(|r| r.job.id == "accounting-clerk").unwrap();
    assert!(accounting.eliminated);
}

#[test]
fn moderate_middle_keeps_more_options_open_than_a_conflicted_profile() {
    let catalog = Catalog::builtin().unwrap();
    let middle = profile_of([
        "mixed",
        "small-group",
        "moderate",
        "variable",
        "moderate",
        "analytical",
        "moderate",
        "security",
    ]);
    assert_eq!(middle, UserProfile::defaults());

    let conflicted = profile_of([
        "steady",
        "solo",
        "constant",
        "predictable",
        "strict",
        "physical",
        "high",
        "altruism",
    ]);

    let first = match_jobs(&catalog.jobs, &middle);
    let second = match_jobs(&catalog.jobs, &middle);
    let ids = |ranked: &[MatchResult]| ranked.iter().map(|r| r.job.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&first[..]), ids(&second[..]));

    let mut top_two = top_surviving(&first, 2);
    top_two.sort();
    assert_eq!(top_two, vec!["it-support", "software-developer"]);
    assert!(first[..2].iter().all(|r| (r.fit_score - 0.95).abs() < 1e-9));

    let conflicted_ranked = match_jobs(&catalog.jobs, &conflicted);
    assert!(surviving(&first) > surviving(&conflicted_ranked));
    assert!(conflicted_ranked.iter().any(|r| r.eliminated));

    let event_planner = conflicted_ranked
        .iter()
        .find(|r| r.job.id == "event-planner")
        .unwrap();
    assert!(event_planner.eliminated);
    assert!(event_planner
        .friction_points
        .iter()
        .any(|f| f.starts_with("People Density")));
}

#[test]
fn social_organizer_rules_out_quiet_solo_jobs() {
    let catalog = Catalog::builtin().unwrap();
    let ranked = match_jobs(&catalog.jobs, &profile_for(&catalog, &social_organizer()));

    let eliminated: Vec<_> = ranked
        .iter()
        .filter(|r| r.eliminated)
        .map(|r| r.job.id.as_str())
        .collect();
    assert!(["welder", "lab-technician", "truck-driver"]
        .iter()
        .any(|id| eliminated.contains(id)));
}

#[test]
fn first_nudged_level_wins_a_tie() {
    let catalog = Catalog::builtin().unwrap();
    // er-1 nudges steady, er-3 nudges burst, both at full weight.
    let profile = profile_for(&catalog, &responses(&[("er-1", 0), ("er-3", 0)]));
    assert_eq!(profile.value(Dimension::EnergyRhythm), "steady");

    // Same responses, other insertion order: burst first.
    let profile = profile_for(&catalog, &responses(&[("er-1", 1), ("er-3", 1)]));
    assert_eq!(profile.value(Dimension::EnergyRhythm), "burst");
}

#[test]
fn malformed_responses_degrade_to_defaults() {
    let catalog = Catalog::builtin().unwrap();
    let acc = process_responses(
        &catalog.prompts,
        &responses(&[("er-1", -1), ("pd-1", 3), ("no-such-prompt", 0)]),
    );

    assert_eq!(
        acc.warnings,
        vec![
            "Prompt \"er-1\": option index -1 is out of bounds (3 options)".to_string(),
            "Prompt \"pd-1\": option index 3 is out of bounds (3 options)".to_string(),
        ]
    );
    assert_eq!(resolve_profile(&acc.scores), UserProfile::defaults());
}

#[test]
fn non_integer_answers_are_skipped_but_the_session_still_scores() {
    let catalog = Catalog::builtin().unwrap();
    let responses: ResponseSet = serde_json::from_str(r#"{"er-1": 1.5, "pd-1": 0}"#).unwrap();
    let outcome = run_session(
        &catalog,
        &responses,
        &MatchingEngine::default(),
        &ReportConfig::default(),
    );

    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("option index 1.5 is out of bounds"));
    assert_eq!(outcome.profile.value(Dimension::PeopleDensity), "solo");
    assert_eq!(outcome.answered(), 1);
}

#[test]
fn every_job_is_eliminated_for_an_extreme_opposite_profile() {
    let profile = UserProfile::from_values(&[
        (Dimension::EnergyRhythm, "burst"),
        (Dimension::PeopleDensity, "crowd"),
        (Dimension::InteractionDemand, "constant"),
        (Dimension::SchedulePredictability, "chaotic"),
        (Dimension::RuleDensity, "strict"),
        (Dimension::PrimaryLoadType, "creative"),
        (Dimension::ErrorPressure, "high"),
        (Dimension::WorkValue, "altruism"),
    ])
    .unwrap();

    let quiet = |id: &str| {
        Job::new(id, id.to_uppercase(), "quiet hands-on work")
            .with_levels(Dimension::EnergyRhythm, &["steady"])
            .with_levels(Dimension::PeopleDensity, &["solo"])
            .with_levels(Dimension::InteractionDemand, &["minimal"])
            .with_levels(Dimension::SchedulePredictability, &["predictable"])
            .with_levels(Dimension::RuleDensity, &["loose"])
            .with_levels(Dimension::PrimaryLoadType, &["physical"])
            .with_levels(Dimension::ErrorPressure, &["low"])
            .with_levels(Dimension::WorkValue, &["security"])
    };
    let jobs = vec![quiet("a"), quiet("b"), quiet("c")];

    let ranked = match_jobs(&jobs, &profile);
    assert!(ranked.iter().all(|r| r.eliminated));

    let formatted = format_results(&ranked, &profile, 5);
    assert!(formatted.top_matches.is_empty());
    assert_eq!(formatted.eliminated.len(), 3);

    let text = render_results_as_text(&formatted);
    assert!(text.contains("not a career assessment"));
    assert!(text.contains("No strong matches found. Try adjusting your responses."));
    assert!(text.contains("Less Likely Fits"));
    assert!(!text.contains("Ruled Out"));
}

#[test]
fn full_pipeline_is_byte_identical_across_runs() {
    let catalog = Catalog::builtin().unwrap().validated().unwrap();
    let engine = MatchingEngine::default();
    let config = ReportConfig::default();

    let first = run_session(&catalog, &social_organizer(), &engine, &config);
    let second = run_session(&catalog, &social_organizer(), &engine, &config);

    let ids = |outcome: &SessionOutcome| {
        outcome
            .ranked
            .iter()
            .map(|r| r.job.id.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(first.render_text(&config), second.render_text(&config));
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn session_report_lists_top_match_with_band() {
    let catalog = Catalog::builtin().unwrap();
    let config = ReportConfig {
        top_n: 3,
        less_likely_limit: 2,
    };
    let outcome = run_session(&catalog, &quiet_builder(), &MatchingEngine::default(), &config);

    assert!(outcome.results.top_matches.len() <= 3);
    let text = outcome.render_text(&config);
    assert!(text.contains("  #1  Landscaper (Strong fit)"));
    assert!(text.contains("       + Work Value: this job aligns with your value of security"));
    assert!(!text.contains("% fit"));
}
