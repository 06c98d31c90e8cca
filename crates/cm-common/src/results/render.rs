use super::{DEFAULT_LESS_LIKELY_LIMIT, FormattedMatch, FormattedResults};

/// Shown at the top of every report.
pub const DISCLAIMER: [&str; 3] = [
    "This tool explores which work environments might suit you based on your",
    "preferences today. It is not a career assessment or aptitude test. Use these",
    "results as a starting point for conversations, not as a final answer.",
];

pub const EXPLORE_FURTHER: [&str; 5] = [
    "Talk to a school counselor or mentor about any jobs that caught your eye.",
    "Look up one of your top matches on the Bureau of Labor Statistics Occupational Outlook Handbook to learn more.",
    "Try a job-shadow day, informational interview, or volunteer experience related to a match.",
    "Take an interest inventory (like the Holland RIASEC) to explore from a different angle. Interests and work environment are both important.",
    "Come back in 6-12 months and retake this. Your preferences evolve, and that's perfectly normal.",
];

const RULE_WIDTH: usize = 60;

/// Render with the default cap on "less likely" entries.
pub fn render_results_as_text(formatted: &FormattedResults) -> String {
    render_text(formatted, DEFAULT_LESS_LIKELY_LIMIT)
}

/// Plain-text report for terminals and logs.
///
/// Shows fit bands, never raw percentages, and lists at most
/// `less_likely_limit` eliminated jobs.
pub fn render_text(formatted: &FormattedResults, less_likely_limit: usize) -> String {
    let mut lines: Vec<String> = DISCLAIMER.iter().map(|l| l.to_string()).collect();
    lines.push(String::new());

    lines.push(formatted.profile_summary.clone());
    lines.push(String::new());
    push_heading(&mut lines, '=', "Jobs That Fit You");

    if formatted.top_matches.is_empty() {
        lines.push("  No strong matches found. Try adjusting your responses.".to_string());
    }
    for m in &formatted.top_matches {
        push_top_match(&mut lines, m);
    }

    if !formatted.eliminated.is_empty() && less_likely_limit > 0 {
        lines.push(String::new());
        push_heading(
            &mut lines,
            '-',
            "Less Likely Fits (based on your current preferences)",
        );
        for m in formatted.eliminated.iter().take(less_likely_limit) {
            lines.push(String::new());
            lines.push(format!("  {}", m.title));
            for friction in &m.friction_points {
                lines.push(format!("    - {friction}"));
            }
        }
    }

    lines.push(String::new());
    lines.push("Explore Further".to_string());
    for suggestion in EXPLORE_FURTHER {
        lines.push(format!("  * {suggestion}"));
    }

    lines.push(String::new());
    lines.push(
        "These results reflect your preferences today — they may change as you gain experience."
            .to_string(),
    );

    lines.join("\n")
}

fn push_heading(lines: &mut Vec<String>, rule: char, title: &str) {
    let rule = rule.to_string().repeat(RULE_WIDTH);
    lines.push(rule.clone());
    lines.push(title.to_string());
    lines.push(rule);
}

fn push_top_match(lines: &mut Vec<String>, m: &FormattedMatch) {
    lines.push(String::new());
    lines.push(format!("  #{}  {} ({})", m.rank, m.title, m.fit_band));
    lines.push(format!("       {}", m.description));
    lines.push(String::new());
    for reason in &m.fit_reasons {
        lines.push(format!("       + {reason}"));
    }
    for friction in &m.friction_points {
        lines.push(format!("       - {friction}"));
    }

    if m.typical_education.is_some() || m.outlook_note.is_some() {
        lines.push(String::new());
        if let Some(education) = &m.typical_education {
            lines.push(format!("       Education: {education}"));
        }
        if let Some(outlook) = &m.outlook_note {
            lines.push(format!("       Outlook: {outlook}"));
        }
    }
}
