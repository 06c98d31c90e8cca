//! Data integrity checks for prompts and jobs.
//!
//! Meant to run once at startup or build time. Returns every problem found;
//! callers decide whether any of them is fatal.

use std::collections::HashSet;

use strum::IntoEnumIterator;

use crate::{
    catalog::{Job, Prompt},
    dimensions::Dimension,
};

/// Collect human-readable integrity errors. Empty means valid.
pub fn validate_data_integrity(prompts: &[Prompt], jobs: &[Job]) -> Vec<String> {
    let mut errors = Vec::new();
    validate_prompts(prompts, &mut errors);
    validate_jobs(jobs, &mut errors);
    errors
}

fn validate_prompts(prompts: &[Prompt], errors: &mut Vec<String>) {
    let mut seen = HashSet::new();

    for prompt in prompts {
        if !seen.insert(prompt.id.as_str()) {
            errors.push(format!("Prompt \"{}\": duplicate prompt id", prompt.id));
        }

        if prompt.options.is_empty() {
            errors.push(format!("Prompt \"{}\": has no options", prompt.id));
        }

        for (i, option) in prompt.options.iter().enumerate() {
            if !(option.weight.is_finite() && option.weight > 0.0) {
                errors.push(format!(
                    "Prompt \"{}\" option {}: weight {} must be a positive finite number",
                    prompt.id, i, option.weight
                ));
            }

            let Some(dimension) = Dimension::from_id(&option.dimension) else {
                errors.push(format!(
                    "Prompt \"{}\" option {}: unknown dimension \"{}\"",
                    prompt.id, i, option.dimension
                ));
                continue;
            };

            let meta = dimension.meta();
            if !meta.is_valid_level(&option.nudge_toward) {
                errors.push(format!(
                    "Prompt \"{}\" option {}: invalid nudge_toward \"{}\" for dimension \"{}\" (valid: {})",
                    prompt.id,
                    i,
                    option.nudge_toward,
                    option.dimension,
                    meta.level_values().join(", ")
                ));
            }
        }
    }
}

fn validate_jobs(jobs: &[Job], errors: &mut Vec<String>) {
    let mut seen = HashSet::new();

    for job in jobs {
        if !seen.insert(job.id.as_str()) {
            errors.push(format!("Job \"{}\": duplicate job id", job.id));
        }

        for dimension in Dimension::iter() {
            let accepted = job.accepted(dimension);
            if accepted.is_empty() {
                errors.push(format!(
                    "Job \"{}\": missing or empty dimension \"{}\"",
                    job.id, dimension
                ));
                continue;
            }

            let meta = dimension.meta();
            for level in accepted {
                if !meta.is_valid_level(level) {
                    errors.push(format!(
                        "Job \"{}\": invalid level \"{}\" for dimension \"{}\" (valid: {})",
                        job.id,
                        level,
                        dimension,
                        meta.level_values().join(", ")
                    ));
                }
            }
        }

        for key in job.profile.keys() {
            if Dimension::from_id(key).is_none() {
                errors.push(format!(
                    "Job \"{}\": unknown dimension \"{}\"",
                    job.id, key
                ));
            }
        }
    }
}
