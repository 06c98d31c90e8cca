use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use cm_common::{
    Catalog, CatalogError, MatchingEngine, ReportConfig, ResponseSet, SessionOutcome,
    logging::{init_tracing_subscriber, install_tracing_panic_hook},
    run_session,
};
use dotenvy::dotenv;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "cm",
    about = "Match work-environment preferences to jobs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every prompt and its options, grouped by section
    Prompts {
        #[arg(long, env = "CM_CATALOG")]
        catalog: Option<PathBuf>,
    },
    /// Run the data integrity checks; exits non-zero on any error
    Validate {
        /// JSON file with `prompts` and `jobs`; defaults to the built-in catalog
        #[arg(long, env = "CM_CATALOG")]
        catalog: Option<PathBuf>,
    },
    /// Score a response file and print the report
    Match {
        /// JSON object mapping prompt id to chosen option index
        #[arg(long)]
        responses: PathBuf,

        #[arg(long, env = "CM_CATALOG")]
        catalog: Option<PathBuf>,

        /// Number of top matches to show (overrides CM_TOP_N)
        #[arg(long)]
        top: Option<usize>,

        /// Number of less likely fits to show (overrides CM_LESS_LIKELY_LIMIT)
        #[arg(long)]
        less_likely: Option<usize>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    outcome: &'a SessionOutcome,
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading catalog");
            Catalog::from_path(path)
        }
        None => Catalog::builtin(),
    }
}

fn load_responses(path: &Path) -> Result<ResponseSet> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read responses from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON object of prompt id to option index", path.display()))
}

fn print_prompts(catalog: &Catalog) {
    for (dim, prompts) in catalog.sections() {
        println!("{} ({})", dim.label(), dim);
        for prompt in prompts {
            println!("  [{}] {}", prompt.id, prompt.scenario);
            for (index, option) in prompt.options.iter().enumerate() {
                println!("      {index}: {}", option.text);
            }
        }
        println!();
    }
}

fn validate(catalog: &Catalog) -> ExitCode {
    let errors = catalog.validate();
    if errors.is_empty() {
        println!(
            "catalog OK: {} prompts, {} jobs",
            catalog.prompts.len(),
            catalog.jobs.len()
        );
        return ExitCode::SUCCESS;
    }

    for error in &errors {
        println!("{error}");
    }
    eprintln!("{} integrity error(s)", errors.len());
    ExitCode::FAILURE
}

fn report_config(top: Option<usize>, less_likely: Option<usize>) -> Result<ReportConfig> {
    let mut config = ReportConfig::from_env()?;
    if let Some(top) = top {
        config.top_n = top;
    }
    if let Some(limit) = less_likely {
        config.less_likely_limit = limit;
    }
    Ok(config)
}

fn render_json(outcome: &SessionOutcome) -> Result<String> {
    let report = JsonReport {
        generated_at: Utc::now(),
        outcome,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn main() -> Result<ExitCode> {
    let _ = dotenv();
    init_tracing_subscriber("cm");
    install_tracing_panic_hook("cm");

    let cli = Cli::parse();

    match cli.command {
        Command::Prompts { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            print_prompts(&catalog);
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            Ok(validate(&catalog))
        }
        Command::Match {
            responses,
            catalog,
            top,
            less_likely,
            format,
        } => {
            let config = report_config(top, less_likely)?;
            let catalog = load_catalog(catalog.as_deref())?
                .validated()
                .context("catalog is not usable for matching")?;
            let responses = load_responses(&responses)?;

            let outcome = run_session(&catalog, &responses, &MatchingEngine::default(), &config);
            for warning in &outcome.warnings {
                warn!(%warning, "response skipped");
            }

            let output = match format {
                OutputFormat::Text => outcome.render_text(&config),
                OutputFormat::Json => render_json(&outcome)?,
            };
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn match_arguments_parse() {
        let cli = Cli::try_parse_from([
            "cm",
            "match",
            "--responses",
            "answers.json",
            "--top",
            "3",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Command::Match {
                responses,
                top,
                format,
                ..
            } => {
                assert_eq!(responses, PathBuf::from("answers.json"));
                assert_eq!(top, Some(3));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn flags_override_config() {
        let config = report_config(Some(1), Some(0)).unwrap();
        assert_eq!(config.top_n, 1);
        assert_eq!(config.less_likely_limit, 0);
    }

    #[test]
    fn json_report_includes_timestamp_and_results() {
        let catalog = Catalog::builtin().unwrap();
        let responses: ResponseSet =
            serde_json::from_str(r#"{"pd-1": 0, "id-1": 9, "sp-1": 0.5}"#).unwrap();
        let outcome = run_session(
            &catalog,
            &responses,
            &MatchingEngine::default(),
            &ReportConfig::default(),
        );

        let value: serde_json::Value = serde_json::from_str(&render_json(&outcome).unwrap()).unwrap();
        assert!(value["generated_at"].is_string());
        assert_eq!(value["profile"]["people_density"], "solo");
        assert_eq!(value["warnings"].as_array().unwrap().len(), 2);
        assert!(value["results"]["top_matches"].is_array());
        assert!(value.get("ranked").is_none());
    }
}
