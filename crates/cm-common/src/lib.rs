pub mod catalog;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod logging;
pub mod matching;
pub mod results;
pub mod scoring;
pub mod session;
pub mod validate;

pub use catalog::{Catalog, Job, Prompt, PromptOption};
pub use config::ReportConfig;
pub use dimensions::{DIMENSIONS, Dimension, DimensionMeta, Level};
pub use error::{CatalogError, ConfigError, ProfileError};
pub use matching::{MatchResult, MatchingEngine, ScoringWeights, match_jobs, score_job};
pub use results::{FitBand, FormattedMatch, FormattedResults, format_results, render_results_as_text};
pub use scoring::{OptionIndex, ResponseSet, UserProfile, process_responses, resolve_profile};
pub use session::{SessionOutcome, run_session};
pub use validate::validate_data_integrity;
