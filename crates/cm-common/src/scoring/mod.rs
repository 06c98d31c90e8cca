mod accumulate;
mod profile;
mod scores;

pub use accumulate::{Accumulation, OptionIndex, ResponseSet, SectionCoverage, process_responses};
pub use profile::{ProfileResolution, UserProfile, resolve_profile, resolve_profile_detailed};
pub use scores::{DimensionScores, LevelScore, resolve_level};
