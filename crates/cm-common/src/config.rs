use crate::{
    error::ConfigError,
    results::{DEFAULT_LESS_LIKELY_LIMIT, DEFAULT_TOP_N},
};

pub const TOP_N_ENV: &str = "CM_TOP_N";
pub const LESS_LIKELY_LIMIT_ENV: &str = "CM_LESS_LIKELY_LIMIT";

/// How much of a ranking the report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Surviving jobs listed under "Jobs That Fit You".
    pub top_n: usize,
    /// Eliminated jobs listed under "Less Likely Fits".
    pub less_likely_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            less_likely_limit: DEFAULT_LESS_LIKELY_LIMIT,
        }
    }
}

impl ReportConfig {
    /// Read `CM_TOP_N` and `CM_LESS_LIKELY_LIMIT`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            top_n: parse_count(TOP_N_ENV, lookup(TOP_N_ENV))?.unwrap_or(defaults.top_n),
            less_likely_limit: parse_count(LESS_LIKELY_LIMIT_ENV, lookup(LESS_LIKELY_LIMIT_ENV))?
                .unwrap_or(defaults.less_likely_limit),
        })
    }
}

fn parse_count(key: &'static str, raw: Option<String>) -> Result<Option<usize>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<usize>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber { key, value: raw })
}
