use std::path::PathBuf;

use crate::dimensions::Dimension;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog failed integrity checks ({} error(s)): {}", .0.len(), .0.join("; "))]
    Integrity(Vec<String>),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("unknown level \"{value}\" for dimension \"{dimension}\"")]
    UnknownLevel { dimension: Dimension, value: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got \"{value}\"")]
    InvalidNumber { key: &'static str, value: String },
}
