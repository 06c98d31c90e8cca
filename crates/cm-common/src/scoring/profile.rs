use serde::{Serialize, Serializer, ser::SerializeMap};
use strum::IntoEnumIterator;

use super::scores::{DimensionScores, resolve_level};
use crate::{
    dimensions::{DIMENSION_COUNT, DIMENSIONS, Dimension, Level},
    error::ProfileError,
};

/// Exactly one level per dimension; the comparison key for every job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserProfile {
    levels: [&'static Level; DIMENSION_COUNT],
}

impl UserProfile {
    /// The fallback level on every dimension.
    pub fn defaults() -> Self {
        Self {
            levels: std::array::from_fn(|i| DIMENSIONS[i].fallback_level()),
        }
    }

    /// Start from [`UserProfile::defaults`] and override the given dimensions.
    pub fn from_values(values: &[(Dimension, &str)]) -> Result<Self, ProfileError> {
        values
            .iter()
            .try_fold(Self::defaults(), |profile, (dim, value)| {
                profile.with_level(*dim, value)
            })
    }

    pub fn with_level(mut self, dimension: Dimension, value: &str) -> Result<Self, ProfileError> {
        self.set_level(dimension, value)?;
        Ok(self)
    }

    pub fn set_level(&mut self, dimension: Dimension, value: &str) -> Result<(), ProfileError> {
        let level = dimension
            .meta()
            .level(value)
            .ok_or_else(|| ProfileError::UnknownLevel {
                dimension,
                value: value.to_string(),
            })?;
        self.levels[dimension.index()] = level;
        Ok(())
    }

    pub fn level(&self, dimension: Dimension) -> &'static Level {
        self.levels[dimension.index()]
    }

    pub fn value(&self, dimension: Dimension) -> &'static str {
        self.level(dimension).value
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &'static Level)> + '_ {
        Dimension::iter().map(|dim| (dim, self.level(dim)))
    }
}

impl Serialize for UserProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DIMENSION_COUNT))?;
        for (dim, level) in self.iter() {
            map.serialize_entry(dim.as_ref(), level.value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileResolution {
    pub profile: UserProfile,
    /// Dimensions with no signal that fell back to their default, in registry order.
    pub defaulted: Vec<Dimension>,
}

/// Collapse accumulated scores into one level per dimension.
pub fn resolve_profile(scores: &DimensionScores) -> UserProfile {
    resolve_profile_detailed(scores).profile
}

pub fn resolve_profile_detailed(scores: &DimensionScores) -> ProfileResolution {
    let mut profile = UserProfile::defaults();
    let mut defaulted = Vec::new();

    for dim in Dimension::iter() {
        match resolve_level(scores.bucket(dim)) {
            Some(level) => profile.levels[dim.index()] = level,
            None => defaulted.push(dim),
        }
    }

    if !defaulted.is_empty() {
        tracing::debug!(?defaulted, "dimensions fell back to default levels");
    }

    ProfileResolution { profile, defaulted }
}
