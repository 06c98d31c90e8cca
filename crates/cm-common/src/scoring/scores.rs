use crate::{
    catalog::PromptOption,
    dimensions::{DIMENSION_COUNT, Dimension, Level},
};

/// Accumulated weight for one level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelScore {
    pub level: &'static Level,
    pub weight: f64,
}

/// Sparse per-dimension accumulator.
///
/// Each bucket keeps levels in the order they first received a nudge; the
/// profile resolver breaks ties on that order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DimensionScores {
    buckets: [Vec<LevelScore>; DIMENSION_COUNT],
}

impl DimensionScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, dimension: Dimension, level: &'static Level, weight: f64) {
        let bucket = &mut self.buckets[dimension.index()];
        match bucket.iter_mut().find(|entry| entry.level == level) {
            Some(entry) => entry.weight += weight,
            None => bucket.push(LevelScore { level, weight }),
        }
    }

    /// Fold one option's nudge into the running totals.
    ///
    /// Returns `false` and leaves the scores untouched when the option points
    /// at a dimension or level the registry does not know.
    pub fn apply_nudge(&mut self, option: &PromptOption) -> bool {
        let Some(dimension) = Dimension::from_id(&option.dimension) else {
            return false;
        };
        let Some(level) = dimension.meta().level(&option.nudge_toward) else {
            return false;
        };
        self.add(dimension, level, option.weight);
        true
    }

    pub fn bucket(&self, dimension: Dimension) -> &[LevelScore] {
        &self.buckets[dimension.index()]
    }

    /// Weight for a level; levels that never received a nudge count as zero.
    pub fn get(&self, dimension: Dimension, value: &str) -> f64 {
        self.bucket(dimension)
            .iter()
            .find(|entry| entry.level.value == value)
            .map(|entry| entry.weight)
            .unwrap_or(0.0)
    }

    pub fn total(&self, dimension: Dimension) -> f64 {
        self.bucket(dimension).iter().map(|entry| entry.weight).sum()
    }

    pub fn has_signal(&self, dimension: Dimension) -> bool {
        !self.bucket(dimension).is_empty()
    }
}

/// Highest-weight level in a bucket; the first inserted level wins ties.
pub fn resolve_level(bucket: &[LevelScore]) -> Option<&'static Level> {
    let mut best: Option<&LevelScore> = None;
    for entry in bucket {
        if best.map_or(true, |current| entry.weight > current.weight) {
            best = Some(entry);
        }
    }
    best.map(|entry| entry.level)
}
