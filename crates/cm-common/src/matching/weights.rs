/// Default weights for job-fit scoring and elimination.
///
/// A perfect primary match lands on `primary_ceiling`; the secondary bonus
/// fills the remaining headroom so a perfect job reaches exactly 1.0.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    full_credit: 1.0,
    adjacent_credit: 0.5,
    adjacent_mismatch: 0.5,
    full_mismatch: 1.0,
    elimination_threshold: 2.0,
    primary_ceiling: 0.95,
    secondary_bonus: 0.05,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Credit for an exact primary match.
    pub full_credit: f64,
    /// Credit for an ordinal level one step away.
    pub adjacent_credit: f64,
    /// Mismatch weight for an ordinal level one step away.
    pub adjacent_mismatch: f64,
    pub full_mismatch: f64,
    /// A job is eliminated once summed mismatch weight reaches this.
    pub elimination_threshold: f64,
    pub primary_ceiling: f64,
    pub secondary_bonus: f64,
}

impl ScoringWeights {
    pub fn max_score(&self) -> f64 {
        self.primary_ceiling + self.secondary_bonus
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
