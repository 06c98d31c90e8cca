//! Static registry of the eight work-environment dimensions.
//!
//! Seven primary dimensions can eliminate a job; the secondary one
//! (`work_value`) only adjusts ranking. The table is built at compile time
//! and never mutated.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

pub const DIMENSION_COUNT: usize = 8;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Dimension {
    EnergyRhythm,
    PeopleDensity,
    InteractionDemand,
    SchedulePredictability,
    RuleDensity,
    PrimaryLoadType,
    ErrorPressure,
    WorkValue,
}

impl Dimension {
    /// Position in the registry (and in every per-dimension array).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn meta(self) -> &'static DimensionMeta {
        &DIMENSIONS[self.index()]
    }

    pub fn label(self) -> &'static str {
        self.meta().label
    }

    pub fn is_primary(self) -> bool {
        self.meta().is_primary
    }

    /// Parse a snake_case identifier. Unknown ids yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }

    /// Primary (eliminating) dimensions in registry order.
    pub fn primary() -> impl Iterator<Item = Dimension> {
        Dimension::iter().filter(|dim| dim.is_primary())
    }

    pub fn secondary() -> impl Iterator<Item = Dimension> {
        Dimension::iter().filter(|dim| !dim.is_primary())
    }
}

/// One discrete point on a dimension's scale.
#[derive(Debug, PartialEq, Eq)]
pub struct Level {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct DimensionMeta {
    pub id: Dimension,
    pub label: &'static str,
    pub description: &'static str,
    /// Ordered lowest to highest when `ordinal` is set.
    pub levels: &'static [Level],
    /// Whether neighbouring levels are one step apart.
    pub ordinal: bool,
    /// Primary dimensions take part in elimination.
    pub is_primary: bool,
    /// Index into `levels` used when a session gives no signal.
    pub fallback: usize,
}

impl DimensionMeta {
    pub fn level(&'static self, value: &str) -> Option<&'static Level> {
        self.levels.iter().find(|level| level.value == value)
    }

    /// Position of `value` on the scale, if it belongs to this dimension.
    pub fn rank_of(&self, value: &str) -> Option<usize> {
        self.levels.iter().position(|level| level.value == value)
    }

    pub fn is_valid_level(&self, value: &str) -> bool {
        self.rank_of(value).is_some()
    }

    pub fn fallback_level(&'static self) -> &'static Level {
        &self.levels[self.fallback]
    }

    /// Human label for a level value; unknown values are echoed back.
    pub fn level_label<'a>(&'static self, value: &'a str) -> &'a str {
        match self.level(value) {
            Some(level) => level.label,
            None => value,
        }
    }

    pub fn level_values(&self) -> Vec<&'static str> {
        self.levels.iter().map(|level| level.value).collect()
    }
}

const fn level(value: &'static str, label: &'static str, description: &'static str) -> Level {
    Level {
        value,
        label,
        description,
    }
}

pub static DIMENSIONS: [DimensionMeta; DIMENSION_COUNT] = [
    DimensionMeta {
        id: Dimension::EnergyRhythm,
        label: "Energy Rhythm",
        description: "How your energy flows during a workday: steady and even, or in intense bursts with downtime between.",
        levels: &[
            level("steady", "Steady", "Same pace all day, few surprises"),
            level("burst", "Burst", "Intense pushes followed by recovery time"),
            level("mixed", "Mixed", "Some of both, varies day to day"),
        ],
        ordinal: false,
        is_primary: true,
        fallback: 2,
    },
    DimensionMeta {
        id: Dimension::PeopleDensity,
        label: "People Density",
        description: "How many people are physically around you while you work, not whether you talk to them.",
        levels: &[
            level("solo", "Solo", "Mostly alone or with one other person"),
            level("small-group", "Small Group", "A handful of people nearby"),
            level("crowd", "Crowd", "Lots of people around most of the time"),
        ],
        ordinal: true,
        is_primary: true,
        fallback: 1,
    },
    DimensionMeta {
        id: Dimension::InteractionDemand,
        label: "Interaction Demand",
        description: "How much you are required to engage with people: conversations, coordination, persuasion.",
        levels: &[
            level("minimal", "Minimal", "Little talking or coordination needed"),
            level("moderate", "Moderate", "Regular check-ins and teamwork"),
            level("constant", "Constant", "Talking to people is most of the job"),
        ],
        ordinal: true,
        is_primary: true,
        fallback: 1,
    },
    DimensionMeta {
        id: Dimension::SchedulePredictability,
        label: "Schedule Predictability",
        description: "How much your day follows a known pattern versus being shaped by whatever comes up.",
        levels: &[
            level("predictable", "Predictable", "You know what your day looks like in advance"),
            level("variable", "Variable", "Rough structure, but things shift often"),
            level("chaotic", "Chaotic", "Every day is different, hard to plan ahead"),
        ],
        ordinal: true,
        is_primary: true,
        fallback: 1,
    },
    DimensionMeta {
        id: Dimension::RuleDensity,
        label: "Rule Density",
        description: "How many rules, procedures, or protocols you have to follow.",
        levels: &[
            level("loose", "Loose", "Few formal rules, you figure it out"),
            level("moderate", "Moderate", "Some standard procedures to follow"),
            level("strict", "Strict", "Lots of rules, checklists, or regulations"),
        ],
        ordinal: true,
        is_primary: true,
        fallback: 1,
    },
    DimensionMeta {
        id: Dimension::PrimaryLoadType,
        label: "Primary Load Type",
        description: "What kind of effort the job mainly asks of you.",
        levels: &[
            level("physical", "Physical", "Moving, building, using your hands"),
            level("analytical", "Analytical", "Solving problems, working with data or systems"),
            level("creative", "Creative", "Designing, writing, inventing"),
            level("organizational", "Organizational", "Planning, coordinating, keeping things on track"),
        ],
        ordinal: false,
        is_primary: true,
        fallback: 1,
    },
    DimensionMeta {
        id: Dimension::ErrorPressure,
        label: "Error Pressure",
        description: "How bad it is when you make a mistake on the job.",
        levels: &[
            level("low", "Low", "Mistakes are easy to fix, no big deal"),
            level("moderate", "Moderate", "Mistakes matter but are recoverable"),
            level("high", "High", "Mistakes can be costly or dangerous"),
        ],
        ordinal: true,
        is_primary: true,
        fallback: 1,
    },
    DimensionMeta {
        id: Dimension::WorkValue,
        label: "Work Value",
        description: "What you most want to get out of your work.",
        levels: &[
            level("security", "Security", "A stable job you can count on"),
            level("autonomy", "Autonomy", "Freedom to decide how you work"),
            level("achievement", "Achievement", "Getting better and being recognized for it"),
            level("altruism", "Altruism", "Helping other people"),
        ],
        ordinal: false,
        is_primary: false,
        fallback: 0,
    },
];
