use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lowest score on any single event that still counts as a pass.
pub const MIN_EVENT_POINTS: u8 = 60;

/// Lowest total that still counts as a pass.
pub const MIN_TOTAL_POINTS: u16 = 360;

pub const MAX_EVENT_POINTS: u8 = 100;

/// Performance category for a completed test, ordered from worst to best.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Category {
    Fail,
    Pass,
    Silver,
    Gold,
    Black,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::Pass => "Pass",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Black => "Black",
        }
    }

    /// All categories from best to worst, the order thresholds are checked in.
    pub fn ranked() -> &'static [Category] {
        &[
            Self::Black,
            Self::Gold,
            Self::Silver,
            Self::Pass,
            Self::Fail,
        ]
    }

    /// Inclusive lower bound on the total for this category.
    pub fn min_total(&self) -> u16 {
        match self {
            Self::Black => 540,
            Self::Gold => 480,
            Self::Silver => 420,
            Self::Pass => MIN_TOTAL_POINTS,
            Self::Fail => 0,
        }
    }

    /// A failed test is always `Fail`, whatever the total.
    pub fn from_total(total: u16, passed: bool) -> Self {
        if !passed {
            return Self::Fail;
        }

        Self::ranked()
            .iter()
            .copied()
            .find(|category| total >= category.min_total())
            .unwrap_or(Self::Fail)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
