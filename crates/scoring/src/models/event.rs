use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ScoringError;

/// The six ACFT events, in the order they are administered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum EventId {
    Deadlift,
    PowerThrow,
    Pushups,
    SprintDragCarry,
    Plank,
    TwoMileRun,
}

impl EventId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deadlift => "deadlift",
            Self::PowerThrow => "powerThrow",
            Self::Pushups => "pushups",
            Self::SprintDragCarry => "sprintDragCarry",
            Self::Plank => "plank",
            Self::TwoMileRun => "twoMileRun",
        }
    }

    pub fn all() -> &'static [EventId] {
        &[
            Self::Deadlift,
            Self::PowerThrow,
            Self::Pushups,
            Self::SprintDragCarry,
            Self::Plank,
            Self::TwoMileRun,
        ]
    }

    pub fn direction(&self) -> Direction {
        match self {
            Self::SprintDragCarry | Self::TwoMileRun => Direction::LowerIsBetter,
            // Plank is timed too, but a longer hold is better.
            Self::Deadlift | Self::PowerThrow | Self::Pushups | Self::Plank => {
                Direction::HigherIsBetter
            }
        }
    }

    fn parse_str(s: &str) -> Result<Self, ScoringError> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "deadlift" | "mdl" => Ok(Self::Deadlift),
            "powerthrow" | "spt" => Ok(Self::PowerThrow),
            "pushups" | "hrp" => Ok(Self::Pushups),
            "sprintdragcarry" | "sdc" => Ok(Self::SprintDragCarry),
            "plank" | "plk" => Ok(Self::Plank),
            "twomilerun" | "2milerun" | "2mr" => Ok(Self::TwoMileRun),
            _ => Err(ScoringError::unknown_event(s)),
        }
    }
}

impl TryFrom<&str> for EventId {
    type Error = ScoringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for EventId {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which way a raw value has to move for performance to improve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    /// Returns true when `a` is at least as good a performance as `b`.
    pub fn is_better_or_equal(&self, a: f64, b: f64) -> bool {
        match self {
            Self::HigherIsBetter => a >= b,
            Self::LowerIsBetter => a <= b,
        }
    }

    /// Returns true when `worse` is strictly a worse performance than `better`.
    pub fn is_strictly_worse(&self, worse: f64, better: f64) -> bool {
        !self.is_better_or_equal(worse, better)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Pounds,
    Meters,
    Repetitions,
    Seconds,
}

impl Unit {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Pounds => "lbs",
            Self::Meters => "m",
            Self::Repetitions => "reps",
            Self::Seconds => "s",
        }
    }
}

/// Usual range of raw values a soldier enters for an event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Display metadata for an event. Carries no scoring data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventInfo {
    pub id: EventId,
    pub name: &'static str,
    pub label: &'static str,
    pub unit: Unit,
    pub input_range: InputRange,
    pub description: &'static str,
}

impl EventInfo {
    pub fn for_event(id: EventId) -> Self {
        match id {
            EventId::Deadlift => Self {
                id,
                name: "3-Repetition Maximum Deadlift (MDL)",
                label: "3-Rep Max Deadlift (lbs)",
                unit: Unit::Pounds,
                input_range: InputRange {
                    min: 140.0,
                    max: 340.0,
                    step: 10.0,
                },
                description: "Tests muscular strength, balance, and flexibility.",
            },
            EventId::PowerThrow => Self {
                id,
                name: "Standing Power Throw (SPT)",
                label: "Standing Power Throw (meters)",
                unit: Unit::Meters,
                input_range: InputRange {
                    min: 4.5,
                    max: 12.5,
                    step: 0.1,
                },
                description: "Measures explosive power of the hips, legs, trunk, and arms.",
            },
            EventId::Pushups => Self {
                id,
                name: "Hand-Release Push-up (HRP)",
                label: "Hand-Release Push-ups (reps)",
                unit: Unit::Repetitions,
                input_range: InputRange {
                    min: 10.0,
                    max: 60.0,
                    step: 1.0,
                },
                description: "Tests muscular endurance of the chest, shoulders, and triceps.",
            },
            EventId::SprintDragCarry => Self {
                id,
                name: "Sprint-Drag-Carry (SDC)",
                label: "Sprint-Drag-Carry (seconds)",
                unit: Unit::Seconds,
                input_range: InputRange {
                    min: 120.0,
                    max: 180.0,
                    step: 1.0,
                },
                description: "Tests power, strength, and agility over five 25 meter shuttles.",
            },
            EventId::Plank => Self {
                id,
                name: "Plank (PLK)",
                label: "Plank (seconds)",
                unit: Unit::Seconds,
                input_range: InputRange {
                    min: 120.0,
                    max: 330.0,
                    step: 5.0,
                },
                description: "Tests core muscular endurance, stability, and neuromuscular control.",
            },
            EventId::TwoMileRun => Self {
                id,
                name: "2-Mile Run (2MR)",
                label: "2-Mile Run (seconds)",
                unit: Unit::Seconds,
                input_range: InputRange {
                    min: 810.0,
                    max: 1260.0,
                    step: 5.0,
                },
                description: "Tests aerobic and muscular endurance and cardiovascular fitness.",
            },
        }
    }

    /// Timed events where less is better are displayed as m:ss.
    pub fn is_timed(&self) -> bool {
        self.unit == Unit::Seconds && self.id.direction() == Direction::LowerIsBetter
    }
}
