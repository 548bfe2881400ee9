use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::event::{Direction, EventId};
use crate::error::{Result, ScoringError};

/// One row of a scoring chart: the raw value that earns `points`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Breakpoint {
    pub points: u8,
    pub value: f64,
}

impl Breakpoint {
    pub const fn new(points: u8, value: f64) -> Self {
        Self { points, value }
    }
}

/// Scoring chart for a single event.
///
/// Breakpoints run from best performance (100 points) to worst (0 points).
/// Points strictly decrease along the list and raw values strictly get worse
/// in the event's [`Direction`]. The only way to build one is
/// [`EventDefinition::new`], which checks all of this, so interpolation code
/// can rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EventDefinition {
    id: EventId,
    direction: Direction,
    breakpoints: Vec<Breakpoint>,
}

impl EventDefinition {
    pub fn new(id: EventId, direction: Direction, breakpoints: Vec<Breakpoint>) -> Result<Self> {
        let invalid = |reason: String| ScoringError::InvalidTable { event: id, reason };

        if breakpoints.len() < 2 {
            return Err(invalid(format!(
                "expected at least 2 breakpoints, got {}",
                breakpoints.len()
            )));
        }

        if let Some(bp) = breakpoints.iter().find(|bp| !bp.value.is_finite()) {
            return Err(invalid(format!(
                "raw value for {} points is not finite",
                bp.points
            )));
        }

        if let Some(bp) = breakpoints.iter().find(|bp| bp.points > 100) {
            return Err(invalid(format!("{} points is above 100", bp.points)));
        }

        let first = breakpoints[0];
        let last = breakpoints[breakpoints.len() - 1];
        if first.points != 100 {
            return Err(invalid(format!(
                "first breakpoint must be worth 100 points, got {}",
                first.points
            )));
        }
        if last.points != 0 {
            return Err(invalid(format!(
                "last breakpoint must be worth 0 points, got {}",
                last.points
            )));
        }

        for pair in breakpoints.windows(2) {
            let (better, worse) = (pair[0], pair[1]);
            if worse.points >= better.points {
                return Err(invalid(format!(
                    "points must strictly decrease, found {} followed by {}",
                    better.points, worse.points
                )));
            }
            if !direction.is_strictly_worse(worse.value, better.value) {
                return Err(invalid(format!(
                    "raw value {} ({} points) is not worse than {} ({} points)",
                    worse.value, worse.points, better.value, better.points
                )));
            }
        }

        Ok(Self {
            id,
            direction,
            breakpoints,
        })
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// The raw value worth the maximum 100 points.
    pub fn best(&self) -> Breakpoint {
        self.breakpoints[0]
    }

    /// The raw value at which the score bottoms out at 0.
    pub fn floor(&self) -> Breakpoint {
        self.breakpoints[self.breakpoints.len() - 1]
    }

    /// Raw value of the breakpoint worth exactly `points`, if the chart has one.
    pub fn value_for_points(&self, points: u8) -> Option<f64> {
        self.breakpoints
            .iter()
            .find(|bp| bp.points == points)
            .map(|bp| bp.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bp(points: u8, value: f64) -> Breakpoint {
        Breakpoint::new(points, value)
    }

    #[test]
    fn test_accepts_well_ordered_higher_is_better_table() {
        let def = EventDefinition::new(
            EventId::Deadlift,
            Direction::HigherIsBetter,
            vec![bp(100, 340.0), bp(60, 180.0), bp(0, 140.0)],
        )
        .unwrap();

        assert_eq!(def.best().value, 340.0);
        assert_eq!(def.floor().value, 140.0);
        assert_eq!(def.value_for_points(60), Some(180.0));
        assert_eq!(def.value_for_points(61), None);
    }

    #[test]
    fn test_accepts_well_ordered_lower_is_better_table() {
        let def = EventDefinition::new(
            EventId::TwoMileRun,
            Direction::LowerIsBetter,
            vec![bp(100, 810.0), bp(60, 1260.0), bp(0, 1500.0)],
        );
        assert!(def.is_ok());
    }

    #[test]
    fn test_rejects_reversed_direction() {
        let err = EventDefinition::new(
            EventId::TwoMileRun,
            Direction::HigherIsBetter,
            vec![bp(100, 810.0), bp(0, 1500.0)],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ScoringError::InvalidTable {
                event: EventId::TwoMileRun,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_missing_endpoints() {
        let no_max = EventDefinition::new(
            EventId::Pushups,
            Direction::HigherIsBetter,
            vec![bp(95, 55.0), bp(0, 10.0)],
        );
        assert!(no_max.is_err());

        let no_zero = EventDefinition::new(
            EventId::Pushups,
            Direction::HigherIsBetter,
            vec![bp(100, 60.0), bp(60, 20.0)],
        );
        assert!(no_zero.is_err());
    }

    #[test]
    fn test_rejects_zero_width_interval() {
        let err = EventDefinition::new(
            EventId::Plank,
            Direction::HigherIsBetter,
            vec![bp(100, 330.0), bp(95, 330.0), bp(0, 60.0)],
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_duplicate_points() {
        let err = EventDefinition::new(
            EventId::Plank,
            Direction::HigherIsBetter,
            vec![bp(100, 330.0), bp(100, 300.0), bp(0, 60.0)],
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_non_finite_and_short_tables() {
        assert!(
            EventDefinition::new(
                EventId::PowerThrow,
                Direction::HigherIsBetter,
                vec![bp(100, f64::NAN), bp(0, 4.0)],
            )
            .is_err()
        );
        assert!(
            EventDefinition::new(
                EventId::PowerThrow,
                Direction::HigherIsBetter,
                vec![bp(100, 12.5)],
            )
            .is_err()
        );
    }
}
