use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::{Result, ScoringError};
use crate::models::{AgeGroup, Breakpoint, Direction, EventDefinition, EventId, Gender};

const DEADLIFT: [Breakpoint; 10] = [
    Breakpoint::new(100, 340.0),
    Breakpoint::new(95, 320.0),
    Breakpoint::new(90, 300.0),
    Breakpoint::new(85, 280.0),
    Breakpoint::new(80, 260.0),
    Breakpoint::new(75, 240.0),
    Breakpoint::new(70, 220.0),
    Breakpoint::new(65, 200.0),
    Breakpoint::new(60, 180.0),
    Breakpoint::new(0, 140.0),
];

const POWER_THROW: [Breakpoint; 10] = [
    Breakpoint::new(100, 12.5),
    Breakpoint::new(95, 11.5),
    Breakpoint::new(90, 10.5),
    Breakpoint::new(85, 9.5),
    Breakpoint::new(80, 8.5),
    Breakpoint::new(75, 7.5),
    Breakpoint::new(70, 6.5),
    Breakpoint::new(65, 5.5),
    Breakpoint::new(60, 4.5),
    Breakpoint::new(0, 4.0),
];

const PUSHUPS: [Breakpoint; 10] = [
    Breakpoint::new(100, 60.0),
    Breakpoint::new(95, 55.0),
    Breakpoint::new(90, 50.0),
    Breakpoint::new(85, 45.0),
    Breakpoint::new(80, 40.0),
    Breakpoint::new(75, 35.0),
    Breakpoint::new(70, 30.0),
    Breakpoint::new(65, 25.0),
    Breakpoint::new(60, 20.0),
    Breakpoint::new(0, 10.0),
];

const SPRINT_DRAG_CARRY: [Breakpoint; 10] = [
    Breakpoint::new(100, 120.0),
    Breakpoint::new(95, 125.0),
    Breakpoint::new(90, 130.0),
    Breakpoint::new(85, 135.0),
    Breakpoint::new(80, 140.0),
    Breakpoint::new(75, 145.0),
    Breakpoint::new(70, 150.0),
    Breakpoint::new(65, 155.0),
    Breakpoint::new(60, 160.0),
    Breakpoint::new(0, 180.0),
];

const PLANK: [Breakpoint; 10] = [
    Breakpoint::new(100, 330.0),
    Breakpoint::new(95, 300.0),
    Breakpoint::new(90, 270.0),
    Breakpoint::new(85, 240.0),
    Breakpoint::new(80, 210.0),
    Breakpoint::new(75, 180.0),
    Breakpoint::new(70, 150.0),
    Breakpoint::new(65, 135.0),
    Breakpoint::new(60, 120.0),
    Breakpoint::new(0, 60.0),
];

const TWO_MILE_RUN: [Breakpoint; 10] = [
    Breakpoint::new(100, 810.0),  // 13:30
    Breakpoint::new(95, 870.0),   // 14:30
    Breakpoint::new(90, 930.0),   // 15:30
    Breakpoint::new(85, 990.0),   // 16:30
    Breakpoint::new(80, 1050.0),  // 17:30
    Breakpoint::new(75, 1110.0),  // 18:30
    Breakpoint::new(70, 1170.0),  // 19:30
    Breakpoint::new(65, 1230.0),  // 20:30
    Breakpoint::new(60, 1260.0),  // 21:00
    Breakpoint::new(0, 1500.0),   // 25:00
];

lazy_static! {
    static ref STANDARD: Result<ScoringTable> = ScoringTable::build_standard();
}

/// Scoring charts for all six events.
///
/// Built once and never mutated, so a shared reference can be handed to
/// any number of concurrent scoring calls.
#[derive(Debug, Clone)]
pub struct ScoringTable {
    definitions: HashMap<EventId, EventDefinition>,
}

impl ScoringTable {
    /// Builds a table from one definition per event.
    ///
    /// Fails if an event is missing or defined twice.
    pub fn new(definitions: Vec<EventDefinition>) -> Result<Self> {
        let mut table = Self {
            definitions: HashMap::with_capacity(EventId::all().len()),
        };

        for definition in definitions {
            table.register(definition)?;
        }

        if let Some(missing) = EventId::all()
            .iter()
            .find(|id| !table.definitions.contains_key(id))
        {
            return Err(ScoringError::InvalidTable {
                event: *missing,
                reason: "no scoring chart defined".to_string(),
            });
        }

        Ok(table)
    }

    fn register(&mut self, definition: EventDefinition) -> Result<()> {
        let id = definition.id();
        if self.definitions.insert(id, definition).is_some() {
            return Err(ScoringError::InvalidTable {
                event: id,
                reason: "scoring chart defined more than once".to_string(),
            });
        }
        Ok(())
    }

    fn build_standard() -> Result<Self> {
        let charts: [(EventId, &[Breakpoint]); 6] = [
            (EventId::Deadlift, &DEADLIFT),
            (EventId::PowerThrow, &POWER_THROW),
            (EventId::Pushups, &PUSHUPS),
            (EventId::SprintDragCarry, &SPRINT_DRAG_CARRY),
            (EventId::Plank, &PLANK),
            (EventId::TwoMileRun, &TWO_MILE_RUN),
        ];

        let definitions = charts
            .into_iter()
            .map(|(id, breakpoints)| EventDefinition::new(id, id.direction(), breakpoints.to_vec()))
            .collect::<Result<Vec<_>>>()?;

        let table = Self::new(definitions)?;
        tracing::debug!("Standard scoring table loaded with {} events", table.definitions.len());
        Ok(table)
    }

    /// The official charts, validated on first use.
    pub fn standard() -> Result<&'static ScoringTable> {
        STANDARD.as_ref().map_err(Clone::clone)
    }

    /// Table that applies to the given demographic.
    ///
    /// Every age group and gender currently uses the standard charts.
    pub fn for_demographic(_age_group: AgeGroup, _gender: Gender) -> Result<&'static ScoringTable> {
        Self::standard()
    }

    pub fn get_definition(&self, id: EventId) -> Result<&EventDefinition> {
        self.definitions
            .get(&id)
            .ok_or_else(|| ScoringError::unknown_event(id.as_str()))
    }

    pub fn get_definition_by_name(&self, name: &str) -> Result<&EventDefinition> {
        let id: EventId = name.parse()?;
        self.get_definition(id)
    }

    /// Definitions in test order.
    pub fn definitions(&self) -> impl Iterator<Item = &EventDefinition> {
        EventId::all()
            .iter()
            .filter_map(|id| self.definitions.get(id))
    }

    pub fn direction_of(&self, id: EventId) -> Result<Direction> {
        self.get_definition(id).map(EventDefinition::direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        let table = ScoringTable::standard().unwrap();
        assert_eq!(table.definitions().count(), 6);
    }

    #[test]
    fn test_definitions_follow_test_order() {
        let table = ScoringTable::standard().unwrap();
        let ids: Vec<EventId> = table.definitions().map(|d| d.id()).collect();
        assert_eq!(ids, EventId::all());
    }

    #[test]
    fn test_get_definition_by_name() {
        let table = ScoringTable::standard().unwrap();

        let plank = table.get_definition_by_name("plank").unwrap();
        assert_eq!(plank.direction(), Direction::HigherIsBetter);
        assert_eq!(plank.best().value, 330.0);
        assert_eq!(plank.floor().value, 60.0);

        let err = table.get_definition_by_name("legTuck").unwrap_err();
        assert!(matches!(err, ScoringError::UnknownEvent { .. }));
    }

    #[test]
    fn test_timed_runs_are_lower_is_better() {
        let table = ScoringTable::standard().unwrap();
        assert_eq!(
            table.direction_of(EventId::SprintDragCarry).unwrap(),
            Direction::LowerIsBetter
        );
        assert_eq!(
            table.direction_of(EventId::TwoMileRun).unwrap(),
            Direction::LowerIsBetter
        );
    }

    #[test]
    fn test_every_chart_has_passing_breakpoint() {
        let table = ScoringTable::standard().unwrap();
        for definition in table.definitions() {
            assert!(definition.value_for_points(60).is_some());
        }
    }

    #[test]
    fn test_new_rejects_incomplete_table() {
        let deadlift = ScoringTable::standard()
            .unwrap()
            .get_definition(EventId::Deadlift)
            .unwrap()
            .clone();

        let err = ScoringTable::new(vec![deadlift]).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::InvalidTable {
                event: EventId::PowerThrow,
                ..
            }
        ));
    }

    #[test]
    fn test_new_rejects_duplicate_event() {
        let standard = ScoringTable::standard().unwrap();
        let mut definitions: Vec<EventDefinition> = standard.definitions().cloned().collect();
        definitions.push(standard.get_definition(EventId::Plank).unwrap().clone());

        let err = ScoringTable::new(definitions).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::InvalidTable {
                event: EventId::Plank,
                ..
            }
        ));
    }

    #[test]
    fn test_demographic_lookup_uses_standard_table() {
        let table = ScoringTable::for_demographic(AgeGroup::Over62, Gender::Female).unwrap();
        assert!(std::ptr::eq(table, ScoringTable::standard().unwrap()));
    }
}
