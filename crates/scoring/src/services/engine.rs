use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Result, ScoringError};
use crate::models::{
    AgeGroup, Category, EventDefinition, EventId, EventScore, Gender, MAX_EVENT_POINTS,
    MIN_EVENT_POINTS, MIN_TOTAL_POINTS, RawScores, TestResult,
};
use crate::tables::ScoringTable;

/// Converts raw performances into points against one scoring table.
///
/// Holds nothing but a shared reference to an immutable table, so it is
/// `Copy` and any number of engines can score concurrently.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    table: &'a ScoringTable,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(table: &'a ScoringTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a ScoringTable {
        self.table
    }

    /// Points (0-100) earned by `raw_value` on `event`.
    pub fn score_event(&self, event: EventId, raw_value: f64) -> Result<u8> {
        if !raw_value.is_finite() {
            return Err(ScoringError::invalid_value(
                event.as_str(),
                format!("raw value must be a finite number, got {}", raw_value),
            ));
        }

        let definition = self.table.get_definition(event)?;
        let points = interpolate(definition, raw_value);
        debug!(event = %event, raw_value, points, "Scored event");

        Ok(points)
    }

    pub fn score_event_by_name(&self, event: &str, raw_value: f64) -> Result<u8> {
        let event: EventId = event.parse()?;
        self.score_event(event, raw_value)
    }

    /// Scores all six events and classifies the total.
    ///
    /// Demographics are checked first, then completeness; nothing is scored
    /// unless both pass.
    pub fn score_test(
        &self,
        raw_scores: &RawScores,
        age_group: Option<AgeGroup>,
        gender: Option<Gender>,
    ) -> Result<TestResult> {
        self.score_breakdown(raw_scores, age_group, gender)
            .map(|(result, _)| result)
    }

    /// Same as [`score_test`](Self::score_test), also returning the raw value
    /// behind each event's points.
    pub fn score_breakdown(
        &self,
        raw_scores: &RawScores,
        age_group: Option<AgeGroup>,
        gender: Option<Gender>,
    ) -> Result<(TestResult, Vec<EventScore>)> {
        let (age_group, gender) = require_demographics(age_group, gender)?;

        let missing = raw_scores.missing();
        if !missing.is_empty() {
            return Err(ScoringError::IncompleteInput { missing });
        }

        let mut event_scores = Vec::with_capacity(EventId::all().len());
        for event in EventId::all() {
            let raw_value = raw_scores
                .get(*event)
                .ok_or_else(|| ScoringError::IncompleteInput {
                    missing: vec![*event],
                })?;
            let points = self.score_event(*event, raw_value)?;
            event_scores.push(EventScore {
                event: *event,
                raw_value,
                points,
            });
        }

        let result = aggregate(&event_scores);
        debug!(
            age_group = %age_group,
            gender = %gender,
            total = result.total_score,
            category = %result.category,
            passed = result.passed,
            "Scored test"
        );

        Ok((result, event_scores))
    }
}

fn require_demographics(
    age_group: Option<AgeGroup>,
    gender: Option<Gender>,
) -> Result<(AgeGroup, Gender)> {
    let age_group = age_group.ok_or(ScoringError::MissingDemographics { field: "age group" })?;
    let gender = gender.ok_or(ScoringError::MissingDemographics { field: "gender" })?;
    Ok((age_group, gender))
}

/// Piecewise-linear interpolation over a chart ordered best to worst.
pub fn interpolate(definition: &EventDefinition, raw_value: f64) -> u8 {
    let direction = definition.direction();
    let breakpoints = definition.breakpoints();

    let best = definition.best();
    if direction.is_better_or_equal(raw_value, best.value) {
        return best.points;
    }

    for pair in breakpoints.windows(2) {
        let (upper, lower) = (pair[0], pair[1]);
        if !direction.is_better_or_equal(raw_value, lower.value) {
            continue;
        }

        let width = (lower.value - upper.value).abs();
        let ratio = if width == 0.0 {
            0.0
        } else {
            (raw_value - upper.value).abs() / width
        };
        let span = f64::from(upper.points) - f64::from(lower.points);
        let points = f64::from(upper.points) - ratio * span;

        // f64::round breaks ties away from zero, i.e. upward for points.
        return points.round().clamp(0.0, f64::from(MAX_EVENT_POINTS)) as u8;
    }

    0
}

/// Totals event points and applies the pass rules and category thresholds.
pub fn aggregate(event_scores: &[EventScore]) -> TestResult {
    let scores: BTreeMap<EventId, u8> = event_scores
        .iter()
        .map(|score| (score.event, score.points))
        .collect();

    let total_score: u16 = scores.values().map(|points| u16::from(*points)).sum();
    let passed = scores.values().all(|points| *points >= MIN_EVENT_POINTS)
        && total_score >= MIN_TOTAL_POINTS;

    TestResult {
        event_scores: scores,
        total_score,
        category: Category::from_total(total_score, passed),
        passed,
    }
}

/// Scores one event against the standard charts.
pub fn score_event(event: EventId, raw_value: f64) -> Result<u8> {
    ScoringEngine::new(ScoringTable::standard()?).score_event(event, raw_value)
}

/// Scores a full test against the charts for the given demographic.
pub fn score_test(
    raw_scores: &RawScores,
    age_group: Option<AgeGroup>,
    gender: Option<Gender>,
) -> Result<TestResult> {
    let (age, sex) = require_demographics(age_group, gender)?;
    let table = ScoringTable::for_demographic(age, sex)?;
    ScoringEngine::new(table).score_test(raw_scores, age_group, gender)
}
