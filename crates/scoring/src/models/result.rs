use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::category::{Category, MIN_EVENT_POINTS};
use super::event::EventId;
use crate::error::{Result, ScoringError};

/// Raw performances for one test, as entered by the soldier.
///
/// Any event may be unset; completeness is checked when the test is scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Option<f64>>",
    into = "BTreeMap<EventId, f64>"
)]
pub struct RawScores {
    values: BTreeMap<EventId, f64>,
}

impl RawScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, event: EventId, value: f64) -> Self {
        self.set(event, value);
        self
    }

    pub fn set(&mut self, event: EventId, value: f64) {
        self.values.insert(event, value);
    }

    pub fn get(&self, event: EventId) -> Option<f64> {
        self.values.get(&event).copied()
    }

    /// Builds raw scores from event names, rejecting names that are not events.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Option<f64>)>,
    {
        let mut scores = Self::new();
        for (name, value) in pairs {
            let event: EventId = name.parse()?;
            if let Some(value) = value {
                scores.set(event, value);
            }
        }
        Ok(scores)
    }

    /// Events with no value yet, in test order.
    pub fn missing(&self) -> Vec<EventId> {
        EventId::all()
            .iter()
            .copied()
            .filter(|event| !self.values.contains_key(event))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, Option<f64>>> for RawScores {
    type Error = ScoringError;

    fn try_from(map: BTreeMap<String, Option<f64>>) -> std::result::Result<Self, Self::Error> {
        Self::from_pairs(map.iter().map(|(name, value)| (name.as_str(), *value)))
    }
}

impl From<RawScores> for BTreeMap<EventId, f64> {
    fn from(scores: RawScores) -> Self {
        scores.values
    }
}

/// Points earned on a single event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventScore {
    pub event: EventId,
    pub raw_value: f64,
    pub points: u8,
}

impl EventScore {
    pub fn passed(&self) -> bool {
        self.points >= MIN_EVENT_POINTS
    }
}

/// Outcome of scoring a full six-event test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    #[schema(value_type = Object)]
    pub event_scores: BTreeMap<EventId, u8>,
    pub total_score: u16,
    pub category: Category,
    pub passed: bool,
}

impl TestResult {
    /// Events scored below the per-event minimum, in test order.
    pub fn failing_events(&self) -> Vec<EventId> {
        self.event_scores
            .iter()
            .filter(|(_, points)| **points < MIN_EVENT_POINTS)
            .map(|(event, _)| *event)
            .collect()
    }

    /// Points still needed on the total to reach the next category, if any.
    pub fn points_to_next_category(&self) -> Option<(Category, u16)> {
        if !self.passed {
            return None;
        }
        Category::ranked()
            .iter()
            .rev()
            .copied()
            .find(|category| *category > self.category)
            .map(|next| (next, next.min_total() - self.total_score))
    }
}
