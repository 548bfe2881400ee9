use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{Breakpoint, Category, Direction, EventId, InputRange, Unit};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTestRequest {
    /// Raw performance per event, keyed by event id (`deadlift`, `powerThrow`, ...)
    #[validate(custom(function = "validate_raw_values"))]
    #[schema(value_type = Object)]
    pub scores: BTreeMap<String, Option<f64>>,
    #[schema(example = "17-21")]
    pub age_group: Option<String>,
    #[schema(example = "male")]
    pub gender: Option<String>,
}

fn validate_raw_values(scores: &BTreeMap<String, Option<f64>>) -> Result<(), ValidationError> {
    let all_valid = scores
        .values()
        .flatten()
        .all(|value| value.is_finite() && *value >= 0.0);

    if all_valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("raw_value_range");
        error.message = Some("raw values must be finite and non-negative".into());
        Err(error)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventScoreResponse {
    pub event: EventId,
    pub label: String,
    pub value: f64,
    pub points: u8,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NextCategory {
    pub category: Category,
    pub points_needed: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTestResponse {
    pub total_score: u16,
    pub category: Category,
    pub passed: bool,
    pub event_scores: Vec<EventScoreResponse>,
    pub failing_events: Vec<EventId>,
    pub next_category: Option<NextCategory>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ScoreEventRequest {
    #[validate(range(min = 0.0, message = "value must be non-negative"))]
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreEventResponse {
    pub event: EventId,
    pub value: f64,
    pub points: u8,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventTableResponse {
    pub event: EventId,
    pub name: String,
    pub label: String,
    pub description: String,
    pub unit: Unit,
    pub direction: Direction,
    pub timed: bool,
    pub input_range: InputRange,
    pub breakpoints: Vec<Breakpoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category: Category,
    pub min_total: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StandardsResponse {
    pub min_event_points: u8,
    pub max_event_points: u8,
    pub min_total_points: u16,
    pub categories: Vec<CategoryResponse>,
}
