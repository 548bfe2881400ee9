use scoring::{
    ScoringEngine, ScoringTable,
    dto::acft::{
        CategoryResponse, EventScoreResponse, EventTableResponse, NextCategory,
        ScoreEventResponse, ScoreTestRequest, ScoreTestResponse, StandardsResponse,
    },
    error::Result,
    models::{
        Category, EventDefinition, EventId, EventInfo, MAX_EVENT_POINTS, MIN_EVENT_POINTS,
        MIN_TOTAL_POINTS, RawScores, parse_demographics,
    },
};

pub fn definition_to_response(definition: &EventDefinition) -> EventTableResponse {
    let info = EventInfo::for_event(definition.id());
    EventTableResponse {
        event: definition.id(),
        name: info.name.to_string(),
        label: info.label.to_string(),
        description: info.description.to_string(),
        unit: info.unit,
        direction: definition.direction(),
        timed: info.is_timed(),
        input_range: info.input_range,
        breakpoints: definition.breakpoints().to_vec(),
    }
}

/// List scoring charts for all events
pub fn list_event_tables(table: &ScoringTable) -> Vec<EventTableResponse> {
    table.definitions().map(definition_to_response).collect()
}

/// Get the scoring chart for one event
pub fn get_event_table(table: &ScoringTable, event: &str) -> Result<EventTableResponse> {
    let definition = table.get_definition_by_name(event)?;
    Ok(definition_to_response(definition))
}

/// Score a single event
pub fn score_event(table: &ScoringTable, event: &str, value: f64) -> Result<ScoreEventResponse> {
    let event: EventId = event.parse()?;
    let points = ScoringEngine::new(table).score_event(event, value)?;

    Ok(ScoreEventResponse {
        event,
        value,
        points,
        passed: points >= MIN_EVENT_POINTS,
    })
}

/// Score a complete test
pub fn score_test(table: &ScoringTable, request: &ScoreTestRequest) -> Result<ScoreTestResponse> {
    let (age_group, gender) =
        parse_demographics(request.age_group.as_deref(), request.gender.as_deref())?;
    let raw_scores = RawScores::try_from(request.scores.clone())?;

    let (result, rows) = ScoringEngine::new(table).score_breakdown(&raw_scores, age_group, gender)?;

    let event_scores = rows
        .iter()
        .map(|row| EventScoreResponse {
            event: row.event,
            label: EventInfo::for_event(row.event).label.to_string(),
            value: row.raw_value,
            points: row.points,
            passed: row.passed(),
        })
        .collect();

    Ok(ScoreTestResponse {
        total_score: result.total_score,
        category: result.category,
        passed: result.passed,
        failing_events: result.failing_events(),
        next_category: result
            .points_to_next_category()
            .map(|(category, points_needed)| NextCategory {
                category,
                points_needed,
            }),
        event_scores,
    })
}

/// Pass thresholds and category bands
pub fn standards() -> StandardsResponse {
    StandardsResponse {
        min_event_points: MIN_EVENT_POINTS,
        max_event_points: MAX_EVENT_POINTS,
        min_total_points: MIN_TOTAL_POINTS,
        categories: Category::ranked()
            .iter()
            .map(|category| CategoryResponse {
                category: *category,
                min_total: category.min_total(),
            })
            .collect(),
    }
}
