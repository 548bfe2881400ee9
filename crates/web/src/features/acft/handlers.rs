use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use scoring::dto::acft::{
    EventTableResponse, ScoreEventRequest, ScoreEventResponse, ScoreTestRequest,
    ScoreTestResponse, StandardsResponse,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/acft/events",
    responses(
        (status = 200, description = "Scoring charts for all six events", body = Vec<EventTableResponse>)
    ),
    tag = "acft"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Response, WebError> {
    let response = services::list_event_tables(state.table);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/acft/events/{event}",
    params(
        ("event" = String, Path, description = "Event id, e.g. deadlift or twoMileRun")
    ),
    responses(
        (status = 200, description = "Scoring chart for the event", body = EventTableResponse),
        (status = 404, description = "Unknown event")
    ),
    tag = "acft"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event): Path<String>,
) -> Result<Response, WebError> {
    let response = services::get_event_table(state.table, &event)?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/acft/events/{event}/score",
    params(
        ("event" = String, Path, description = "Event id, e.g. deadlift or twoMileRun")
    ),
    request_body = ScoreEventRequest,
    responses(
        (status = 200, description = "Points for the raw value", body = ScoreEventResponse),
        (status = 400, description = "Invalid value"),
        (status = 404, description = "Unknown event")
    ),
    tag = "acft"
)]
pub async fn score_event(
    State(state): State<AppState>,
    Path(event): Path<String>,
    Json(payload): Json<ScoreEventRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let response = services::score_event(state.table, &event, payload.value)?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/acft/score",
    request_body = ScoreTestRequest,
    responses(
        (status = 200, description = "Test scored successfully", body = ScoreTestResponse),
        (status = 400, description = "Missing scores or demographics"),
        (status = 404, description = "Unknown event in scores")
    ),
    tag = "acft"
)]
pub async fn score_test(
    State(state): State<AppState>,
    Json(payload): Json<ScoreTestRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let response = services::score_test(state.table, &payload)?;

    tracing::info!(
        total = response.total_score,
        category = %response.category,
        "Scored ACFT test"
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/acft/standards",
    responses(
        (status = 200, description = "Pass thresholds and category bands", body = StandardsResponse)
    ),
    tag = "acft"
)]
pub async fn get_standards() -> Result<Response, WebError> {
    Ok(Json(services::standards()).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use scoring::ScoringTable;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::routes;
    use crate::state::AppState;

    fn app() -> axum::Router {
        routes::router(AppState::new(ScoringTable::standard().unwrap()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn full_scores() -> Value {
        json!({
            "deadlift": 340,
            "powerThrow": 12.5,
            "pushups": 60,
            "sprintDragCarry": 120,
            "plank": 330,
            "twoMileRun": 810
        })
    }

    #[tokio::test]
    async fn test_list_events() {
        let (status, body) = send(Request::get("/api/acft/events").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        let events = body.as_array().unwrap();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0]["event"], "deadlift");
        assert_eq!(events[5]["direction"], "lowerIsBetter");
        assert_eq!(events[5]["timed"], true);
    }

    #[tokio::test]
    async fn test_get_unknown_event_is_not_found() {
        let (status, body) =
            send(Request::get("/api/acft/events/legTuck").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("legTuck"));
    }

    #[tokio::test]
    async fn test_score_single_event() {
        let (status, body) = send(post_json(
            "/api/acft/events/twoMileRun/score",
            json!({ "value": 900 }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["points"], 93);
        assert_eq!(body["passed"], true);
    }

    #[tokio::test]
    async fn test_score_event_rejects_negative_value() {
        let (status, body) =
            send(post_json("/api/acft/events/deadlift/score", json!({ "value": -1 }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
    }

    #[tokio::test]
    async fn test_score_full_test() {
        let (status, body) = send(post_json(
            "/api/acft/score",
            json!({ "scores": full_scores(), "ageGroup": "22-26", "gender": "female" }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalScore"], 600);
        assert_eq!(body["category"], "Black");
        assert_eq!(body["passed"], true);
        assert_eq!(body["eventScores"].as_array().unwrap().len(), 6);
        assert!(body["nextCategory"].is_null());
    }

    #[tokio::test]
    async fn test_score_missing_event_is_bad_request() {
        let mut scores = full_scores();
        scores.as_object_mut().unwrap().remove("plank");

        let (status, body) = send(post_json(
            "/api/acft/score",
            json!({ "scores": scores, "ageGroup": "22-26", "gender": "male" }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"], json!(["plank"]));
    }

    #[tokio::test]
    async fn test_score_missing_demographics_is_bad_request() {
        let (status, body) = send(post_json(
            "/api/acft/score",
            json!({ "scores": full_scores(), "ageGroup": "", "gender": "male" }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("age group"));
    }

    #[tokio::test]
    async fn test_score_unknown_event_in_scores_is_not_found() {
        let mut scores = full_scores();
        scores["legTuck"] = json!(10);

        let (status, _) = send(post_json(
            "/api/acft/score",
            json!({ "scores": scores, "ageGroup": "22-26", "gender": "male" }),
        ))
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_standards() {
        let (status, body) =
            send(Request::get("/api/acft/standards").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["minTotalPoints"], 360);
        assert_eq!(body["categories"][0]["category"], "Black");
        assert_eq!(body["categories"][0]["minTotal"], 540);
    }
}
