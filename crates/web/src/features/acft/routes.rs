use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{get_event, get_standards, list_events, score_event, score_test};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/:event", get(get_event))
        .route("/events/:event/score", post(score_event))
        .route("/score", post(score_test))
        .route("/standards", get(get_standards))
}
