use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::ScoringError;
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Scoring(ScoringError),
    Validation(ValidationErrors),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scoring(e) => write!(f, "Scoring error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Scoring(ScoringError::UnknownEvent { .. }) => StatusCode::NOT_FOUND,
            Self::Scoring(e) if e.is_input_error() => StatusCode::BAD_REQUEST,
            Self::Scoring(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        };

        let body = match &self {
            Self::Scoring(ScoringError::IncompleteInput { missing }) => {
                json!({
                    "error": "Incomplete scores",
                    "details": missing.iter().map(|e| e.as_str()).collect::<Vec<_>>()
                })
            }
            Self::Scoring(e) if !e.is_input_error() => {
                tracing::error!("Scoring table error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Scoring(e) => {
                json!({
                    "error": e.to_string()
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<ScoringError> for WebError {
    fn from(error: ScoringError) -> Self {
        Self::Scoring(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use scoring::EventId;

    #[test]
    fn test_status_codes_for_scoring_errors() {
        let status = |e: ScoringError| WebError::from(e).into_response().status();

        assert_eq!(
            status(ScoringError::unknown_event("legTuck")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(ScoringError::IncompleteInput {
                missing: vec![EventId::Plank]
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(ScoringError::MissingDemographics { field: "gender" }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(ScoringError::InvalidTable {
                event: EventId::Deadlift,
                reason: "empty".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
