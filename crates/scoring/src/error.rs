use thiserror::Error;

use crate::models::EventId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    #[error("Unknown event: '{name}'. Available: {available}")]
    UnknownEvent { name: String, available: String },

    #[error("Incomplete input, missing scores for: {}", join_events(.missing))]
    IncompleteInput { missing: Vec<EventId> },

    #[error("Missing demographics: {field} must be selected")]
    MissingDemographics { field: &'static str },

    #[error("Invalid {field}: '{value}'")]
    InvalidDemographic { field: &'static str, value: String },

    #[error("Invalid value for {context}: {reason}")]
    InvalidValue { context: String, reason: String },

    #[error("Invalid scoring table for {event}: {reason}")]
    InvalidTable { event: EventId, reason: String },
}

pub type Result<T> = std::result::Result<T, ScoringError>;

fn join_events(events: &[EventId]) -> String {
    events
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ScoringError {
    pub fn unknown_event(name: impl Into<String>) -> Self {
        Self::UnknownEvent {
            name: name.into(),
            available: join_events(EventId::all()),
        }
    }

    pub fn invalid_value(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by what the caller sent, as opposed to a broken table.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::InvalidTable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_table_errors_are_not_input_errors() {
        assert!(ScoringError::unknown_event("legTuck").is_input_error());
        assert!(ScoringError::invalid_value("deadlift", "not finite").is_input_error());
        assert!(ScoringError::MissingDemographics { field: "gender" }.is_input_error());
        assert!(
            !ScoringError::InvalidTable {
                event: EventId::Plank,
                reason: "too few breakpoints".to_string()
            }
            .is_input_error()
        );
    }
}
