pub mod engine;
pub mod time;

pub use engine::{ScoringEngine, score_event, score_test};
