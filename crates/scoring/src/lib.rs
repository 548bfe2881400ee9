//! ACFT scoring: event charts, point interpolation and test classification.

pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod tables;

pub use error::{Result, ScoringError};
pub use models::{AgeGroup, Category, EventId, Gender, RawScores, TestResult};
pub use services::{ScoringEngine, score_event, score_test};
pub use tables::ScoringTable;
