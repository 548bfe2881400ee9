use std::collections::BTreeMap;

use scoring::{
    ScoringEngine, ScoringError, ScoringTable,
    models::{
        AgeGroup, EventId, EventInfo, EventScore, Gender, RawScores, TestResult, parse_demographics,
    },
    services::time::{format_seconds, parse_duration},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{CliError, Result};

/// A raw value as written in an input file: plain number, or `m:ss` text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawInput {
    Number(f64),
    Text(String),
}

impl RawInput {
    pub fn to_value(&self) -> scoring::Result<f64> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => parse_duration(text),
        }
    }
}

/// One soldier's test in a batch file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    pub scores: BTreeMap<String, Option<RawInput>>,
}

impl BatchEntry {
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => format!("{}. {}", index + 1, name),
            _ => format!("entry {}", index + 1),
        }
    }

    pub fn demographics(&self) -> scoring::Result<(Option<AgeGroup>, Option<Gender>)> {
        parse_demographics(self.age_group.as_deref(), self.gender.as_deref())
    }

    pub fn raw_scores(&self) -> scoring::Result<RawScores> {
        let mut values = Vec::with_capacity(self.scores.len());
        for (name, input) in &self.scores {
            let value = input.as_ref().map(RawInput::to_value).transpose()?;
            values.push((name.as_str(), value));
        }
        RawScores::from_pairs(values)
    }

    /// Raw values outside the range usually entered for the event.
    pub fn range_warnings(&self, raw_scores: &RawScores) -> Vec<String> {
        EventId::all()
            .iter()
            .filter_map(|event| {
                let value = raw_scores.get(*event)?;
                let info = EventInfo::for_event(*event);
                if info.input_range.contains(value) {
                    return None;
                }
                let shown = |v: f64| {
                    if info.is_timed() {
                        format_seconds(v)
                    } else {
                        v.to_string()
                    }
                };
                Some(format!(
                    "{} is outside the usual range {}-{} for {}",
                    shown(value),
                    shown(info.input_range.min),
                    shown(info.input_range.max),
                    event
                ))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TestResult>,
    #[serde(skip)]
    pub rows: Vec<EventScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    /// Scores every entry independently; one bad entry does not stop the rest.
    pub fn score(table: &ScoringTable, entries: &[BatchEntry]) -> Self {
        let engine = ScoringEngine::new(table);
        let outcomes = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let label = entry.label(index);
                match score_entry(&engine, entry) {
                    Ok((result, rows, warnings)) => BatchOutcome {
                        label,
                        result: Some(result),
                        rows,
                        error: None,
                        warnings,
                    },
                    Err(e) => BatchOutcome {
                        label,
                        result: None,
                        rows: Vec::new(),
                        error: Some(e.to_string()),
                        warnings: Vec::new(),
                    },
                }
            })
            .collect();

        Self { outcomes }
    }

    pub fn from_json(table: &ScoringTable, json: &str) -> Result<Self> {
        let entries: Vec<BatchEntry> = serde_json::from_str(json)?;
        if entries.is_empty() {
            return Err(CliError::BatchError("batch file contains no entries".to_string()));
        }
        Ok(Self::score(table, &entries))
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_some()).count()
    }

    pub fn error_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_some()).count()
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.result.as_ref().is_some_and(|r| r.passed))
            .count()
    }

    pub fn log_warnings(&self) {
        for outcome in &self.outcomes {
            for warning in &outcome.warnings {
                warn!("{}: {}", outcome.label, warning);
            }
        }
    }
}

fn score_entry(
    engine: &ScoringEngine<'_>,
    entry: &BatchEntry,
) -> std::result::Result<(TestResult, Vec<EventScore>, Vec<String>), ScoringError> {
    let (age_group, gender) = entry.demographics()?;
    let raw_scores = entry.raw_scores()?;
    let (result, rows) = engine.score_breakdown(&raw_scores, age_group, gender)?;
    let warnings = entry.range_warnings(&raw_scores);
    Ok((result, rows, warnings))
}
