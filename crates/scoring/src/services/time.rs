use crate::error::{Result, ScoringError};

/// Formats a duration in seconds as `m:ss`, e.g. `810` -> `"13:30"`.
///
/// Fractions of a second are rounded to the nearest whole second.
pub fn format_seconds(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Parses either plain seconds (`"810"`, `"12.5"`) or `m:ss` (`"13:30"`).
pub fn parse_duration(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let invalid = |reason: &str| ScoringError::invalid_value(format!("duration '{}'", input), reason);

    if trimmed.is_empty() {
        return Err(invalid("empty input"));
    }

    let seconds = match trimmed.split_once(':') {
        None => trimmed
            .parse::<f64>()
            .map_err(|_| invalid("expected seconds or m:ss"))?,
        Some((minutes, seconds)) => {
            if !is_digits(minutes) {
                return Err(invalid("minutes must be a whole number"));
            }
            if seconds.len() != 2 || !is_digits(seconds) {
                return Err(invalid("seconds must have two digits"));
            }
            let minutes: u32 = minutes
                .parse()
                .map_err(|_| invalid("duration is too large"))?;
            let seconds: u32 = seconds
                .parse()
                .map_err(|_| invalid("seconds must be a whole number"))?;
            if seconds >= 60 {
                return Err(invalid("seconds must be below 60"));
            }
            let total = minutes
                .checked_mul(60)
                .and_then(|m| m.checked_add(seconds))
                .ok_or_else(|| invalid("duration is too large"))?;
            f64::from(total)
        }
    };

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(invalid("must be a non-negative number"));
    }

    Ok(seconds)
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}
