use std::fmt::Write;

use scoring::{
    models::{EventDefinition, EventInfo, EventScore, TestResult},
    services::time::format_seconds,
};

/// Raw value in the unit the event is usually read in.
pub fn display_value(info: &EventInfo, value: f64) -> String {
    if info.is_timed() {
        format_seconds(value)
    } else {
        format!("{} {}", value, info.unit.abbreviation())
    }
}

pub fn render_result(result: &TestResult, rows: &[EventScore]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "ACFT Results: {} ({})", result.total_score, result.category);
    let _ = writeln!(out);
    for row in rows {
        let info = EventInfo::for_event(row.event);
        let marker = if row.passed() { " " } else { "!" };
        let _ = writeln!(
            out,
            "{} {:<32} {:>10} {:>4}",
            marker,
            info.label,
            display_value(&info, row.raw_value),
            row.points
        );
    }
    let _ = writeln!(out);

    if result.passed {
        let _ = writeln!(
            out,
            "Congratulations! You passed the ACFT with a {} score.",
            result.category
        );
        if let Some((next, needed)) = result.points_to_next_category() {
            let _ = writeln!(out, "{} more points to reach {}.", needed, next);
        }
    } else {
        let failing: Vec<&str> = result
            .failing_events()
            .iter()
            .map(|event| EventInfo::for_event(*event).label)
            .collect();
        let _ = writeln!(out, "You did not meet the minimum ACFT standards.");
        if !failing.is_empty() {
            let _ = writeln!(out, "Events below 60 points: {}", failing.join(", "));
        }
    }

    out
}

pub fn render_table(definition: &EventDefinition) -> String {
    let info = EventInfo::for_event(definition.id());
    let mut out = String::new();

    let _ = writeln!(out, "{} [{}]", info.name, definition.id());
    for bp in definition.breakpoints() {
        let _ = writeln!(out, "  {:>3}  {}", bp.points, display_value(&info, bp.value));
    }

    out
}
