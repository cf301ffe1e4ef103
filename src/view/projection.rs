//! Row projection: maps the engine's timer snapshot into display rows.
//! Pure and total; sorting is applied later by the view state, never here.

use crate::models::{Timer, TimerId};

/// Display value for a timer without a description.
pub const NO_DESCRIPTION: &str = "-";

/// Marker shown in the Done column for finished timers.
pub const FINISHED_MARK: &str = "✔";

/// One display row. Rows are ephemeral: the whole sequence is rebuilt from
/// scratch on every refresh and identified only by the timer id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: TimerId,
    pub start: String,
    pub end: String,
    pub finished: String,
    pub description: String,
}

impl Row {
    fn from_timer(timer: &Timer) -> Self {
        Self {
            id: timer.id(),
            start: timer.created_str(),
            end: timer.end_str(),
            finished: if timer.finished {
                FINISHED_MARK.to_string()
            } else {
                String::new()
            },
            description: match &timer.description {
                Some(d) if !d.trim().is_empty() => d.clone(),
                _ => NO_DESCRIPTION.to_string(),
            },
        }
    }
}

/// Project every timer into exactly one row, preserving input order.
pub fn project(timers: &[Timer]) -> Vec<Row> {
    timers.iter().map(Row::from_timer).collect()
}
