use chrono::{DateTime, Duration, Local};
use serde::Serialize;
use std::fmt;

/// Identity of a timer: its creation timestamp.
/// The engine guarantees uniqueness (colliding timestamps are bumped by one
/// microsecond at creation), so this doubles as the primary key and the
/// natural sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TimerId(pub DateTime<Local>);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S%.6f"))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Timer {
    pub created: DateTime<Local>, // identity, unique within an engine
    pub duration_secs: i64,
    pub finished: bool,
    pub description: Option<String>,
}

impl Timer {
    /// Constructor for timers started from the view: creation time is "now"
    /// and the finished flag starts cleared. The engine may still bump
    /// `created` to keep identities unique.
    pub fn starting_now(duration_secs: i64, description: Option<String>) -> Self {
        Self {
            created: Local::now(),
            duration_secs,
            finished: false,
            description,
        }
    }

    pub fn id(&self) -> TimerId {
        TimerId(self.created)
    }

    pub fn end(&self) -> DateTime<Local> {
        self.created + Duration::seconds(self.duration_secs)
    }

    pub fn created_str(&self) -> String {
        self.created.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
