//! Timer engine interface.
//! The view core never owns timers; it reads snapshots and issues explicit
//! mutations through this trait. `LocalEngine` is the bundled in-memory
//! implementation used by the CLI and the tests.

use crate::errors::AppResult;
use crate::models::{Timer, TimerId};

pub mod local;

pub use local::LocalEngine;

pub trait TimerEngine {
    /// Snapshot of all live timers, ordered by creation time ascending.
    fn list_timers(&self) -> Vec<Timer>;

    /// Resolve an identity to its live timer, if any.
    fn find(&self, id: TimerId) -> Option<Timer>;

    /// Start a new timer running from now.
    fn create(&mut self, duration_secs: i64, description: Option<String>) -> AppResult<Timer>;

    /// Stop and remove a timer. Cancel hooks run unless `suppress_hooks`
    /// is set (reschedule suppresses them for the original timer).
    fn cancel(&mut self, id: TimerId, suppress_hooks: bool) -> AppResult<()>;

    /// Remove every finished timer. Removing zero timers is a valid no-op.
    fn remove_all_finished(&mut self) -> AppResult<usize>;

    /// Create a new timer with the same duration as `id`, running from now.
    /// The description is copied unless an override is supplied.
    fn clone_timer(&mut self, id: TimerId, description: Option<String>) -> AppResult<Timer>;

    /// Replace the description of a timer. `None` clears it.
    fn set_description(&mut self, id: TimerId, description: Option<String>) -> AppResult<()>;
}
