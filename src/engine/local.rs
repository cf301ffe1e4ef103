use super::TimerEngine;
use crate::errors::{AppError, AppResult};
use crate::models::{Timer, TimerId};
use chrono::Duration;

pub type CancelHook = Box<dyn FnMut(&Timer)>;

/// In-memory timer collection. Keeps timers ordered by creation time and
/// guarantees creation-timestamp uniqueness, which the view relies on for
/// row identity.
#[derive(Default)]
pub struct LocalEngine {
    timers: Vec<Timer>,
    cancel_hooks: Vec<CancelHook>,
}

impl LocalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook invoked whenever a timer is cancelled without
    /// `suppress_hooks`.
    pub fn on_cancel(&mut self, hook: CancelHook) {
        self.cancel_hooks.push(hook);
    }

    /// Insert a pre-built timer, bumping its creation timestamp until it is
    /// unique. Used by seeding and by tests that need fixed timestamps.
    pub fn insert(&mut self, mut timer: Timer) -> Timer {
        while self.index_of(TimerId(timer.created)).is_some() {
            timer.created = timer.created + Duration::microseconds(1);
        }
        self.timers.push(timer.clone());
        self.timers.sort_by_key(|t| t.created);
        timer
    }

    /// Flip the finished flag on a live timer. The real expiry machinery is
    /// out of scope; tests and seeded sessions use this instead.
    pub fn mark_finished(&mut self, id: TimerId) -> AppResult<()> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| AppError::Engine(format!("unknown timer {}", id)))?;
        self.timers[idx].finished = true;
        Ok(())
    }

    fn index_of(&self, id: TimerId) -> Option<usize> {
        self.timers.iter().position(|t| t.id() == id)
    }
}

impl TimerEngine for LocalEngine {
    fn list_timers(&self) -> Vec<Timer> {
        self.timers.clone()
    }

    fn find(&self, id: TimerId) -> Option<Timer> {
        self.index_of(id).map(|i| self.timers[i].clone())
    }

    fn create(&mut self, duration_secs: i64, description: Option<String>) -> AppResult<Timer> {
        if duration_secs <= 0 {
            return Err(AppError::Engine(format!(
                "duration must be positive, got {}s",
                duration_secs
            )));
        }
        Ok(self.insert(Timer::starting_now(duration_secs, description)))
    }

    fn cancel(&mut self, id: TimerId, suppress_hooks: bool) -> AppResult<()> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| AppError::Engine(format!("unknown timer {}", id)))?;
        let timer = self.timers.remove(idx);
        if !suppress_hooks {
            for hook in &mut self.cancel_hooks {
                hook(&timer);
            }
        }
        Ok(())
    }

    fn remove_all_finished(&mut self) -> AppResult<usize> {
        let before = self.timers.len();
        self.timers.retain(|t| !t.finished);
        Ok(before - self.timers.len())
    }

    fn clone_timer(&mut self, id: TimerId, description: Option<String>) -> AppResult<Timer> {
        let original = self
            .find(id)
            .ok_or_else(|| AppError::Engine(format!("unknown timer {}", id)))?;
        let description = description.or(original.description);
        Ok(self.insert(Timer::starting_now(original.duration_secs, description)))
    }

    fn set_description(&mut self, id: TimerId, description: Option<String>) -> AppResult<()> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| AppError::Engine(format!("unknown timer {}", id)))?;
        self.timers[idx].description = description;
        Ok(())
    }
}
