//! User-invocable commands over the timer collection.
//! Every command follows the same shape: resolve the selected row to its
//! timer, mutate the engine, refresh the row sequence, then re-select.
//! An engine failure propagates before the refresh, so the view keeps its
//! pre-mutation rows and the user can retry.

use crate::engine::TimerEngine;
use crate::errors::AppResult;
use crate::models::Timer;
use crate::view::cursor::{neighbor_target, reselect};
use crate::view::state::ViewState;

/// Options for clone-like commands. The UI resolves any description prompt
/// before dispatch; the dispatcher itself never prompts.
#[derive(Debug, Default, Clone)]
pub struct CloneOptions {
    pub description: Option<String>,
}

pub struct Dispatcher;

impl Dispatcher {
    /// Cancel the selected timer, keeping the cursor on a neighbor of the
    /// removed row.
    pub fn cancel_selected(engine: &mut dyn TimerEngine, view: &mut ViewState) -> AppResult<Timer> {
        let timer = view.lookup_timer(engine)?;
        let target = neighbor_target(view.rows(), timer.id());
        engine.cancel(timer.id(), false)?;

        let old_rows = view.rows().to_vec();
        view.refresh(&engine.list_timers());
        view.select(reselect(&old_rows, view.rows(), target));
        Ok(timer)
    }

    /// Remove every finished timer. No fine-grained stabilization: several
    /// non-contiguous rows may vanish at once, so a surviving selection is
    /// kept and anything else falls back to the default position.
    pub fn remove_finished(engine: &mut dyn TimerEngine, view: &mut ViewState) -> AppResult<usize> {
        let removed = engine.remove_all_finished()?;
        let selected = view.selected();
        view.refresh(&engine.list_timers());
        view.select(selected);
        Ok(removed)
    }

    /// Clone the selected timer. The new timer gets a fresh creation
    /// timestamp, so the selection moves to the default position.
    pub fn clone_selected(
        engine: &mut dyn TimerEngine,
        view: &mut ViewState,
        opts: CloneOptions,
    ) -> AppResult<Timer> {
        let timer = view.lookup_timer(engine)?;
        let cloned = engine.clone_timer(timer.id(), opts.description)?;
        view.refresh(&engine.list_timers());
        view.select(None);
        Ok(cloned)
    }

    /// Reschedule: clone the selected timer, then cancel the original with
    /// completion hooks suppressed. Equivalent to performing those two
    /// commands manually in sequence.
    pub fn reschedule_selected(
        engine: &mut dyn TimerEngine,
        view: &mut ViewState,
        opts: CloneOptions,
    ) -> AppResult<Timer> {
        let timer = view.lookup_timer(engine)?;
        let cloned = engine.clone_timer(timer.id(), opts.description)?;
        engine.cancel(timer.id(), true)?;
        view.refresh(&engine.list_timers());
        view.select(None);
        Ok(cloned)
    }

    /// Rewrite the description of the selected timer. An empty string
    /// clears the field; the row then shows the no-description sentinel.
    pub fn rewrite_description(
        engine: &mut dyn TimerEngine,
        view: &mut ViewState,
        text: &str,
    ) -> AppResult<()> {
        let timer = view.lookup_timer(engine)?;
        let description = match text.trim() {
            "" => None,
            t => Some(t.to_string()),
        };
        engine.set_description(timer.id(), description)?;
        let selected = view.selected();
        view.refresh(&engine.list_timers());
        view.select(selected);
        Ok(())
    }

    /// Start a new timer. Keeps the current selection when there is one.
    pub fn add_timer(
        engine: &mut dyn TimerEngine,
        view: &mut ViewState,
        duration_secs: i64,
        description: Option<String>,
    ) -> AppResult<Timer> {
        let created = engine.create(duration_secs, description)?;
        let selected = view.selected();
        view.refresh(&engine.list_timers());
        view.select(selected);
        Ok(created)
    }
}
