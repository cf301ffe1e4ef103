//! View state: the materialized row sequence, the active sort order and the
//! selected identity. The selection is a timer id, never a screen offset;
//! the renderer translates it back to a position on every draw.

use crate::engine::TimerEngine;
use crate::errors::{AppError, AppResult};
use crate::models::{Timer, TimerId};
use crate::view::projection::{Row, project};
use crate::view::sort::{SortSpec, sort_rows};

#[derive(Default)]
pub struct ViewState {
    rows: Vec<Row>,
    sort: SortSpec,
    selected: Option<TimerId>,
}

impl ViewState {
    pub fn new(sort: SortSpec) -> Self {
        Self {
            rows: Vec::new(),
            sort,
            selected: None,
        }
    }

    /// Replace the whole row sequence with a fresh projection of `timers`,
    /// ordered by the active sort. Never touches the selection; callers
    /// decide whether to keep or recompute it.
    pub fn refresh(&mut self, timers: &[Timer]) {
        let mut rows = project(timers);
        sort_rows(&mut rows, self.sort);
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Change the sort order and re-order the current rows in place.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        sort_rows(&mut self.rows, sort);
    }

    pub fn row_at(&self, id: TimerId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn position_of(&self, id: TimerId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn selected(&self) -> Option<TimerId> {
        self.selected
    }

    /// Set the selection, falling back to the first row when the requested
    /// identity is absent (the renderer's default position).
    pub fn select(&mut self, id: Option<TimerId>) {
        self.selected = match id {
            Some(id) if self.row_at(id).is_some() => Some(id),
            _ => self.rows.first().map(|r| r.id),
        };
    }

    pub fn select_next(&mut self) {
        self.step(1);
    }

    pub fn select_prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let Some(pos) = self.selected.and_then(|id| self.position_of(id)) else {
            self.selected = self.rows.first().map(|r| r.id);
            return;
        };
        let next = pos.saturating_add_signed(delta).min(self.rows.len() - 1);
        self.selected = Some(self.rows[next].id);
    }

    /// Resolve the selected row back to its authoritative timer before a
    /// mutating command. Commands operate on timers, not rows.
    pub fn lookup_timer(&self, engine: &dyn TimerEngine) -> AppResult<Timer> {
        let id = self.selected.ok_or(AppError::NoSelection)?;
        engine
            .find(id)
            .ok_or_else(|| AppError::StaleIdentity(id.to_string()))
    }
}
