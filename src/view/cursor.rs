//! Cursor stabilization.
//! A mutating command may delete the row under the cursor; these rules pick
//! the identity the cursor should land on after the refresh so repeated
//! single-key deletions walk down the table instead of jumping to the top.

use crate::models::TimerId;
use crate::view::projection::Row;

/// Neighbor rule, evaluated against the pre-mutation row sequence:
/// prefer the row immediately after the selected one, else the row
/// immediately before, else nothing (the selected row was the only row).
/// Purely positional; it does not care which rows the mutation removes.
pub fn neighbor_target(rows: &[Row], selected: TimerId) -> Option<TimerId> {
    let pos = rows.iter().position(|r| r.id == selected)?;
    if pos + 1 < rows.len() {
        Some(rows[pos + 1].id)
    } else if pos > 0 {
        Some(rows[pos - 1].id)
    } else {
        None
    }
}

/// Re-resolve a stabilization target against the post-refresh sequence.
/// A surviving target wins. Otherwise walk outward from the target's old
/// position (rows after it first, then rows before) and take the nearest
/// old neighbor that still exists. `None` means the renderer's default
/// position applies.
pub fn reselect(old_rows: &[Row], new_rows: &[Row], target: Option<TimerId>) -> Option<TimerId> {
    let target = target?;
    let alive = |id: TimerId| new_rows.iter().any(|r| r.id == id);

    if alive(target) {
        return Some(target);
    }

    let pos = old_rows.iter().position(|r| r.id == target)?;
    for offset in 1..old_rows.len() {
        if let Some(row) = old_rows.get(pos + offset)
            && alive(row.id)
        {
            return Some(row.id);
        }
        if offset <= pos && alive(old_rows[pos - offset].id) {
            return Some(old_rows[pos - offset].id);
        }
    }
    None
}
