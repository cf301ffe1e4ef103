//! Table rendering for the timer view.
//! Start/End/Done are fixed-width; Description flexes to fit its widest
//! value. The whole table is re-rendered on every refresh — no diffing.

use crate::view::projection::Row;
use crate::view::sort::{SortColumn, SortSpec};
use unicode_width::UnicodeWidthStr;

/// Marker shown in front of the selected row.
pub const SELECTION_MARK: &str = ">";

const START_WIDTH: usize = 19; // "YYYY-MM-DD HH:MM:SS"
const END_WIDTH: usize = 19;
const DONE_WIDTH: usize = 6;

struct Column {
    header: &'static str,
    column: SortColumn,
    width: usize,
}

/// Render the row sequence with the selected row marked and the active sort
/// column flagged with a direction indicator.
pub fn render(rows: &[Row], selected_pos: Option<usize>, sort: SortSpec) -> String {
    let desc_width = rows
        .iter()
        .map(|r| r.description.width())
        .chain([SortColumn::Description.header().width() + 2])
        .max()
        .unwrap_or(0);

    let columns = [
        Column {
            header: SortColumn::Start.header(),
            column: SortColumn::Start,
            width: START_WIDTH,
        },
        Column {
            header: SortColumn::End.header(),
            column: SortColumn::End,
            width: END_WIDTH,
        },
        Column {
            header: SortColumn::Finished.header(),
            column: SortColumn::Finished,
            width: DONE_WIDTH,
        },
        Column {
            header: SortColumn::Description.header(),
            column: SortColumn::Description,
            width: desc_width,
        },
    ];

    let mut out = String::new();

    // Header
    out.push_str("  ");
    for col in &columns {
        let title = if col.column == sort.column {
            format!("{} {}", col.header, sort.direction.indicator())
        } else {
            col.header.to_string()
        };
        push_padded(&mut out, &title, col.width);
    }
    out.push('\n');

    // Rows
    for (i, row) in rows.iter().enumerate() {
        if selected_pos == Some(i) {
            out.push_str(SELECTION_MARK);
            out.push(' ');
        } else {
            out.push_str("  ");
        }
        push_padded(&mut out, &row.start, START_WIDTH);
        push_padded(&mut out, &row.end, END_WIDTH);
        push_padded(&mut out, &row.finished, DONE_WIDTH);
        push_padded(&mut out, &row.description, desc_width);
        out.push('\n');
    }

    if rows.is_empty() {
        out.push_str("  (no timers)\n");
    }

    out
}

/// Pad by display width so wide characters line up.
fn push_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    let w = text.width();
    for _ in w..width {
        out.push(' ');
    }
    out.push(' ');
}
