//! Sort order for the row sequence.
//! Timestamps are formatted as `%Y-%m-%d %H:%M:%S`, so comparing the display
//! strings compares chronologically; ties break on the timer id.

use crate::errors::AppError;
use crate::view::projection::Row;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Start,
    End,
    Finished,
    Description,
}

impl SortColumn {
    pub fn header(&self) -> &'static str {
        match self {
            SortColumn::Start => "Start",
            SortColumn::End => "End",
            SortColumn::Finished => "Done",
            SortColumn::Description => "Description",
        }
    }

    fn key<'a>(&self, row: &'a Row) -> &'a str {
        match self {
            SortColumn::Start => &row.start,
            SortColumn::End => &row.end,
            SortColumn::Finished => &row.finished,
            SortColumn::Description => &row.description,
        }
    }
}

impl FromStr for SortColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "start" | "created" => Ok(SortColumn::Start),
            "end" => Ok(SortColumn::End),
            "done" | "finished" => Ok(SortColumn::Finished),
            "description" | "desc" => Ok(SortColumn::Description),
            other => Err(AppError::InvalidSortColumn(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: SortColumn::Start,
            direction: SortDirection::Asc,
        }
    }
}

impl FromStr for SortSpec {
    type Err = AppError;

    /// Accepts `COLUMN`, `COLUMN:asc` or `COLUMN:desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (col, dir) = match s.split_once(':') {
            Some((c, d)) => (c, Some(d)),
            None => (s, None),
        };
        let column = col.parse()?;
        let direction = match dir {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => return Err(AppError::InvalidSortColumn(format!("{}:{}", col, other))),
        };
        Ok(Self { column, direction })
    }
}

/// Sort the row sequence by the active column and direction. Only the
/// column comparison honors the direction; the id tiebreak stays ascending
/// so equal-keyed rows keep their relative order when the direction flips.
pub fn sort_rows(rows: &mut [Row], spec: SortSpec) {
    rows.sort_by(|a, b| {
        let keys = spec.column.key(a).cmp(spec.column.key(b));
        let ord = match spec.direction {
            SortDirection::Asc => keys,
            SortDirection::Desc => keys.reverse(),
        };
        ord.then_with(|| a.id.cmp(&b.id))
    });
}
