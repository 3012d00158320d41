//! Column planning: which detail columns fit, and how wide the primary is.

use super::column::Column;
use super::{COLUMN_SPACING, DEFAULT_WIDTH, MIN_PRIMARY_WIDTH, MIN_WIDTH};

/// Resolve the width budget from what the destination reported.
///
/// No report (or a zero width) means [`DEFAULT_WIDTH`]; anything narrower
/// than [`MIN_WIDTH`] is raised to it.
pub fn clamp_width(reported: Option<usize>) -> usize {
    match reported {
        Some(width) if width > 0 => width.max(MIN_WIDTH),
        _ => DEFAULT_WIDTH,
    }
}

/// The retained columns, with the primary column's final width filled in.
#[derive(Debug)]
pub struct TableLayout<'a> {
    columns: Vec<Column<'a>>,
}

impl<'a> TableLayout<'a> {
    /// All retained columns, primary first.
    pub fn columns(&self) -> &[Column<'a>] {
        &self.columns
    }

    /// Retained detail columns (everything after the primary).
    pub fn details(&self) -> &[Column<'a>] {
        self.columns.get(1..).unwrap_or(&[])
    }

    pub fn primary(&self) -> Option<&Column<'a>> {
        self.columns.first()
    }

    pub fn primary_width(&self) -> usize {
        self.columns.first().map_or(0, |c| c.width)
    }
}

/// Drop trailing columns until the primary column keeps at least
/// [`MIN_PRIMARY_WIDTH`] of `budget`, then size the primary column.
///
/// Columns are considered strictly in order; the first one that does not
/// fit is dropped together with everything after it. The primary column then
/// takes what is left, but no more than `widest` (see
/// [`super::widest_primary_value`]).
pub fn plan_columns<'a>(budget: usize, mut columns: Vec<Column<'a>>, widest: usize) -> TableLayout<'a> {
    let mut remaining = budget;
    let mut keep = columns.len();

    for (idx, column) in columns.iter().enumerate().skip(1) {
        let footprint = column.width + COLUMN_SPACING;
        if remaining < footprint + MIN_PRIMARY_WIDTH {
            keep = idx;
            break;
        }
        remaining -= footprint;
    }
    columns.truncate(keep);

    let mut primary_width = remaining.min(widest);
    if columns.len() > 1 {
        primary_width = primary_width.max(MIN_PRIMARY_WIDTH);
    }
    if let Some(primary) = columns.first_mut() {
        primary.width = primary_width;
    }

    TableLayout { columns }
}
