// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-off projection: expanding an approved request into per-day cell
//! overrides.
//!
//! Projection runs after shift expansion and overwrites whatever the
//! shifts put in the covered cells. Projected cells are marked read-only
//! so direct edits cannot chip away at approved time off. Overlapping
//! requests apply in input order, last write wins per cell.

use crate::state::DayEmployeeRow;
use salon_rota_domain::{Cell, TimeOffRequest, TimeOffScope};
use std::ops::Range;
use time::Date;

/// The cell overrides one request contributes to one day's row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOverride {
    /// The read-only cell written into every covered index.
    pub cell: Cell,
    /// The covered cell index range.
    pub range: Range<usize>,
    /// The note the row takes, e.g. "Vacation full day".
    pub note: String,
}

/// Projects a request onto one calendar day.
///
/// Returns `None` when the request is not approved or does not cover
/// `date`. The scope selects a cell index range: the whole row, its
/// first half, or its second half (odd cell counts give the afternoon
/// the middle cell).
#[must_use]
pub fn project(request: &TimeOffRequest, date: Date, cell_count: usize) -> Option<DayOverride> {
    if !request.is_approved() || !request.covers(date) {
        return None;
    }

    let half: usize = cell_count / 2;
    let range: Range<usize> = match request.scope {
        TimeOffScope::AllDay => 0..cell_count,
        TimeOffScope::MorningHalf => 0..half,
        TimeOffScope::AfternoonHalf => half..cell_count,
    };

    Some(DayOverride {
        cell: Cell::time_off(request.time_off_type.as_cell_type()),
        range,
        note: request.note_text(),
    })
}

/// Applies an override to a row, overwriting cells and notes.
///
/// # Panics
///
/// Panics if the override's range was projected against a different
/// cell count than the row carries.
pub fn apply_override(row: &mut DayEmployeeRow, day_override: &DayOverride) {
    for cell in &mut row.cells[day_override.range.clone()] {
        *cell = day_override.cell;
    }
    row.notes = day_override.note.clone();
}
