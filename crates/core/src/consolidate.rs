// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Block consolidation: collapsing cell runs into shift blocks and
//! expanding persisted shifts back onto cells.
//!
//! ## Invariants
//!
//! - Output blocks are non-overlapping and maximal: no two adjacent
//!   blocks share a type, and together they cover exactly the non-empty
//!   cells of the input, in order.
//! - [`shift_records_from_row`] is the only producer of new shift
//!   records, which keeps persisted work shifts non-overlapping by
//!   construction.
//! - Expansion never drops a shift silently: an unresolvable boundary
//!   becomes an [`AssemblyWarning`] and the shift is excluded from that
//!   render.

use crate::state::DayEmployeeRow;
use salon_rota_audit::{AssemblyWarning, ShiftBoundary};
use salon_rota_domain::{
    Cell, CellType, ShiftRecord, ShiftType, TimeGrid, TimeSlot, hours_from_cell_run,
};

/// A maximal run of consecutive same-type cells.
///
/// Indices address cells; the block spans `slots[start]..slots[end]` on
/// the grid the cells were built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBlock {
    /// The shared marking of every cell in the block.
    pub block_type: ShiftType,
    /// First cell index of the block.
    pub start: usize,
    /// One past the last cell index of the block.
    pub end: usize,
}

impl CellBlock {
    /// Returns the number of cells in the block.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.end - self.start
    }
}

/// Collapses a cell sequence into maximal same-type blocks.
///
/// Scans left to right: an empty cell never opens a block and closes any
/// open one; a type change closes the open block and opens the next.
#[must_use]
pub fn consolidate(cells: &[Cell]) -> Vec<CellBlock> {
    let mut blocks: Vec<CellBlock> = Vec::new();
    let mut open: Option<CellBlock> = None;

    for (index, cell) in cells.iter().enumerate() {
        let cell_type: Option<ShiftType> = cell.cell_type.as_shift_type();

        match (&mut open, cell_type) {
            (Some(block), Some(next_type)) if block.block_type == next_type => {
                block.end = index + 1;
            }
            (current, next_type) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                *current = next_type.map(|block_type| CellBlock {
                    block_type,
                    start: index,
                    end: index + 1,
                });
            }
        }
    }

    if let Some(block) = open {
        blocks.push(block);
    }

    blocks
}

/// Expands a persisted shift onto a row's cells.
///
/// Boundary times are resolved against the grid; the end boundary reads
/// `"00:00"` as end of day. Every cell in the resolved span takes the
/// shift's type and id.
///
/// # Errors
///
/// Returns the [`AssemblyWarning`] describing why the shift could not be
/// placed (unparseable or off-grid boundary, or a span of no cells).
/// The cells are untouched in that case.
///
/// # Panics
///
/// Panics if `cells` was not built with `grid.cell_count()` cells.
pub fn expand_shift(
    cells: &mut [Cell],
    shift: &ShiftRecord,
    grid: &TimeGrid,
) -> Result<(), AssemblyWarning> {
    let start_index: usize = resolve_boundary(shift, grid, ShiftBoundary::Start)?;
    let end_index: usize = resolve_boundary(shift, grid, ShiftBoundary::End)?;

    if start_index >= end_index {
        return Err(AssemblyWarning::EmptyShiftSpan {
            shift_id: shift.shift_id,
            employee_id: shift.employee_id,
            day: shift.day,
        });
    }

    for cell in &mut cells[start_index..end_index] {
        *cell = Cell::from_shift(shift.shift_type, shift.shift_id);
    }

    Ok(())
}

fn resolve_boundary(
    shift: &ShiftRecord,
    grid: &TimeGrid,
    boundary: ShiftBoundary,
) -> Result<usize, AssemblyWarning> {
    let raw: &str = match boundary {
        ShiftBoundary::Start => &shift.start_time,
        ShiftBoundary::End => &shift.end_time,
    };

    let unmatched = || AssemblyWarning::UnmatchedShiftBoundary {
        shift_id: shift.shift_id,
        employee_id: shift.employee_id,
        day: shift.day,
        boundary,
        time: raw.to_string(),
    };

    let slot: TimeSlot = TimeSlot::parse(raw).map_err(|_| unmatched())?;
    let index: Option<usize> = match boundary {
        ShiftBoundary::Start => grid.index_of(slot),
        ShiftBoundary::End => grid.boundary_index(slot),
    };
    index.ok_or_else(unmatched)
}

/// Sums the paid hours of every work run in a cell sequence.
#[must_use]
pub fn work_hours(cells: &[Cell]) -> f64 {
    let total: f64 = consolidate(cells)
        .iter()
        .filter(|block| block.block_type == ShiftType::Work)
        .map(|block| hours_from_cell_run(block.cell_count()))
        .sum();
    // Each run is already rounded; re-round the sum to keep two decimals.
    // The trailing `+ 0.0` normalizes a negative-zero sum (produced when the
    // run list is empty) back to positive zero; it is a no-op for every other
    // value (`x + 0.0 == x`).
    (total * 100.0).round() / 100.0 + 0.0
}

/// Derives the shift records a row's cells consolidate into.
///
/// Cells written by time-off projection are treated as empty here: they
/// are never persisted as shifts, only reconstructed from the owning
/// request on every load. Row notes are carried onto every derived
/// record.
#[must_use]
pub fn shift_records_from_row(row: &DayEmployeeRow, grid: &TimeGrid) -> Vec<ShiftRecord> {
    let editable_cells: Vec<Cell> = row
        .cells
        .iter()
        .map(|cell| if cell.is_time_off { Cell::empty() } else { *cell })
        .collect();

    consolidate(&editable_cells)
        .iter()
        .map(|block| {
            let record: ShiftRecord = ShiftRecord::new(
                row.employee_id,
                row.date.weekday(),
                grid.slots()[block.start].to_string(),
                grid.slots()[block.end].to_string(),
                block.block_type,
            );
            if row.notes.is_empty() {
                record
            } else {
                record.with_notes(row.notes.clone())
            }
        })
        .collect()
}

/// Recomputes a row's derived hour total from its cells.
#[must_use]
pub fn with_recomputed_total(mut row: DayEmployeeRow) -> DayEmployeeRow {
    row.total_hours = work_hours(&row.cells);
    row
}
