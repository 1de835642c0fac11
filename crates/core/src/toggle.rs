// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The cell-toggle state machine.
//!
//! A click cycles one cell through empty → work → vacation → leave →
//! empty. Sick never enters the cycle, published grids and time-off
//! cells reject every edit, and each successful edit produces exactly
//! one audit event.

use crate::consolidate::with_recomputed_total;
use crate::error::CoreError;
use crate::state::{DayEmployeeRow, GridTransition, RowKey, WeekGrid};
use salon_rota_audit::{Actor, AuditEvent, RowSnapshot};
use salon_rota_domain::{Cell, CellType};

/// Toggles one cell and returns the updated grid copy.
///
/// The input grid is never mutated: callers replace their reference
/// with `new_grid` on success, which keeps concurrent re-renders of the
/// old value safe. The toggled cell loses any shift reference (it no
/// longer matches the persisted block it came from) and the row's hour
/// total is recomputed from the new cells.
///
/// # Arguments
///
/// * `grid` - The current grid value
/// * `key` - The row to edit
/// * `cell_index` - The cell to toggle
/// * `actor` - Who is editing, for the audit event
///
/// # Errors
///
/// * `CoreError::PublishedSchedule` if the grid is read-only
/// * `CoreError::RowNotFound` if `key` has no row
/// * `CoreError::CellIndexOutOfRange` if `cell_index` is past the row
/// * `CoreError::ReadOnlyCell` if the cell came from time-off projection
pub fn toggle_cell(
    grid: &WeekGrid,
    key: &RowKey,
    cell_index: usize,
    actor: &Actor,
) -> Result<GridTransition, CoreError> {
    if grid.read_only {
        return Err(CoreError::PublishedSchedule {
            schedule_id: grid.schedule_id,
        });
    }

    let row: &DayEmployeeRow = grid.rows.get(key).ok_or(CoreError::RowNotFound {
        employee_id: key.employee_id,
        date: key.date,
    })?;

    let cell: &Cell = row
        .cells
        .get(cell_index)
        .ok_or(CoreError::CellIndexOutOfRange {
            cell_index,
            cell_count: row.cells.len(),
        })?;

    if cell.is_time_off {
        return Err(CoreError::ReadOnlyCell {
            employee_id: key.employee_id,
            date: key.date,
            cell_index,
        });
    }

    let previous_type: CellType = cell.cell_type;
    let next_type: CellType = previous_type.next_in_cycle();

    let before: RowSnapshot = row.to_snapshot();
    let mut new_row: DayEmployeeRow = row.clone();
    new_row.cells[cell_index] = Cell {
        cell_type: next_type,
        shift_id: None,
        is_time_off: false,
    };
    let new_row: DayEmployeeRow = with_recomputed_total(new_row);
    let after: RowSnapshot = new_row.to_snapshot();

    let audit_event: AuditEvent = AuditEvent::new(
        actor.clone(),
        String::from("ToggleCell"),
        Some(format!(
            "employee={} date={} cell={} {} -> {}",
            key.employee_id, key.date, cell_index, previous_type, next_type
        )),
        before,
        after,
    );

    let mut new_grid: WeekGrid = grid.clone();
    new_grid.rows.insert(*key, new_row);

    Ok(GridTransition {
        new_grid,
        audit_event,
    })
}
