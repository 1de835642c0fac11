// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly grid assembly.
//!
//! Assembly reconstructs the full grid from persisted records on every
//! load:
//!
//! 1. An empty row for every day in the schedule range and every
//!    schedulable employee.
//! 2. Persisted shifts expanded onto their rows.
//! 3. Approved time-off requests projected over the top.
//! 4. Hour totals derived from the final cells.
//!
//! The whole pipeline is deterministic: identical inputs produce an
//! identical grid, warnings included.

use crate::consolidate::{expand_shift, work_hours};
use crate::error::CoreError;
use crate::project::{apply_override, project};
use crate::state::{AssemblyResult, DayEmployeeRow, RowKey, WeekGrid};
use salon_rota_audit::AssemblyWarning;
use salon_rota_domain::{
    Employee, Schedule, ShiftRecord, TimeGrid, TimeOffRequest, validate_schedule_dates,
};
use std::collections::BTreeMap;
use time::Date;

/// Assembles the grid for one schedule from persisted records.
///
/// Rows are built only for active employees with the employee role; the
/// employees list is authoritative and shifts referencing anyone else
/// are skipped with a warning. Shifts with unresolvable boundaries are
/// likewise skipped with a warning rather than failing the whole
/// assembly.
///
/// # Arguments
///
/// * `schedule` - The scheduling period; publication makes the grid
///   read-only
/// * `employees` - The authoritative staff list
/// * `grid` - The time axis rows are indexed against
/// * `shifts` - Persisted shift records for the schedule
/// * `time_off` - Time-off requests; only approved ones are projected
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if the schedule's date range
/// runs backwards. Everything else is a warning, not an error.
pub fn assemble(
    schedule: &Schedule,
    employees: &[Employee],
    grid: &TimeGrid,
    shifts: &[ShiftRecord],
    time_off: &[TimeOffRequest],
) -> Result<AssemblyResult, CoreError> {
    validate_schedule_dates(schedule)?;

    let cell_count: usize = grid.cell_count();
    let dates: Vec<Date> = schedule_dates(schedule);
    let mut warnings: Vec<AssemblyWarning> = Vec::new();

    // Step 1: empty rows for every (day, schedulable employee).
    let mut rows: BTreeMap<RowKey, DayEmployeeRow> = BTreeMap::new();
    for date in &dates {
        for employee in employees.iter().filter(|e| e.is_schedulable()) {
            let key: RowKey = RowKey::new(*date, employee.employee_id);
            rows.insert(
                key,
                DayEmployeeRow::new_empty(*date, employee.employee_id, cell_count),
            );
        }
    }

    // Step 2: expand persisted shifts onto their rows.
    for shift in shifts {
        let matching_keys: Vec<RowKey> = dates
            .iter()
            .filter(|date| date.weekday() == shift.day)
            .map(|date| RowKey::new(*date, shift.employee_id))
            .filter(|key| rows.contains_key(key))
            .collect();

        if matching_keys.is_empty() {
            warnings.push(AssemblyWarning::ShiftWithoutRow {
                shift_id: shift.shift_id,
                employee_id: shift.employee_id,
                day: shift.day,
            });
            continue;
        }

        for key in matching_keys {
            let Some(row) = rows.get_mut(&key) else {
                continue;
            };
            match expand_shift(&mut row.cells, shift, grid) {
                Ok(()) => {
                    if let Some(notes) = &shift.notes
                        && !notes.is_empty()
                    {
                        row.notes.clone_from(notes);
                    }
                }
                Err(warning) => {
                    // Boundary resolution is grid-dependent only, so the
                    // shift fails the same way on every matching day.
                    warnings.push(warning);
                    break;
                }
            }
        }
    }

    // Step 3: project approved time off over the shifts.
    for request in time_off {
        if !request.is_approved() {
            continue;
        }
        for date in &dates {
            let Some(day_override) = project(request, *date, cell_count) else {
                continue;
            };
            if let Some(row) = rows.get_mut(&RowKey::new(*date, request.employee_id)) {
                apply_override(row, &day_override);
            }
        }
    }

    // Step 4: derive hour totals from the final cells.
    for row in rows.values_mut() {
        row.total_hours = work_hours(&row.cells);
    }

    Ok(AssemblyResult {
        grid: WeekGrid {
            schedule_id: schedule.schedule_id,
            read_only: schedule.is_published,
            rows,
        },
        warnings,
    })
}

/// Collects every calendar day in the schedule's inclusive range.
fn schedule_dates(schedule: &Schedule) -> Vec<Date> {
    let mut dates: Vec<Date> = Vec::new();
    let mut current: Date = schedule.start_date;
    while current <= schedule.end_date {
        dates.push(current);
        match current.next_day() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}
