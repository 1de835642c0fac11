// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grid edit sessions.
//!
//! A session loads everything one schedule needs from the store,
//! assembles the grid, and then serves edits against an in-memory grid
//! value until the host persists rows back. Hosts are responsible for
//! debouncing rapid toggles before calling [`GridSession::persist_row`].

use crate::error::ApiError;
use crate::store::ScheduleStore;
use salon_rota::{RowKey, WeekGrid, assemble, shift_records_from_row, toggle_cell};
use salon_rota_audit::{Actor, AssemblyWarning, AuditEvent};
use salon_rota_domain::{Schedule, ShiftRecord, TimeGrid};
use time::Date;

/// One loaded schedule grid and its pending edit state.
#[derive(Debug, Clone)]
pub struct GridSession {
    schedule: Schedule,
    grid: TimeGrid,
    week: WeekGrid,
    shifts: Vec<ShiftRecord>,
    warnings: Vec<AssemblyWarning>,
    audit_trail: Vec<AuditEvent>,
}

impl GridSession {
    /// Loads a schedule from the store and assembles its grid.
    ///
    /// Every assembly warning is logged and retained for inspection via
    /// [`Self::warnings`]; a skipped shift is never silent.
    ///
    /// # Arguments
    ///
    /// * `store` - The host's persistence implementation
    /// * `schedule_id` - The schedule to load
    /// * `grid` - The time axis to index rows against
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Storage` if any read fails and
    /// `ApiError::InvalidInput` if the schedule's date range is
    /// malformed.
    pub fn load<S: ScheduleStore>(
        store: &S,
        schedule_id: i64,
        grid: TimeGrid,
    ) -> Result<Self, ApiError> {
        let schedule: Schedule = store.get_schedule(schedule_id)?;
        let employees = store.list_employees()?;
        let shifts: Vec<ShiftRecord> = store.list_shifts_for_schedule(schedule_id)?;
        let time_off = store.list_approved_time_off_requests()?;

        let result = assemble(&schedule, &employees, &grid, &shifts, &time_off)?;
        for warning in &result.warnings {
            tracing::warn!(schedule_id, "{warning}");
        }

        Ok(Self {
            schedule,
            grid,
            week: result.grid,
            shifts,
            warnings: result.warnings,
            audit_trail: Vec::new(),
        })
    }

    /// Returns the loaded schedule.
    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Returns the current grid value.
    #[must_use]
    pub const fn week(&self) -> &WeekGrid {
        &self.week
    }

    /// Returns the warnings collected while loading.
    #[must_use]
    pub fn warnings(&self) -> &[AssemblyWarning] {
        &self.warnings
    }

    /// Returns every audit event recorded by this session, in order.
    #[must_use]
    pub fn audit_trail(&self) -> &[AuditEvent] {
        &self.audit_trail
    }

    /// Toggles one cell, replacing the session's grid value on success.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The employee whose row is edited
    /// * `date` - The date of the edited row
    /// * `cell_index` - The cell to toggle
    /// * `actor` - Who is editing, for the audit trail
    ///
    /// # Errors
    ///
    /// Returns `ApiError::EditRejected` for published schedules and
    /// time-off cells, `ApiError::ResourceNotFound` for unknown rows,
    /// and `ApiError::InvalidInput` for out-of-range cell indices. The
    /// grid is unchanged on every error path.
    pub fn toggle(
        &mut self,
        employee_id: i64,
        date: Date,
        cell_index: usize,
        actor: &Actor,
    ) -> Result<(), ApiError> {
        let key: RowKey = RowKey::new(date, employee_id);
        match toggle_cell(&self.week, &key, cell_index, actor) {
            Ok(transition) => {
                self.week = transition.new_grid;
                self.audit_trail.push(transition.audit_event);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    schedule_id = self.schedule.schedule_id,
                    employee_id,
                    cell_index,
                    "{err}"
                );
                Err(ApiError::from(err))
            }
        }
    }

    /// Persists one row's current cells back to the store.
    ///
    /// The row's cells are consolidated into fresh shift records, the
    /// row's superseded persisted shifts are deleted, and the new
    /// records are upserted. Returns the persisted records with their
    /// store-assigned ids.
    ///
    /// # Arguments
    ///
    /// * `store` - The host's persistence implementation
    /// * `employee_id` - The employee whose row is persisted
    /// * `date` - The date of the persisted row
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if the row does not exist
    /// and `ApiError::Storage` if any write fails.
    pub fn persist_row<S: ScheduleStore>(
        &mut self,
        store: &mut S,
        employee_id: i64,
        date: Date,
    ) -> Result<Vec<ShiftRecord>, ApiError> {
        let key: RowKey = RowKey::new(date, employee_id);
        let row = self
            .week
            .row(&key)
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Grid row"),
                message: format!("employee {employee_id} on {date}"),
            })?;

        let derived: Vec<ShiftRecord> = shift_records_from_row(row, &self.grid);
        let day: time::Weekday = date.weekday();

        let superseded: Vec<i64> = self
            .shifts
            .iter()
            .filter(|shift| shift.employee_id == employee_id && shift.day == day)
            .filter_map(|shift| shift.shift_id)
            .collect();
        for shift_id in superseded {
            store.delete_shift(shift_id)?;
        }
        self.shifts
            .retain(|shift| !(shift.employee_id == employee_id && shift.day == day));

        let mut persisted: Vec<ShiftRecord> = Vec::new();
        for record in derived {
            persisted.push(store.upsert_shift(record)?);
        }
        self.shifts.extend(persisted.iter().cloned());

        Ok(persisted)
    }
}
