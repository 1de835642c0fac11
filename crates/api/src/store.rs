// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The persistence contract the host implements.
//!
//! The engine never issues SQL or HTTP itself; everything it reads or
//! writes goes through this trait. Implementations own id assignment:
//! an upserted record without a `shift_id` comes back with one.

use crate::error::StoreError;
use salon_rota_domain::{Employee, Schedule, ShiftRecord, TimeOffRequest};

/// Read and write access to persisted scheduling data.
pub trait ScheduleStore {
    /// Fetches one schedule by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ScheduleNotFound` if the id is unknown.
    fn get_schedule(&self, schedule_id: i64) -> Result<Schedule, StoreError>;

    /// Lists every shift persisted for a schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_shifts_for_schedule(&self, schedule_id: i64) -> Result<Vec<ShiftRecord>, StoreError>;

    /// Lists every approved time-off request.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_approved_time_off_requests(&self) -> Result<Vec<TimeOffRequest>, StoreError>;

    /// Lists every employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;

    /// Inserts or updates one shift, returning the persisted record
    /// (with an assigned `shift_id`).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn upsert_shift(&mut self, shift: ShiftRecord) -> Result<ShiftRecord, StoreError>;

    /// Deletes one shift by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ShiftNotFound` if the id is unknown.
    fn delete_shift(&mut self, shift_id: i64) -> Result<(), StoreError>;
}
