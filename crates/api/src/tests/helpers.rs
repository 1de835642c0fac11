// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use crate::store::ScheduleStore;
use salon_rota_audit::Actor;
use salon_rota_domain::{
    Employee, EmployeeRole, Schedule, ShiftRecord, TimeGrid, TimeOffRequest,
};
use time::{Date, Month};

/// 2026-08-03 is a Monday; the test week runs through Sunday the 9th.
pub fn august_date(day: u8) -> Date {
    Date::from_calendar_date(2026, Month::August, day).unwrap()
}

pub fn full_day_grid() -> TimeGrid {
    TimeGrid::generate(4, 24).unwrap()
}

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("reception-1"), String::from("receptionist"))
}

/// An in-memory store double with store-assigned shift ids.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub schedules: Vec<Schedule>,
    pub employees: Vec<Employee>,
    pub shifts: Vec<ShiftRecord>,
    pub time_off: Vec<TimeOffRequest>,
    next_shift_id: i64,
}

impl InMemoryStore {
    pub fn with_week_schedule() -> Self {
        Self {
            schedules: vec![Schedule::new(1, august_date(3), august_date(9), false)],
            employees: vec![
                Employee::new(1, String::from("Mira"), EmployeeRole::Employee, true),
                Employee::new(2, String::from("Lea"), EmployeeRole::Employee, true),
            ],
            shifts: Vec::new(),
            time_off: Vec::new(),
            next_shift_id: 100,
        }
    }

    pub fn add_shift(&mut self, shift: ShiftRecord) -> i64 {
        self.next_shift_id += 1;
        let id: i64 = self.next_shift_id;
        let mut stored: ShiftRecord = shift;
        stored.shift_id = Some(id);
        self.shifts.push(stored);
        id
    }
}

impl ScheduleStore for InMemoryStore {
    fn get_schedule(&self, schedule_id: i64) -> Result<Schedule, StoreError> {
        self.schedules
            .iter()
            .find(|schedule| schedule.schedule_id == schedule_id)
            .cloned()
            .ok_or(StoreError::ScheduleNotFound { schedule_id })
    }

    fn list_shifts_for_schedule(&self, _schedule_id: i64) -> Result<Vec<ShiftRecord>, StoreError> {
        Ok(self.shifts.clone())
    }

    fn list_approved_time_off_requests(&self) -> Result<Vec<TimeOffRequest>, StoreError> {
        Ok(self
            .time_off
            .iter()
            .filter(|request| request.is_approved())
            .cloned()
            .collect())
    }

    fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.employees.clone())
    }

    fn upsert_shift(&mut self, shift: ShiftRecord) -> Result<ShiftRecord, StoreError> {
        if let Some(shift_id) = shift.shift_id {
            let existing = self
                .shifts
                .iter_mut()
                .find(|stored| stored.shift_id == Some(shift_id))
                .ok_or(StoreError::ShiftNotFound { shift_id })?;
            *existing = shift.clone();
            return Ok(shift);
        }

        self.next_shift_id += 1;
        let mut stored: ShiftRecord = shift;
        stored.shift_id = Some(self.next_shift_id);
        self.shifts.push(stored.clone());
        Ok(stored)
    }

    fn delete_shift(&mut self, shift_id: i64) -> Result<(), StoreError> {
        let before: usize = self.shifts.len();
        self.shifts.retain(|shift| shift.shift_id != Some(shift_id));
        if self.shifts.len() == before {
            return Err(StoreError::ShiftNotFound { shift_id });
        }
        Ok(())
    }
}
