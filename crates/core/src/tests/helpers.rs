// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salon_rota_audit::Actor;
use salon_rota_domain::{
    Employee, EmployeeRole, Schedule, ShiftRecord, ShiftType, TimeGrid, TimeOffRequest,
    TimeOffScope, TimeOffStatus, TimeOffType,
};
use time::{Date, Month, Weekday};

/// 2026-08-03 is a Monday; the test week runs through Sunday the 9th.
pub fn august_date(day: u8) -> Date {
    Date::from_calendar_date(2026, Month::August, day).unwrap()
}

pub fn full_day_grid() -> TimeGrid {
    TimeGrid::generate(4, 24).unwrap()
}

pub fn week_schedule() -> Schedule {
    Schedule::new(1, august_date(3), august_date(9), false)
}

pub fn published_week_schedule() -> Schedule {
    Schedule::new(1, august_date(3), august_date(9), true)
}

pub fn stylists() -> Vec<Employee> {
    vec![
        Employee::new(1, String::from("Mira"), EmployeeRole::Employee, true),
        Employee::new(2, String::from("Lea"), EmployeeRole::Employee, true),
    ]
}

pub fn work_shift(employee_id: i64, day: Weekday, start: &str, end: &str) -> ShiftRecord {
    ShiftRecord::new(
        employee_id,
        day,
        start.to_string(),
        end.to_string(),
        ShiftType::Work,
    )
}

pub fn approved_time_off(
    employee_id: i64,
    start_day: u8,
    end_day: u8,
    time_off_type: TimeOffType,
    scope: TimeOffScope,
) -> TimeOffRequest {
    TimeOffRequest::with_id(
        99,
        employee_id,
        august_date(start_day),
        august_date(end_day),
        time_off_type,
        scope,
        TimeOffStatus::Approved,
    )
}

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("manager-1"), String::from("manager"))
}
