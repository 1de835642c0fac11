// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::shift::{ShiftRecord, ShiftType};
use crate::time_grid::{MINUTES_PER_DAY, TimeSlot};
use crate::types::{Employee, Schedule};

/// Validates that an employee's basic field constraints are met.
///
/// # Arguments
///
/// * `employee` - The employee to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidEmployee` if the name is empty.
pub fn validate_employee_fields(employee: &Employee) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if employee.name.trim().is_empty() {
        return Err(DomainError::InvalidEmployee(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a schedule's date range runs forward.
///
/// # Arguments
///
/// * `schedule` - The schedule to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidDateRange` if the end date precedes the
/// start date.
pub fn validate_schedule_dates(schedule: &Schedule) -> Result<(), DomainError> {
    if schedule.end_date < schedule.start_date {
        return Err(DomainError::InvalidDateRange {
            start_date: schedule.start_date,
            end_date: schedule.end_date,
        });
    }
    Ok(())
}

/// Validates that work shifts for one employee and day never overlap.
///
/// This is the integrity check hosts run before persisting records that
/// did not come out of block consolidation (which is non-overlapping by
/// construction).
///
/// # Arguments
///
/// * `shifts` - The records to check, in any order
///
/// # Errors
///
/// Returns `DomainError::InvalidTimeSlot` if any work shift carries a
/// malformed boundary time, or `DomainError::OverlappingShifts` naming
/// the first employee/day pair with intersecting work spans.
pub fn validate_no_overlap(shifts: &[ShiftRecord]) -> Result<(), DomainError> {
    let mut spans: Vec<(i64, time::Weekday, u16, u16)> = Vec::new();

    for shift in shifts {
        if shift.shift_type != ShiftType::Work {
            continue;
        }
        let start: u16 = TimeSlot::parse(&shift.start_time)?.minutes();
        let end: u16 = boundary_minutes(&shift.end_time)?;

        for (employee_id, day, other_start, other_end) in &spans {
            if *employee_id == shift.employee_id
                && *day == shift.day
                && start < *other_end
                && *other_start < end
            {
                return Err(DomainError::OverlappingShifts {
                    employee_id: shift.employee_id,
                    day: shift.day,
                });
            }
        }
        spans.push((shift.employee_id, shift.day, start, end));
    }

    Ok(())
}

/// Parses an end boundary, reading `"00:00"` as end of day.
fn boundary_minutes(value: &str) -> Result<u16, DomainError> {
    let minutes: u16 = TimeSlot::parse(value)?.minutes();
    if minutes == 0 {
        return Ok(MINUTES_PER_DAY);
    }
    Ok(minutes)
}
