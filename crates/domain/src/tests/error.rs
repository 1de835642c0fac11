// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for domain error display.

use crate::{DomainError, TimeGrid, TimeSlot};
use time::{Date, Month, Weekday};

#[test]
fn test_grid_range_error_names_both_hours() {
    let error: DomainError = TimeGrid::generate(10, 8).unwrap_err();

    let text: String = error.to_string();
    assert!(text.contains("10"));
    assert!(text.contains('8'));
}

#[test]
fn test_grid_interval_error_names_the_interval() {
    let error: DomainError = TimeGrid::with_interval(4, 24, 45).unwrap_err();

    assert!(error.to_string().contains("45"));
}

#[test]
fn test_time_slot_error_carries_the_raw_value() {
    let error: DomainError = TimeSlot::parse("9:3").unwrap_err();

    assert!(error.to_string().contains("'9:3'"));
}

#[test]
fn test_date_range_error_names_both_dates() {
    let error: DomainError = DomainError::InvalidDateRange {
        start_date: Date::from_calendar_date(2026, Month::August, 9).unwrap(),
        end_date: Date::from_calendar_date(2026, Month::August, 3).unwrap(),
    };

    let text: String = error.to_string();
    assert!(text.contains("2026-08-09"));
    assert!(text.contains("2026-08-03"));
}

#[test]
fn test_overlap_error_names_employee_and_day() {
    let error: DomainError = DomainError::OverlappingShifts {
        employee_id: 7,
        day: Weekday::Monday,
    };

    let text: String = error.to_string();
    assert!(text.contains("employee 7"));
    assert!(text.contains("Monday"));
}
