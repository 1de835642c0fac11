// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Weekday};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Grid construction was given a start/end hour pair that does not
    /// describe a forward range within one day.
    InvalidGridRange {
        /// The requested start hour.
        start_hour: u8,
        /// The requested end hour.
        end_hour: u8,
    },
    /// Grid construction was given an interval that is zero or does not
    /// evenly divide an hour.
    InvalidGridInterval {
        /// The requested interval in minutes.
        interval_minutes: u16,
    },
    /// A schedule's end date precedes its start date.
    InvalidDateRange {
        /// The schedule start date.
        start_date: Date,
        /// The schedule end date.
        end_date: Date,
    },
    /// A time string could not be parsed as zero-padded `HH:MM`.
    InvalidTimeSlot(String),
    /// A cell type string is not recognized.
    InvalidCellType(String),
    /// A shift type string is not recognized.
    InvalidShiftType(String),
    /// Two work shifts for the same employee and day overlap.
    OverlappingShifts {
        /// The employee both shifts belong to.
        employee_id: i64,
        /// The day of week the shifts are on.
        day: Weekday,
    },
    /// An employee record failed field validation.
    InvalidEmployee(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGridRange {
                start_hour,
                end_hour,
            } => {
                write!(
                    f,
                    "Invalid grid range: start hour {start_hour} to end hour {end_hour} (end must be after start and at most 24)"
                )
            }
            Self::InvalidGridInterval { interval_minutes } => {
                write!(
                    f,
                    "Invalid grid interval: {interval_minutes} minutes (must be positive and evenly divide 60)"
                )
            }
            Self::InvalidDateRange {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Invalid date range: end date {end_date} precedes start date {start_date}"
                )
            }
            Self::InvalidTimeSlot(value) => {
                write!(f, "Invalid time slot '{value}': expected zero-padded HH:MM")
            }
            Self::InvalidCellType(value) => write!(f, "Unknown cell type: {value}"),
            Self::InvalidShiftType(value) => write!(f, "Unknown shift type: {value}"),
            Self::OverlappingShifts { employee_id, day } => {
                write!(
                    f,
                    "Overlapping work shifts for employee {employee_id} on {day}"
                )
            }
            Self::InvalidEmployee(msg) => write!(f, "Invalid employee: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
