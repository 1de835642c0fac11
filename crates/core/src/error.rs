// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salon_rota_domain::DomainError;
use time::Date;

/// Errors that can occur during grid assembly and editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// An edit targeted a cell written by time-off projection.
    ReadOnlyCell {
        /// The employee whose row was targeted.
        employee_id: i64,
        /// The date of the targeted row.
        date: Date,
        /// The targeted cell index.
        cell_index: usize,
    },
    /// An edit targeted a published schedule.
    PublishedSchedule {
        /// The published schedule.
        schedule_id: i64,
    },
    /// An edit targeted a row the grid does not contain.
    RowNotFound {
        /// The employee whose row was targeted.
        employee_id: i64,
        /// The date of the targeted row.
        date: Date,
    },
    /// An edit targeted a cell index beyond the row.
    CellIndexOutOfRange {
        /// The targeted cell index.
        cell_index: usize,
        /// The number of cells in the row.
        cell_count: usize,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ReadOnlyCell {
                employee_id,
                date,
                cell_index,
            } => {
                write!(
                    f,
                    "Cell {cell_index} for employee {employee_id} on {date} is part of approved time off and cannot be edited"
                )
            }
            Self::PublishedSchedule { schedule_id } => {
                write!(
                    f,
                    "Schedule {schedule_id} is published; its grid is read-only"
                )
            }
            Self::RowNotFound { employee_id, date } => {
                write!(f, "No grid row for employee {employee_id} on {date}")
            }
            Self::CellIndexOutOfRange {
                cell_index,
                cell_count,
            } => {
                write!(
                    f,
                    "Cell index {cell_index} is out of range for a row of {cell_count} cells"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
