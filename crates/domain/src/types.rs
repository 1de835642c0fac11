// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::shift::ShiftType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The marking of one half-hour cell.
///
/// A closed enum rather than a free-form string so that the toggle cycle
/// and block consolidation are checked exhaustively by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CellType {
    /// No marking.
    #[default]
    Empty,
    /// Paid working time.
    Work,
    /// Vacation time off.
    Vacation,
    /// Unpaid or statutory leave.
    Leave,
    /// Sick leave.
    Sick,
}

impl CellType {
    /// Converts this cell type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Work => "work",
            Self::Vacation => "vacation",
            Self::Leave => "leave",
            Self::Sick => "sick",
        }
    }

    /// Returns the shift type this cell consolidates into, or `None` for
    /// empty cells.
    #[must_use]
    pub const fn as_shift_type(&self) -> Option<ShiftType> {
        match self {
            Self::Empty => None,
            Self::Work => Some(ShiftType::Work),
            Self::Vacation => Some(ShiftType::Vacation),
            Self::Leave => Some(ShiftType::Leave),
            Self::Sick => Some(ShiftType::Sick),
        }
    }

    /// Returns the next type in the manual edit cycle.
    ///
    /// The cycle is empty → work → vacation → leave → empty. Sick is
    /// never produced by cycling: it only enters a grid from persisted
    /// records or time-off projection, and clicking a sick cell clears
    /// it.
    #[must_use]
    pub const fn next_in_cycle(&self) -> Self {
        match self {
            Self::Empty => Self::Work,
            Self::Work => Self::Vacation,
            Self::Vacation => Self::Leave,
            Self::Leave | Self::Sick => Self::Empty,
        }
    }
}

impl FromStr for CellType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Self::Empty),
            "work" => Ok(Self::Work),
            "vacation" => Ok(Self::Vacation),
            "leave" => Ok(Self::Leave),
            "sick" => Ok(Self::Sick),
            _ => Err(DomainError::InvalidCellType(s.to_string())),
        }
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The state of one employee's half-hour slot on one day.
///
/// Cells never exist on their own; they live inside a grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Cell {
    /// The marking of this cell.
    pub cell_type: CellType,
    /// The persisted shift this cell was expanded from, if any.
    pub shift_id: Option<i64>,
    /// Whether this cell was written by time-off projection. Such cells
    /// are read-only to direct edits.
    pub is_time_off: bool,
}

impl Cell {
    /// Creates an empty cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cell_type: CellType::Empty,
            shift_id: None,
            is_time_off: false,
        }
    }

    /// Creates a cell expanded from a persisted shift.
    #[must_use]
    pub const fn from_shift(shift_type: ShiftType, shift_id: Option<i64>) -> Self {
        Self {
            cell_type: shift_type.as_cell_type(),
            shift_id,
            is_time_off: false,
        }
    }

    /// Creates a read-only cell written by time-off projection.
    #[must_use]
    pub const fn time_off(cell_type: CellType) -> Self {
        Self {
            cell_type,
            shift_id: None,
            is_time_off: true,
        }
    }
}

/// The role of a staff member.
///
/// Only `Employee` rows appear on the shift grid; managers administer
/// schedules without being scheduled themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRole {
    /// A scheduled staff member.
    Employee,
    /// An administrator of schedules.
    Manager,
}

impl EmployeeRole {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Manager => "manager",
        }
    }
}

impl std::fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A staff member, as seen from the grid engine.
///
/// Employees are owned by an external subsystem; the engine only reads
/// id, name, role, and active status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The canonical employee identifier.
    pub employee_id: i64,
    /// The employee's display name.
    pub name: String,
    /// The employee's role.
    pub role: EmployeeRole,
    /// Whether the employee is active. Inactive employees get no rows.
    pub is_active: bool,
}

impl Employee {
    /// Creates a new `Employee`.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The canonical identifier
    /// * `name` - The display name
    /// * `role` - The employee's role
    /// * `is_active` - Whether the employee is active
    #[must_use]
    pub const fn new(employee_id: i64, name: String, role: EmployeeRole, is_active: bool) -> Self {
        Self {
            employee_id,
            name,
            role,
            is_active,
        }
    }

    /// Returns whether this employee receives grid rows.
    #[must_use]
    pub fn is_schedulable(&self) -> bool {
        self.is_active && self.role == EmployeeRole::Employee
    }
}

/// A scheduling period, as seen from the grid engine.
///
/// Schedules are owned by an external subsystem; the engine reads the
/// date range and treats a published schedule as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// The canonical schedule identifier.
    pub schedule_id: i64,
    /// First day of the period.
    pub start_date: Date,
    /// Last day of the period (inclusive).
    pub end_date: Date,
    /// Whether the schedule has been published. Edits are frozen after
    /// publication.
    pub is_published: bool,
}

impl Schedule {
    /// Creates a new `Schedule`.
    ///
    /// # Arguments
    ///
    /// * `schedule_id` - The canonical identifier
    /// * `start_date` - First day of the period
    /// * `end_date` - Last day of the period (inclusive)
    /// * `is_published` - Whether the schedule has been published
    #[must_use]
    pub const fn new(schedule_id: i64, start_date: Date, end_date: Date, is_published: bool) -> Self {
        Self {
            schedule_id,
            start_date,
            end_date,
            is_published,
        }
    }
}
