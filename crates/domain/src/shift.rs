// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::CellType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Weekday;

/// The type of a consolidated shift block.
///
/// Distinct from [`CellType`] so that an "empty shift" is
/// unrepresentable: every persisted block carries a real marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    /// Paid working time.
    Work,
    /// Vacation time off.
    Vacation,
    /// Unpaid or statutory leave.
    Leave,
    /// Sick leave.
    Sick,
}

impl ShiftType {
    /// Converts this shift type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Vacation => "vacation",
            Self::Leave => "leave",
            Self::Sick => "sick",
        }
    }

    /// Returns the cell type cells of this shift carry.
    #[must_use]
    pub const fn as_cell_type(&self) -> CellType {
        match self {
            Self::Work => CellType::Work,
            Self::Vacation => CellType::Vacation,
            Self::Leave => CellType::Leave,
            Self::Sick => CellType::Sick,
        }
    }
}

impl FromStr for ShiftType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Self::Work),
            "vacation" => Ok(Self::Vacation),
            "leave" => Ok(Self::Leave),
            "sick" => Ok(Self::Sick),
            _ => Err(DomainError::InvalidShiftType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted, consolidated block of same-type cells.
///
/// Boundary times are kept as the raw `HH:MM` strings the store holds:
/// they originate outside the engine and may be malformed or off-grid,
/// which expansion reports rather than assumes away. Block consolidation
/// is the only producer of new records, which keeps work shifts for one
/// employee and day non-overlapping by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The canonical identifier assigned by the store.
    /// `None` indicates the record has not been persisted yet.
    pub shift_id: Option<i64>,
    /// The employee this shift belongs to.
    pub employee_id: i64,
    /// The day of week this shift is on.
    pub day: Weekday,
    /// Start boundary as zero-padded `HH:MM`.
    pub start_time: String,
    /// End boundary as zero-padded `HH:MM`. `"00:00"` means end of day.
    pub end_time: String,
    /// The block's marking.
    pub shift_type: ShiftType,
    /// Free-text notes shown on the row.
    pub notes: Option<String>,
    /// Optional salon area the shift is worked in.
    pub area: Option<String>,
}

impl ShiftRecord {
    /// Creates a new `ShiftRecord` without a persisted id.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The employee this shift belongs to
    /// * `day` - The day of week
    /// * `start_time` - Start boundary as `HH:MM`
    /// * `end_time` - End boundary as `HH:MM`
    /// * `shift_type` - The block's marking
    #[must_use]
    pub const fn new(
        employee_id: i64,
        day: Weekday,
        start_time: String,
        end_time: String,
        shift_type: ShiftType,
    ) -> Self {
        Self {
            shift_id: None,
            employee_id,
            day,
            start_time,
            end_time,
            shift_type,
            notes: None,
            area: None,
        }
    }

    /// Creates a `ShiftRecord` with an existing persisted id.
    ///
    /// # Arguments
    ///
    /// * `shift_id` - The canonical identifier
    /// * `employee_id` - The employee this shift belongs to
    /// * `day` - The day of week
    /// * `start_time` - Start boundary as `HH:MM`
    /// * `end_time` - End boundary as `HH:MM`
    /// * `shift_type` - The block's marking
    #[must_use]
    pub const fn with_id(
        shift_id: i64,
        employee_id: i64,
        day: Weekday,
        start_time: String,
        end_time: String,
        shift_type: ShiftType,
    ) -> Self {
        Self {
            shift_id: Some(shift_id),
            employee_id,
            day,
            start_time,
            end_time,
            shift_type,
            notes: None,
            area: None,
        }
    }

    /// Attaches notes to this record.
    #[must_use]
    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Attaches a salon area to this record.
    #[must_use]
    pub fn with_area(mut self, area: String) -> Self {
        self.area = Some(area);
        self
    }
}
