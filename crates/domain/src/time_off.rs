// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-off requests and their lifecycle.
//!
//! Requests are created pending and transition exactly once to approved
//! or rejected by an external approval workflow. Approved requests are
//! immutable inputs to grid projection; pending and rejected requests
//! never touch a grid.

use crate::types::CellType;
use serde::{Deserialize, Serialize};
use time::Date;

/// The kind of time off requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOffType {
    /// Vacation time off.
    Vacation,
    /// Unpaid or statutory leave.
    Leave,
}

impl TimeOffType {
    /// Converts this type to its display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vacation => "Vacation",
            Self::Leave => "Leave",
        }
    }

    /// Returns the cell type projected cells carry.
    #[must_use]
    pub const fn as_cell_type(&self) -> CellType {
        match self {
            Self::Vacation => CellType::Vacation,
            Self::Leave => CellType::Leave,
        }
    }
}

/// Which part of each day a request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOffScope {
    /// The whole day.
    AllDay,
    /// The first half of the day's cells.
    MorningHalf,
    /// The second half of the day's cells.
    AfternoonHalf,
}

impl TimeOffScope {
    /// Converts this scope to its display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AllDay => "full day",
            Self::MorningHalf => "morning",
            Self::AfternoonHalf => "afternoon",
        }
    }
}

/// The lifecycle state of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeOffStatus {
    /// Awaiting the approval workflow.
    #[default]
    Pending,
    /// Approved; projected into grids.
    Approved,
    /// Rejected; never projected.
    Rejected,
}

/// A request for time off spanning a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    /// The canonical identifier assigned by the store.
    /// `None` indicates the request has not been persisted yet.
    pub request_id: Option<i64>,
    /// The employee the request belongs to.
    pub employee_id: i64,
    /// First day covered.
    pub start_date: Date,
    /// Last day covered (inclusive).
    pub end_date: Date,
    /// The kind of time off.
    pub time_off_type: TimeOffType,
    /// Which part of each day is covered.
    pub scope: TimeOffScope,
    /// The lifecycle state.
    pub status: TimeOffStatus,
}

impl TimeOffRequest {
    /// Creates a new pending `TimeOffRequest`.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The employee the request belongs to
    /// * `start_date` - First day covered
    /// * `end_date` - Last day covered (inclusive)
    /// * `time_off_type` - The kind of time off
    /// * `scope` - Which part of each day is covered
    #[must_use]
    pub const fn new(
        employee_id: i64,
        start_date: Date,
        end_date: Date,
        time_off_type: TimeOffType,
        scope: TimeOffScope,
    ) -> Self {
        Self {
            request_id: None,
            employee_id,
            start_date,
            end_date,
            time_off_type,
            scope,
            status: TimeOffStatus::Pending,
        }
    }

    /// Creates a `TimeOffRequest` with an existing id and status.
    ///
    /// # Arguments
    ///
    /// * `request_id` - The canonical identifier
    /// * `employee_id` - The employee the request belongs to
    /// * `start_date` - First day covered
    /// * `end_date` - Last day covered (inclusive)
    /// * `time_off_type` - The kind of time off
    /// * `scope` - Which part of each day is covered
    /// * `status` - The lifecycle state
    #[must_use]
    pub const fn with_id(
        request_id: i64,
        employee_id: i64,
        start_date: Date,
        end_date: Date,
        time_off_type: TimeOffType,
        scope: TimeOffScope,
        status: TimeOffStatus,
    ) -> Self {
        Self {
            request_id: Some(request_id),
            employee_id,
            start_date,
            end_date,
            time_off_type,
            scope,
            status,
        }
    }

    /// Returns whether this request has been approved.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == TimeOffStatus::Approved
    }

    /// Returns whether this request covers a calendar date.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns the note text projected rows carry, e.g. "Vacation full
    /// day" or "Leave morning".
    #[must_use]
    pub fn note_text(&self) -> String {
        format!("{} {}", self.time_off_type.label(), self.scope.label())
    }
}
