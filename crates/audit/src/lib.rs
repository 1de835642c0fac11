// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use time::{Date, Weekday};

/// Represents the entity performing a grid edit.
///
/// An actor is any identifiable entity that mutates schedule data:
/// a receptionist or manager clicking a cell, or a system process
/// reconciling persisted records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "manager", "receptionist", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new `Actor`.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// A snapshot of one grid row at a point in time.
///
/// Captured before and after every transition so that hour-total drift
/// is always reconstructible from the audit trail alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSnapshot {
    /// A compact string representation of the row state.
    pub data: String,
}

impl RowSnapshot {
    /// Creates a new `RowSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the row state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event recording one grid transition.
///
/// Every successful cell edit must produce exactly one audit event.
/// Audit events are immutable once created and capture:
/// - Who performed the edit (actor)
/// - What was done (action, details)
/// - The row before the transition (before)
/// - The row after the transition (after)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who performed this edit.
    pub actor: Actor,
    /// The name of the action (e.g., "`ToggleCell`").
    pub action: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
    /// The row state before the transition.
    pub before: RowSnapshot,
    /// The row state after the transition.
    pub after: RowSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// Once created, an audit event is immutable.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who performed the edit
    /// * `action` - The name of the action
    /// * `details` - Optional additional details
    /// * `before` - The row state before the transition
    /// * `after` - The row state after the transition
    #[must_use]
    pub const fn new(
        actor: Actor,
        action: String,
        details: Option<String>,
        before: RowSnapshot,
        after: RowSnapshot,
    ) -> Self {
        Self {
            actor,
            action,
            details,
            before,
            after,
        }
    }
}

/// Which boundary of a persisted shift failed to resolve on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftBoundary {
    /// The shift's start time.
    Start,
    /// The shift's end time.
    End,
}

impl ShiftBoundary {
    /// Converts this boundary to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// A non-fatal problem encountered while assembling a weekly grid.
///
/// Warnings are returned as values so the host can inspect every one of
/// them. A shift excluded from a render without a warning would silently
/// shrink the displayed hour totals, which is the single most damaging
/// failure mode of this engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyWarning {
    /// A persisted shift's boundary time is not a slot on the configured
    /// grid. The shift is excluded from the render.
    UnmatchedShiftBoundary {
        /// The persisted shift id, if any.
        shift_id: Option<i64>,
        /// The employee the shift belongs to.
        employee_id: i64,
        /// The day of week the shift is on.
        day: Weekday,
        /// Which boundary failed to resolve.
        boundary: ShiftBoundary,
        /// The raw boundary time as persisted.
        time: String,
    },
    /// A persisted shift's start does not precede its end on the grid.
    /// The shift is excluded from the render.
    EmptyShiftSpan {
        /// The persisted shift id, if any.
        shift_id: Option<i64>,
        /// The employee the shift belongs to.
        employee_id: i64,
        /// The day of week the shift is on.
        day: Weekday,
    },
    /// A persisted shift references an employee that has no row in the
    /// assembled grid (unknown, inactive, or not scheduled).
    ShiftWithoutRow {
        /// The persisted shift id, if any.
        shift_id: Option<i64>,
        /// The employee the shift references.
        employee_id: i64,
        /// The day of week the shift is on.
        day: Weekday,
    },
    /// An edit was rejected and the grid left unchanged.
    EditRejected {
        /// The employee whose row was targeted.
        employee_id: i64,
        /// The date of the targeted row.
        date: Date,
        /// The targeted cell index.
        cell_index: usize,
        /// Why the edit was rejected.
        reason: String,
    },
}

impl std::fmt::Display for AssemblyWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedShiftBoundary {
                shift_id,
                employee_id,
                day,
                boundary,
                time,
            } => {
                write!(
                    f,
                    "Shift {} for employee {employee_id} on {day} skipped: {} time '{time}' is not on the grid",
                    format_shift_id(*shift_id),
                    boundary.as_str()
                )
            }
            Self::EmptyShiftSpan {
                shift_id,
                employee_id,
                day,
            } => {
                write!(
                    f,
                    "Shift {} for employee {employee_id} on {day} skipped: start does not precede end",
                    format_shift_id(*shift_id)
                )
            }
            Self::ShiftWithoutRow {
                shift_id,
                employee_id,
                day,
            } => {
                write!(
                    f,
                    "Shift {} on {day} skipped: employee {employee_id} has no row in the grid",
                    format_shift_id(*shift_id)
                )
            }
            Self::EditRejected {
                employee_id,
                date,
                cell_index,
                reason,
            } => {
                write!(
                    f,
                    "Edit rejected for employee {employee_id} on {date} cell {cell_index}: {reason}"
                )
            }
        }
    }
}

fn format_shift_id(shift_id: Option<i64>) -> String {
    shift_id.map_or_else(|| String::from("(unsaved)"), |id| format!("#{id}"))
}
