// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the boundary layer.

use salon_rota::CoreError;
use thiserror::Error;

/// Errors the host's persistence implementation can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested schedule does not exist.
    #[error("schedule {schedule_id} not found")]
    ScheduleNotFound {
        /// The missing schedule id.
        schedule_id: i64,
    },
    /// The requested shift does not exist.
    #[error("shift {shift_id} not found")]
    ShiftNotFound {
        /// The missing shift id.
        shift_id: i64,
    },
    /// The storage backend failed.
    #[error("storage backend failure: {message}")]
    Backend {
        /// A description of the failure.
        message: String,
    },
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the
/// boundary contract offered to hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// An edit was rejected; the grid is unchanged.
    EditRejected {
        /// Why the edit was rejected.
        reason: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The storage boundary failed.
    Storage(StoreError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EditRejected { reason } => write!(f, "Edit rejected: {reason}"),
            Self::InvalidInput { message } => write!(f, "Invalid input: {message}"),
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Storage(err) => write!(f, "Storage error: {err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ReadOnlyCell { .. } | CoreError::PublishedSchedule { .. } => {
                Self::EditRejected {
                    reason: err.to_string(),
                }
            }
            CoreError::RowNotFound { employee_id, date } => Self::ResourceNotFound {
                resource_type: String::from("Grid row"),
                message: format!("employee {employee_id} on {date}"),
            },
            CoreError::DomainViolation(_) | CoreError::CellIndexOutOfRange { .. } => {
                Self::InvalidInput {
                    message: err.to_string(),
                }
            }
        }
    }
}
