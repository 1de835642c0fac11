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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assemble;
mod consolidate;
mod error;
mod project;
mod state;
mod toggle;

#[cfg(test)]
mod tests;

pub use assemble::assemble;
pub use consolidate::{
    CellBlock, consolidate, expand_shift, shift_records_from_row, with_recomputed_total, work_hours,
};
pub use error::CoreError;
pub use project::{DayOverride, apply_override, project};
pub use state::{AssemblyResult, DayEmployeeRow, GridTransition, RowKey, WeekGrid};
pub use toggle::toggle_cell;
