// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Paid-hour calculation for contiguous cell runs and time ranges.
//!
//! ## Invariants
//!
//! - The first half-hour cell of any run is unpaid setup/overlap time:
//!   a lone marked cell contributes zero hours, and every run loses
//!   exactly one half hour off its naive total.
//! - Both entry points agree on every pair they can both express, apart
//!   from the two named overrides below.
//! - Results are rounded to 2 decimal places.
//!
//! ## Named overrides
//!
//! The 04:00–06:00 opening block is always worth exactly 2.0 hours, and
//! an open-to-close block (04:00 to end of day) exactly 20.0. Payroll
//! reconciles against these two figures, so both stay explicit cases
//! rather than consequences of the formula.

use crate::time_grid::{MINUTES_PER_DAY, TimeSlot};

/// Minutes since start of day at which the opening block starts (04:00).
const OPENING_BLOCK_START_MINUTES: u16 = 4 * 60;

/// Minutes since start of day at which the opening block ends (06:00).
const OPENING_BLOCK_END_MINUTES: u16 = 6 * 60;

/// Paid hours for the 04:00–06:00 opening block.
const OPENING_BLOCK_HOURS: f64 = 2.0;

/// Cell-run length that corresponds to the opening block.
const OPENING_BLOCK_CELL_RUN: usize = 5;

/// Paid hours for a block covering 04:00 through end of day.
const OPEN_TO_CLOSE_HOURS: f64 = 20.0;

/// Minutes of every run that are unpaid (the first half-hour cell).
const UNPAID_LEAD_MINUTES: u16 = 30;

/// Rounds an hour value to 2 decimal places.
fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Converts a contiguous run of marked cells into paid hours.
///
/// Zero or one cell yields `0.0`; the five-cell opening-block run
/// yields exactly 2.0; otherwise every cell after the first counts a
/// full half hour.
#[must_use]
#[allow(clippy::cast_precision_loss)] // cell counts are far below 2^52
pub fn hours_from_cell_run(cell_count: usize) -> f64 {
    if cell_count <= 1 {
        return 0.0;
    }
    if cell_count == OPENING_BLOCK_CELL_RUN {
        return OPENING_BLOCK_HOURS;
    }
    round_hours((cell_count as f64 - 1.0) * 0.5)
}

/// Converts an explicit start/end slot pair into paid hours.
///
/// The difference is taken modulo one day, so ranges across midnight and
/// ranges ending on the end-of-day sentinel both resolve. A difference
/// of at most the unpaid lead yields `0.0`.
#[must_use]
pub fn hours_from_time_range(start: TimeSlot, end: TimeSlot) -> f64 {
    if start == end {
        return 0.0;
    }
    if start.minutes() == OPENING_BLOCK_START_MINUTES && end.minutes() == OPENING_BLOCK_END_MINUTES
    {
        return OPENING_BLOCK_HOURS;
    }
    if start.minutes() == OPENING_BLOCK_START_MINUTES && end.is_end_of_day() {
        return OPEN_TO_CLOSE_HOURS;
    }

    let diff_minutes: u16 = (end.minutes() + MINUTES_PER_DAY - start.minutes()) % MINUTES_PER_DAY;
    if diff_minutes <= UNPAID_LEAD_MINUTES {
        return 0.0;
    }
    round_hours(f64::from(diff_minutes - UNPAID_LEAD_MINUTES) / 60.0)
}
