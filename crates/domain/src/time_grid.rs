// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The discrete time axis shift cells are indexed against.
//!
//! A grid is an inclusive, strictly increasing sequence of slots from a
//! start hour to an end hour. An end hour of 24 is represented by a
//! dedicated end-of-day sentinel that displays as `"00:00"`: midnight as
//! a *boundary* is a different value from midnight as a *slot*, and only
//! grid generation and boundary lookup can produce the sentinel. Parsing
//! external data always yields wall-clock slots.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Minutes in one day; also the internal value of the end-of-day sentinel.
pub const MINUTES_PER_DAY: u16 = 1440;

/// The default slot spacing.
pub const HALF_HOUR_MINUTES: u16 = 30;

/// An immutable point on the grid, stored as minutes since start of day.
///
/// The wire representation is zero-padded ASCII `HH:MM`; it must be
/// preserved exactly because slot equality and grid lookup key on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    /// Minutes since start of day (0..=1440).
    minutes: u16,
}

impl TimeSlot {
    /// The end-of-day sentinel. Displays as `"00:00"`.
    pub const END_OF_DAY: Self = Self {
        minutes: MINUTES_PER_DAY,
    };

    /// Creates a `TimeSlot` from minutes since start of day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeSlot` if `minutes` exceeds one day.
    pub fn from_minutes(minutes: u16) -> Result<Self, DomainError> {
        if minutes > MINUTES_PER_DAY {
            return Err(DomainError::InvalidTimeSlot(format!("{minutes} minutes")));
        }
        Ok(Self { minutes })
    }

    /// Parses a zero-padded `HH:MM` time string.
    ///
    /// `"00:00"` always parses as start of day; the end-of-day sentinel
    /// can never be produced from external input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeSlot` if the string is not
    /// zero-padded `HH:MM` with a valid hour and minute.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidTimeSlot(value.to_string());

        let bytes: &[u8] = value.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        if !value[0..2].chars().all(|c| c.is_ascii_digit())
            || !value[3..5].chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hour: u16 = value[0..2].parse().map_err(|_| invalid())?;
        let minute: u16 = value[3..5].parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Returns minutes since start of day (1440 for the sentinel).
    #[must_use]
    pub const fn minutes(&self) -> u16 {
        self.minutes
    }

    /// Returns whether this is the end-of-day sentinel.
    #[must_use]
    pub const fn is_end_of_day(&self) -> bool {
        self.minutes == MINUTES_PER_DAY
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The sentinel wraps to "00:00" on the wire.
        let hour: u16 = (self.minutes / 60) % 24;
        let minute: u16 = self.minutes % 60;
        write!(f, "{hour:02}:{minute:02}")
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: String = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// The ordered slot sequence one scheduling day is indexed against.
///
/// A grid with `n` slots has `n - 1` cells; cell `i` spans
/// `slots[i]..slots[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGrid {
    slots: Vec<TimeSlot>,
    interval_minutes: u16,
}

impl TimeGrid {
    /// Generates a half-hour grid from `start_hour:00` through
    /// `end_hour:00` inclusive.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGridRange` if `end_hour <= start_hour`
    /// or `end_hour > 24`.
    pub fn generate(start_hour: u8, end_hour: u8) -> Result<Self, DomainError> {
        Self::with_interval(start_hour, end_hour, HALF_HOUR_MINUTES)
    }

    /// Generates a grid with an explicit slot interval.
    ///
    /// An `end_hour` of 24 emits the end-of-day sentinel as the terminal
    /// slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGridInterval` if `interval_minutes` is
    /// zero or does not evenly divide 60, and
    /// `DomainError::InvalidGridRange` if `end_hour <= start_hour` or
    /// `end_hour > 24`.
    pub fn with_interval(
        start_hour: u8,
        end_hour: u8,
        interval_minutes: u16,
    ) -> Result<Self, DomainError> {
        if interval_minutes == 0 || 60 % interval_minutes != 0 {
            return Err(DomainError::InvalidGridInterval { interval_minutes });
        }
        if end_hour <= start_hour || end_hour > 24 {
            return Err(DomainError::InvalidGridRange {
                start_hour,
                end_hour,
            });
        }

        let start_minutes: u16 = u16::from(start_hour) * 60;
        let end_minutes: u16 = u16::from(end_hour) * 60;

        let mut slots: Vec<TimeSlot> = Vec::new();
        let mut minutes: u16 = start_minutes;
        while minutes <= end_minutes {
            slots.push(TimeSlot { minutes });
            minutes += interval_minutes;
        }

        Ok(Self {
            slots,
            interval_minutes,
        })
    }

    /// Returns the ordered slot sequence.
    #[must_use]
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of cells (one fewer than the slot count).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    /// Returns the slot spacing in minutes.
    #[must_use]
    pub const fn interval_minutes(&self) -> u16 {
        self.interval_minutes
    }

    /// Returns the index of a slot, or `None` if it is not on the grid.
    #[must_use]
    pub fn index_of(&self, slot: TimeSlot) -> Option<usize> {
        self.slots
            .binary_search_by(|s| s.minutes.cmp(&slot.minutes))
            .ok()
    }

    /// Resolves a shift *boundary* time to a slot index.
    ///
    /// Identical to [`Self::index_of`] except that a midnight boundary is
    /// read as end-of-day when the grid runs to end-of-day and does not
    /// itself start at midnight. Persisted records write the terminal
    /// slot as `"00:00"`, which parses back as start of day; as an end
    /// boundary it can only mean the other midnight.
    #[must_use]
    pub fn boundary_index(&self, slot: TimeSlot) -> Option<usize> {
        let ends_at_midnight: bool = self.slots.last().is_some_and(TimeSlot::is_end_of_day);
        let starts_at_midnight: bool = self.slots.first().is_some_and(|s| s.minutes == 0);

        if slot.minutes == 0 && ends_at_midnight && !starts_at_midnight {
            return Some(self.slots.len() - 1);
        }
        self.index_of(slot)
    }
}
