//! Time-of-day model.
//!
//! # Design
//!
//! A class period's boundaries are represented as `Time` — minutes since
//! midnight in a `u16`.  Using an integer minute count as the canonical unit
//! means all comparison and grid arithmetic is exact (no floating-point, no
//! datetime library) and ordering is O(1).
//!
//! Preference grids divide the day into fixed-width cells (default 30
//! minutes).  `snap_down` maps an arbitrary start time onto the boundary of
//! the cell that contains it, so a 9:05 start is accounted against the 9:00
//! cell rather than silently skipping it.

use std::fmt;

/// A time of day, stored as minutes since midnight.
///
/// `u16` covers the full day (1440 minutes) with room to spare; ordering and
/// equality are derived directly from the minute count.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time(pub u16);

impl Time {
    pub const MIDNIGHT: Time = Time(0);

    /// Minutes in a full day; `Time` values are expected to stay below this.
    pub const DAY_MINUTES: u16 = 24 * 60;

    /// Build a time from an hour and minute pair.
    #[inline]
    pub const fn hm(hour: u16, minute: u16) -> Time {
        Time(hour * 60 + minute)
    }

    /// Hour component (0–23 for in-range values).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component within the hour.
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Round down to the boundary of the enclosing grid cell.
    ///
    /// `unit` is the cell width in minutes and must be non-zero.
    #[inline]
    pub fn snap_down(self, unit: u16) -> Time {
        debug_assert!(unit > 0, "grid unit must be non-zero");
        Time(self.0 - self.0 % unit)
    }
}

impl std::ops::Add<u16> for Time {
    type Output = Time;
    #[inline]
    fn add(self, minutes: u16) -> Time {
        Time(self.0 + minutes)
    }
}

impl std::ops::Sub for Time {
    type Output = u16;
    /// Minutes elapsed from `rhs` to `self`.
    #[inline]
    fn sub(self, rhs: Time) -> u16 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
