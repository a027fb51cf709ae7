//! Student time-preference grid.
//!
//! The grid divides each (term, day) into fixed-width cells — 30 minutes by
//! default — and records which cell start times the student is willing to
//! attend class in.  The engine walks a section's periods across this grid
//! and reports every cell the section occupies that the student did not
//! allow.
//!
//! Lookups are the hot path of time-window evaluation, so the allowed sets
//! are `FxHashSet`s keyed per (term, day): integer-hashed membership checks,
//! one per stepped cell.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::calendar::{DaySet, DayOfWeek, Term};
use crate::time::Time;

/// One cell of the preference grid: a day plus the cell's start time.
///
/// Derives `Ord` (day first, then time) so violation sets iterate in a
/// stable, human-sensible order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub day: DayOfWeek,
    pub time: Time,
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

/// Allowed class times per (term, day), at a fixed cell granularity.
///
/// Times inserted through [`allow`][TimeGrid::allow] are snapped down to the
/// cell boundary, so callers may pass unaligned times without creating
/// unmatchable entries.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeGrid {
    unit_minutes: u16,
    allowed: FxHashMap<(Term, DayOfWeek), FxHashSet<Time>>,
}

impl TimeGrid {
    /// The conventional half-hour cell width.
    pub const DEFAULT_UNIT: u16 = 30;

    /// An empty grid (nothing allowed) with the given cell width in minutes.
    ///
    /// A zero unit is rejected when the search session is built.
    pub fn new(unit_minutes: u16) -> TimeGrid {
        TimeGrid {
            unit_minutes,
            allowed: FxHashMap::default(),
        }
    }

    /// Cell width in minutes.
    #[inline]
    pub fn unit_minutes(&self) -> u16 {
        self.unit_minutes
    }

    /// Allow the cell containing `time` on `day` in `term`.
    pub fn allow(&mut self, term: Term, day: DayOfWeek, time: Time) {
        let cell = time.snap_down(self.unit_minutes);
        self.allowed.entry((term, day)).or_default().insert(cell);
    }

    /// Allow every cell from `from` (inclusive, snapped down) up to `to`
    /// (exclusive) on each day of `days`, in `term`.
    pub fn allow_block(&mut self, term: Term, days: DaySet, from: Time, to: Time) {
        for day in days.iter() {
            let mut cell = from.snap_down(self.unit_minutes);
            while cell < to {
                self.allowed.entry((term, day)).or_default().insert(cell);
                cell = cell + self.unit_minutes;
            }
        }
    }

    /// Is the cell starting at `time` allowed on `day` in `term`?
    ///
    /// `time` must already be cell-aligned; the evaluator only queries
    /// stepped cell boundaries.
    #[inline]
    pub fn is_allowed(&self, term: Term, day: DayOfWeek, time: Time) -> bool {
        match self.allowed.get(&(term, day)) {
            Some(times) => times.contains(&time),
            None => false,
        }
    }

    /// Number of allowed cells across the whole grid.
    pub fn allowed_cells(&self) -> usize {
        self.allowed.values().map(|cells| cells.len()).sum()
    }
}
