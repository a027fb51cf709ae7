//! Days, terms, and class periods.
//!
//! Day and term memberships are single-byte bitsets (`DaySet`, `TermSet`) so
//! the hot intersection checks in conflict detection compile to one `and`
//! instruction.  `Period` carries the day set plus a start/end [`Time`] pair
//! and implements the closed-interval overlap test used throughout the
//! engine.

use std::fmt;

use crate::time::Time;

// ── Days ──────────────────────────────────────────────────────────────────────

/// A day of the week.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Bit position inside a [`DaySet`].
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Three-letter abbreviation ("Mon", "Tue", …).
    pub fn abbrev(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
            DayOfWeek::Sunday => "Sun",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

// ── Terms ─────────────────────────────────────────────────────────────────────

/// An academic term a section can run in.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Term {
    A,
    B,
    C,
    D,
}

impl Term {
    pub const ALL: [Term; 4] = [Term::A, Term::B, Term::C, Term::D];

    /// Bit position inside a [`TermSet`].
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

// ── Bitset generator ──────────────────────────────────────────────────────────

/// Generate a one-byte set over a small `Copy` enum with a `bit()` method and
/// an `ALL` constant.
macro_rules! byte_set {
    ($(#[$attr:meta])* $vis:vis struct $name:ident of $elem:ident) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u8);

        impl $name {
            pub const EMPTY: $name = $name(0);

            /// Set containing a single element.
            #[inline]
            pub const fn single(elem: $elem) -> $name {
                $name(elem.bit())
            }

            #[inline]
            pub fn is_empty(self) -> bool {
                self.0 == 0
            }

            #[inline]
            pub fn contains(self, elem: $elem) -> bool {
                self.0 & elem.bit() != 0
            }

            #[inline]
            pub fn insert(&mut self, elem: $elem) {
                self.0 |= elem.bit();
            }

            /// `true` if the two sets share at least one element.
            #[inline]
            pub fn intersects(self, other: $name) -> bool {
                self.0 & other.0 != 0
            }

            pub fn len(self) -> usize {
                self.0.count_ones() as usize
            }

            /// Iterate members in declaration order.
            pub fn iter(self) -> impl Iterator<Item = $elem> {
                <$elem>::ALL.into_iter().filter(move |e| self.contains(*e))
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> $name {
                let mut set = $name::EMPTY;
                for elem in iter {
                    set.insert(elem);
                }
                set
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut first = true;
                for elem in self.iter() {
                    if !first {
                        f.write_str(",")?;
                    }
                    write!(f, "{elem}")?;
                    first = false;
                }
                Ok(())
            }
        }
    };
}

byte_set! {
    /// The days of the week a period meets on.
    pub struct DaySet of DayOfWeek
}

byte_set! {
    /// The terms a section is offered in.
    pub struct TermSet of Term
}

// ── Period ────────────────────────────────────────────────────────────────────

/// One scheduled meeting block: a day set plus a start/end time.
///
/// Well-formed periods satisfy `start <= end`; the engine validates this at
/// session construction rather than here, so malformed catalog data is
/// reported as a configuration error instead of a panic.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    pub days: DaySet,
    pub start: Time,
    pub end: Time,
}

impl Period {
    #[inline]
    pub fn new(days: DaySet, start: Time, end: Time) -> Period {
        Period { days, start, end }
    }

    /// `start <= end` — checked by the search builder before a session starts.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Closed-interval overlap on a shared day.
    ///
    /// Two periods collide when they meet on at least one common day and
    /// `other`'s start or end falls within `[start, end]`, or `other` fully
    /// contains this period.  Endpoints touching (one ends exactly when the
    /// other starts) counts as overlap: students cannot teleport between
    /// buildings.
    pub fn overlaps(&self, other: &Period) -> bool {
        if !self.days.intersects(other.days) {
            return false;
        }
        (other.start >= self.start && other.start <= self.end)
            || (other.end >= self.start && other.end <= self.end)
            || (other.start <= self.start && other.end >= self.end)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.days, self.start, self.end)
    }
}
