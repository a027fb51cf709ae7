//! Search state and result records.
//!
//! # Ownership model
//!
//! A [`SearchState`] is owned exclusively by the frontier.  Expansion pops a
//! state and pushes independent clones, each differing by one incremental
//! change (next sibling section, an appended choice, a recorded diagnostic).
//! Nothing is shared mutably between branches; the course-list bound is a
//! handful of entries, so copy-on-branch is cheap and keeps the state a plain
//! value.
//!
//! States and diagnostics reference sections by index pair ([`SectionRef`])
//! into the session's sorted candidate lists rather than by owned `Section`,
//! so cloning a state copies a few words per decided course.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tt_core::{GridCell, Term};

// ── Indices ───────────────────────────────────────────────────────────────────

/// Index of a course in the session's sorted candidate lists.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseIdx(pub u16);

impl CourseIdx {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CourseIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CourseIdx({})", self.0)
    }
}

/// A section identified by its position in the candidate lists.
///
/// Resolve to the underlying [`Section`][tt_core::Section] through
/// [`Search::section`][crate::Search::section].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionRef {
    pub course: CourseIdx,
    pub section: u16,
}

impl SectionRef {
    #[inline]
    pub fn new(course: usize, section: usize) -> SectionRef {
        SectionRef {
            course: CourseIdx(course as u16),
            section: section as u16,
        }
    }
}

impl fmt::Display for SectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.course.0, self.section)
    }
}

// ── Diagnostics ───────────────────────────────────────────────────────────────

/// Per-term grid cells a section occupies outside the student's preferences.
pub type TermViolations = BTreeMap<Term, BTreeSet<GridCell>>;

/// A trade-off recorded on a search branch.  Immutable once created.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// Two sections collided; `rejected` was dropped so `kept` could stay.
    Conflict {
        rejected: SectionRef,
        kept: SectionRef,
    },

    /// A section was accepted despite occupying grid cells the student did
    /// not allow.  Only terms with at least one violating cell appear.
    TimeViolation {
        section: SectionRef,
        cells: TermViolations,
    },
}

impl Diagnostic {
    /// Equivalence used for frontier pruning.
    ///
    /// A `Conflict` names the same trade-off whichever side was rejected, so
    /// the pair is compared unordered; `TimeViolation` compares structurally.
    pub fn equivalent(&self, other: &Diagnostic) -> bool {
        match (self, other) {
            (
                Diagnostic::Conflict { rejected: ar, kept: ak },
                Diagnostic::Conflict { rejected: br, kept: bk },
            ) => (ar, ak) == (br, bk) || (ar, ak) == (bk, br),
            (Diagnostic::TimeViolation { .. }, Diagnostic::TimeViolation { .. }) => self == other,
            _ => false,
        }
    }
}

/// `true` when two diagnostic sequences describe the same trade-offs.
///
/// Branches that agree here are guaranteed to converge on redundant
/// combinations; the frontier prunes on this.
pub fn same_tradeoffs(a: &[Diagnostic], b: &[Diagnostic]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equivalent(y))
}

// ── SearchState ───────────────────────────────────────────────────────────────

/// One partial assignment on the frontier.
///
/// `course`/`section` are the cursor into the candidate lists: the next
/// expansion of this state considers section `section` of course `course`.
/// `chosen` holds one entry per decided course, minus any dropped by
/// conflict repair.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub chosen: Vec<SectionRef>,
    pub diagnostics: Vec<Diagnostic>,
    pub course: usize,
    pub section: usize,
}

impl SearchState {
    /// The seed state: nothing decided, cursor at the first course.
    pub fn root() -> SearchState {
        SearchState {
            chosen: Vec::new(),
            diagnostics: Vec::new(),
            course: 0,
            section: 0,
        }
    }

    /// Independent copy for branching.
    #[inline]
    pub fn child(&self) -> SearchState {
        self.clone()
    }

    /// Copy that considers the next section of the same course.
    pub fn sibling(&self) -> SearchState {
        let mut next = self.clone();
        next.section += 1;
        next
    }
}

// ── Combination ───────────────────────────────────────────────────────────────

/// A fully decided schedule: the chosen sections plus the trade-offs made on
/// the path that produced them.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combination {
    pub sections: Vec<SectionRef>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Combination {
    /// A clean combination required no trade-offs and covers every course.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
