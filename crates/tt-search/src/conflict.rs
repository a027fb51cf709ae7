//! Pairwise section conflict detection and the course-pair registry.

use rustc_hash::FxHashMap;
use tt_core::Section;

use crate::state::CourseIdx;

// ── Detector ──────────────────────────────────────────────────────────────────

/// Do two sections collide?  Pure and symmetric.
///
/// Sections with no term in common cannot conflict regardless of their
/// meeting times.  Otherwise any pair of periods meeting on a shared day
/// with overlapping closed time intervals is a collision.
pub fn conflicts(a: &Section, b: &Section) -> bool {
    if !a.terms.intersects(b.terms) {
        return false;
    }
    a.periods
        .iter()
        .any(|p| b.periods.iter().any(|q| p.overlaps(q)))
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Observed relation between two courses.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    /// Every section pairing compared so far collided.
    Conflict,
    /// At least one compatible section pairing exists.
    Compatible,
}

/// Memoized course-pair compatibility, built up as the search compares
/// sections.
///
/// A pair enters the registry as `Conflict` on its first observation and is
/// promoted to `Compatible` the first time a non-colliding section pairing
/// is seen.  Promotion is monotonic: one compatible observation is proof,
/// so the pair is never demoted.  Pairs the search has not compared yet are
/// absent and report no conflict.
#[derive(Clone, Debug, Default)]
pub struct ConflictRegistry {
    relations: FxHashMap<(CourseIdx, CourseIdx), Relation>,
}

impl ConflictRegistry {
    pub fn new() -> ConflictRegistry {
        ConflictRegistry::default()
    }

    /// Unordered pairs share one entry.
    #[inline]
    fn key(a: CourseIdx, b: CourseIdx) -> (CourseIdx, CourseIdx) {
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Record one section-level comparison between courses `a` and `b`.
    pub(crate) fn observe(&mut self, a: CourseIdx, b: CourseIdx, collided: bool) {
        let relation = self.relations.entry(Self::key(a, b)).or_insert(Relation::Conflict);
        if !collided {
            *relation = Relation::Compatible;
        }
    }

    /// `true` when the pair has been observed and no compatible section
    /// pairing has been found yet.
    pub fn is_conflicting(&self, a: CourseIdx, b: CourseIdx) -> bool {
        matches!(
            self.relations.get(&Self::key(a, b)),
            Some(Relation::Conflict)
        )
    }

    /// The lowest-indexed pair still marked `Conflict`, if any.
    pub fn first_conflicting_pair(&self) -> Option<(CourseIdx, CourseIdx)> {
        self.relations
            .iter()
            .filter(|(_, r)| **r == Relation::Conflict)
            .map(|(pair, _)| *pair)
            .min()
    }

    /// Number of course pairs observed so far.
    pub fn observed_pairs(&self) -> usize {
        self.relations.len()
    }

    pub(crate) fn clear(&mut self) {
        self.relations.clear();
    }
}
