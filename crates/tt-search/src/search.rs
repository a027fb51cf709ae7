//! The `Search` session: frontier, step transition, and incremental driver.
//!
//! # Search procedure
//!
//! Candidate lists form a tree — one layer per course, one node per section.
//! The frontier is an explicit LIFO stack of [`SearchState`]s; each `step`
//! pops one state and pushes its successors:
//!
//! ```text
//! pop S:
//!   ① terminal?   — cursor past the last course → prune equal-trade-off
//!                   frontier entries and emit a Combination.
//!   ② sibling     — if the current course has another section after the
//!                   cursor, push the sibling state first.
//!   ③ time check  — section occupies disallowed grid cells → tolerate it
//!                   with a TimeViolation diagnostic (budget permitting),
//!                   falling through to ④ if it also collides; out of
//!                   budget → dead end.
//!   ④ collisions  — compare against chosen sections in order, recording
//!                   each course pair in the registry; on collision push a
//!                   keep-branch and a replace-branch per colliding holder
//!                   (budget permitting).
//!   ⑤ accept      — no problems: push the state with the section chosen
//!                   and the cursor on the next course.
//! ```
//!
//! The fixed push order (sibling, keep, replace) and the stable size-sort of
//! the candidate lists make the emitted sequence deterministic.
//!
//! # Driving
//!
//! Nothing here blocks or spins: the host calls [`advance`][Search::advance]
//! with a batch bound from its own loop — a UI timer tick, a "generate more"
//! button — and the search does that much work and returns.  Create via
//! [`SearchBuilder`][crate::SearchBuilder].

use tt_core::{CandidateList, Course, Section, Term, TimeGrid};

use crate::config::SearchConfig;
use crate::conflict::{ConflictRegistry, conflicts};
use crate::observer::SearchObserver;
use crate::state::{
    Combination, CourseIdx, Diagnostic, SearchState, SectionRef, TermViolations, same_tradeoffs,
};
use crate::window::time_violations;

// ── Status ────────────────────────────────────────────────────────────────────

/// Where a session is in its lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// Frontier non-empty; more combinations may appear.
    Active,
    /// Frontier emptied without hitting the result cap.
    Exhausted,
    /// The configured `max_results` was reached.
    Capped,
    /// The host cancelled the session; unexplored branches were discarded.
    Cancelled,
}

impl SearchStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != SearchStatus::Active
    }
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// What one [`advance`][Search::advance] call accomplished.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AdvanceReport {
    /// Combinations emitted during this call.
    pub produced: usize,
    /// Status after the call; the host keeps ticking while this is `Active`.
    pub status: SearchStatus,
}

// ── Search ────────────────────────────────────────────────────────────────────

/// One search session over a fixed catalog and preference grid.
///
/// Single-threaded and cooperative: no I/O, no timers, no internal blocking.
/// All inputs are read-only for the session's lifetime; all results
/// accumulate in [`combinations`][Search::combinations].
pub struct Search {
    config: SearchConfig,

    /// Candidate lists, stably sorted ascending by section count so the most
    /// constrained course branches first.
    candidates: Vec<CandidateList>,

    /// The student's allowed class times.
    grid: TimeGrid,

    /// Not-yet-expanded states, LIFO.
    frontier: Vec<SearchState>,

    /// Course-pair compatibility observed so far.
    registry: ConflictRegistry,

    /// Every combination emitted this session, in emission order.
    combinations: Vec<Combination>,

    status: SearchStatus,
    finished_reported: bool,
}

impl Search {
    /// Called by the builder after validation; seeds the frontier.
    pub(crate) fn new(
        config: SearchConfig,
        candidates: Vec<CandidateList>,
        grid: TimeGrid,
    ) -> Search {
        let mut search = Search {
            config,
            candidates,
            grid,
            frontier: Vec::new(),
            registry: ConflictRegistry::new(),
            combinations: Vec::new(),
            status: SearchStatus::Active,
            finished_reported: false,
        };
        search.seed();
        search
    }

    fn seed(&mut self) {
        if self.candidates.is_empty() {
            // Nothing to search: report exhausted on the first advance.
            self.status = SearchStatus::Exhausted;
        } else {
            self.frontier.push(SearchState::root());
            self.status = SearchStatus::Active;
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// `true` while another `advance` call can still make progress.
    #[inline]
    pub fn can_advance(&self) -> bool {
        self.status == SearchStatus::Active && !self.frontier.is_empty()
    }

    /// Candidate lists in search order (sorted ascending by section count).
    #[inline]
    pub fn candidates(&self) -> &[CandidateList] {
        &self.candidates
    }

    pub fn course(&self, idx: CourseIdx) -> &Course {
        &self.candidates[idx.index()].course
    }

    /// Resolve a [`SectionRef`] from a state, diagnostic, or combination.
    pub fn section(&self, sref: SectionRef) -> &Section {
        &self.candidates[sref.course.index()].sections[sref.section as usize]
    }

    /// Combinations emitted so far, in emission order.
    #[inline]
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    #[inline]
    pub fn registry(&self) -> &ConflictRegistry {
        &self.registry
    }

    /// Are these two courses still conflicting as far as the search has
    /// observed?  Usable mid-search, before any combination exists.
    pub fn is_conflicting(&self, a: CourseIdx, b: CourseIdx) -> bool {
        self.registry.is_conflicting(a, b)
    }

    /// A course pair blocking every schedule, if the search has found one.
    ///
    /// `None` once any combination exists — at that point no pair is fatal.
    pub fn conflicting_pair(&self) -> Option<(CourseIdx, CourseIdx)> {
        if !self.combinations.is_empty() {
            return None;
        }
        self.registry.first_conflicting_pair()
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Pop and process up to `batch` frontier entries.
    ///
    /// Returns how many combinations this call produced and the status
    /// afterwards.  Call repeatedly from a host-owned loop; each call does a
    /// bounded amount of work and never blocks.
    pub fn advance<O: SearchObserver>(&mut self, batch: usize, observer: &mut O) -> AdvanceReport {
        let before = self.combinations.len();
        let mut processed = 0;

        while processed < batch && self.status == SearchStatus::Active {
            let Some(state) = self.frontier.pop() else {
                self.status = SearchStatus::Exhausted;
                break;
            };
            self.step(state, observer);
            processed += 1;

            if self.combinations.len() >= self.config.max_results {
                self.status = SearchStatus::Capped;
            }
        }

        if self.status == SearchStatus::Active && self.frontier.is_empty() {
            self.status = SearchStatus::Exhausted;
        }
        if self.status.is_terminal() {
            self.report_finished(observer);
        }

        AdvanceReport {
            produced: self.combinations.len() - before,
            status: self.status,
        }
    }

    /// Drive the session to a terminal status in `config.batch_size` chunks.
    /// Convenience for tests and batch hosts.
    pub fn run_to_end<O: SearchObserver>(&mut self, observer: &mut O) -> SearchStatus {
        let batch = self.config.batch_size.max(1);
        while self.status == SearchStatus::Active {
            self.advance(batch, observer);
        }
        self.status
    }

    /// Discard all unexplored branches and fix the status to `Cancelled`.
    ///
    /// No partial combinations are reported.  A no-op when the session has
    /// already stopped.
    pub fn cancel<O: SearchObserver>(&mut self, observer: &mut O) {
        if self.status.is_terminal() {
            return;
        }
        self.frontier.clear();
        self.status = SearchStatus::Cancelled;
        self.report_finished(observer);
    }

    /// Throw away frontier, combinations, and registry, and reseed a fresh
    /// session over the same catalog, grid, and configuration.
    pub fn restart(&mut self) {
        self.frontier.clear();
        self.combinations.clear();
        self.registry.clear();
        self.finished_reported = false;
        self.seed();
    }

    fn report_finished<O: SearchObserver>(&mut self, observer: &mut O) {
        if !self.finished_reported {
            self.finished_reported = true;
            observer.on_finished(self.status);
        }
    }

    // ── Step transition ───────────────────────────────────────────────────

    fn step<O: SearchObserver>(&mut self, state: SearchState, observer: &mut O) {
        if state.course == self.candidates.len() {
            self.finish_combination(state, observer);
            return;
        }

        // Guarantee every sibling section of this course is eventually tried.
        if state.section + 1 < self.candidates[state.course].sections.len() {
            self.frontier.push(state.sibling());
        }

        self.expand(state);
    }

    /// Evaluate the section under the cursor and push 0..N successors.
    fn expand(&mut self, state: SearchState) {
        let sref = SectionRef::new(state.course, state.section);

        let violations = {
            let section = &self.candidates[state.course].sections[state.section];
            time_violations(section, &self.grid)
        };

        if !violations.is_empty() {
            if state.diagnostics.len() >= self.config.diagnostics_budget {
                return; // dead end, nothing pushed
            }
            self.expand_tolerating(state, sref, violations);
            return;
        }

        match self.scan_collisions(&state.chosen, sref) {
            None => {
                let mut next = state;
                next.chosen.push(sref);
                self.push_advanced(next);
            }
            Some(_) if state.diagnostics.len() >= self.config.diagnostics_budget => {
                // dead end
            }
            Some(_) => self.branch_collisions(&state, sref),
        }
    }

    /// Accept the section despite its time violations, then fall through to
    /// collision handling from the tolerated branch.
    fn expand_tolerating(
        &mut self,
        state: SearchState,
        sref: SectionRef,
        violations: TermViolations,
    ) {
        let mut tolerated = state.child();
        tolerated.diagnostics.push(Diagnostic::TimeViolation {
            section: sref,
            cells: violations,
        });

        if self.scan_collisions(&state.chosen, sref).is_some() {
            // Fixing the course collision needs a further diagnostic.
            if tolerated.diagnostics.len() >= self.config.diagnostics_budget {
                return;
            }
            self.branch_collisions(&tolerated, sref);
        } else {
            tolerated.chosen.push(sref);
            self.push_advanced(tolerated);
        }
    }

    /// Compare the newcomer against every chosen section in order, recording
    /// each course pair in the registry and stopping at the first collision.
    fn scan_collisions(&mut self, chosen: &[SectionRef], sref: SectionRef) -> Option<SectionRef> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let candidates = &self.candidates;
        let registry = &mut self.registry;

        let newcomer = &candidates[sref.course.index()].sections[sref.section as usize];
        for &held in chosen {
            let holder = &candidates[held.course.index()].sections[held.section as usize];
            let collided = conflicts(newcomer, holder);
            registry.observe(held.course, sref.course, collided);
            if collided {
                return Some(held);
            }
        }
        None
    }

    /// For every chosen section colliding with the newcomer, push the two
    /// repairs: keep the holder and reject the newcomer, or evict the holder
    /// and accept the newcomer.  Both advance the course cursor.
    fn branch_collisions(&mut self, state: &SearchState, sref: SectionRef) {
        let colliding: Vec<usize> = {
            let candidates = &self.candidates;
            let newcomer = &candidates[sref.course.index()].sections[sref.section as usize];
            state
                .chosen
                .iter()
                .enumerate()
                .filter(|(_, held)| {
                    let holder =
                        &candidates[held.course.index()].sections[held.section as usize];
                    conflicts(newcomer, holder)
                })
                .map(|(i, _)| i)
                .collect()
        };

        for i in colliding {
            let held = state.chosen[i];

            let mut keep = state.child();
            keep.diagnostics.push(Diagnostic::Conflict {
                rejected: sref,
                kept: held,
            });

            let mut replace = state.child();
            replace.diagnostics.push(Diagnostic::Conflict {
                rejected: held,
                kept: sref,
            });
            replace.chosen.remove(i);
            replace.chosen.push(sref);

            self.push_advanced(keep);
            self.push_advanced(replace);
        }
    }

    /// Move the cursor to the next course and push onto the frontier.
    /// States whose cursor passes the last course emit when popped.
    fn push_advanced(&mut self, mut state: SearchState) {
        state.course += 1;
        state.section = 0;
        self.frontier.push(state);
    }

    // ── Emission ──────────────────────────────────────────────────────────

    fn finish_combination<O: SearchObserver>(&mut self, state: SearchState, observer: &mut O) {
        if let Some(cap) = self.config.max_per_term {
            if self.exceeds_term_load(&state.chosen, cap) {
                return;
            }
        }

        // Sibling branches carrying the same trade-offs would converge on
        // redundant combinations; drop them while they sit on top.
        if !state.diagnostics.is_empty() {
            while let Some(top) = self.frontier.last() {
                if same_tradeoffs(&top.diagnostics, &state.diagnostics) {
                    self.frontier.pop();
                } else {
                    break;
                }
            }
        }

        let combo = Combination {
            sections: state.chosen,
            diagnostics: state.diagnostics,
        };
        let first = self.combinations.is_empty();
        observer.on_combination(&combo);
        if first {
            observer.on_default_selection(&combo);
        }
        self.combinations.push(combo);
    }

    /// Does any term carry more than `cap` of the chosen sections?
    fn exceeds_term_load(&self, chosen: &[SectionRef], cap: usize) -> bool {
        Term::ALL.into_iter().any(|term| {
            let load = chosen
                .iter()
                .filter(|sref| self.section(**sref).terms.contains(term))
                .count();
            load > cap
        })
    }
}
