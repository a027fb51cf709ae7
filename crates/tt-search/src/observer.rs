//! Search observer trait for progress reporting and result collection.

use crate::search::SearchStatus;
use crate::state::Combination;

/// Callbacks invoked by [`Search::advance`][crate::Search::advance] at key
/// points in the search.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  This is the engine's whole output
/// channel: no event bus, no timers — the host wires these callbacks to
/// whatever UI or collector it owns.
///
/// # Example — result counter
///
/// ```rust,ignore
/// struct CountResults(usize);
///
/// impl SearchObserver for CountResults {
///     fn on_combination(&mut self, _combo: &Combination) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called for every combination the search emits.
    fn on_combination(&mut self, _combo: &Combination) {}

    /// Called once per session, for the first combination ever emitted.
    /// Hosts typically make this the user's default selection.
    fn on_default_selection(&mut self, _combo: &Combination) {}

    /// Called once per session when the search enters a terminal status
    /// (`Exhausted`, `Capped`, or `Cancelled`).
    fn on_finished(&mut self, _status: SearchStatus) {}
}

/// A [`SearchObserver`] that does nothing.  Use when you only need the
/// [`AdvanceReport`][crate::AdvanceReport] and the accessors.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
