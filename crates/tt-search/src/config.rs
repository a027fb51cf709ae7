//! Search session configuration.

/// Knobs for one search session.
///
/// Typically built once by the host application and handed to
/// [`SearchBuilder`][crate::SearchBuilder].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Stop once this many combinations have been emitted.  The search then
    /// reports `Capped`.  Default: 50 000 — effectively "all of them" for
    /// realistic course loads while still bounding a degenerate catalog.
    pub max_results: usize,

    /// Frontier entries processed per [`advance`][crate::Search::advance]
    /// convenience tick (`run_to_end` uses this).  Default: 20.
    pub batch_size: usize,

    /// Maximum diagnostics tolerated on one branch before it is abandoned.
    ///
    /// 0 degenerates to pure backtracking: any conflict or time violation is
    /// a dead end and only clean combinations are produced.
    pub diagnostics_budget: usize,

    /// Optional cap on how many chosen sections may share one term.
    /// `None` (the default) leaves term load unconstrained.
    pub max_per_term: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 50_000,
            batch_size: 20,
            diagnostics_budget: 0,
            max_per_term: None,
        }
    }
}
