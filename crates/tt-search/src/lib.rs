//! `tt-search` — incremental course-combination search for the `tt`
//! timetable engine.
//!
//! Given one candidate-section list per selected course and a grid of the
//! student's preferred class times, a [`Search`] enumerates every workable
//! combination — one section per course — in small, host-driven batches.
//! When no clean combination exists it can spend a configurable diagnostics
//! budget on best-effort results that name the exact trade-offs (a dropped
//! section, a class outside preferred hours), so the host can explain *why*
//! a schedule is infeasible rather than just reporting that it is.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`conflict`] | `conflicts()` detector, `ConflictRegistry`             |
//! | [`window`]   | `time_violations()` — sections vs. the preference grid |
//! | [`state`]    | `SearchState`, `Diagnostic`, `Combination`             |
//! | [`search`]   | `Search` — frontier, step transition, driver           |
//! | [`builder`]  | `SearchBuilder` — validated session construction       |
//! | [`observer`] | `SearchObserver` trait, `NoopObserver`                 |
//! | [`config`]   | `SearchConfig`                                         |
//! | [`error`]    | `SearchError`, `SearchResult<T>`                       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tt_core::{Course, TimeGrid};
//! use tt_search::{NoopObserver, SearchBuilder, SearchStatus};
//!
//! let mut search = SearchBuilder::new(grid)
//!     .course(Course::new("CS", "2303"), cs_sections)
//!     .course(Course::new("MA", "2051"), ma_sections)
//!     .build()?;
//!
//! while search.can_advance() {
//!     let report = search.advance(20, &mut NoopObserver);
//!     // interleave UI work here; report.produced combinations are new
//! }
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Serde derives on results and diagnostics (and `tt-core`).    |

pub mod builder;
pub mod config;
pub mod conflict;
pub mod error;
pub mod observer;
pub mod search;
pub mod state;
pub mod window;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use config::SearchConfig;
pub use conflict::{ConflictRegistry, Relation, conflicts};
pub use error::{SearchError, SearchResult};
pub use observer::{NoopObserver, SearchObserver};
pub use search::{AdvanceReport, Search, SearchStatus};
pub use state::{Combination, CourseIdx, Diagnostic, SearchState, SectionRef, TermViolations};
pub use window::time_violations;
