//! `tt-core` — foundational types for the `tt` timetable engine.
//!
//! This crate is a dependency of `tt-search` and intentionally has no `tt-*`
//! dependencies and minimal external ones (only `rustc-hash`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`time`]     | `Time` — minutes-since-midnight with grid arithmetic   |
//! | [`calendar`] | `DayOfWeek`, `DaySet`, `Term`, `TermSet`, `Period`     |
//! | [`model`]    | `Course`, `Section`, `CandidateList`                   |
//! | [`grid`]     | `TimeGrid`, `GridCell` — student time preferences      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.         |

pub mod calendar;
pub mod grid;
pub mod model;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use calendar::{DayOfWeek, DaySet, Period, Term, TermSet};
pub use grid::{GridCell, TimeGrid};
pub use model::{CandidateList, Course, Section};
pub use time::Time;
