//! Fluent builder for constructing a [`Search`] session.

use tt_core::{CandidateList, Course, Section, TimeGrid};

use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};
use crate::search::Search;

/// Fluent builder for [`Search`].
///
/// # Required inputs
///
/// - [`TimeGrid`] — the student's allowed class times
/// - one [`course`][SearchBuilder::course] call per selected course
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                   |
/// |---------------|---------------------------|
/// | `.config(c)`  | `SearchConfig::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let mut search = SearchBuilder::new(grid)
///     .course(Course::new("CS", "2303"), cs_sections)
///     .course(Course::new("MA", "2051"), ma_sections)
///     .config(SearchConfig { diagnostics_budget: 2, ..Default::default() })
///     .build()?;
/// search.run_to_end(&mut NoopObserver);
/// ```
pub struct SearchBuilder {
    grid: TimeGrid,
    config: SearchConfig,
    candidates: Vec<CandidateList>,
}

impl SearchBuilder {
    /// Create a builder over the given preference grid.
    pub fn new(grid: TimeGrid) -> SearchBuilder {
        SearchBuilder {
            grid,
            config: SearchConfig::default(),
            candidates: Vec::new(),
        }
    }

    /// Replace the default [`SearchConfig`].
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Add one course with its eligible sections.
    ///
    /// Courses are searched most-constrained-first regardless of the order
    /// they are added in; an empty section list fails [`build`][Self::build].
    pub fn course(mut self, course: Course, sections: Vec<Section>) -> Self {
        self.candidates.push(CandidateList::new(course, sections));
        self
    }

    /// Add pre-assembled candidate lists (catalog collaborators hand these
    /// over wholesale).
    pub fn candidates(mut self, lists: impl IntoIterator<Item = CandidateList>) -> Self {
        self.candidates.extend(lists);
        self
    }

    /// Validate all inputs, sort the candidate lists, and return a seeded,
    /// ready-to-advance [`Search`].
    ///
    /// The engine refuses to start on malformed catalog data: a course with
    /// zero sections, a period ending before it starts, or a zero-width grid
    /// cell all yield a configuration error here and are never searched.
    pub fn build(self) -> SearchResult<Search> {
        if self.grid.unit_minutes() == 0 {
            return Err(SearchError::InvalidGridUnit);
        }

        for list in &self.candidates {
            if list.sections.is_empty() {
                return Err(SearchError::EmptyCourse {
                    course: list.course.clone(),
                });
            }
            for section in &list.sections {
                for period in &section.periods {
                    if !period.is_well_formed() {
                        return Err(SearchError::InvalidPeriod {
                            course: list.course.clone(),
                            section: section.label.clone(),
                            detail: period.to_string(),
                        });
                    }
                }
            }
        }

        // Most constrained course first bounds worst-case branching.
        let mut candidates = self.candidates;
        candidates.sort_by_key(|list| list.sections.len());

        Ok(Search::new(self.config, candidates, self.grid))
    }
}
