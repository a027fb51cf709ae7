use thiserror::Error;
use tt_core::Course;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("course {course} has no candidate sections")]
    EmptyCourse { course: Course },

    #[error("course {course} section {section}: period ends before it starts ({detail})")]
    InvalidPeriod {
        course: Course,
        section: String,
        detail: String,
    },

    #[error("preference grid cell width must be non-zero")]
    InvalidGridUnit,
}

pub type SearchResult<T> = Result<T, SearchError>;
