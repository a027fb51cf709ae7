//! Course catalog input model.
//!
//! These types are supplied by the catalog collaborator and are read-only for
//! the lifetime of a search session.  A [`CandidateList`] pairs one course
//! with the sections a student could take for it; courses with no sections
//! are a construction error, filtered out or rejected before search.

use std::fmt;

use crate::calendar::{Period, TermSet};

/// Course identity: department abbreviation plus catalog number.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    pub department: String,
    pub number: String,
}

impl Course {
    pub fn new(department: impl Into<String>, number: impl Into<String>) -> Course {
        Course {
            department: department.into(),
            number: number.into(),
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.department, self.number)
    }
}

/// One offered section of a course: its meeting periods and the terms it
/// runs in.  Identity within a course is the registrar label ("A01", "B02").
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub label: String,
    pub periods: Vec<Period>,
    pub terms: TermSet,
}

impl Section {
    pub fn new(label: impl Into<String>, periods: Vec<Period>, terms: TermSet) -> Section {
        Section {
            label: label.into(),
            periods,
            terms,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// The ordered, non-empty sections eligible for one course in a search.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateList {
    pub course: Course,
    pub sections: Vec<Section>,
}

impl CandidateList {
    pub fn new(course: Course, sections: Vec<Section>) -> CandidateList {
        CandidateList { course, sections }
    }
}
