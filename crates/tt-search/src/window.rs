//! Time-window evaluation: section periods against the preference grid.

use std::collections::BTreeSet;

use tt_core::{GridCell, Section, TimeGrid};

use crate::state::TermViolations;

/// Map a section onto the preference grid and collect, per offered term,
/// every grid cell it occupies that the student did not allow.
///
/// For each term × period × day the period's start is snapped down to the
/// enclosing cell boundary — an unaligned 9:05 start still charges the 9:00
/// cell — then stepped one cell at a time while strictly before the period's
/// end.  Cells are deduplicated per term; terms with no violations are
/// omitted, so a section "has a time conflict" exactly when the returned map
/// is non-empty.
pub fn time_violations(section: &Section, grid: &TimeGrid) -> TermViolations {
    let unit = grid.unit_minutes();
    let mut out = TermViolations::new();

    for term in section.terms.iter() {
        let mut cells = BTreeSet::new();
        for period in &section.periods {
            for day in period.days.iter() {
                let mut cell = period.start.snap_down(unit);
                while cell < period.end {
                    if !grid.is_allowed(term, day, cell) {
                        cells.insert(GridCell { day, time: cell });
                    }
                    cell = cell + unit;
                }
            }
        }
        if !cells.is_empty() {
            out.insert(term, cells);
        }
    }

    out
}
