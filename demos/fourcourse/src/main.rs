//! fourcourse — smallest example for the tt timetable engine.
//!
//! Searches a four-course toy catalog with one deliberately awkward course
//! (its only section collides with a popular lecture slot), prints every
//! combination found per driver tick, and finishes with the course-pair
//! compatibility picture.

use anyhow::Result;

use tt_core::{Course, DayOfWeek, DaySet, Period, Section, Term, TermSet, Time, TimeGrid};
use tt_search::{Combination, Search, SearchBuilder, SearchConfig, SearchObserver, SearchStatus};

// ── Constants ─────────────────────────────────────────────────────────────────

const BATCH: usize = 5; // frontier pops per driver tick

// ── Catalog ───────────────────────────────────────────────────────────────────

fn days(list: &[DayOfWeek]) -> DaySet {
    list.iter().copied().collect()
}

fn section(label: &str, on: &[DayOfWeek], start: Time, end: Time) -> Section {
    Section::new(
        label,
        vec![Period::new(days(on), start, end)],
        TermSet::single(Term::A),
    )
}

fn catalog() -> Vec<(Course, Vec<Section>)> {
    use DayOfWeek::{Friday, Monday, Thursday, Tuesday, Wednesday};

    vec![
        (
            Course::new("CS", "2303"),
            vec![
                section("A01", &[Monday, Wednesday, Friday], Time::hm(9, 0), Time::hm(9, 50)),
                section("A02", &[Monday, Wednesday, Friday], Time::hm(11, 0), Time::hm(11, 50)),
            ],
        ),
        (
            Course::new("MA", "2051"),
            vec![
                section("B01", &[Tuesday, Thursday], Time::hm(10, 0), Time::hm(11, 15)),
                section("B02", &[Tuesday, Thursday], Time::hm(13, 0), Time::hm(14, 15)),
            ],
        ),
        (
            Course::new("PH", "1110"),
            vec![
                section("C01", &[Monday, Wednesday], Time::hm(14, 0), Time::hm(14, 50)),
                section("C02", &[Tuesday, Thursday], Time::hm(15, 0), Time::hm(15, 50)),
            ],
        ),
        (
            // The awkward one: a single section on top of CS 2303 A01.
            Course::new("HU", "3900"),
            vec![section("D01", &[Monday, Wednesday, Friday], Time::hm(9, 0), Time::hm(9, 50))],
        ),
    ]
}

/// Weekdays 8:00–17:00 are acceptable, in every term.
fn preference_grid() -> TimeGrid {
    use DayOfWeek::{Friday, Monday, Thursday, Tuesday, Wednesday};

    let mut grid = TimeGrid::new(TimeGrid::DEFAULT_UNIT);
    let weekdays = days(&[Monday, Tuesday, Wednesday, Thursday, Friday]);
    for term in Term::ALL {
        grid.allow_block(term, weekdays, Time::hm(8, 0), Time::hm(17, 0));
    }
    grid
}

// ── Observer ──────────────────────────────────────────────────────────────────

struct Printer;

impl SearchObserver for Printer {
    fn on_combination(&mut self, combo: &Combination) {
        let tag = if combo.is_clean() { "clean" } else { "best-effort" };
        println!("  new {tag} combination ({} trade-offs)", combo.diagnostics.len());
    }

    fn on_default_selection(&mut self, _combo: &Combination) {
        println!("  ^ first result — would become the default selection");
    }

    fn on_finished(&mut self, status: SearchStatus) {
        println!("search finished: {status}");
    }
}

fn describe(search: &Search, combo: &Combination) -> String {
    let mut parts: Vec<String> = combo
        .sections
        .iter()
        .map(|&sref| format!("{} {}", search.course(sref.course), search.section(sref)))
        .collect();
    for diag in &combo.diagnostics {
        match diag {
            tt_search::Diagnostic::Conflict { rejected, kept } => parts.push(format!(
                "[dropped {} {} to keep {} {}]",
                search.course(rejected.course),
                search.section(*rejected),
                search.course(kept.course),
                search.section(*kept),
            )),
            tt_search::Diagnostic::TimeViolation { section, cells } => {
                let n: usize = cells.values().map(|c| c.len()).sum();
                parts.push(format!(
                    "[{} {} sits on {n} disallowed slots]",
                    search.course(section.course),
                    search.section(*section),
                ));
            }
        }
    }
    parts.join("  ")
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = SearchConfig {
        diagnostics_budget: 1,
        ..Default::default()
    };

    let mut builder = SearchBuilder::new(preference_grid()).config(config);
    for (course, sections) in catalog() {
        builder = builder.course(course, sections);
    }
    let mut search = builder.build()?;

    // The caller owns the loop: each tick does a bounded amount of work, the
    // way a UI would generate between frames.
    let mut tick = 0;
    while search.can_advance() {
        tick += 1;
        let report = search.advance(BATCH, &mut Printer);
        println!("tick {tick}: +{} combinations, status {}", report.produced, report.status);
    }

    println!("\n{} combinations total:", search.combinations().len());
    for combo in search.combinations() {
        println!("  {}", describe(&search, combo));
    }

    // Course-pair picture, usable even when no schedule exists at all.
    println!();
    for (i, a) in search.candidates().iter().enumerate() {
        for (j, b) in search.candidates().iter().enumerate().skip(i + 1) {
            let verdict = if search.is_conflicting(
                tt_search::CourseIdx(i as u16),
                tt_search::CourseIdx(j as u16),
            ) {
                "never compatible"
            } else {
                "compatible"
            };
            println!("{} vs {}: {verdict}", a.course, b.course);
        }
    }

    Ok(())
}
