//! Integration tests for tt-search.

use tt_core::{Course, DayOfWeek, DaySet, Period, Section, Term, TermSet, Time, TimeGrid};

use crate::{
    Combination, CourseIdx, Diagnostic, NoopObserver, Search, SearchBuilder, SearchConfig,
    SearchError, SearchObserver, SearchStatus, conflicts,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn day(d: DayOfWeek) -> DaySet {
    DaySet::single(d)
}

fn term_a() -> TermSet {
    TermSet::single(Term::A)
}

/// Single-period section meeting `start`–`end` on `days` in term A.
fn section(label: &str, days: DaySet, start: Time, end: Time) -> Section {
    Section::new(label, vec![Period::new(days, start, end)], term_a())
}

/// A grid that allows every cell of every day in every term.
fn open_grid() -> TimeGrid {
    let mut grid = TimeGrid::new(30);
    let all_days: DaySet = DayOfWeek::ALL.into_iter().collect();
    for term in Term::ALL {
        grid.allow_block(term, all_days, Time::MIDNIGHT, Time::hm(24, 0));
    }
    grid
}

/// Observer that records everything it is told.
#[derive(Default)]
struct Capture {
    combos: Vec<Combination>,
    defaults: Vec<Combination>,
    finished: Vec<SearchStatus>,
}

impl SearchObserver for Capture {
    fn on_combination(&mut self, combo: &Combination) {
        self.combos.push(combo.clone());
    }
    fn on_default_selection(&mut self, combo: &Combination) {
        self.defaults.push(combo.clone());
    }
    fn on_finished(&mut self, status: SearchStatus) {
        self.finished.push(status);
    }
}

/// Resolve a combination to its section labels for readable assertions.
fn labels(search: &Search, combo: &Combination) -> Vec<String> {
    combo
        .sections
        .iter()
        .map(|&sref| search.section(sref).label.clone())
        .collect()
}

/// Two courses, two sections each, meeting on different days — no conflicts
/// anywhere.
fn independent_two_by_two() -> SearchBuilder {
    let x = vec![
        section("X1", day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(9, 50)),
        section("X2", day(DayOfWeek::Monday), Time::hm(11, 0), Time::hm(11, 50)),
    ];
    let y = vec![
        section("Y1", day(DayOfWeek::Tuesday), Time::hm(9, 0), Time::hm(9, 50)),
        section("Y2", day(DayOfWeek::Tuesday), Time::hm(11, 0), Time::hm(11, 50)),
    ];
    SearchBuilder::new(open_grid())
        .course(Course::new("CS", "1101"), x)
        .course(Course::new("MA", "1021"), y)
}

/// Two single-section courses whose sections collide head-on.
fn colliding_pair() -> SearchBuilder {
    let x = vec![section("X1", day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(10, 0))];
    let y = vec![section("Y1", day(DayOfWeek::Monday), Time::hm(9, 30), Time::hm(10, 30))];
    SearchBuilder::new(open_grid())
        .course(Course::new("CS", "1101"), x)
        .course(Course::new("MA", "1021"), y)
}

// ── Conflict detector ─────────────────────────────────────────────────────────

#[cfg(test)]
mod detector {
    use super::*;

    #[test]
    fn overlapping_sections_collide() {
        let a = section("A", day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(10, 0));
        let b = section("B", day(DayOfWeek::Monday), Time::hm(9, 30), Time::hm(10, 30));
        assert!(conflicts(&a, &b));
    }

    #[test]
    fn different_days_do_not_collide() {
        let a = section("A", day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(10, 0));
        let b = section("B", day(DayOfWeek::Tuesday), Time::hm(9, 0), Time::hm(10, 0));
        assert!(!conflicts(&a, &b));
    }

    #[test]
    fn disjoint_terms_never_collide() {
        // Identical periods, but term A vs. term B.
        let period = Period::new(day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(10, 0));
        let a = Section::new("A", vec![period.clone()], TermSet::single(Term::A));
        let b = Section::new("B", vec![period], TermSet::single(Term::B));
        assert!(!conflicts(&a, &b));
    }

    #[test]
    fn any_period_pair_suffices() {
        // Section A meets twice; only its second period collides with B.
        let a = Section::new(
            "A",
            vec![
                Period::new(day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(9, 50)),
                Period::new(day(DayOfWeek::Thursday), Time::hm(14, 0), Time::hm(15, 0)),
            ],
            term_a(),
        );
        let b = section("B", day(DayOfWeek::Thursday), Time::hm(14, 30), Time::hm(15, 30));
        assert!(conflicts(&a, &b));
    }

    #[test]
    fn touching_endpoints_collide() {
        let a = section("A", day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(10, 0));
        let b = section("B", day(DayOfWeek::Monday), Time::hm(10, 0), Time::hm(11, 0));
        assert!(conflicts(&a, &b));
    }

    #[test]
    fn symmetric_on_random_sections() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
        let mut random_section = |label: &str| {
            let d = DayOfWeek::ALL[rng.gen_range(0..7)];
            let t = Term::ALL[rng.gen_range(0..4)];
            let start = Time::hm(rng.gen_range(8..18), if rng.gen_bool(0.5) { 0 } else { 30 });
            let end = start + rng.gen_range(1..5) * 30;
            Section::new(
                label,
                vec![Period::new(DaySet::single(d), start, end)],
                TermSet::single(t),
            )
        };

        for _ in 0..500 {
            let a = random_section("A");
            let b = random_section("B");
            assert_eq!(
                conflicts(&a, &b),
                conflicts(&b, &a),
                "asymmetric verdict for {a:?} vs {b:?}"
            );
        }
    }
}

// ── Time-window evaluator ─────────────────────────────────────────────────────

#[cfg(test)]
mod window {
    use super::*;
    use crate::time_violations;
    use tt_core::GridCell;

    #[test]
    fn fully_allowed_section_has_no_violations() {
        let s = section("A", day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(10, 0));
        assert!(time_violations(&s, &open_grid()).is_empty());
    }

    #[test]
    fn empty_grid_flags_every_cell() {
        let s = section("A", day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(10, 0));
        let violations = time_violations(&s, &TimeGrid::new(30));
        let cells = &violations[&Term::A];
        // 9:00 and 9:30 — the 10:00 cell is past the period's end.
        assert_eq!(cells.len(), 2);
        assert!(cells.contains(&GridCell { day: DayOfWeek::Monday, time: Time::hm(9, 0) }));
        assert!(cells.contains(&GridCell { day: DayOfWeek::Monday, time: Time::hm(9, 30) }));
    }

    #[test]
    fn unaligned_start_charges_enclosing_cell() {
        // 9:05–9:50 occupies the 9:00 and 9:30 cells.
        let s = section("A", day(DayOfWeek::Monday), Time::hm(9, 5), Time::hm(9, 50));
        let violations = time_violations(&s, &TimeGrid::new(30));
        let cells = &violations[&Term::A];
        assert!(cells.contains(&GridCell { day: DayOfWeek::Monday, time: Time::hm(9, 0) }));
        assert!(cells.contains(&GridCell { day: DayOfWeek::Monday, time: Time::hm(9, 30) }));
        assert_eq!(cells.len(), 2);
    }

    #[test]
    fn only_disallowed_days_are_flagged() {
        let mw: DaySet = [DayOfWeek::Monday, DayOfWeek::Wednesday].into_iter().collect();
        let s = Section::new(
            "A",
            vec![Period::new(mw, Time::hm(9, 0), Time::hm(10, 0))],
            term_a(),
        );
        // Allow Monday mornings only.
        let mut grid = TimeGrid::new(30);
        grid.allow_block(Term::A, day(DayOfWeek::Monday), Time::hm(8, 0), Time::hm(12, 0));

        let violations = time_violations(&s, &grid);
        let cells = &violations[&Term::A];
        assert!(cells.iter().all(|c| c.day == DayOfWeek::Wednesday));
        assert_eq!(cells.len(), 2);
    }

    #[test]
    fn each_offered_term_evaluated_separately() {
        let ab: TermSet = [Term::A, Term::B].into_iter().collect();
        let s = Section::new(
            "A",
            vec![Period::new(day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(10, 0))],
            ab,
        );
        // Allowed in term A, nothing allowed in term B.
        let mut grid = TimeGrid::new(30);
        grid.allow_block(Term::A, day(DayOfWeek::Monday), Time::hm(8, 0), Time::hm(12, 0));

        let violations = time_violations(&s, &grid);
        assert!(!violations.contains_key(&Term::A));
        assert_eq!(violations[&Term::B].len(), 2);
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn empty_section_list_is_rejected() {
        let result = SearchBuilder::new(open_grid())
            .course(Course::new("CS", "9999"), vec![])
            .build();
        assert!(matches!(result, Err(SearchError::EmptyCourse { .. })));
    }

    #[test]
    fn inverted_period_is_rejected() {
        let bad = section("A1", day(DayOfWeek::Monday), Time::hm(10, 0), Time::hm(9, 0));
        let result = SearchBuilder::new(open_grid())
            .course(Course::new("CS", "1101"), vec![bad])
            .build();
        assert!(matches!(result, Err(SearchError::InvalidPeriod { .. })));
    }

    #[test]
    fn zero_grid_unit_is_rejected() {
        let s = section("A1", day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(10, 0));
        let result = SearchBuilder::new(TimeGrid::new(0))
            .course(Course::new("CS", "1101"), vec![s])
            .build();
        assert!(matches!(result, Err(SearchError::InvalidGridUnit)));
    }

    #[test]
    fn courses_sorted_most_constrained_first() {
        let many = vec![
            section("M1", day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(9, 50)),
            section("M2", day(DayOfWeek::Tuesday), Time::hm(9, 0), Time::hm(9, 50)),
            section("M3", day(DayOfWeek::Wednesday), Time::hm(9, 0), Time::hm(9, 50)),
        ];
        let few = vec![section("F1", day(DayOfWeek::Thursday), Time::hm(9, 0), Time::hm(9, 50))];
        let search = SearchBuilder::new(open_grid())
            .course(Course::new("CS", "3000"), many)
            .course(Course::new("MA", "1000"), few)
            .build()
            .unwrap();
        assert_eq!(search.candidates()[0].course, Course::new("MA", "1000"));
        assert_eq!(search.candidates()[1].course, Course::new("CS", "3000"));
    }

    #[test]
    fn no_courses_builds_an_exhausted_session() {
        let mut search = SearchBuilder::new(open_grid()).build().unwrap();
        assert!(!search.can_advance());
        let mut capture = Capture::default();
        let report = search.advance(10, &mut capture);
        assert_eq!(report.status, SearchStatus::Exhausted);
        assert_eq!(report.produced, 0);
        assert_eq!(capture.finished, vec![SearchStatus::Exhausted]);
    }
}

// ── Enumeration scenarios ─────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn independent_courses_yield_full_cross_product() {
        let mut search = independent_two_by_two().build().unwrap();
        let mut capture = Capture::default();
        let status = search.run_to_end(&mut capture);

        assert_eq!(status, SearchStatus::Exhausted);
        assert_eq!(search.combinations().len(), 4);
        assert!(search.combinations().iter().all(Combination::is_clean));
        // exactly one section per course, no duplicate combinations
        let mut seen: Vec<Vec<String>> = Vec::new();
        for combo in search.combinations() {
            assert_eq!(combo.sections.len(), 2);
            let l = labels(&search, combo);
            assert!(!seen.contains(&l), "duplicate combination {l:?}");
            seen.push(l);
        }
        assert_eq!(capture.combos.len(), 4);
        assert_eq!(capture.defaults.len(), 1);
        assert_eq!(capture.finished, vec![SearchStatus::Exhausted]);
    }

    #[test]
    fn colliding_pair_with_no_budget_finds_nothing() {
        let mut search = colliding_pair().build().unwrap();
        let status = search.run_to_end(&mut NoopObserver);
        assert_eq!(status, SearchStatus::Exhausted);
        assert!(search.combinations().is_empty());
    }

    #[test]
    fn colliding_pair_with_budget_yields_one_best_effort() {
        let config = SearchConfig { diagnostics_budget: 1, ..Default::default() };
        let mut search = colliding_pair().config(config).build().unwrap();
        let mut capture = Capture::default();
        let status = search.run_to_end(&mut capture);

        assert_eq!(status, SearchStatus::Exhausted);
        assert_eq!(search.combinations().len(), 1, "mirror repair should be pruned");

        let combo = &search.combinations()[0];
        assert!(!combo.is_clean());
        assert_eq!(combo.diagnostics.len(), 1);
        let Diagnostic::Conflict { rejected, kept } = &combo.diagnostics[0] else {
            panic!("expected a conflict diagnostic, got {:?}", combo.diagnostics[0]);
        };
        // One section survived, the other was rejected.
        assert_eq!(combo.sections.len(), 1);
        assert_eq!(combo.sections[0], *kept);
        assert_ne!(rejected.course, kept.course);
        assert_eq!(capture.defaults.len(), 1, "best-effort result still becomes the default");
    }

    #[test]
    fn out_of_preference_section_with_no_budget_is_dead() {
        // The only section lies entirely outside the allowed grid.
        let s = section("E1", day(DayOfWeek::Monday), Time::hm(18, 0), Time::hm(19, 0));
        let mut grid = TimeGrid::new(30);
        grid.allow_block(Term::A, day(DayOfWeek::Monday), Time::hm(8, 0), Time::hm(12, 0));

        let mut search = SearchBuilder::new(grid)
            .course(Course::new("CS", "1101"), vec![s])
            .build()
            .unwrap();
        let status = search.run_to_end(&mut NoopObserver);
        assert_eq!(status, SearchStatus::Exhausted);
        assert!(search.combinations().is_empty());
    }

    #[test]
    fn out_of_preference_section_with_budget_is_tolerated() {
        let s = section("E1", day(DayOfWeek::Monday), Time::hm(18, 0), Time::hm(19, 0));
        let mut grid = TimeGrid::new(30);
        grid.allow_block(Term::A, day(DayOfWeek::Monday), Time::hm(8, 0), Time::hm(12, 0));

        let config = SearchConfig { diagnostics_budget: 1, ..Default::default() };
        let mut search = SearchBuilder::new(grid)
            .course(Course::new("CS", "1101"), vec![s])
            .config(config)
            .build()
            .unwrap();
        search.run_to_end(&mut NoopObserver);

        assert_eq!(search.combinations().len(), 1);
        let combo = &search.combinations()[0];
        assert_eq!(combo.sections.len(), 1);
        let Diagnostic::TimeViolation { cells, .. } = &combo.diagnostics[0] else {
            panic!("expected a time violation, got {:?}", combo.diagnostics[0]);
        };
        assert_eq!(cells[&Term::A].len(), 2); // 18:00 and 18:30
    }

    #[test]
    fn singleton_course_appears_in_every_combination() {
        let z = vec![section("Z1", day(DayOfWeek::Friday), Time::hm(15, 0), Time::hm(15, 50))];
        let mut search = independent_two_by_two()
            .course(Course::new("PH", "1110"), z)
            .build()
            .unwrap();
        search.run_to_end(&mut NoopObserver);

        assert_eq!(search.combinations().len(), 4);
        for combo in search.combinations() {
            assert!(
                labels(&search, combo).contains(&"Z1".to_string()),
                "Z1 missing from {:?}",
                labels(&search, combo)
            );
        }
    }

    #[test]
    fn clean_combinations_are_pairwise_conflict_free() {
        let mut search = independent_two_by_two().build().unwrap();
        search.run_to_end(&mut NoopObserver);
        for combo in search.combinations() {
            for (i, &a) in combo.sections.iter().enumerate() {
                for &b in &combo.sections[i + 1..] {
                    assert!(!conflicts(search.section(a), search.section(b)));
                }
            }
        }
    }

    #[test]
    fn per_term_load_cap_filters_emissions() {
        let one = |label: &str, d: DayOfWeek| {
            vec![section(label, day(d), Time::hm(9, 0), Time::hm(9, 50))]
        };
        let build = |cap: Option<usize>| {
            SearchBuilder::new(open_grid())
                .course(Course::new("CS", "1"), one("A1", DayOfWeek::Monday))
                .course(Course::new("MA", "2"), one("B1", DayOfWeek::Tuesday))
                .course(Course::new("PH", "3"), one("C1", DayOfWeek::Wednesday))
                .config(SearchConfig { max_per_term: cap, ..Default::default() })
                .build()
                .unwrap()
        };

        let mut unconstrained = build(None);
        unconstrained.run_to_end(&mut NoopObserver);
        assert_eq!(unconstrained.combinations().len(), 1);

        // All three sections run in term A; a cap of two rejects the only
        // full assignment.
        let mut capped = build(Some(2));
        let status = capped.run_to_end(&mut NoopObserver);
        assert_eq!(status, SearchStatus::Exhausted);
        assert!(capped.combinations().is_empty());
    }
}

// ── Driver behavior ───────────────────────────────────────────────────────────

#[cfg(test)]
mod driver {
    use super::*;

    #[test]
    fn advance_is_bounded_per_call() {
        let mut search = independent_two_by_two().build().unwrap();
        let mut calls = 0;
        while search.can_advance() {
            let report = search.advance(1, &mut NoopObserver);
            assert!(report.produced <= 1, "one pop can emit at most one combination");
            calls += 1;
            assert!(calls < 100, "search failed to terminate");
        }
        assert_eq!(search.combinations().len(), 4);
        assert!(calls > 4, "work must span multiple single-step calls");
    }

    #[test]
    fn result_cap_reports_capped() {
        let config = SearchConfig { max_results: 3, ..Default::default() };
        let mut search = independent_two_by_two().config(config).build().unwrap();
        let mut capture = Capture::default();
        let status = search.run_to_end(&mut capture);

        assert_eq!(status, SearchStatus::Capped);
        assert_eq!(search.combinations().len(), 3);
        assert_eq!(capture.finished, vec![SearchStatus::Capped]);
        // A capped session no longer advances.
        let report = search.advance(10, &mut capture);
        assert_eq!(report.produced, 0);
        assert_eq!(report.status, SearchStatus::Capped);
    }

    #[test]
    fn cancel_discards_pending_work() {
        let mut search = independent_two_by_two().build().unwrap();
        let mut capture = Capture::default();
        search.advance(1, &mut capture);
        assert_eq!(search.status(), SearchStatus::Active);

        search.cancel(&mut capture);
        assert_eq!(search.status(), SearchStatus::Cancelled);
        assert_eq!(capture.finished, vec![SearchStatus::Cancelled]);

        // Idempotent, and advancing afterwards is a no-op.
        search.cancel(&mut capture);
        let report = search.advance(10, &mut capture);
        assert_eq!(report.produced, 0);
        assert_eq!(report.status, SearchStatus::Cancelled);
        assert_eq!(capture.finished.len(), 1);
    }

    #[test]
    fn cancel_after_exhaustion_keeps_status() {
        let mut search = independent_two_by_two().build().unwrap();
        search.run_to_end(&mut NoopObserver);
        assert_eq!(search.status(), SearchStatus::Exhausted);
        search.cancel(&mut NoopObserver);
        assert_eq!(search.status(), SearchStatus::Exhausted);
    }

    #[test]
    fn restart_reproduces_the_session() {
        let mut search = independent_two_by_two().build().unwrap();
        search.run_to_end(&mut NoopObserver);
        let first: Vec<Combination> = search.combinations().to_vec();

        search.restart();
        assert_eq!(search.status(), SearchStatus::Active);
        assert!(search.combinations().is_empty());

        let mut capture = Capture::default();
        search.run_to_end(&mut capture);
        assert_eq!(search.combinations(), &first[..]);
        assert_eq!(capture.defaults.len(), 1, "default fires again after restart");
    }

    #[test]
    fn deterministic_across_identical_runs() {
        // A mixed scenario: conflicts, a repairable overlap, and a budget.
        let build = || {
            let p = vec![
                section("P1", day(DayOfWeek::Monday), Time::hm(9, 0), Time::hm(9, 50)),
                section("P2", day(DayOfWeek::Monday), Time::hm(10, 0), Time::hm(10, 50)),
            ];
            let q = vec![
                section("Q1", day(DayOfWeek::Monday), Time::hm(9, 30), Time::hm(10, 20)),
                section("Q2", day(DayOfWeek::Tuesday), Time::hm(9, 0), Time::hm(9, 50)),
            ];
            let r = vec![section("R1", day(DayOfWeek::Wednesday), Time::hm(9, 0), Time::hm(9, 50))];
            SearchBuilder::new(open_grid())
                .course(Course::new("CS", "2303"), p)
                .course(Course::new("MA", "2051"), q)
                .course(Course::new("PH", "1110"), r)
                .config(SearchConfig { diagnostics_budget: 1, ..Default::default() })
                .build()
                .unwrap()
        };

        let mut a = build();
        let mut b = build();
        a.run_to_end(&mut NoopObserver);
        b.run_to_end(&mut NoopObserver);

        assert!(!a.combinations().is_empty());
        assert_eq!(a.combinations(), b.combinations());
        assert!(
            a.combinations().iter().all(|c| c.diagnostics.len() <= 1),
            "diagnostics budget exceeded"
        );
        // The two clean schedules exist among the results.
        let clean: Vec<_> = a
            .combinations()
            .iter()
            .filter(|c| c.is_clean())
            .map(|c| labels(&a, c))
            .collect();
        assert_eq!(clean.len(), 2);
        for combo in &clean {
            assert!(combo.contains(&"Q2".to_string()));
            assert!(combo.contains(&"R1".to_string()));
        }
    }
}

// ── Conflict registry ─────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use super::*;

    #[test]
    fn colliding_courses_stay_conflicting() {
        let mut search = colliding_pair().build().unwrap();
        search.run_to_end(&mut NoopObserver);
        assert!(search.is_conflicting(CourseIdx(0), CourseIdx(1)));
        assert_eq!(search.conflicting_pair(), Some((CourseIdx(0), CourseIdx(1))));
    }

    #[test]
    fn compatible_observation_is_permanent() {
        let mut search = independent_two_by_two().build().unwrap();
        search.run_to_end(&mut NoopObserver);
        assert!(!search.is_conflicting(CourseIdx(0), CourseIdx(1)));
        assert_eq!(search.conflicting_pair(), None);
    }

    #[test]
    fn best_effort_combination_suppresses_conflicting_pair() {
        // The pair still never produced a compatible section pairing, but a
        // best-effort schedule exists, so nothing is fatally blocked.
        let config = SearchConfig { diagnostics_budget: 1, ..Default::default() };
        let mut search = colliding_pair().config(config).build().unwrap();
        search.run_to_end(&mut NoopObserver);

        assert!(search.is_conflicting(CourseIdx(0), CourseIdx(1)));
        assert_eq!(search.conflicting_pair(), None);
    }

    #[test]
    fn unobserved_pairs_report_no_conflict() {
        let search = independent_two_by_two().build().unwrap();
        // Nothing has been compared yet.
        assert!(!search.is_conflicting(CourseIdx(0), CourseIdx(1)));
        assert_eq!(search.registry().observed_pairs(), 0);
    }

    #[test]
    fn queries_work_mid_search() {
        let mut search = colliding_pair().build().unwrap();
        // First pop expands the root; nothing has been compared yet.
        search.advance(1, &mut NoopObserver);
        assert_eq!(search.registry().observed_pairs(), 0);
        // Second pop compares Y1 against the chosen X1.
        search.advance(1, &mut NoopObserver);
        assert!(search.is_conflicting(CourseIdx(0), CourseIdx(1)));
    }
}

// ── Trade-off equivalence ─────────────────────────────────────────────────────

#[cfg(test)]
mod tradeoffs {
    use super::*;
    use crate::SectionRef;
    use crate::state::same_tradeoffs;

    #[test]
    fn conflict_pairs_compare_unordered() {
        let a = SectionRef::new(0, 0);
        let b = SectionRef::new(1, 0);
        let left = Diagnostic::Conflict { rejected: a, kept: b };
        let right = Diagnostic::Conflict { rejected: b, kept: a };
        assert!(left.equivalent(&right));
        assert!(same_tradeoffs(&[left.clone()], &[right.clone()]));
        assert_ne!(left, right, "structural equality still sees the direction");
    }

    #[test]
    fn different_pairs_are_not_equivalent() {
        let left = Diagnostic::Conflict {
            rejected: SectionRef::new(0, 0),
            kept: SectionRef::new(1, 0),
        };
        let right = Diagnostic::Conflict {
            rejected: SectionRef::new(0, 1),
            kept: SectionRef::new(1, 0),
        };
        assert!(!left.equivalent(&right));
        assert!(!same_tradeoffs(&[left], &[right]));
    }

    #[test]
    fn sequences_compare_elementwise() {
        let a = SectionRef::new(0, 0);
        let b = SectionRef::new(1, 0);
        let one = vec![Diagnostic::Conflict { rejected: a, kept: b }];
        let two = vec![
            Diagnostic::Conflict { rejected: a, kept: b },
            Diagnostic::Conflict { rejected: b, kept: a },
        ];
        assert!(!same_tradeoffs(&one, &two));
    }
}
