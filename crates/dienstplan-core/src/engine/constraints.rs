//! Hard eligibility rules and the derived metrics behind them.
//!
//! All functions here are stateless and pure: they take the current plan
//! plus a hypothetical "the employee would work at `day`" flag and never
//! mutate anything. Weeks are Monday-anchored; chains and weekend counts
//! reset at the month boundary.

use crate::calendar::{days_in_month, is_weekend, week_start_day};
use crate::catalog::ShiftCatalog;
use crate::plan::Plan;

/// Longest permitted run of consecutive work days.
pub const MAX_CONSECUTIVE_WORKDAYS: u32 = 4;

/// Most work days permitted within one Monday-Sunday week.
pub const MAX_WEEK_WORKDAYS: u32 = 4;

/// Distance sentinel for an employee with no work assignment yet.
pub const NO_ASSIGNMENT_DISTANCE: u32 = 31;

fn works_at(plan: &Plan, catalog: &ShiftCatalog, employee_id: &str, day: u32) -> bool {
    plan.shift_at(employee_id, day)
        .map(|s| catalog.is_work(s))
        .unwrap_or(false)
}

/// Length of the contiguous run of work days through `day`, assuming the
/// employee works at `day` when `hypothetical_work` is set. Scans outward
/// in both directions and stops at a free day or the month boundary.
pub fn consecutive_run_length(
    plan: &Plan,
    catalog: &ShiftCatalog,
    employee_id: &str,
    day: u32,
    days_in_month: u32,
    hypothetical_work: bool,
) -> u32 {
    let works = |d: u32| {
        if d == day {
            hypothetical_work
        } else {
            works_at(plan, catalog, employee_id, d)
        }
    };

    let mut left = 0;
    let mut d = day;
    while d > 1 && works(d - 1) {
        left += 1;
        d -= 1;
    }

    let mut right = 0;
    let mut d = day;
    while d < days_in_month && works(d + 1) {
        right += 1;
        d += 1;
    }

    left + 1 + right
}

/// Work days within the Monday-anchored week containing `day`. The partial
/// first week of the month starts at day 1.
pub fn week_work_count(
    plan: &Plan,
    catalog: &ShiftCatalog,
    employee_id: &str,
    year: i32,
    month: u32,
    day: u32,
    hypothetical_work: bool,
) -> u32 {
    let start = week_start_day(year, month, day);
    let last = days_in_month(year, month);

    let mut count = 0;
    for d in start..start + 7 {
        if d > last {
            break;
        }
        let works = if d == day {
            hypothetical_work || works_at(plan, catalog, employee_id, d)
        } else {
            works_at(plan, catalog, employee_id, d)
        };
        if works {
            count += 1;
        }
    }
    count
}

/// Number of distinct weekend blocks (indexed `(day - 1) / 7`) in which the
/// employee works at least one Saturday or Sunday.
pub fn weekends_worked(
    plan: &Plan,
    catalog: &ShiftCatalog,
    employee_id: &str,
    year: i32,
    month: u32,
    days_in_month: u32,
) -> u32 {
    let mut blocks = std::collections::BTreeSet::new();
    for d in 1..=days_in_month {
        if is_weekend(year, month, d) && works_at(plan, catalog, employee_id, d) {
            blocks.insert((d - 1) / 7);
        }
    }
    blocks.len() as u32
}

/// Minimum day-distance from `day` to any other work assignment of the
/// employee this month; [`NO_ASSIGNMENT_DISTANCE`] when there is none.
/// Larger means better temporal spread.
pub fn nearest_assignment_distance(
    plan: &Plan,
    catalog: &ShiftCatalog,
    employee_id: &str,
    day: u32,
) -> u32 {
    let mut min_dist = NO_ASSIGNMENT_DISTANCE;
    for (d, cell) in plan.employee_cells(employee_id) {
        if d != day && catalog.is_work(&cell.shift) {
            min_dist = min_dist.min(day.abs_diff(d));
        }
    }
    min_dist
}

/// Would working at `day` create or extend an isolated single free day?
///
/// Two patterns against the current neighbor cells (missing cells count as
/// free):
/// - free on both direct neighbors, with work two days out on either side
///   (the new work day turns a free block into lone gaps);
/// - `day` itself currently free and pinched between two work days.
pub fn would_create_single_free_sandwich(
    plan: &Plan,
    catalog: &ShiftCatalog,
    employee_id: &str,
    day: u32,
) -> bool {
    let works = |d: u32| d >= 1 && works_at(plan, catalog, employee_id, d);
    let free = |d: u32| !works(d);

    if free(day - 1) && free(day + 1) && (works(day.saturating_sub(2)) || works(day + 2)) {
        return true;
    }
    if works(day - 1) && !works_at(plan, catalog, employee_id, day) && works(day + 1) {
        return true;
    }
    false
}

/// Hard gate: may the planner assign the employee any work shift at `day`?
///
/// Occupied cells of any kind are skipped (the planner fills gaps, it never
/// reassigns), then the chain, weekly and sandwich rules apply against the
/// hypothetical assignment.
pub fn is_eligible(
    plan: &Plan,
    catalog: &ShiftCatalog,
    employee_id: &str,
    day: u32,
    year: i32,
    month: u32,
) -> bool {
    if plan.cell(employee_id, day).is_some() {
        return false;
    }

    let last = days_in_month(year, month);
    if consecutive_run_length(plan, catalog, employee_id, day, last, true)
        > MAX_CONSECUTIVE_WORKDAYS
    {
        return false;
    }
    if week_work_count(plan, catalog, employee_id, year, month, day, true) > MAX_WEEK_WORKDAYS {
        return false;
    }
    if would_create_single_free_sandwich(plan, catalog, employee_id, day) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    // June 2026 starts on a Monday, 30 days.
    const YEAR: i32 = 2026;
    const MONTH: u32 = 6;

    fn catalog() -> ShiftCatalog {
        ShiftCatalog::standard()
    }

    fn plan_of(entries: &[(&str, u32, &str)]) -> Plan {
        let mut plan = Plan::new();
        for (emp, day, shift) in entries {
            plan.set(emp, *day, shift, false);
        }
        plan
    }

    #[test]
    fn test_run_length_counts_both_directions() {
        let plan = plan_of(&[("e1", 3, "TR"), ("e1", 4, "TR"), ("e1", 6, "TR")]);
        let c = catalog();
        // hypothetical work at day 5 bridges 3,4 + 5 + 6
        assert_eq!(consecutive_run_length(&plan, &c, "e1", 5, 30, true), 4);
    }

    #[test]
    fn test_run_length_ignores_off_codes() {
        let plan = plan_of(&[("e1", 3, "TR"), ("e1", 4, "U"), ("e1", 5, "TR")]);
        let c = catalog();
        assert_eq!(consecutive_run_length(&plan, &c, "e1", 5, 30, true), 1);
    }

    #[test]
    fn test_run_length_stops_at_month_boundary() {
        let plan = plan_of(&[("e1", 29, "TR"), ("e1", 30, "TR")]);
        let c = catalog();
        assert_eq!(consecutive_run_length(&plan, &c, "e1", 30, 30, true), 2);
        assert_eq!(consecutive_run_length(&plan, &c, "e1", 1, 30, true), 1);
    }

    #[test]
    fn test_week_work_count_monday_anchored() {
        // June 2026: days 1-7 form the first Monday-Sunday week.
        let plan = plan_of(&[("e1", 1, "TR"), ("e1", 2, "TR"), ("e1", 7, "NR")]);
        let c = catalog();
        assert_eq!(week_work_count(&plan, &c, "e1", YEAR, MONTH, 4, true), 4);
        // day 8 starts the next week
        assert_eq!(week_work_count(&plan, &c, "e1", YEAR, MONTH, 8, true), 1);
    }

    #[test]
    fn test_week_window_clamped_in_partial_first_week() {
        // August 2026 starts on a Saturday; days 1-2 form the partial week.
        let plan = plan_of(&[("e1", 1, "TR")]);
        let c = catalog();
        assert_eq!(week_work_count(&plan, &c, "e1", 2026, 8, 2, true), 2);
    }

    #[test]
    fn test_weekends_worked_counts_blocks_once() {
        // June 2026: 6/7 and 13/14 are weekends.
        let plan = plan_of(&[("e1", 6, "TR"), ("e1", 7, "NR"), ("e1", 13, "TR")]);
        let c = catalog();
        assert_eq!(weekends_worked(&plan, &c, "e1", YEAR, MONTH, 30), 2);
    }

    #[test]
    fn test_nearest_distance_sentinel_when_unassigned() {
        let plan = Plan::new();
        let c = catalog();
        assert_eq!(
            nearest_assignment_distance(&plan, &c, "e1", 10),
            NO_ASSIGNMENT_DISTANCE
        );
    }

    #[test]
    fn test_nearest_distance_ignores_off_codes_and_self() {
        let plan = plan_of(&[("e1", 4, "TR"), ("e1", 9, "U"), ("e1", 10, "TR")]);
        let c = catalog();
        // candidates: |10-4| = 6 and (self at 10 excluded), U at 9 not work
        assert_eq!(nearest_assignment_distance(&plan, &c, "e1", 10), 6);
        assert_eq!(nearest_assignment_distance(&plan, &c, "e1", 6), 2);
    }

    #[test]
    fn test_sandwich_free_neighbors_with_outer_work() {
        // W _ [day] _ : working at day isolates the free day in between
        let plan = plan_of(&[("e1", 2, "TR")]);
        let c = catalog();
        assert!(would_create_single_free_sandwich(&plan, &c, "e1", 4));
        // no outer work -> no sandwich
        assert!(!would_create_single_free_sandwich(&plan, &c, "e1", 10));
    }

    #[test]
    fn test_sandwich_pinched_between_work() {
        let plan = plan_of(&[("e1", 4, "TR"), ("e1", 6, "TR")]);
        let c = catalog();
        assert!(would_create_single_free_sandwich(&plan, &c, "e1", 5));
    }

    #[test]
    fn test_eligible_rejects_occupied_cells() {
        let mut plan = plan_of(&[("e1", 5, "U")]);
        let c = catalog();
        // off codes occupy the cell too; the planner fills gaps only
        assert!(!is_eligible(&plan, &c, "e1", 5, YEAR, MONTH));
        plan.set("e1", 5, "TR", true);
        assert!(!is_eligible(&plan, &c, "e1", 5, YEAR, MONTH));
    }

    #[test]
    fn test_eligible_enforces_run_cap() {
        let plan = plan_of(&[
            ("e1", 8, "TR"),
            ("e1", 9, "TR"),
            ("e1", 10, "TR"),
            ("e1", 11, "TR"),
        ]);
        let c = catalog();
        // day 12 would make a run of 5
        assert!(!is_eligible(&plan, &c, "e1", 12, YEAR, MONTH));
    }

    #[test]
    fn test_eligible_enforces_week_cap() {
        // June 2026 week of days 8-14; spread so no run of 5 forms
        let plan = plan_of(&[
            ("e1", 8, "TR"),
            ("e1", 9, "TR"),
            ("e1", 11, "TR"),
            ("e1", 12, "TR"),
        ]);
        let c = catalog();
        assert!(!is_eligible(&plan, &c, "e1", 14, YEAR, MONTH));
    }
}
