//! Automatic shift assignment.
//!
//! A single-pass greedy fill: days are visited in rotation from a random
//! start day, each day's demand is topped up with the highest-scoring
//! eligible employees. The planner never relaxes a hard rule, never
//! backtracks, and silently leaves demand unfilled when the eligible pool
//! runs dry; coverage reporting is the host's business.

pub mod constraints;
pub mod fairness;
pub mod shares;

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

use crate::calendar::days_in_month;
use crate::catalog::ShiftCatalog;
use crate::plan::{DailyNeeds, Plan};
use crate::roster::Employee;

use constraints::is_eligible;
use fairness::{fairness_score, ScoreWeights};
use shares::ExpectedShares;

/// Planner tuning knobs.
///
/// `seed` makes a run reproducible; `None` draws from entropy, which is
/// the normal interactive mode (run-to-run variety is intended).
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    pub seed: Option<u64>,
    pub weights: ScoreWeights,
}

/// Greedy monthly auto-planner.
pub struct AutoPlanner {
    config: PlannerConfig,
}

impl AutoPlanner {
    /// Create a planner with default weights and an entropy seed.
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Fill the month's open demand on top of `plan`.
    ///
    /// Returns a complete replacement plan; the input is never mutated.
    /// Existing cells -- locked or not -- are left untouched: the planner
    /// fills gaps, it does not reassign.
    pub fn auto_fill(
        &self,
        plan: &Plan,
        employees: &[Employee],
        needs: &DailyNeeds,
        catalog: &ShiftCatalog,
        year: i32,
        month: u32,
    ) -> Plan {
        let days = days_in_month(year, month);
        if days == 0 || employees.is_empty() || needs.is_empty() {
            return plan.clone();
        }

        let mut rng = match self.config.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };

        // Randomized visitation order doubles as the tie-breaker for equal
        // scores; the start-day rotation spreads fills over the month.
        let mut order: Vec<&Employee> = employees.iter().collect();
        order.shuffle(&mut rng);
        let start_day = rng.gen_range(1..=days);

        let shares = ExpectedShares::build(employees, needs.totals(), days);

        let mut new_plan = plan.clone();
        let mut assigned = 0usize;
        let mut shortfall = 0u32;

        tracing::debug!(year, month, days, start_day, "auto-fill pass started");

        for offset in 0..days {
            let day = ((start_day + offset - 1) % days) + 1;
            let day_needs = match needs.day(day) {
                Some(n) => n,
                None => continue,
            };

            for (shift, needed) in day_needs {
                if !catalog.is_auto_plannable(shift) || *needed == 0 {
                    continue;
                }

                // Pre-existing manual or locked assignments count toward
                // coverage.
                let already = order
                    .iter()
                    .filter(|e| new_plan.shift_at(&e.id, day) == Some(shift.as_str()))
                    .count() as u32;
                let remaining = needed.saturating_sub(already);
                if remaining == 0 {
                    continue;
                }

                let mut candidates: Vec<(&Employee, f64)> = order
                    .iter()
                    .filter(|e| is_eligible(&new_plan, catalog, &e.id, day, year, month))
                    .map(|e| {
                        let score = fairness_score(
                            &new_plan,
                            catalog,
                            &e.id,
                            day,
                            year,
                            month,
                            shift,
                            &shares,
                            &self.config.weights,
                        );
                        (*e, score)
                    })
                    .collect();
                // Stable sort keeps the shuffled order for equal scores.
                candidates
                    .sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

                let take = remaining.min(candidates.len() as u32);
                for (emp, _) in candidates.into_iter().take(take as usize) {
                    new_plan.set(&emp.id, day, shift, false);
                    assigned += 1;
                }
                if take < remaining {
                    shortfall += remaining - take;
                    tracing::debug!(
                        day,
                        shift = %shift,
                        missing = remaining - take,
                        "demand left unfilled"
                    );
                }
            }
        }

        tracing::info!(assigned, shortfall, "auto-fill pass finished");
        new_plan
    }
}

impl Default for AutoPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    // June 2026 starts on a Monday, 30 days.
    const YEAR: i32 = 2026;
    const MONTH: u32 = 6;

    fn seeded(seed: u64) -> AutoPlanner {
        AutoPlanner::with_config(PlannerConfig {
            seed: Some(seed),
            weights: ScoreWeights::default(),
        })
    }

    fn roster(n: usize) -> Vec<Employee> {
        (0..n)
            .map(|i| Employee::from_parts(format!("e{i}"), format!("E{i}"), 100.0, 39.0, 48.0))
            .collect()
    }

    fn daily_tr_demand(count: u32, days: u32) -> DailyNeeds {
        let mut needs = DailyNeeds::new();
        let mut master = BTreeMap::new();
        master.insert("TR".to_string(), count);
        needs.apply_master(&master, days);
        needs
    }

    #[test]
    fn test_same_seed_same_plan() {
        let employees = roster(5);
        let needs = daily_tr_demand(2, 30);
        let catalog = ShiftCatalog::standard();
        let plan = Plan::new();

        let a = seeded(7).auto_fill(&plan, &employees, &needs, &catalog, YEAR, MONTH);
        let b = seeded(7).auto_fill(&plan, &employees, &needs, &catalog, YEAR, MONTH);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_locked_cells_survive_verbatim() {
        let employees = roster(4);
        let needs = daily_tr_demand(2, 30);
        let catalog = ShiftCatalog::standard();

        let mut plan = Plan::new();
        plan.set("e0", 10, "U", true);
        plan.set("e1", 10, "NR", true);

        let filled = seeded(3).auto_fill(&plan, &employees, &needs, &catalog, YEAR, MONTH);
        assert_eq!(filled.shift_at("e0", 10), Some("U"));
        assert!(filled.is_locked("e0", 10));
        assert_eq!(filled.shift_at("e1", 10), Some("NR"));
        assert!(filled.is_locked("e1", 10));
    }

    #[test]
    fn test_only_auto_plannable_codes_assigned() {
        let employees = roster(4);
        let catalog = ShiftCatalog::standard();

        let mut needs = DailyNeeds::new();
        for day in 1..=30 {
            needs.set(day, "T39", 1); // not auto-plannable
            needs.set(day, "XX", 1); // unknown code
        }

        let filled =
            seeded(1).auto_fill(&Plan::new(), &employees, &needs, &catalog, YEAR, MONTH);
        assert!(filled.is_empty());
    }

    #[test]
    fn test_hard_caps_hold_for_every_assignment() {
        let employees = roster(6);
        let needs = daily_tr_demand(3, 30);
        let catalog = ShiftCatalog::standard();

        let filled = seeded(11).auto_fill(&Plan::new(), &employees, &needs, &catalog, YEAR, MONTH);

        for emp in &employees {
            for (day, cell) in filled.employee_cells(&emp.id) {
                assert!(catalog.is_work(&cell.shift));
                let run = constraints::consecutive_run_length(
                    &filled, &catalog, &emp.id, day, 30, true,
                );
                assert!(run <= constraints::MAX_CONSECUTIVE_WORKDAYS, "run {run} at day {day}");
                let week = constraints::week_work_count(
                    &filled, &catalog, &emp.id, YEAR, MONTH, day, true,
                );
                assert!(week <= constraints::MAX_WEEK_WORKDAYS, "week {week} at day {day}");
            }
        }
    }

    #[test]
    fn test_single_employee_gets_forced_rest_gaps() {
        // One employee, demand every day: the hard gate must leave gaps
        // instead of assigning more than four days in a row.
        let employees = roster(1);
        let needs = daily_tr_demand(1, 30);
        let catalog = ShiftCatalog::standard();

        let filled = seeded(5).auto_fill(&Plan::new(), &employees, &needs, &catalog, YEAR, MONTH);

        assert!(!filled.is_empty());
        assert!(filled.len() < 30, "daily demand must stay partially unfilled");
        for (day, _) in filled.employee_cells("e0") {
            let run =
                constraints::consecutive_run_length(&filled, &catalog, "e0", day, 30, true);
            assert!(run <= constraints::MAX_CONSECUTIVE_WORKDAYS);
        }
    }

    #[test]
    fn test_satisfied_demand_is_not_overfilled() {
        let employees = roster(3);
        let catalog = ShiftCatalog::standard();
        let mut needs = DailyNeeds::new();
        needs.set(5, "TR", 1);

        let mut plan = Plan::new();
        plan.set("e2", 5, "TR", true);

        let filled = seeded(2).auto_fill(&plan, &employees, &needs, &catalog, YEAR, MONTH);
        let tr_count = filled
            .iter()
            .filter(|(k, c)| k.day == 5 && c.shift == "TR")
            .count();
        assert_eq!(tr_count, 1);
    }

    #[test]
    fn test_empty_inputs_return_plan_unchanged() {
        let catalog = ShiftCatalog::standard();
        let mut plan = Plan::new();
        plan.set("e0", 1, "TR", false);

        let planner = seeded(1);
        let same = planner.auto_fill(&plan, &[], &DailyNeeds::new(), &catalog, YEAR, MONTH);
        assert_eq!(same, plan);
    }
}
