//! Fairness scoring of eligible assignment candidates.
//!
//! The score only ranks candidates that already passed the hard gate; it
//! never vetoes. Higher is better. Weights are tunable from config but the
//! defaults encode the intended relative ordering: demand-share underfill
//! dominates, then weekly/chain relief, then weekend equity and spread.

use serde::{Deserialize, Serialize};

use super::constraints::{
    consecutive_run_length, nearest_assignment_distance, week_work_count, weekends_worked,
    would_create_single_free_sandwich, MAX_CONSECUTIVE_WORKDAYS, MAX_WEEK_WORKDAYS,
};
use super::shares::{month_counts, ExpectedShares};
use crate::calendar::{days_in_month, is_weekend};
use crate::catalog::ShiftCatalog;
use crate::plan::Plan;

/// Weekend count beyond which the equity bonus bottoms out.
const WEEKEND_EQUITY_CEILING: f64 = 6.0;

/// Cap on the spread term so one very idle employee cannot dominate.
const SPREAD_DISTANCE_CAP: f64 = 10.0;

/// Weights of the additive scoring terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Demand-share underfill (dominant term)
    #[serde(default = "default_underfill")]
    pub underfill: f64,
    /// Preference for lighter current weeks
    #[serde(default = "default_week_relief")]
    pub week_relief: f64,
    /// Preference for shorter work chains
    #[serde(default = "default_run_relief")]
    pub run_relief: f64,
    /// Bonus for employees with fewer worked weekends, on weekend days
    #[serde(default = "default_weekend_equity")]
    pub weekend_equity: f64,
    /// Flat bonus on weekdays, conserving weekend slack
    #[serde(default = "default_weekday_bias")]
    pub weekday_bias: f64,
    /// Temporal spread (distance to nearest other assignment)
    #[serde(default = "default_spread")]
    pub spread: f64,
    /// Bonus when no single-free-day sandwich results
    #[serde(default = "default_sandwich_bonus")]
    pub sandwich_bonus: f64,
    /// Bonus for extending the edge of an off/vacation block
    #[serde(default = "default_clean_edge_bonus")]
    pub clean_edge_bonus: f64,
    /// Penalty for a day-class shift directly after a night-class shift
    #[serde(default = "default_night_to_day_penalty")]
    pub night_to_day_penalty: f64,
}

fn default_underfill() -> f64 {
    4.0
}
fn default_week_relief() -> f64 {
    1.5
}
fn default_run_relief() -> f64 {
    1.2
}
fn default_weekend_equity() -> f64 {
    1.0
}
fn default_weekday_bias() -> f64 {
    0.3
}
fn default_spread() -> f64 {
    0.8
}
fn default_sandwich_bonus() -> f64 {
    1.2
}
fn default_clean_edge_bonus() -> f64 {
    0.8
}
fn default_night_to_day_penalty() -> f64 {
    2.0
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            underfill: default_underfill(),
            week_relief: default_week_relief(),
            run_relief: default_run_relief(),
            weekend_equity: default_weekend_equity(),
            weekday_bias: default_weekday_bias(),
            spread: default_spread(),
            sandwich_bonus: default_sandwich_bonus(),
            clean_edge_bonus: default_clean_edge_bonus(),
            night_to_day_penalty: default_night_to_day_penalty(),
        }
    }
}

/// Score one eligible `(employee, day, shift)` candidate against the
/// current working plan. Higher is better.
#[allow(clippy::too_many_arguments)]
pub fn fairness_score(
    plan: &Plan,
    catalog: &ShiftCatalog,
    employee_id: &str,
    day: u32,
    year: i32,
    month: u32,
    shift: &str,
    shares: &ExpectedShares,
    weights: &ScoreWeights,
) -> f64 {
    let last = days_in_month(year, month);
    let counts = month_counts(plan, catalog, employee_id, shares.days_in_month());

    // 1) Underfill against the proportional demand share
    let expected = shares.expected(employee_id, shift);
    let have = counts.per_shift.get(shift).copied().unwrap_or(0) as f64;
    let underfill = (expected - have).max(0.0);
    let mut score = underfill * weights.underfill;

    // 2) Weekly and chain relief (soft; the hard caps already gated)
    let week = week_work_count(plan, catalog, employee_id, year, month, day, true);
    score += (MAX_WEEK_WORKDAYS as f64 - week as f64) * weights.week_relief;

    let run = consecutive_run_length(plan, catalog, employee_id, day, last, true);
    score += (MAX_CONSECUTIVE_WORKDAYS as f64 - run as f64) * weights.run_relief;

    // 3) Weekend equity, weekday bias otherwise
    if is_weekend(year, month, day) {
        let worked = weekends_worked(plan, catalog, employee_id, year, month, last) as f64;
        score += (WEEKEND_EQUITY_CEILING - worked).max(0.0) * weights.weekend_equity;
    } else {
        score += weights.weekday_bias;
    }

    // 4) Temporal spread, capped
    let distance = nearest_assignment_distance(plan, catalog, employee_id, day) as f64;
    score += distance.min(SPREAD_DISTANCE_CAP) * weights.spread;

    // 5) Reward candidates that leave no isolated free day behind
    if !would_create_single_free_sandwich(plan, catalog, employee_id, day) {
        score += weights.sandwich_bonus;
    }

    // 6) Clean edges next to explicit off/vacation cells
    let neighbor_off = |d: u32| {
        d >= 1
            && plan
                .shift_at(employee_id, d)
                .map(|s| catalog.is_off(s))
                .unwrap_or(false)
    };
    if neighbor_off(day.saturating_sub(1)) || neighbor_off(day + 1) {
        score += weights.clean_edge_bonus;
    }

    // 7) Discourage day duty right after a night duty
    if day > 1 {
        if let Some(prev) = plan.shift_at(employee_id, day - 1) {
            if catalog.is_night(prev) && catalog.is_day(shift) {
                score -= weights.night_to_day_penalty;
            }
        }
    }

    score
}
