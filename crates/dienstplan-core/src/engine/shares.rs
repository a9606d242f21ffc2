//! Proportional demand shares per employee and shift type.
//!
//! Built once per planner run from total monthly demand and the roster's
//! workload percentages; never persisted.

use std::collections::{BTreeMap, HashMap};

use crate::catalog::ShiftCatalog;
use crate::plan::Plan;
use crate::roster::Employee;

/// Ephemeral fair-share table for one planner run.
#[derive(Debug, Clone)]
pub struct ExpectedShares {
    expected: HashMap<String, BTreeMap<String, f64>>,
    totals: BTreeMap<String, u32>,
    days_in_month: u32,
}

impl ExpectedShares {
    /// Distribute each shift's total monthly demand over the roster in
    /// proportion to `percentage / sum(percentages)`.
    pub fn build(
        employees: &[Employee],
        totals: BTreeMap<String, u32>,
        days_in_month: u32,
    ) -> Self {
        let sum_pct: f64 = employees.iter().map(|e| e.percentage).sum();
        let sum_pct = if sum_pct > 0.0 { sum_pct } else { 1.0 };

        let mut expected = HashMap::new();
        for emp in employees {
            let factor = emp.percentage / sum_pct;
            let per_shift: BTreeMap<String, f64> = totals
                .iter()
                .map(|(shift, total)| (shift.clone(), *total as f64 * factor))
                .collect();
            expected.insert(emp.id.clone(), per_shift);
        }

        Self {
            expected,
            totals,
            days_in_month,
        }
    }

    /// Expected number of assignments of `shift` for this employee.
    pub fn expected(&self, employee_id: &str, shift: &str) -> f64 {
        self.expected
            .get(employee_id)
            .and_then(|per_shift| per_shift.get(shift))
            .copied()
            .unwrap_or(0.0)
    }

    /// Total monthly demand for one shift code.
    pub fn total(&self, shift: &str) -> u32 {
        self.totals.get(shift).copied().unwrap_or(0)
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }
}

/// Work assignments of one employee so far this month.
#[derive(Debug, Clone, Default)]
pub struct MonthCounts {
    pub total: u32,
    pub per_shift: BTreeMap<String, u32>,
}

/// Count the employee's work-classified assignments, overall and per shift
/// code.
pub fn month_counts(
    plan: &Plan,
    catalog: &ShiftCatalog,
    employee_id: &str,
    days_in_month: u32,
) -> MonthCounts {
    let mut counts = MonthCounts::default();
    for (day, cell) in plan.employee_cells(employee_id) {
        if day > days_in_month {
            break;
        }
        if catalog.is_work(&cell.shift) {
            counts.total += 1;
            *counts.per_shift.entry(cell.shift.clone()).or_default() += 1;
        }
    }
    counts
}
