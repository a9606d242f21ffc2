//! Monthly hour accounting per employee.
//!
//! Target hours derive from the workload percentage: workdays in the month
//! times a fifth of the full-time week. Actual hours sum the catalog's
//! (possibly overridden) hour values; vacation on a Saturday or Sunday is
//! not credited.

use serde::{Deserialize, Serialize};

use crate::calendar::{days_in_month, is_workday, workdays_in_month};
use crate::catalog::{ShiftCatalog, VACATION_CODE};
use crate::plan::Plan;
use crate::roster::Employee;

/// Hour balance of one employee for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub employee_id: String,
    pub name: String,
    /// Contract target for the month
    pub target_hours: f64,
    /// Credited hours from assigned cells
    pub actual_hours: f64,
    /// actual - target
    pub delta_hours: f64,
    /// Number of vacation cells
    pub vacation_days: u32,
}

/// Monthly contract target for a workload percentage.
pub fn target_hours(percentage: f64, full_week_hours: f64, year: i32, month: u32) -> f64 {
    workdays_in_month(year, month) as f64 * (full_week_hours / 5.0) * percentage / 100.0
}

/// Credited hours of one cell; vacation counts only on workdays.
pub fn cell_hours(catalog: &ShiftCatalog, shift: &str, year: i32, month: u32, day: u32) -> f64 {
    if shift == VACATION_CODE && !is_workday(year, month, day) {
        return 0.0;
    }
    catalog.hours(shift)
}

/// Compute the hour balance for every roster member, in roster order.
pub fn month_summary(
    employees: &[Employee],
    plan: &Plan,
    catalog: &ShiftCatalog,
    full_week_hours: f64,
    year: i32,
    month: u32,
) -> Vec<EmployeeSummary> {
    let days = days_in_month(year, month);
    employees
        .iter()
        .map(|emp| {
            let mut actual = 0.0;
            let mut vacation = 0;
            for (day, cell) in plan.employee_cells(&emp.id) {
                if day > days {
                    continue;
                }
                actual += cell_hours(catalog, &cell.shift, year, month, day);
                if cell.shift == VACATION_CODE {
                    vacation += 1;
                }
            }
            let target = target_hours(emp.percentage, full_week_hours, year, month);
            EmployeeSummary {
                employee_id: emp.id.clone(),
                name: emp.name.clone(),
                target_hours: target,
                actual_hours: actual,
                delta_hours: actual - target,
                vacation_days: vacation,
            }
        })
        .collect()
}
