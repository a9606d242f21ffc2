//! Advisory plan checks.
//!
//! These never block an edit; the planner's hard rules live in
//! `engine::constraints`. The host renders warnings next to the affected
//! cells.

use serde::{Deserialize, Serialize};

use crate::calendar::days_in_month;
use crate::catalog::ShiftCatalog;
use crate::plan::{CellKey, Plan};
use crate::roster::Employee;

/// One advisory finding attached to a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellWarning {
    pub key: CellKey,
    pub message: String,
}

/// Check every assigned cell of the month. The one encoded rule flags a
/// day-class duty directly after a night-class duty.
pub fn validate_plan(
    plan: &Plan,
    employees: &[Employee],
    catalog: &ShiftCatalog,
    year: i32,
    month: u32,
) -> Vec<CellWarning> {
    let days = days_in_month(year, month);
    let mut warnings = Vec::new();

    for emp in employees {
        for day in 2..=days {
            let Some(shift) = plan.shift_at(&emp.id, day) else {
                continue;
            };
            let Some(prev) = plan.shift_at(&emp.id, day - 1) else {
                continue;
            };
            if catalog.is_night(prev) && catalog.is_day(shift) {
                warnings.push(CellWarning {
                    key: CellKey::new(emp.id.clone(), day),
                    message: "day duty directly after night duty".to_string(),
                });
            }
        }
    }
    warnings
}
