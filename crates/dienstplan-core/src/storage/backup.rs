//! JSON export/import of one plan month.
//!
//! A backup bundles everything needed to restore a month on another
//! machine: the roster, the plan cells, and the daily needs.

use serde::{Deserialize, Serialize};

use crate::calendar::MonthRef;
use crate::error::Result;
use crate::plan::{DailyNeeds, Plan};
use crate::roster::Employee;

/// Self-contained snapshot of one plan month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthBackup {
    pub month: MonthRef,
    pub employees: Vec<Employee>,
    pub plan: Plan,
    pub daily_needs: DailyNeeds,
}

impl MonthBackup {
    pub fn new(
        month: MonthRef,
        employees: Vec<Employee>,
        plan: Plan,
        daily_needs: DailyNeeds,
    ) -> Self {
        Self {
            month,
            employees,
            plan,
            daily_needs,
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
