//! Employee roster.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Weekly hours of a full-time (100%) position.
pub const FULL_TIME_WEEK_HOURS: f64 = 39.0;

/// Statutory weekly hours cap of a full-time position.
pub const MAX_WEEK_HOURS: f64 = 48.0;

/// One roster member.
///
/// `id` is generated once at creation and never changes; plan cells
/// reference employees by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    /// Workload fraction in percent of a full-time position (0-100+)
    pub percentage: f64,
    /// Contract target hours per week, derived from `percentage`
    pub weekly_target_hours: f64,
    /// Statutory cap per week, derived from `percentage`
    pub weekly_max_hours: f64,
}

impl Employee {
    /// Create a new employee with a fresh id and derived weekly hours.
    pub fn new(name: impl Into<String>, percentage: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            percentage,
            weekly_target_hours: FULL_TIME_WEEK_HOURS * percentage / 100.0,
            weekly_max_hours: MAX_WEEK_HOURS * percentage / 100.0,
        }
    }

    /// Rebuild an employee from stored fields.
    pub fn from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        percentage: f64,
        weekly_target_hours: f64,
        weekly_max_hours: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            percentage,
            weekly_target_hours,
            weekly_max_hours,
        }
    }
}
