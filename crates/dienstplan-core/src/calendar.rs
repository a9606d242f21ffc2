//! Month arithmetic for plan addressing.
//!
//! The planner works on 1-based calendar days within a single month; weeks
//! are Monday-anchored (Monday = 1 .. Sunday = 7). The partial first week
//! of a month is treated as starting at day 1.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A `(year, month)` pair identifying one plan month.
///
/// Storage keys months by [`MonthRef::id`], of the form `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthRef {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month containing today's local date.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Number of calendar days in this month.
    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Storage identifier, e.g. `2026-03`.
    pub fn id(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// The following month.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// The preceding month.
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for MonthRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidMonthId(s.to_string());
        let (y, m) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return 0,
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(n) => (n - first).num_days() as u32,
        None => 0,
    }
}

/// Monday-based weekday of a calendar day: Monday = 1 .. Sunday = 7.
pub fn weekday_mon1(year: i32, month: u32, day: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|d| d.weekday().number_from_monday())
        .unwrap_or(1)
}

/// Calendar day (within the month) of the Monday of the week containing
/// `day`, clamped to day 1 for the partial first week.
pub fn week_start_day(year: i32, month: u32, day: u32) -> u32 {
    let dow = weekday_mon1(year, month, day);
    day.saturating_sub(dow - 1).max(1)
}

/// Saturday or Sunday.
pub fn is_weekend(year: i32, month: u32, day: u32) -> bool {
    weekday_mon1(year, month, day) >= 6
}

/// Monday through Friday.
pub fn is_workday(year: i32, month: u32, day: u32) -> bool {
    !is_weekend(year, month, day)
}

/// Number of Monday-Friday days in the month.
pub fn workdays_in_month(year: i32, month: u32) -> u32 {
    (1..=days_in_month(year, month))
        .filter(|&d| is_workday(year, month, d))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn test_weekday_mon1() {
        // 2026-06-01 is a Monday
        assert_eq!(weekday_mon1(2026, 6, 1), 1);
        assert_eq!(weekday_mon1(2026, 6, 6), 6);
        assert_eq!(weekday_mon1(2026, 6, 7), 7);
        // 2026-08-01 is a Saturday
        assert_eq!(weekday_mon1(2026, 8, 1), 6);
    }

    #[test]
    fn test_week_start_clamped_to_first_day() {
        // 2026-08-01 is a Saturday; its Monday lies in July, so the window
        // is clamped to day 1.
        assert_eq!(week_start_day(2026, 8, 1), 1);
        assert_eq!(week_start_day(2026, 8, 2), 1);
        // 2026-08-03 is a Monday
        assert_eq!(week_start_day(2026, 8, 3), 3);
        assert_eq!(week_start_day(2026, 8, 9), 3);
        assert_eq!(week_start_day(2026, 8, 10), 10);
    }

    #[test]
    fn test_weekend_detection() {
        assert!(is_weekend(2026, 6, 6));
        assert!(is_weekend(2026, 6, 7));
        assert!(!is_weekend(2026, 6, 8));
        assert!(is_workday(2026, 6, 12));
    }

    #[test]
    fn test_month_ref_id_roundtrip() {
        let m = MonthRef::new(2026, 3);
        assert_eq!(m.id(), "2026-03");
        let parsed: MonthRef = "2026-03".parse().unwrap();
        assert_eq!(parsed, m);
    }

    #[test]
    fn test_month_ref_parse_rejects_garbage() {
        assert!("2026".parse::<MonthRef>().is_err());
        assert!("2026-13".parse::<MonthRef>().is_err());
        assert!("march".parse::<MonthRef>().is_err());
    }

    #[test]
    fn test_month_ref_navigation() {
        let dec = MonthRef::new(2025, 12);
        assert_eq!(dec.next(), MonthRef::new(2026, 1));
        assert_eq!(MonthRef::new(2026, 1).prev(), dec);
        assert_eq!(MonthRef::new(2026, 6).next(), MonthRef::new(2026, 7));
    }

    #[test]
    fn test_workdays_in_month() {
        // June 2026: starts on a Monday, 30 days -> 22 workdays
        assert_eq!(workdays_in_month(2026, 6), 22);
    }
}
