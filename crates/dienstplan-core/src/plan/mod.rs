//! The month plan: employee-day cells and daily staffing needs.
//!
//! A plan maps `(employee_id, day)` to an assigned shift code plus a lock
//! flag. The canonical representation of "no assignment" is absence of the
//! key; an empty shift code is normalized away at every mutation site, so
//! the two representations never coexist.

pub mod diff;
pub mod history;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Composite key addressing one employee-day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellKey {
    pub employee_id: String,
    /// 1-based calendar day within the active month
    pub day: u32,
}

impl CellKey {
    pub fn new(employee_id: impl Into<String>, day: u32) -> Self {
        Self {
            employee_id: employee_id.into(),
            day,
        }
    }
}

/// One employee-day assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Shift code, never empty in a stored cell
    pub shift: String,
    /// Locked cells are immune to automatic (re)assignment
    pub locked: bool,
}

impl Cell {
    pub fn new(shift: impl Into<String>, locked: bool) -> Self {
        Self {
            shift: shift.into(),
            locked,
        }
    }
}

/// Flat serialized form of one plan cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEntry {
    pub employee_id: String,
    pub day: u32,
    pub shift: String,
    pub locked: bool,
}

/// One month's assignments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<PlanEntry>", from = "Vec<PlanEntry>")]
pub struct Plan {
    cells: BTreeMap<CellKey, Cell>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, key: &CellKey) -> Option<&Cell> {
        self.cells.get(key)
    }

    pub fn cell(&self, employee_id: &str, day: u32) -> Option<&Cell> {
        self.cells.get(&CellKey::new(employee_id, day))
    }

    /// Shift code at an employee-day, if assigned.
    pub fn shift_at(&self, employee_id: &str, day: u32) -> Option<&str> {
        self.cell(employee_id, day).map(|c| c.shift.as_str())
    }

    pub fn is_locked(&self, employee_id: &str, day: u32) -> bool {
        self.cell(employee_id, day).map(|c| c.locked).unwrap_or(false)
    }

    /// Assign a shift. An empty shift code removes the cell, keeping the
    /// "absent key means unassigned" invariant.
    pub fn set(&mut self, employee_id: &str, day: u32, shift: &str, locked: bool) {
        if shift.is_empty() {
            self.cells.remove(&CellKey::new(employee_id, day));
        } else {
            self.cells
                .insert(CellKey::new(employee_id, day), Cell::new(shift, locked));
        }
    }

    /// Insert a full cell under a key, normalizing empty shifts to removal.
    pub fn set_cell(&mut self, key: CellKey, cell: Cell) {
        if cell.shift.is_empty() {
            self.cells.remove(&key);
        } else {
            self.cells.insert(key, cell);
        }
    }

    pub fn remove(&mut self, employee_id: &str, day: u32) -> Option<Cell> {
        self.cells.remove(&CellKey::new(employee_id, day))
    }

    /// Remove every cell of one employee. Returns the number of cells
    /// removed.
    pub fn remove_employee(&mut self, employee_id: &str) -> usize {
        let before = self.cells.len();
        self.cells.retain(|k, _| k.employee_id != employee_id);
        before - self.cells.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &Cell)> {
        self.cells.iter()
    }

    /// All cells of one employee, ordered by day.
    pub fn employee_cells<'a>(
        &'a self,
        employee_id: &'a str,
    ) -> impl Iterator<Item = (u32, &'a Cell)> + 'a {
        self.cells
            .range(CellKey::new(employee_id, 0)..=CellKey::new(employee_id, u32::MAX))
            .map(|(k, c)| (k.day, c))
    }
}

impl From<Plan> for Vec<PlanEntry> {
    fn from(plan: Plan) -> Self {
        plan.cells
            .into_iter()
            .map(|(k, c)| PlanEntry {
                employee_id: k.employee_id,
                day: k.day,
                shift: c.shift,
                locked: c.locked,
            })
            .collect()
    }
}

impl From<Vec<PlanEntry>> for Plan {
    fn from(entries: Vec<PlanEntry>) -> Self {
        let mut plan = Plan::new();
        for e in entries {
            plan.set(&e.employee_id, e.day, &e.shift, e.locked);
        }
        plan
    }
}

/// Required headcount per day and shift code.
///
/// Days without demand (and shifts with zero demand) are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyNeeds {
    needs: BTreeMap<u32, BTreeMap<String, u32>>,
}

impl DailyNeeds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.needs.is_empty()
    }

    /// Set the required headcount for a day and shift; zero removes the
    /// entry.
    pub fn set(&mut self, day: u32, shift: &str, count: u32) {
        if count == 0 {
            if let Some(day_needs) = self.needs.get_mut(&day) {
                day_needs.remove(shift);
                if day_needs.is_empty() {
                    self.needs.remove(&day);
                }
            }
        } else {
            self.needs
                .entry(day)
                .or_default()
                .insert(shift.to_string(), count);
        }
    }

    pub fn day(&self, day: u32) -> Option<&BTreeMap<String, u32>> {
        self.needs.get(&day)
    }

    pub fn required(&self, day: u32, shift: &str) -> u32 {
        self.needs
            .get(&day)
            .and_then(|n| n.get(shift))
            .copied()
            .unwrap_or(0)
    }

    pub fn days(&self) -> impl Iterator<Item = (&u32, &BTreeMap<String, u32>)> {
        self.needs.iter()
    }

    /// Replace the whole month with one master template: the same
    /// shift-to-headcount mapping on every day.
    pub fn apply_master(&mut self, master: &BTreeMap<String, u32>, days_in_month: u32) {
        self.needs.clear();
        for day in 1..=days_in_month {
            for (shift, count) in master {
                if *count > 0 {
                    self.needs
                        .entry(day)
                        .or_default()
                        .insert(shift.clone(), *count);
                }
            }
        }
    }

    /// Total monthly demand per shift code.
    pub fn totals(&self) -> BTreeMap<String, u32> {
        let mut totals: BTreeMap<String, u32> = BTreeMap::new();
        for day_needs in self.needs.values() {
            for (shift, count) in day_needs {
                *totals.entry(shift.clone()).or_default() += count;
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_shift_is_normalized_to_absence() {
        let mut plan = Plan::new();
        plan.set("e1", 3, "TR", false);
        assert_eq!(plan.shift_at("e1", 3), Some("TR"));

        plan.set("e1", 3, "", false);
        assert!(plan.cell("e1", 3).is_none());
        assert!(plan.is_empty());
    }

    #[test]
    fn test_set_cell_normalizes_too() {
        let mut plan = Plan::new();
        plan.set_cell(CellKey::new("e1", 5), Cell::new("NR", true));
        assert!(plan.is_locked("e1", 5));

        plan.set_cell(CellKey::new("e1", 5), Cell::new("", false));
        assert!(plan.cell("e1", 5).is_none());
    }

    #[test]
    fn test_remove_employee_cascades_only_that_employee() {
        let mut plan = Plan::new();
        plan.set("e1", 1, "TR", false);
        plan.set("e1", 2, "NR", true);
        plan.set("e2", 1, "TR", false);

        let removed = plan.remove_employee("e1");
        assert_eq!(removed, 2);
        assert!(plan.cell("e1", 1).is_none());
        assert!(plan.cell("e1", 2).is_none());
        assert_eq!(plan.shift_at("e2", 1), Some("TR"));
    }

    #[test]
    fn test_employee_cells_ordered_by_day() {
        let mut plan = Plan::new();
        plan.set("e1", 9, "TR", false);
        plan.set("e1", 2, "NR", false);
        plan.set("e2", 5, "TR", false);

        let days: Vec<u32> = plan.employee_cells("e1").map(|(d, _)| d).collect();
        assert_eq!(days, vec![2, 9]);
    }

    #[test]
    fn test_plan_serde_roundtrip_is_flat_entries() {
        let mut plan = Plan::new();
        plan.set("e1", 4, "TR", true);
        plan.set("e2", 7, "U", false);

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"employee_id\""));
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_needs_zero_removes_entry() {
        let mut needs = DailyNeeds::new();
        needs.set(1, "TR", 2);
        needs.set(1, "NR", 1);
        assert_eq!(needs.required(1, "TR"), 2);

        needs.set(1, "TR", 0);
        assert_eq!(needs.required(1, "TR"), 0);
        assert_eq!(needs.required(1, "NR"), 1);

        needs.set(1, "NR", 0);
        assert!(needs.day(1).is_none());
    }

    #[test]
    fn test_apply_master_fills_every_day() {
        let mut needs = DailyNeeds::new();
        needs.set(3, "TR", 9);

        let mut master = BTreeMap::new();
        master.insert("TR".to_string(), 2);
        master.insert("NR".to_string(), 1);
        master.insert("VT".to_string(), 0);
        needs.apply_master(&master, 30);

        assert_eq!(needs.required(1, "TR"), 2);
        assert_eq!(needs.required(30, "NR"), 1);
        assert_eq!(needs.required(3, "TR"), 2);
        assert_eq!(needs.required(15, "VT"), 0);
    }

    #[test]
    fn test_totals_sum_whole_month() {
        let mut needs = DailyNeeds::new();
        needs.set(1, "TR", 2);
        needs.set(2, "TR", 3);
        needs.set(2, "NR", 1);

        let totals = needs.totals();
        assert_eq!(totals.get("TR"), Some(&5));
        assert_eq!(totals.get("NR"), Some(&1));
    }
}
