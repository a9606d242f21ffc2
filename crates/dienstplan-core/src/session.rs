//! One month's editing session.
//!
//! `PlanSession` owns the month context, roster, plan, staffing needs and
//! undo history, and funnels every plan mutation through the diff engine so
//! each edit, clear or auto-fill pass lands as exactly one undoable
//! transaction. The engine itself stays stateless; the session hands it
//! snapshots and commits the replacement it returns.

use std::collections::BTreeMap;

use crate::calendar::MonthRef;
use crate::catalog::ShiftCatalog;
use crate::engine::AutoPlanner;
use crate::error::{CoreError, Result};
use crate::plan::diff::diff;
use crate::plan::history::History;
use crate::plan::{DailyNeeds, Plan};
use crate::roster::Employee;

/// Mutable application state for one plan month.
#[derive(Debug)]
pub struct PlanSession {
    month: MonthRef,
    catalog: ShiftCatalog,
    employees: Vec<Employee>,
    plan: Plan,
    needs: DailyNeeds,
    history: History,
}

impl PlanSession {
    /// Fresh empty session for a month.
    pub fn new(month: MonthRef, catalog: ShiftCatalog) -> Self {
        Self {
            month,
            catalog,
            employees: Vec::new(),
            plan: Plan::new(),
            needs: DailyNeeds::new(),
            history: History::new(),
        }
    }

    /// Rebuild a session from persisted state. History starts empty.
    pub fn from_parts(
        month: MonthRef,
        catalog: ShiftCatalog,
        employees: Vec<Employee>,
        plan: Plan,
        needs: DailyNeeds,
    ) -> Self {
        Self {
            month,
            catalog,
            employees,
            plan,
            needs,
            history: History::new(),
        }
    }

    pub fn month(&self) -> MonthRef {
        self.month
    }

    pub fn catalog(&self) -> &ShiftCatalog {
        &self.catalog
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn needs(&self) -> &DailyNeeds {
        &self.needs
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    fn require_employee(&self, id: &str) -> Result<()> {
        if self.employee(id).is_some() {
            Ok(())
        } else {
            Err(CoreError::UnknownEmployee(id.to_string()))
        }
    }

    fn require_day(&self, day: u32) -> Result<()> {
        let days = self.month.days();
        if (1..=days).contains(&day) {
            Ok(())
        } else {
            Err(CoreError::DayOutOfRange {
                day,
                days_in_month: days,
            })
        }
    }

    /// Commit a replacement plan as one transaction. Returns false for a
    /// no-op (nothing recorded).
    fn commit(&mut self, new_plan: Plan) -> bool {
        let d = diff(&self.plan, &new_plan);
        if !self.history.push(d) {
            return false;
        }
        self.plan = new_plan;
        true
    }

    // === Roster ===

    /// Add a new employee to the roster and return it.
    pub fn add_employee(&mut self, name: &str, percentage: f64) -> Employee {
        let emp = Employee::new(name, percentage);
        self.employees.push(emp.clone());
        self.employees
            .sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        emp
    }

    /// Replace a roster entry (matched by id).
    pub fn update_employee(&mut self, employee: Employee) -> Result<()> {
        let slot = self
            .employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or_else(|| CoreError::UnknownEmployee(employee.id.clone()))?;
        *slot = employee;
        self.employees
            .sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(())
    }

    /// Remove an employee; every plan cell of that employee goes with it,
    /// in the same undoable transaction.
    pub fn remove_employee(&mut self, id: &str) -> Result<()> {
        self.require_employee(id)?;
        self.employees.retain(|e| e.id != id);

        let mut new_plan = self.plan.clone();
        new_plan.remove_employee(id);
        self.commit(new_plan);
        Ok(())
    }

    // === Plan edits ===

    /// Manually paint a shift into a cell. Manual assignments are locked so
    /// the auto-planner never overwrites them. An empty shift erases.
    pub fn paint_cell(&mut self, employee_id: &str, day: u32, shift: &str) -> Result<bool> {
        self.require_employee(employee_id)?;
        self.require_day(day)?;

        let mut new_plan = self.plan.clone();
        new_plan.set(employee_id, day, shift, !shift.is_empty());
        Ok(self.commit(new_plan))
    }

    /// Erase a cell (and its lock).
    pub fn erase_cell(&mut self, employee_id: &str, day: u32) -> Result<bool> {
        self.require_employee(employee_id)?;
        self.require_day(day)?;

        let mut new_plan = self.plan.clone();
        new_plan.remove(employee_id, day);
        Ok(self.commit(new_plan))
    }

    /// Drop every assignment of the month.
    pub fn clear_plan(&mut self) -> bool {
        self.commit(Plan::new())
    }

    // === Demand ===

    /// Set required headcount for one day and shift; zero clears the entry.
    /// Demand edits are not plan transactions and do not touch history.
    pub fn set_demand(&mut self, day: u32, shift: &str, count: u32) -> Result<()> {
        self.require_day(day)?;
        self.needs.set(day, shift, count);
        Ok(())
    }

    /// Replace the whole month's demand with a master template.
    pub fn apply_master_demand(&mut self, master: &BTreeMap<String, u32>) {
        self.needs.apply_master(master, self.month.days());
    }

    // === Auto-planning ===

    /// Run the auto-planner over the current snapshot and commit its
    /// replacement plan as one transaction. Returns false when the pass
    /// changed nothing.
    pub fn auto_fill(&mut self, planner: &AutoPlanner) -> bool {
        let filled = planner.auto_fill(
            &self.plan,
            &self.employees,
            &self.needs,
            &self.catalog,
            self.month.year,
            self.month.month,
        );
        self.commit(filled)
    }

    // === History ===

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Revert the latest transaction. Returns false with empty history.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.plan) {
            Some(restored) => {
                self.plan = restored;
                true
            }
            None => false,
        }
    }

    /// Re-apply the latest undone transaction.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.plan) {
            Some(next) => {
                self.plan = next;
                true
            }
            None => false,
        }
    }
}
