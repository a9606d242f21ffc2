//! SQLite-based storage for the roster and per-month plan snapshots.
//!
//! Plans and daily needs are stored as JSON blobs keyed by month id
//! (`YYYY-MM`); the storage layer knows nothing about planning rules.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use super::migrations;
use crate::calendar::MonthRef;
use crate::error::{DatabaseError, Result};
use crate::plan::{DailyNeeds, Plan};
use crate::roster::Employee;

/// SQLite database for roster and plan storage.
pub struct PlanDb {
    conn: Connection,
}

impl PlanDb {
    /// Open the database at `~/.config/dienstplan/dienstplan.db`, creating
    /// and migrating it if necessary.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("dienstplan.db");
        Self::open_at(&path)
    }

    /// Open (and migrate) a database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        migrations::migrate(&self.conn)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(())
    }

    // === Roster ===

    /// Insert or update one employee.
    pub fn upsert_employee(&self, employee: &Employee) -> Result<()> {
        self.conn.execute(
            "INSERT INTO employees (id, name, percentage, weekly_target_hours, weekly_max_hours)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET
                 name = excluded.name,
                 percentage = excluded.percentage,
                 weekly_target_hours = excluded.weekly_target_hours,
                 weekly_max_hours = excluded.weekly_max_hours",
            params![
                employee.id,
                employee.name,
                employee.percentage,
                employee.weekly_target_hours,
                employee.weekly_max_hours,
            ],
        )?;
        Ok(())
    }

    /// All employees, sorted by name then id.
    pub fn list_employees(&self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, percentage, weekly_target_hours, weekly_max_hours
             FROM employees ORDER BY name, id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Employee::from_parts(
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
            ))
        })?;

        let mut employees = Vec::new();
        for row in rows {
            employees.push(row?);
        }
        Ok(employees)
    }

    /// Delete one employee row. Plan snapshots are not rewritten here; the
    /// session cascades cell removal and saves the month afterwards.
    pub fn delete_employee(&self, id: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    // === Plan months ===

    /// Persist one month's plan and needs, replacing any previous snapshot.
    pub fn save_month(&self, month: MonthRef, plan: &Plan, needs: &DailyNeeds) -> Result<()> {
        let plan_json = serde_json::to_string(plan)?;
        let needs_json = serde_json::to_string(needs)?;
        self.conn.execute(
            "INSERT INTO plans (month_id, plan_json, needs_json, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(month_id) DO UPDATE SET
                 plan_json = excluded.plan_json,
                 needs_json = excluded.needs_json,
                 updated_at = excluded.updated_at",
            params![month.id(), plan_json, needs_json, Utc::now().to_rfc3339()],
        )?;
        tracing::debug!(month = %month, cells = plan.len(), "month snapshot saved");
        Ok(())
    }

    /// Load one month's snapshot, if present.
    pub fn load_month(&self, month: MonthRef) -> Result<Option<(Plan, DailyNeeds)>> {
        let row: Option<(String, String)> = self
            .conn
            .query_row(
                "SELECT plan_json, needs_json FROM plans WHERE month_id = ?1",
                params![month.id()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match row {
            Some((plan_json, needs_json)) => {
                let plan: Plan = serde_json::from_str(&plan_json)?;
                let needs: DailyNeeds = serde_json::from_str(&needs_json)?;
                Ok(Some((plan, needs)))
            }
            None => Ok(None),
        }
    }

    /// Month ids with a stored snapshot, ascending.
    pub fn list_months(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT month_id FROM plans ORDER BY month_id")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut months = Vec::new();
        for row in rows {
            months.push(row?);
        }
        Ok(months)
    }
}
