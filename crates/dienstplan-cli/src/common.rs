//! Shared plumbing for CLI commands: month resolution, session loading and
//! plan rendering.

use std::error::Error;

use dienstplan_core::{
    Config, Employee, MonthRef, PlanDb, PlanSession, ShiftCatalog,
};

/// Resolve an optional `--month YYYY-MM` argument; defaults to the current
/// month.
pub fn resolve_month(arg: Option<&str>) -> Result<MonthRef, Box<dyn Error>> {
    match arg {
        Some(s) => Ok(s.parse()?),
        None => Ok(MonthRef::current()),
    }
}

/// The catalog with hour overrides from config applied.
pub fn catalog_from(config: &Config) -> ShiftCatalog {
    let mut catalog = ShiftCatalog::standard();
    catalog.apply_hour_overrides(&config.shift_hours);
    catalog
}

/// Load one month's session from the database (roster plus snapshot).
pub fn load_session(
    db: &PlanDb,
    month: MonthRef,
    config: &Config,
) -> Result<PlanSession, Box<dyn Error>> {
    let employees = db.list_employees()?;
    let (plan, needs) = db.load_month(month)?.unwrap_or_default();
    Ok(PlanSession::from_parts(
        month,
        catalog_from(config),
        employees,
        plan,
        needs,
    ))
}

/// Persist the session's month snapshot.
pub fn save_session(db: &PlanDb, session: &PlanSession) -> Result<(), Box<dyn Error>> {
    db.save_month(session.month(), session.plan(), session.needs())?;
    Ok(())
}

/// Find an employee by exact id or exact name.
pub fn resolve_employee<'a>(
    employees: &'a [Employee],
    needle: &str,
) -> Result<&'a Employee, Box<dyn Error>> {
    if let Some(emp) = employees.iter().find(|e| e.id == needle) {
        return Ok(emp);
    }
    if let Some(emp) = employees.iter().find(|e| e.name == needle) {
        return Ok(emp);
    }
    Err(format!("no employee with id or name '{needle}'").into())
}

/// Render the month grid as plain text: one row per employee, one column
/// per day.
pub fn render_plan(session: &PlanSession) -> String {
    let days = session.month().days();
    let name_width = session
        .employees()
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut out = String::new();
    out.push_str(&format!("{:name_width$}", "Name"));
    for day in 1..=days {
        out.push_str(&format!(" {day:>3}"));
    }
    out.push('\n');

    for emp in session.employees() {
        out.push_str(&format!("{:name_width$}", emp.name));
        for day in 1..=days {
            let code = session.plan().shift_at(&emp.id, day).unwrap_or("");
            let lock = if session.plan().is_locked(&emp.id, day) {
                "*"
            } else {
                ""
            };
            out.push_str(&format!(" {:>3}", format!("{code}{lock}")));
        }
        out.push('\n');
    }
    out
}
