use std::path::PathBuf;

use clap::Subcommand;
use dienstplan_core::{Config, MonthBackup, PlanDb};

use crate::common::{load_session, render_plan, resolve_employee, resolve_month, save_session};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Show the month grid (locked cells are marked with *)
    Show {
        #[arg(long)]
        month: Option<String>,
    },
    /// Paint a shift into a cell (manual assignments are locked)
    Set {
        /// Employee id or name
        employee: String,
        /// Calendar day (1-based)
        day: u32,
        /// Shift code, e.g. TR
        shift: String,
        #[arg(long)]
        month: Option<String>,
    },
    /// Erase a cell (and its lock)
    Erase {
        /// Employee id or name
        employee: String,
        /// Calendar day (1-based)
        day: u32,
        #[arg(long)]
        month: Option<String>,
    },
    /// Remove every assignment of the month
    Clear {
        #[arg(long)]
        month: Option<String>,
    },
    /// Export the month (roster, plan, demand) as JSON
    Export {
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        month: Option<String>,
    },
    /// Import a month bundle produced by export
    Import {
        /// JSON file produced by `plan export`
        file: PathBuf,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = PlanDb::open()?;
    let config = Config::load_or_default();
    match action {
        PlanAction::Show { month } => {
            let month = resolve_month(month.as_deref())?;
            let session = load_session(&db, month, &config)?;
            print!("{}", render_plan(&session));
        }
        PlanAction::Set {
            employee,
            day,
            shift,
            month,
        } => {
            let month = resolve_month(month.as_deref())?;
            let mut session = load_session(&db, month, &config)?;
            if !session.catalog().contains(&shift) {
                return Err(format!("unknown shift code '{shift}'").into());
            }
            let id = resolve_employee(session.employees(), &employee)?.id.clone();
            if session.paint_cell(&id, day, &shift)? {
                save_session(&db, &session)?;
                println!("{month}: {employee} day {day} -> {shift} (locked)");
            } else {
                println!("no change");
            }
        }
        PlanAction::Erase {
            employee,
            day,
            month,
        } => {
            let month = resolve_month(month.as_deref())?;
            let mut session = load_session(&db, month, &config)?;
            let id = resolve_employee(session.employees(), &employee)?.id.clone();
            if session.erase_cell(&id, day)? {
                save_session(&db, &session)?;
                println!("{month}: {employee} day {day} cleared");
            } else {
                println!("no change");
            }
        }
        PlanAction::Clear { month } => {
            let month = resolve_month(month.as_deref())?;
            let mut session = load_session(&db, month, &config)?;
            if session.clear_plan() {
                save_session(&db, &session)?;
                println!("cleared every assignment of {month}");
            } else {
                println!("plan was already empty");
            }
        }
        PlanAction::Export { out, month } => {
            let month = resolve_month(month.as_deref())?;
            let session = load_session(&db, month, &config)?;
            let backup = MonthBackup::new(
                month,
                session.employees().to_vec(),
                session.plan().clone(),
                session.needs().clone(),
            );
            let json = backup.to_json()?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("exported {month} to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
        PlanAction::Import { file } => {
            let json = std::fs::read_to_string(&file)?;
            let backup = MonthBackup::from_json(&json)?;
            for emp in &backup.employees {
                db.upsert_employee(emp)?;
            }
            db.save_month(backup.month, &backup.plan, &backup.daily_needs)?;
            println!(
                "imported {} ({} employees, {} cells)",
                backup.month,
                backup.employees.len(),
                backup.plan.len()
            );
        }
    }
    Ok(())
}
