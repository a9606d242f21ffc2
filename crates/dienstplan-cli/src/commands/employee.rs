use clap::Subcommand;
use dienstplan_core::{Employee, PlanDb};

use crate::common::resolve_employee;

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee to the roster
    Add {
        /// Display name
        name: String,
        /// Workload percentage of a full-time position
        #[arg(long, default_value_t = 100.0)]
        percentage: f64,
    },
    /// List the roster
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove an employee and every one of their plan cells
    Rm {
        /// Employee id or name
        employee: String,
        /// Month to purge cells from (YYYY-MM), defaults to current
        #[arg(long)]
        month: Option<String>,
    },
}

pub fn run(action: EmployeeAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = PlanDb::open()?;
    match action {
        EmployeeAction::Add { name, percentage } => {
            let emp = Employee::new(&name, percentage);
            db.upsert_employee(&emp)?;
            println!("added {} ({}%) id={}", emp.name, emp.percentage, emp.id);
        }
        EmployeeAction::List { json } => {
            let employees = db.list_employees()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&employees)?);
            } else {
                for e in employees {
                    println!(
                        "{}  {:>5.1}%  {:>5.1}h/week  {}",
                        e.id, e.percentage, e.weekly_target_hours, e.name
                    );
                }
            }
        }
        EmployeeAction::Rm { employee, month } => {
            let config = dienstplan_core::Config::load_or_default();
            let month = crate::common::resolve_month(month.as_deref())?;
            let mut session = crate::common::load_session(&db, month, &config)?;

            let id = resolve_employee(session.employees(), &employee)?.id.clone();
            session.remove_employee(&id)?;
            db.delete_employee(&id)?;
            crate::common::save_session(&db, &session)?;
            println!("removed employee {id} and their cells in {month}");
        }
    }
    Ok(())
}
