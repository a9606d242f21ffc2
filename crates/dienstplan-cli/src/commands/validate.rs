use clap::Subcommand;
use dienstplan_core::{validate_plan, Config, PlanDb};

use crate::common::{load_session, resolve_month};

#[derive(Subcommand)]
pub enum ValidateAction {
    /// Report advisory findings for the month's plan
    Show {
        /// Month (YYYY-MM), defaults to current
        #[arg(long)]
        month: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ValidateAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = PlanDb::open()?;
    let config = Config::load_or_default();
    match action {
        ValidateAction::Show { month, json } => {
            let month = resolve_month(month.as_deref())?;
            let session = load_session(&db, month, &config)?;
            let warnings = validate_plan(
                session.plan(),
                session.employees(),
                session.catalog(),
                month.year,
                month.month,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&warnings)?);
            } else if warnings.is_empty() {
                println!("no findings for {month}");
            } else {
                for w in warnings {
                    let name = session
                        .employee(&w.key.employee_id)
                        .map(|e| e.name.as_str())
                        .unwrap_or(w.key.employee_id.as_str());
                    println!("{month}-{:02}  {name}: {}", w.key.day, w.message);
                }
            }
        }
    }
    Ok(())
}
