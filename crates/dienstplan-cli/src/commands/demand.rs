use clap::Subcommand;
use dienstplan_core::{Config, PlanDb};

use crate::common::{load_session, resolve_month, save_session};

#[derive(Subcommand)]
pub enum DemandAction {
    /// Set required headcount for one day and shift (0 clears)
    Set {
        /// Calendar day (1-based)
        day: u32,
        /// Shift code, e.g. TR
        shift: String,
        /// Required headcount
        count: u32,
        /// Month (YYYY-MM), defaults to current
        #[arg(long)]
        month: Option<String>,
    },
    /// Show the month's demand table
    Show {
        #[arg(long)]
        month: Option<String>,
    },
    /// Fill every day from the master demand template in config
    ApplyMaster {
        #[arg(long)]
        month: Option<String>,
    },
}

pub fn run(action: DemandAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = PlanDb::open()?;
    let config = Config::load_or_default();
    match action {
        DemandAction::Set {
            day,
            shift,
            count,
            month,
        } => {
            let month = resolve_month(month.as_deref())?;
            let mut session = load_session(&db, month, &config)?;
            session.set_demand(day, &shift, count)?;
            save_session(&db, &session)?;
            println!("{month}: day {day} {shift} -> {count}");
        }
        DemandAction::Show { month } => {
            let month = resolve_month(month.as_deref())?;
            let session = load_session(&db, month, &config)?;
            if session.needs().is_empty() {
                println!("no demand recorded for {month}");
            } else {
                for (day, needs) in session.needs().days() {
                    let line: Vec<String> =
                        needs.iter().map(|(s, n)| format!("{s}={n}")).collect();
                    println!("{month}-{day:02}  {}", line.join(" "));
                }
            }
        }
        DemandAction::ApplyMaster { month } => {
            let month = resolve_month(month.as_deref())?;
            if config.master_demand.is_empty() {
                return Err("master_demand in config is empty".into());
            }
            let mut session = load_session(&db, month, &config)?;
            session.apply_master_demand(&config.master_demand);
            save_session(&db, &session)?;
            println!("applied master demand to every day of {month}");
        }
    }
    Ok(())
}
