use clap::Subcommand;
use dienstplan_core::{month_summary, Config, PlanDb};

use crate::common::{load_session, resolve_month};

#[derive(Subcommand)]
pub enum SummaryAction {
    /// Per-employee hour balance for the month
    Show {
        /// Month (YYYY-MM), defaults to current
        #[arg(long)]
        month: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SummaryAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = PlanDb::open()?;
    let config = Config::load_or_default();
    match action {
        SummaryAction::Show { month, json } => {
            let month = resolve_month(month.as_deref())?;
            let session = load_session(&db, month, &config)?;
            let summaries = month_summary(
                session.employees(),
                session.plan(),
                session.catalog(),
                config.full_time_week_hours,
                month.year,
                month.month,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                println!(
                    "{:<24} {:>8} {:>8} {:>8} {:>4}",
                    "Name", "Target", "Actual", "Delta", "Vac"
                );
                for s in summaries {
                    println!(
                        "{:<24} {:>8.1} {:>8.1} {:>+8.1} {:>4}",
                        s.name, s.target_hours, s.actual_hours, s.delta_hours, s.vacation_days
                    );
                }
            }
        }
    }
    Ok(())
}
