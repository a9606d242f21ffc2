use clap::Subcommand;
use dienstplan_core::{AutoPlanner, Config, PlanDb, PlannerConfig};

use crate::common::{load_session, render_plan, resolve_month, save_session};

#[derive(Subcommand)]
pub enum AutoplanAction {
    /// Fill the month's open demand with the fairness planner
    Run {
        /// Month (YYYY-MM), defaults to current
        #[arg(long)]
        month: Option<String>,
        /// Seed for a reproducible run; omitted means fresh entropy
        #[arg(long)]
        seed: Option<u64>,
        /// Print the resulting grid
        #[arg(long)]
        show: bool,
    },
}

pub fn run(action: AutoplanAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = PlanDb::open()?;
    let config = Config::load_or_default();
    match action {
        AutoplanAction::Run { month, seed, show } => {
            let month = resolve_month(month.as_deref())?;
            let mut session = load_session(&db, month, &config)?;
            if session.employees().is_empty() {
                return Err("roster is empty; add employees first".into());
            }
            if session.needs().is_empty() {
                return Err(format!("no demand recorded for {month}").into());
            }

            let before = session.plan().len();
            let planner = AutoPlanner::with_config(PlannerConfig {
                seed,
                weights: config.weights,
            });

            if session.auto_fill(&planner) {
                save_session(&db, &session)?;
                let added = session.plan().len() - before;
                println!("auto-plan for {month} finished: {added} cells assigned");
            } else {
                println!("auto-plan for {month} changed nothing");
            }
            if show {
                print!("{}", render_plan(&session));
            }
        }
    }
    Ok(())
}
