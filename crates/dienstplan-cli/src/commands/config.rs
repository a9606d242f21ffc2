use clap::Subcommand;
use dienstplan_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Print the config file path
    Path,
    /// Override the credited hours of one shift code
    SetHours {
        /// Shift code, e.g. TR
        shift: String,
        /// Hours per assigned day
        hours: f64,
    },
    /// Set one entry of the master demand template (0 removes it)
    SetMaster {
        /// Shift code, e.g. TR
        shift: String,
        /// Required headcount per day
        count: u32,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::SetHours { shift, hours } => {
            let mut config = Config::load()?;
            config.shift_hours.insert(shift.clone(), hours);
            config.save()?;
            println!("{shift} now credits {hours}h");
        }
        ConfigAction::SetMaster { shift, count } => {
            let mut config = Config::load()?;
            if count == 0 {
                config.master_demand.remove(&shift);
                println!("removed {shift} from the master demand template");
            } else {
                config.master_demand.insert(shift.clone(), count);
                println!("master demand: {shift} -> {count}/day");
            }
            config.save()?;
        }
    }
    Ok(())
}
