use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "dienstplan-cli", version, about = "Dienstplan CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roster management
    Employee {
        #[command(subcommand)]
        action: commands::employee::EmployeeAction,
    },
    /// Daily staffing needs
    Demand {
        #[command(subcommand)]
        action: commands::demand::DemandAction,
    },
    /// Plan cells: show, paint, erase, export
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Automatic shift assignment
    Autoplan {
        #[command(subcommand)]
        action: commands::autoplan::AutoplanAction,
    },
    /// Monthly hour balance
    Summary {
        #[command(subcommand)]
        action: commands::summary::SummaryAction,
    },
    /// Advisory plan checks
    Validate {
        #[command(subcommand)]
        action: commands::validate::ValidateAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Employee { action } => commands::employee::run(action),
        Commands::Demand { action } => commands::demand::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Autoplan { action } => commands::autoplan::run(action),
        Commands::Summary { action } => commands::summary::run(action),
        Commands::Validate { action } => commands::validate::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "dienstplan-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
