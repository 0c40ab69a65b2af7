//! movie-sql CLI
//!
//! Command-line interface for querying a movies / actors / castings database.

mod cli_types;
mod commands;
mod error;
mod logger;
mod output;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_set_db, run_config_show};
use commands::load::run_load;
use commands::query::{run_query, Question};

pub(crate) use error::CliError;
pub(crate) use logger::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        db, json, command, ..
    } = cli;

    let question = match command {
        Commands::Films { actor } => Question::Films(actor),
        Commands::Cast { title } => Question::Cast(title),
        Commands::BusyYears { actor } => Question::BusyYears(actor),
        Commands::Supporting { actor } => Question::Supporting(actor),
        Commands::Leads { year } => Question::Leads(year),
        Commands::BadActors => Question::BadActors,
        Commands::Starring { count } => Question::Starring(count),
        Commands::CoStars { actor } => Question::CoStars(actor),
        Commands::Load { dataset, force } => return run_load(&dataset, db, force),
        Commands::Config { action } => {
            return match action {
                ConfigAction::Show => {
                    run_config_show(db);
                    Ok(())
                }
                ConfigAction::Path => {
                    run_config_path();
                    Ok(())
                }
                ConfigAction::SetDb { path } => run_config_set_db(Some(&path)),
                ConfigAction::ClearDb => run_config_set_db(None),
            };
        }
    };

    run_query(question, db, json)
}
