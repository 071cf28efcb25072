//! discdump CLI
//!
//! Command-line interface for exporting catalogued disc dumps.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use discdump_catalog::{Catalog, load_catalog};
use discdump_export::{Clock, FixedClock, SystemClock};

use crate::cli_types::{Cli, Commands, ConfigAction};
use crate::error::CliError;
use crate::settings::Settings;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = settings::load_settings();
    let catalog_arg = cli.catalog;
    let open = |settings: &Settings| -> Result<Catalog, CliError> {
        let dir = settings::resolve_catalog_path(catalog_arg.clone(), settings);
        log::debug!("Loading catalog from {}", dir.display());
        Ok(load_catalog(&dir)?)
    };

    match cli.command {
        Commands::Cue { id, out } => {
            commands::export::run_cue(&open(&settings)?, &id, out.as_deref())?;
        }
        Commands::Dat { id, out, date } => {
            let clock = clock_for(date);
            commands::export::run_dat(
                &open(&settings)?,
                &id,
                out.as_deref(),
                &*clock,
                &settings.dat,
            )?;
        }
        Commands::Export { id, out, date } => {
            let clock = clock_for(date);
            commands::export::run_export(
                &open(&settings)?,
                &id,
                &out,
                &*clock,
                &settings.dat,
            )?;
        }
        Commands::List { system } => {
            commands::list::run_list(&open(&settings)?, system.as_deref())?;
        }
        Commands::Tables => commands::tables::run_tables(),
        Commands::Hash { files, track_type } => {
            commands::hash::run_hash(&files, track_type)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetCatalog { dir } => commands::config::run_config_set_catalog(&dir)?,
            ConfigAction::ClearCatalog => commands::config::run_config_clear_catalog()?,
        },
    }
    Ok(())
}

/// A pinned date from `--date`, otherwise today's UTC date.
fn clock_for(date: Option<chrono::NaiveDate>) -> Box<dyn Clock> {
    match date {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    }
}
