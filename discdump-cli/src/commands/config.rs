use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::error::CliError;
use crate::settings::{self, Settings};

/// Show current settings and where they come from.
pub(crate) fn run_config_show(current: &Settings) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "discdump Configuration".if_supports_color(Stderr, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(exists)".if_supports_color(Stderr, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(not found)".if_supports_color(Stderr, |t| t.dimmed()),
        );
    }

    match &current.catalog_root {
        Some(root) => log::info!("  Catalog:       {}", root.display()),
        None => log::info!(
            "  Catalog:       {}",
            "(not set, using ./catalog)".if_supports_color(Stderr, |t| t.dimmed())
        ),
    }
    log::info!("  DAT author:    {}", current.dat.author);
    log::info!("  DAT homepage:  {}", current.dat.homepage);
}

pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}

pub(crate) fn run_config_set_catalog(dir: &Path) -> Result<(), CliError> {
    if !dir.is_dir() {
        return Err(CliError::config(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    let dir = std::fs::canonicalize(dir)?;
    settings::save_catalog_path(Some(&dir))?;
    log::info!("Catalog set to {}", dir.display());
    Ok(())
}

pub(crate) fn run_config_clear_catalog() -> Result<(), CliError> {
    settings::save_catalog_path(None)?;
    log::info!("Catalog setting cleared");
    Ok(())
}
