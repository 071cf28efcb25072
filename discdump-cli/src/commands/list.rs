use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use discdump_catalog::Catalog;
use discdump_core::Dump;

use crate::error::CliError;

pub(crate) fn run_list(catalog: &Catalog, system: Option<&str>) -> Result<(), CliError> {
    let dumps: Vec<&Dump> = match system {
        Some(id) => {
            if catalog.system(id).is_none() {
                return Err(CliError::not_found(format!("system '{id}'")));
            }
            catalog.dumps_for_system(id).collect()
        }
        None => catalog.dumps.iter().collect(),
    };

    if dumps.is_empty() {
        log::info!("No dumps found.");
        return Ok(());
    }

    for dump in &dumps {
        let system = dump
            .system
            .as_ref()
            .map(|s| s.short_name.as_str())
            .unwrap_or("?");
        log::info!(
            "{}  {} [{}]",
            dump.id.if_supports_color(Stderr, |t| t.dimmed()),
            dump.title.if_supports_color(Stderr, |t| t.bold()),
            system.if_supports_color(Stderr, |t| t.cyan()),
        );

        let mut details = vec![dump.region_name().to_string()];
        if let Some(n) = dump.disc_number {
            details.push(format!("Disc {n}"));
        }
        if let Some(label) = &dump.label {
            details.push(label.clone());
        }
        details.push(dump.status.label().to_string());
        details.push(format!(
            "{} track{}",
            dump.tracks().len(),
            if dump.tracks().len() == 1 { "" } else { "s" }
        ));
        log::info!("    {}", details.join(", "));
    }

    log::info!("");
    log::info!("{} dump(s)", dumps.len());
    Ok(())
}
