use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use discdump_catalog::Catalog;
use discdump_core::Dump;
use discdump_export::{
    Clock, DatOptions, ExportArtifact, ExportError, cue_artifact, dat_artifact, sanitize_title,
};

use crate::error::CliError;

fn find_dump<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Dump, CliError> {
    catalog.find(id).ok_or_else(|| CliError::not_found(id))
}

/// Print the body to stdout, or save it under `out` when given.
fn emit(artifact: &ExportArtifact, out: Option<&Path>) -> Result<Option<PathBuf>, CliError> {
    log::debug!(
        "Content-Type: {}; Content-Disposition: {}",
        artifact.content_type(),
        artifact.content_disposition()
    );
    match out {
        Some(dir) => {
            let path = artifact.write_to_dir(dir)?;
            log::info!(
                "Wrote {}",
                path.display().if_supports_color(Stderr, |t| t.cyan())
            );
            Ok(Some(path))
        }
        None => {
            print!("{}", artifact.body);
            Ok(None)
        }
    }
}

pub(crate) fn run_cue(
    catalog: &Catalog,
    id: &str,
    out: Option<&Path>,
) -> Result<Option<PathBuf>, CliError> {
    let dump = find_dump(catalog, id)?;
    emit(&cue_artifact(dump)?, out)
}

pub(crate) fn run_dat(
    catalog: &Catalog,
    id: &str,
    out: Option<&Path>,
    clock: &dyn Clock,
    options: &DatOptions,
) -> Result<Option<PathBuf>, CliError> {
    let dump = find_dump(catalog, id)?;
    emit(&dat_artifact(dump, clock, options)?, out)
}

/// Write both artifacts into `out/<system short name>/`.
///
/// A dump with no system is rejected up front, and both artifacts are
/// generated before anything is written.
pub(crate) fn run_export(
    catalog: &Catalog,
    id: &str,
    out: &Path,
    clock: &dyn Clock,
    options: &DatOptions,
) -> Result<Vec<PathBuf>, CliError> {
    let dump = find_dump(catalog, id)?;
    let system = dump
        .system
        .as_ref()
        .ok_or_else(|| ExportError::missing_system(&dump.id))?;
    let cue = cue_artifact(dump)?;
    let dat = dat_artifact(dump, clock, options)?;

    let system_dir = out.join(sanitize_title(&system.short_name));

    let mut written = Vec::with_capacity(2);
    for artifact in [&cue, &dat] {
        if let Some(path) = emit(artifact, Some(&system_dir))? {
            written.push(path);
        }
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../tests/export_tests.rs"]
mod tests;
