//! Application settings (catalog path, DAT header fields).
//!
//! The settings file is `~/.config/discdump/settings.toml`:
//!
//! ```toml
//! [catalog]
//! root = "/srv/discdump/catalog"
//!
//! [dat]
//! author = "Redump"
//! homepage = "http://redump.org/"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use discdump_export::DatOptions;

/// Canonical path to the settings file: `~/.config/discdump/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("discdump").join("settings.toml")
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    catalog: CatalogSection,
    dat: DatSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
    root: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DatSection {
    author: Option<String>,
    homepage: Option<String>,
}

/// Resolved settings, with defaults filled in.
#[derive(Debug, Clone, Default)]
pub(crate) struct Settings {
    pub catalog_root: Option<PathBuf>,
    pub dat: DatOptions,
}

/// Read settings from `path`. A missing or unreadable file yields defaults.
pub(crate) fn load_settings_from(path: &Path) -> Settings {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return Settings::default();
    };
    match parse_settings(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Ignoring malformed {}: {e}", path.display());
            Settings::default()
        }
    }
}

pub(crate) fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

fn parse_settings(contents: &str) -> Result<Settings, toml::de::Error> {
    let file: SettingsFile = toml::from_str(contents)?;
    let defaults = DatOptions::default();
    Ok(Settings {
        catalog_root: file
            .catalog
            .root
            .filter(|r| !r.is_empty())
            .map(PathBuf::from),
        dat: DatOptions {
            author: file.dat.author.unwrap_or(defaults.author),
            homepage: file.dat.homepage.unwrap_or(defaults.homepage),
        },
    })
}

/// Resolve the catalog directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `catalog.root` in `settings.toml`
/// 3. `./catalog`
pub(crate) fn resolve_catalog_path(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = &settings.catalog_root {
        return p.clone();
    }
    PathBuf::from("catalog")
}

/// Save (or clear) the catalog path in the settings file at `settings`.
///
/// Uses `toml::Value` for a surgical update so other sections are preserved.
/// A malformed existing file is an error and is left untouched.
pub(crate) fn save_catalog_path_to(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents.parse::<toml::Value>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("malformed {}: {e}", settings.display()),
            )
        })?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Value::Table(Default::default()),
        Err(e) => return Err(e),
    };

    // Ensure [catalog] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let catalog = table
        .entry("catalog")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let catalog_table = catalog
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[catalog] is not a table"))?;

    match path {
        Some(p) => {
            catalog_table.insert(
                "root".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            catalog_table.remove("root");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

pub(crate) fn save_catalog_path(path: Option<&Path>) -> io::Result<()> {
    save_catalog_path_to(&settings_path(), path)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
