//! YAML loading for the curated catalog directory.

use std::path::{Path, PathBuf};

use discdump_core::{ModelError, System};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::record::DumpRecord;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
    #[error("Invalid dump in {path}: {source}")]
    InvalidDump { path: String, source: ModelError },
}

/// Load all system definitions from YAML files in a directory.
///
/// Each `.yaml` file should contain a single `System`.
pub fn load_systems(dir: &Path) -> Result<Vec<System>, CatalogError> {
    Ok(load_yaml_dir(dir)?
        .into_iter()
        .map(|(_, system)| system)
        .collect())
}

/// Load all dump records from YAML files in a directory, paired with the
/// file each came from.
pub fn load_dump_records(dir: &Path) -> Result<Vec<(PathBuf, DumpRecord)>, CatalogError> {
    load_yaml_dir(dir)
}

/// Load a whole catalog and resolve each dump's system reference.
///
/// Expected structure:
/// ```text
/// catalog_dir/
///   systems/
///     ps1.yaml
///     dc.yaml
///   dumps/
///     ff7-disc1.yaml
///     ...
/// ```
///
/// A dump naming an unknown system is kept with no system attached (it can
/// still be exported as a CUE sheet, but not as a DAT).
pub fn load_catalog(catalog_dir: &Path) -> Result<Catalog, CatalogError> {
    if !catalog_dir.is_dir() {
        return Err(CatalogError::DirNotFound(catalog_dir.display().to_string()));
    }

    let systems = load_systems(&catalog_dir.join("systems"))?;
    let records = load_dump_records(&catalog_dir.join("dumps"))?;

    let mut dumps = Vec::with_capacity(records.len());
    for (path, record) in records {
        let system = systems.iter().find(|s| s.id == record.system).cloned();
        if system.is_none() {
            log::warn!(
                "Dump '{}' refers to unknown system '{}'",
                record.id,
                record.system
            );
        }
        let dump = record
            .into_dump(system)
            .map_err(|source| CatalogError::InvalidDump {
                path: path.display().to_string(),
                source,
            })?;
        dumps.push(dump);
    }

    log::debug!(
        "Loaded {} systems and {} dumps from {}",
        systems.len(),
        dumps.len(),
        catalog_dir.display()
    );
    Ok(Catalog { systems, dumps })
}

/// Generic helper: load all YAML files in a directory, each containing a single `T`.
///
/// A missing directory yields an empty list. Files are read in name order.
fn load_yaml_dir<T: serde::de::DeserializeOwned>(
    dir: &Path,
) -> Result<Vec<(PathBuf, T)>, CatalogError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(CatalogError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| CatalogError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = entry.path();
        let contents = std::fs::read_to_string(&path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let item: T = serde_yml::from_str(&contents).map_err(|e| CatalogError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        items.push((path, item));
    }

    Ok(items)
}
