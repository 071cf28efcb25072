use thiserror::Error;

use discdump_catalog::CatalogError;
use discdump_export::ExportError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// No dump with the requested id
    #[error("Dump not found: {0}")]
    NotFound(String),

    /// Generating an artifact failed
    #[error("Export error: {0}")]
    Export(String),

    /// Settings file error
    #[error("Config error: {0}")]
    Config(String),

    /// A command-line value was out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e.to_string())
    }
}

impl From<ExportError> for CliError {
    fn from(e: ExportError) -> Self {
        Self::Export(e.to_string())
    }
}
