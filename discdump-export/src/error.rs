use discdump_core::ModelError;

/// Errors that can occur while exporting a dump.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Invalid dump: {0}")]
    Model(#[from] ModelError),

    #[error("Dump '{dump_id}' has no system attached")]
    MissingSystem { dump_id: String },

    #[error("XML write error: {0}")]
    Xml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub fn missing_system(dump_id: impl Into<String>) -> Self {
        Self::MissingSystem {
            dump_id: dump_id.into(),
        }
    }

    pub fn xml(msg: impl Into<String>) -> Self {
        Self::Xml(msg.into())
    }
}
