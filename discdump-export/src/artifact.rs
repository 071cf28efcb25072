//! Downloadable export artifacts: body, filename and content headers.

use std::path::{Path, PathBuf};

use discdump_core::Dump;

use crate::clock::Clock;
use crate::cue::generate_cue;
use crate::dat::{DatOptions, generate_dat};
use crate::error::ExportError;
use crate::filename::{generate_filename, generate_filename_with_ext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Cue,
    Dat,
}

impl ArtifactKind {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Cue => "text/plain",
            Self::Dat => "application/xml",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Cue => "cue",
            Self::Dat => "dat",
        }
    }
}

/// A generated file ready to be served or saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub kind: ArtifactKind,
    /// Sanitized filename, also used in the `Content-Disposition` header
    pub filename: String,
    pub body: String,
}

impl ExportArtifact {
    pub fn content_type(&self) -> &'static str {
        self.kind.content_type()
    }

    /// `Content-Disposition` header value for an attachment download.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }

    /// Write the body to `dir/filename`, creating `dir` if needed.
    ///
    /// The file is written to a temporary name first and renamed into place.
    /// On failure the temporary file is removed.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        let tmp = dir.join(format!("{}.tmp", self.filename));
        let written =
            std::fs::write(&tmp, &self.body).and_then(|()| std::fs::rename(&tmp, &path));
        if let Err(e) = written {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        log::debug!("Wrote {} ({} bytes)", path.display(), self.body.len());
        Ok(path)
    }
}

/// CUE sheet artifact, named by [`generate_filename`].
pub fn cue_artifact(dump: &Dump) -> Result<ExportArtifact, ExportError> {
    Ok(ExportArtifact {
        kind: ArtifactKind::Cue,
        filename: generate_filename(dump, None),
        body: generate_cue(dump)?,
    })
}

/// DAT artifact, named like the CUE sheet but with a `.dat` extension.
pub fn dat_artifact(
    dump: &Dump,
    clock: &dyn Clock,
    options: &DatOptions,
) -> Result<ExportArtifact, ExportError> {
    Ok(ExportArtifact {
        kind: ArtifactKind::Dat,
        filename: generate_filename_with_ext(dump, ArtifactKind::Dat.extension()),
        body: generate_dat(dump, clock, options)?,
    })
}

#[cfg(test)]
#[path = "tests/artifact_tests.rs"]
mod tests;
