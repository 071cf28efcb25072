//! Logiqx ROM Management Datafile output.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use discdump_core::{ChecksumAlgorithm, Dump};

use crate::clock::Clock;
use crate::error::ExportError;
use crate::filename::generate_filename;

const DOCTYPE: &str = r#"datafile PUBLIC "-//Logiqx//DTD ROM Management Datafile//EN" "http://www.logiqx.com/Dats/datafile.dtd""#;

/// Header fields that identify who published the DAT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatOptions {
    pub author: String,
    pub homepage: String,
}

impl Default for DatOptions {
    fn default() -> Self {
        Self {
            author: "Redump".to_string(),
            homepage: "http://redump.org/".to_string(),
        }
    }
}

/// Generate a DAT descriptor for a dump.
///
/// The document has a single `<game>` holding a single `<rom>`: its size is
/// the sum of every track, while the `crc32`/`md5`/`sha1` attributes come
/// from the lowest-numbered track only (empty when that track has none).
/// The header `<version>` is the clock's current date, `YYYY-MM-DD`.
///
/// Text and attribute values are XML-escaped.
pub fn generate_dat(
    dump: &Dump,
    clock: &dyn Clock,
    options: &DatOptions,
) -> Result<String, ExportError> {
    Dump::validate_tracks(dump.tracks())?;
    let system = dump
        .system
        .as_ref()
        .ok_or_else(|| ExportError::missing_system(&dump.id))?;

    let version = clock.today().format("%Y-%m-%d").to_string();
    let description = format!("{} - Disc Images", system.name);
    let rom_name = generate_filename(dump, None);
    let size = dump.total_size().to_string();
    let first = dump.first_track();
    let checksum = |algorithm: ChecksumAlgorithm| first.and_then(|t| t.checksum(algorithm)).unwrap_or("");

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))?;
    writer
        .create_element("datafile")
        .write_inner_content(|w| -> std::io::Result<()> {
            w.create_element("header")
                .write_inner_content(|w| -> std::io::Result<()> {
                    w.create_element("name")
                        .write_text_content(BytesText::new(&system.name))?;
                    w.create_element("description")
                        .write_text_content(BytesText::new(&description))?;
                    w.create_element("version")
                        .write_text_content(BytesText::new(&version))?;
                    w.create_element("author")
                        .write_text_content(BytesText::new(&options.author))?;
                    w.create_element("homepage")
                        .write_text_content(BytesText::new(&options.homepage))?;
                    Ok(())
                })?;
            w.create_element("game")
                .with_attribute(("name", dump.title.as_str()))
                .write_inner_content(|w| -> std::io::Result<()> {
                    w.create_element("description")
                        .write_text_content(BytesText::new(&dump.title))?;
                    w.create_element("rom")
                        .with_attribute(("name", rom_name.as_str()))
                        .with_attribute(("size", size.as_str()))
                        .with_attribute(("crc32", checksum(ChecksumAlgorithm::Crc32)))
                        .with_attribute(("md5", checksum(ChecksumAlgorithm::Md5)))
                        .with_attribute(("sha1", checksum(ChecksumAlgorithm::Sha1)))
                        .write_empty()?;
                    Ok(())
                })?;
            Ok(())
        })?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    let dat = String::from_utf8(bytes).map_err(|e| ExportError::xml(e.to_string()))?;

    log::debug!(
        "Generated DAT for '{}' (system {}, version {})",
        dump.id,
        system.short_name,
        version
    );
    Ok(dat)
}

#[cfg(test)]
#[path = "tests/dat_tests.rs"]
mod tests;
