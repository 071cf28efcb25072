//! Curated dump catalog loaded from YAML.
//!
//! Systems and dump records live as one YAML file each under a catalog
//! directory. Loading resolves each dump's system reference and checks its
//! track list, producing ready-to-export [`Dump`](discdump_core::Dump)s.

pub mod catalog;
pub mod record;
pub mod yaml;

pub use catalog::Catalog;
pub use record::DumpRecord;
pub use yaml::{CatalogError, load_catalog, load_dump_records, load_systems};
