//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "discdump")]
#[command(about = "Export catalogued disc dumps as CUE sheets and DAT files", long_about = None)]
pub(crate) struct Cli {
    /// Catalog directory containing systems/ and dumps/ (defaults to saved setting, then ./catalog)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a CUE sheet for a dump
    Cue {
        /// Dump id
        id: String,

        /// Write into this directory instead of printing to stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Generate a DAT descriptor for a dump
    Dat {
        /// Dump id
        id: String,

        /// Write into this directory instead of printing to stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Version date to stamp into the header (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Write both the CUE sheet and DAT into <out>/<system>/
    Export {
        /// Dump id
        id: String,

        /// Output root directory
        #[arg(short, long)]
        out: PathBuf,

        /// Version date to stamp into the DAT header (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List dumps in the catalog
    List {
        /// Only show dumps for this system id
        #[arg(short, long)]
        system: Option<String>,
    },

    /// Print the track type, region and status tables
    Tables,

    /// Hash track images and print them as YAML track records
    Hash {
        /// Track image files, in track order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Track type code applied to every file (see `tables`)
        #[arg(short = 't', long = "type", default_value_t = 1)]
        track_type: u8,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings
    Show,

    /// Print the settings file path
    Path,

    /// Save the default catalog directory
    SetCatalog {
        /// Catalog directory
        dir: PathBuf,
    },

    /// Remove the saved catalog directory
    ClearCatalog,
}
