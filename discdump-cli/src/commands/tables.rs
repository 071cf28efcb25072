use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use discdump_core::{DumpStatus, Region, TrackType};

pub(crate) fn run_tables() {
    log::info!("{}", "Track types:".if_supports_color(Stderr, |t| t.bold()));
    for track_type in TrackType::all() {
        log::info!("  {:>2}  {}", track_type.code(), track_type.label());
    }

    log::info!("");
    log::info!("{}", "Regions:".if_supports_color(Stderr, |t| t.bold()));
    for region in Region::all() {
        log::info!("  {:<2}  {}", region.code(), region.name());
    }

    log::info!("");
    log::info!("{}", "Dump statuses:".if_supports_color(Stderr, |t| t.bold()));
    for status in DumpStatus::all() {
        log::info!("  {:>2}  {}", status.code(), status.label());
    }
}
