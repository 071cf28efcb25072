//! Filesystem-safe names for exported artifacts.

use discdump_core::{Dump, Track};

/// Whitespace kept in titles: Unicode `Zs`, the ASCII controls `\t \n \v \f \r`,
/// the line and paragraph separators, and the BOM. Unlike
/// [`char::is_whitespace`], this includes U+FEFF and excludes U+0085.
fn is_title_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip a title down to ASCII letters, digits, `_`, `-` and whitespace,
/// then trim surrounding whitespace.
///
/// - `"Foo: Bar!"` → `"Foo Bar"`
/// - `"Pokémon"` → `"Pokmon"`
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || is_title_space(c))
        .collect::<String>()
        .trim_matches(is_title_space)
        .to_string()
}

/// The shared stem: sanitized title, region, `Disc N` and label joined with
/// `" - "`, skipping anything absent or empty.
fn base_name(dump: &Dump) -> String {
    let disc = dump
        .disc_number
        .filter(|&n| n > 0)
        .map(|n| format!("Disc {n}"));

    let parts = [
        Some(sanitize_title(&dump.title)),
        Some(dump.region.clone()),
        disc,
        dump.label.clone(),
    ];

    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
}

/// Filename for a dump's CUE sheet, or for one of its track images.
///
/// - no track: `"Foo Bar - USA - Disc 2 - Greatest Hits.cue"`
/// - track 1: `"Foo Bar - USA - Disc 2 - Greatest Hits (Track 01).bin"`
pub fn generate_filename(dump: &Dump, track: Option<&Track>) -> String {
    let base = base_name(dump);
    match track {
        Some(track) => format!("{base} (Track {:02}).bin", track.number),
        None => format!("{base}.cue"),
    }
}

/// Filename for a dump-level artifact with an arbitrary extension (e.g. `"dat"`).
pub fn generate_filename_with_ext(dump: &Dump, ext: &str) -> String {
    format!("{}.{ext}", base_name(dump))
}

#[cfg(test)]
#[path = "tests/filename_tests.rs"]
mod tests;
