use std::io::Write;

use log::{Level, LevelFilter};

/// Initialise the global logger.
///
/// Normal runs print bare `info` lines (they are the command's output) and
/// prefix warnings/errors with their level. `--verbose` switches to
/// timestamped debug output; `RUST_LOG` overrides both.
pub(crate) fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_env("RUST_LOG");

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.as_str().to_lowercase(),
                record.args()
            ),
        });
    }

    // A logger may already be installed (tests)
    let _ = builder.try_init();
}
