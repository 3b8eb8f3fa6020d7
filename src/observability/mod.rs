//! Logging and terminal setup shared by every command.
//!
//! Diagnostics go to stderr through `tracing`, so report output on stdout
//! stays machine-readable. `RUST_LOG` overrides the level picked from the
//! `-v` count.

use tracing_subscriber::EnvFilter;

/// Log level for a `-v` count: warn, info, debug, then trace
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_tracing(verbosity: u8) {
    let default_level = level_for_verbosity(verbosity);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Turn ANSI colors off for `--plain` or when `NO_COLOR` is set
pub fn configure_colors(plain: bool) {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    if plain || no_color {
        colored::control::set_override(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing(0);
        init_tracing(3);
    }
}
