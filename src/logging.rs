//! Tracing setup for the `shell-sort` binary.
//!
//! Log output goes to stderr so it never mixes with the sorted values on
//! stdout. The level defaults to `warn`, can be overridden with `RUST_LOG`,
//! and `--verbose` forces `debug`.

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `--verbose` is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Build the filter for the given verbosity.
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber. Calling this twice is harmless; the second
/// call is ignored.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .try_init();
}
