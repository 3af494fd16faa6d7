//! Diagnostic logging setup.
//!
//! Diagnostics go to standard error through `tracing`. The default level is
//! `warn`; nothing in a normal or fatal run is logged at that level, so
//! standard error carries only the fatal message unless verbosity is raised.
//! Output is plain text so it can share stderr with those messages.

use tracing_subscriber::EnvFilter;

/// Maps a `--verbose` count to a default filter directive.
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Builds the filter from an explicit directive, falling back to the
/// verbosity level when the directive is absent or does not parse.
#[must_use]
pub fn build_filter(directive: Option<&str>, verbose: u8) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(level_for_verbosity(verbose)))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(directive: Option<&str>, verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive, verbose))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}
