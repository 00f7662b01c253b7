//! Diagnostic logging setup.
//!
//! Library code emits `tracing` events; the binary installs a subscriber once.
//! Logs go to stderr so dashboard output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `RUST_LOG` wins, then `--verbose`, then the
/// configured level.
pub fn filter_directive(env: Option<&str>, verbose: bool, configured: &str) -> String {
    match env {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if verbose => "debug".to_string(),
        _ => configured.to_string(),
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbose: bool, configured: &str) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(env.as_deref(), verbose, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
