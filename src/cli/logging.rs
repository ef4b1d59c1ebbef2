//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Pick the log filter: `RUST_LOG` wins, then `--verbose`, then the
/// configured level.
pub fn build_filter(rust_log: Option<&str>, verbose: bool, configured: &str) -> EnvFilter {
    if let Some(directives) = rust_log.filter(|s| !s.is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return filter;
        }
    }

    let level = if verbose { "debug" } else { configured };
    EnvFilter::new(level)
}

/// Install the global subscriber. Logs go to stderr so stdout stays free
/// for URLs and device messages.
pub fn init_logging(verbose: bool, configured: &str) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), verbose, configured);

    // A subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
