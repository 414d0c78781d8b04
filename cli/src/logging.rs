//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Fallback filter when the configured one does not parse.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Logs go to stderr so `--json` output on
/// stdout stays machine-readable.
///
/// A filter that does not parse falls back to [`DEFAULT_FILTER`] and leaves
/// a one-line warning naming the rejected value.
pub fn init(filter: &str) {
    let (env_filter, rejected) = match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
    if let Some(err) = rejected {
        tracing::warn!(
            filter,
            error = %err,
            "invalid RUNNERCTL_LOG filter, using {DEFAULT_FILTER}"
        );
    }
}
