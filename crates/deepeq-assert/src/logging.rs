//! Logging setup for tests

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "warn";

/// Install a `tracing` subscriber that writes through the test harness
///
/// Honors `RUST_LOG`. Safe to call from every test; only the first call in a
/// process installs anything.
pub fn init_test_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Another test (or the host application) may already own the global subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_test_writer()
        .try_init();
}
