//! Tracing/logging setup shared by embedding applications and tests.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing.
///
/// Safe to call multiple times; subsequent calls become no-ops. Filtering is
/// configurable via `RUST_LOG`, defaulting to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
