//! Logging bootstrap built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,toastkit=debug,toastkit_core=debug";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber.
///
/// Panics if a global subscriber was already installed; use [`try_init`] from tests.
pub fn init() {
    tracing_subscriber::fmt().with_env_filter(filter()).init();
}

/// Install the global fmt subscriber unless one is already set.
///
/// Returns `true` if this call installed it.
pub fn try_init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_test_writer()
        .try_init()
        .is_ok()
}
