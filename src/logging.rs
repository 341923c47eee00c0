//! Logging initialization.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the embedding application's call. `init_logging` is a convenience
//! for front-ends and examples that just want env-filtered stderr output.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber. Idempotent - later calls are
/// no-ops, so tests and embedders can call it freely.
///
/// Respects `RUST_LOG`; defaults to `info` when unset.
pub fn init_logging() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
