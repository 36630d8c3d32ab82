//! Tracing/logging initialization for the embedding shell.
//!
//! The dispatcher and view models emit structured `tracing` events instead
//! of printing; this wires up a subscriber for shells that want to see
//! them.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
