// ABOUTME: Tracing subscriber setup for binaries and tests
// ABOUTME: Env-filtered structured logging; fallback decisions surface at warn level
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging initialization.
//!
//! Library code only emits `tracing` events; this helper wires up a
//! subscriber for consumers that do not bring their own. The `RUST_LOG`
//! environment variable controls the filter, defaulting to `info`. Fallback
//! selections (why a request was served from samples) appear at `warn`, the
//! redacted credential check at `debug`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global env-filtered fmt subscriber.
///
/// Safe to call more than once; later calls are no-ops if a global
/// subscriber is already set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}
