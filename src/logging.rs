//! Logging infrastructure for viewstats
//!
//! The engine itself only emits `tracing` events (debug traces when bad
//! input is tolerated); where they go is the host's decision. These
//! helpers install a sensible subscriber for hosts and tests that do not
//! bring their own.

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Intended for host binaries without their own tracing setup. Does
/// nothing if a global subscriber is already installed.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialize logging for tests (captured by the test harness).
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}
