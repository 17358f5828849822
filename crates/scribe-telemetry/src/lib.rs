//! Logging for scribe
//!
//! Structured logs via the `tracing` ecosystem. `RUST_LOG` overrides the
//! default filter when set.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber
///
/// `default_filter` applies when `RUST_LOG` is not set.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
