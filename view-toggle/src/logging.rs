//! Diagnostic tracing for view-toggle.
//!
//! The per-page progress report goes to stdout and is always printed.
//! Tracing output is separate: it goes to stderr and is controlled by
//! `RUST_LOG`. Degraded steps are logged at `warn`, so they show up by default.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=view_toggle=debug view-toggle apply
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
