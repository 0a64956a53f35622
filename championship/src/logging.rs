//! Diagnostic tracing for the championship binary.
//!
//! Season loading, driver registration, car changes and recorded races emit
//! `debug!`/`info!` events. They are written to stderr so that anything piped
//! from stdout (the text report, `--json`) stays clean.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber; call once at the top of `main`.
///
/// Verbosity comes from `RUST_LOG` and falls back to `warn`, which keeps a
/// normal run silent. To watch a season being played:
///
/// ```bash
/// RUST_LOG=championship=debug championship report --season season.toml
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
