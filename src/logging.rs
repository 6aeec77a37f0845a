// src/logging.rs
//! Diagnostic logging setup.
//!
//! Library code only emits `tracing` events; the binary installs a
//! subscriber once at startup. Diagnostics go to stderr so stdout stays
//! clean for reports and `--json` output. `RUST_LOG` overrides the level
//! picked from `--verbose`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Repeated calls are no-ops.
pub fn init(verbose: bool) {
    let fallback = if verbose { "beatpath_core=debug,beatpath=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
