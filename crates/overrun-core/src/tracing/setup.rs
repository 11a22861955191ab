//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Overrun tracing/logging system.
///
/// Reads the `OVERRUN_LOG` environment variable for log levels, e.g.
/// `OVERRUN_LOG=overrun_sim=debug,overrun_cli=info`.
///
/// Falls back to `overrun=info` if `OVERRUN_LOG` is not set or is invalid.
///
/// Log output goes to stderr so stdout stays reserved for the estimate.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("OVERRUN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("overrun=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();

        tracing::debug!("tracing initialized");
    });
}
