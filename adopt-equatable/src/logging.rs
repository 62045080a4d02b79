//! Diagnostic logging setup.
//!
//! Generated source owns standard output, so log records go to standard
//! error. `RUST_LOG` selects the filter; the default only reports warnings.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber.
///
/// Repeated calls are harmless; only the first subscriber is kept.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already initialized");
    }
}
