//! Logging setup shared by both binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `fallback` (normally
/// `logging.filter` from settings) is used. Output goes to stderr so the
/// RPC binary keeps stdout for protocol traffic. Calling this twice is a
/// no-op.
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
