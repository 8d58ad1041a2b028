//! Tracing subscriber set-up.
//!
//! Output goes to stderr only; stdout is left to the host transport.

use tracing_subscriber::EnvFilter;

/// Default filter directive when neither `RUST_LOG` nor settings name one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Returns whether this call
/// installed the subscriber; later calls leave the first one in place and
/// return `false`.
#[must_use = "returns false when a subscriber was already installed"]
pub fn init_subscriber(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .is_ok()
}
