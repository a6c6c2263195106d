//! Subscriber setup for hosts that do not install their own.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "INVENTORY_LOG";

/// Install a global fmt subscriber writing to stderr.
///
/// The filter comes from `INVENTORY_LOG` when set, otherwise from `default_directive`
/// (for example `"inventory_core=warn"`). Fails if a global subscriber is
/// already installed.
pub fn init(default_directive: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_new(default_directive))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
