use std::io;

use tracing_subscriber::EnvFilter;

use crate::Result;

/// Send `tracing` events to stderr, keeping stdout for reports.
///
/// `RUST_LOG` takes precedence. Otherwise only warnings are shown, or
/// everything from debug up when `verbose` is set.
pub(crate) fn init(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok(())
}
