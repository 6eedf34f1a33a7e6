//! Optional file logging
//!
//! The terminal belongs to the UI, so tracing output only goes to a file.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "weather_now=info";

/// Install a `tracing` subscriber that appends to `path`.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| io::Error::other(format!("could not install logger: {e}")))
}
