//! Logging setup for the binaries
//!
//! Events go to stderr so stdout stays clean JSON. Filter with `RUST_LOG`
//! (e.g. `RUST_LOG=band_stacker=debug`); defaults to `info`.

use std::time::Instant;
use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log a pipeline phase with time elapsed since `start`
pub fn log_phase(start: Instant, phase: &str) {
    tracing::info!(elapsed_s = start.elapsed().as_secs_f64(), "{}", phase);
}
