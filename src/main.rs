//! Band Stacker - Main entry point
//!
//! Loads per-year sector records, keeps the configured year range and
//! sectors, lays them out as stacked or grouped bands and writes the band
//! geometry as JSON for a renderer.
//!
//! Usage:
//! ```bash
//! band_stacker --data BySector.json --mode grouped --output bands.json
//! RUST_LOG=debug band_stacker --config chart_config.json
//! ```

use anyhow::Context;
use band_stacker::cli::CliArgs;
use band_stacker::config::ChartConfig;
use band_stacker::logging::{self, log_phase};
use band_stacker::pipeline;
use band_stacker::properties::PropertyOverrides;
use clap::Parser;
use std::time::Instant;

fn main() {
    logging::init();
    let args = CliArgs::parse();

    if let Err(e) = run(&args) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    let start = Instant::now();
    log_phase(start, "START: band layout");

    let mut overrides = match &args.config {
        Some(path) => PropertyOverrides::from_path(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => PropertyOverrides::default(),
    };
    args.apply_overrides(&mut overrides);

    let config = ChartConfig::from_properties(Some(&overrides))?;
    tracing::info!(
        data = %config.data_path.display(),
        mode = %config.layout_mode,
        sectors = config.sectors.len(),
        "configuration loaded"
    );

    log_phase(start, "PHASE 1: Loading dataset");
    let matrix = pipeline::load_sector_matrix(&config)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;

    log_phase(start, "PHASE 2: Computing bands");
    let output = pipeline::layout_chart(matrix, config.layout_mode)?;
    tracing::info!(
        categories = output.band_set.n_categories,
        periods = output.band_set.n_periods,
        y_max = output.band_set.y_max,
        "bands ready"
    );

    log_phase(start, "PHASE 3: Writing output");
    let json = output.to_json_pretty()?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "bands written");
        }
        None => println!("{}", json),
    }

    log_phase(start, "COMPLETE");
    Ok(())
}
