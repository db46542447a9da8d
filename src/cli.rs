use crate::chart::LayoutMode;
use crate::properties::PropertyOverrides;
use clap::Parser;
use std::path::PathBuf;

/// Command line for the `band_stacker` binary
#[derive(Debug, Parser)]
#[command(
    name = "band_stacker",
    version,
    about = "Lay out per-year sector data as stacked or grouped bar bands"
)]
pub struct CliArgs {
    /// JSON file of chart property overrides
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Per-year sector records (overrides data.path)
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Layout to emit (overrides layout.mode)
    #[arg(long, value_enum)]
    pub mode: Option<LayoutMode>,

    /// First year to keep (overrides data.year.min)
    #[arg(long = "min-year", value_name = "YEAR")]
    pub min_year: Option<i32>,

    /// Last year to keep (overrides data.year.max)
    #[arg(long = "max-year", value_name = "YEAR")]
    pub max_year: Option<i32>,

    /// Comma separated sectors (overrides data.sectors)
    #[arg(long)]
    pub sectors: Option<String>,

    /// Write JSON here instead of stdout
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl CliArgs {
    /// Flags take precedence over the override file
    pub fn apply_overrides(&self, overrides: &mut PropertyOverrides) {
        if let Some(data) = &self.data {
            overrides.set("data.path", data.as_str());
        }
        if let Some(mode) = self.mode {
            overrides.set("layout.mode", mode.as_str());
        }
        if let Some(year) = self.min_year {
            overrides.set("data.year.min", year.to_string());
        }
        if let Some(year) = self.max_year {
            overrides.set("data.year.max", year.to_string());
        }
        if let Some(sectors) = &self.sectors {
            overrides.set("data.sectors", sectors.as_str());
        }
    }
}

/// Command line for the `bumps` demo binary
#[derive(Debug, Parser)]
#[command(name = "bumps", version, about = "Stacked/grouped layout of synthetic bump series")]
pub struct BumpsArgs {
    /// Number of series (overrides bumps.categories)
    #[arg(long, short = 'n')]
    pub categories: Option<usize>,

    /// Periods per series (overrides bumps.periods)
    #[arg(long, short = 'm')]
    pub periods: Option<usize>,

    /// RNG seed (overrides bumps.seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the bands of the final layout as JSON
    #[arg(long)]
    pub json: bool,
}

impl BumpsArgs {
    pub fn apply_overrides(&self, overrides: &mut PropertyOverrides) {
        if let Some(n) = self.categories {
            overrides.set("bumps.categories", n.to_string());
        }
        if let Some(m) = self.periods {
            overrides.set("bumps.periods", m.to_string());
        }
        if let Some(seed) = self.seed {
            overrides.set("bumps.seed", seed.to_string());
        }
    }
}
