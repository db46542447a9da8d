//! Chart configuration from chart properties
//!
//! Configuration is loaded from chart properties (defined in chart.json).
//! All default values come from chart.json - no hardcoded fallbacks in this code.

use crate::chart::{ChartError, LayoutMode, Result};
use crate::properties::{PropertyOverrides, PropertyReader};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Per-year sector records (JSON array)
    pub data_path: PathBuf,

    /// First year kept (the scripts charted `Year >= 1990`)
    pub min_year: i32,

    /// Last year kept, unbounded when None
    pub max_year: Option<i32>,

    /// Sector columns, bottom of the stack first
    pub sectors: Vec<String>,

    /// Initial layout
    pub layout_mode: LayoutMode,

    /// Bumps demo: number of series
    pub bumps_categories: usize,

    /// Bumps demo: periods per series
    pub bumps_periods: usize,

    /// Bumps demo: RNG seed
    pub bumps_seed: u64,
}

impl ChartConfig {
    /// Create config from chart properties
    ///
    /// Invalid values fall back to chart.json defaults; combinations that
    /// leave nothing to chart are rejected.
    pub fn from_properties(overrides: Option<&PropertyOverrides>) -> Result<Self> {
        let props = PropertyReader::new(overrides);

        let data_path = PathBuf::from(props.get_string("data.path"));

        let min_year = props.get_parsed::<i32>("data.year.min").unwrap_or(i32::MIN);
        let max_year = props.get_parsed::<i32>("data.year.max");
        if let Some(max_year) = max_year {
            if max_year < min_year {
                return Err(ChartError::Config(format!(
                    "data.year.max ({}) is before data.year.min ({})",
                    max_year, min_year
                )));
            }
        }

        let sectors = props.get_list("data.sectors");
        if sectors.is_empty() {
            return Err(ChartError::Config("data.sectors is empty".to_string()));
        }

        // Validated against chart.json values by get_enum
        let layout_mode =
            LayoutMode::parse(&props.get_enum("layout.mode")).unwrap_or(LayoutMode::Stacked);

        let bumps_categories = props.get_parsed::<usize>("bumps.categories").unwrap_or(0);
        let bumps_periods = props.get_parsed::<usize>("bumps.periods").unwrap_or(0);
        let bumps_seed = props.get_parsed::<u64>("bumps.seed").unwrap_or(0);

        let config = Self {
            data_path,
            min_year,
            max_year,
            sectors,
            layout_mode,
            bumps_categories,
            bumps_periods,
            bumps_seed,
        };
        tracing::debug!(?config, "chart configuration loaded");
        Ok(config)
    }

    /// Defaults only
    pub fn defaults() -> Result<Self> {
        Self::from_properties(None)
    }
}
