//! Shared chart pipeline
//!
//! Used by both entry points (`band_stacker` and `bumps`):
//! 1. Build a matrix from the configured source
//! 2. Load it into a `BandLayout` and select the layout mode
//! 3. Package the active bands with display labels for output

use crate::chart::{
    bumps, compute_stacked_bands, BandLayout, BandSet, ChartError, LayoutMode, Matrix, Result,
    SectorDataset,
};
use crate::config::ChartConfig;
use serde::Serialize;

/// Band geometry plus the labels a renderer needs to draw axes and legends
#[derive(Debug, Clone, Serialize)]
pub struct ChartOutput {
    pub period_labels: Vec<String>,
    pub category_names: Vec<String>,
    #[serde(flatten)]
    pub band_set: BandSet,
}

impl ChartOutput {
    pub fn new(matrix: &Matrix, band_set: BandSet) -> Self {
        Self {
            period_labels: matrix.period_labels().to_vec(),
            category_names: matrix.category_names().to_vec(),
            band_set,
        }
    }

    /// Output for the layout's active bands
    pub fn from_layout(layout: &BandLayout) -> Result<Self> {
        match (layout.matrix(), layout.active()) {
            (Some(matrix), Some(band_set)) => Ok(Self::new(matrix, band_set.clone())),
            _ => Err(ChartError::InvalidState(
                "no layout mode selected".to_string(),
            )),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load the sector dataset, restrict it to the configured years and sectors
pub fn load_sector_matrix(config: &ChartConfig) -> Result<Matrix> {
    let dataset = SectorDataset::from_path(&config.data_path)?
        .filter_years(config.min_year, config.max_year);

    let years = dataset.years();
    if let (Some(first), Some(last)) = (years.first(), years.last()) {
        tracing::info!(first, last, periods = dataset.len(), "charting years");
    }

    dataset.to_matrix(&config.sectors)
}

/// Seeded synthetic matrix for the bumps demo
pub fn load_bumps_matrix(config: &ChartConfig) -> Result<Matrix> {
    bumps::bumps_matrix(
        config.bumps_categories,
        config.bumps_periods,
        config.bumps_seed,
    )
}

/// Lay out `matrix` in `mode`
pub fn layout_chart(matrix: Matrix, mode: LayoutMode) -> Result<ChartOutput> {
    let mut layout = BandLayout::with_matrix(matrix);
    layout.set_mode(mode)?;
    ChartOutput::from_layout(&layout)
}

/// Result of the bumps demo's Stacked → Grouped → Stacked run
#[derive(Debug, Clone)]
pub struct BumpsReport {
    pub n_categories: usize,
    pub n_periods: usize,
    pub seed: u64,
    pub stacked_max: f64,
    pub grouped_max: f64,
    /// Whether the final stacked bands equal a direct stacked computation
    pub round_trip_matches: bool,
    /// Active (stacked) bands after the round trip
    pub output: ChartOutput,
}

/// Generate the configured bump series and toggle through both layouts
pub fn run_bumps_demo(config: &ChartConfig) -> Result<BumpsReport> {
    let matrix = load_bumps_matrix(config)?;
    let direct = compute_stacked_bands(&matrix);
    let (n_categories, n_periods) = (matrix.n_categories(), matrix.n_periods());

    let mut layout = BandLayout::with_matrix(matrix);
    let stacked_max = layout.set_mode(LayoutMode::Stacked)?.y_max;
    let grouped_max = layout.toggle()?.y_max;
    let round_trip_matches = layout.toggle()?.bands == direct;

    Ok(BumpsReport {
        n_categories,
        n_periods,
        seed: config.bumps_seed,
        stacked_max,
        grouped_max,
        round_trip_matches,
        output: ChartOutput::from_layout(&layout)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PropertyOverrides;

    #[test]
    fn test_layout_chart_output() {
        let matrix = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
            .unwrap()
            .with_period_labels(["2001", "2002"])
            .unwrap()
            .with_category_names(["Buildings", "Industry"])
            .unwrap();

        let output = layout_chart(matrix, LayoutMode::Stacked).unwrap();
        assert_eq!(output.period_labels, vec!["2001", "2002"]);
        assert_eq!(output.category_names, vec!["Buildings", "Industry"]);
        assert_eq!(output.band_set.y_max, 6.0);

        let json: serde_json::Value = serde_json::from_str(&output.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["mode"], "stacked");
        assert_eq!(json["n_categories"], 2);
        assert_eq!(json["bands"][1][1]["low"], 2.0);
        assert_eq!(json["bands"][1][1]["high"], 6.0);
        assert_eq!(json["period_labels"][0], "2001");
    }

    #[test]
    fn test_load_bumps_matrix_uses_config() {
        let mut overrides = PropertyOverrides::default();
        overrides.set("bumps.categories", "3");
        overrides.set("bumps.periods", "12");
        let config = ChartConfig::from_properties(Some(&overrides)).unwrap();

        let matrix = load_bumps_matrix(&config).unwrap();
        assert_eq!(matrix.n_categories(), 3);
        assert_eq!(matrix.n_periods(), 12);
    }

    #[test]
    fn test_from_layout_requires_mode() {
        let layout = BandLayout::with_matrix(Matrix::new(vec![vec![1.0]]).unwrap());
        assert!(matches!(
            ChartOutput::from_layout(&layout),
            Err(ChartError::InvalidState(_))
        ));
    }

    #[test]
    fn test_run_bumps_demo() {
        let mut overrides = PropertyOverrides::default();
        overrides.set("bumps.categories", "2");
        overrides.set("bumps.periods", "3");
        let config = ChartConfig::from_properties(Some(&overrides)).unwrap();

        let report = run_bumps_demo(&config).unwrap();
        assert!(report.round_trip_matches);
        assert_eq!((report.n_categories, report.n_periods), (2, 3));
        assert_eq!(report.seed, 42);
        assert!(report.stacked_max >= report.grouped_max);
        assert_eq!(report.output.band_set.mode, LayoutMode::Stacked);
        assert_eq!(report.output.band_set.y_max, report.stacked_max);
        assert_eq!(report.output.period_labels, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_load_sector_matrix_missing_file() {
        let mut overrides = PropertyOverrides::default();
        overrides.set("data.path", "/nonexistent/BySector.json");
        let config = ChartConfig::from_properties(Some(&overrides)).unwrap();
        assert!(load_sector_matrix(&config).is_err());
    }
}
