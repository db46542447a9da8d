//! Stacked and grouped band geometry
//!
//! Turns a validated [`Matrix`] into one band per (category, period). Output
//! is indexed `[category][period]`, so each inner vector is one series that a
//! renderer draws as a group of bars. Category index order is authoritative:
//! it fixes both stacking order (bottom up) and z-order.

use super::matrix::Matrix;
use serde::Serialize;

/// Bar layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Categories sit on top of one another per period
    Stacked,
    /// Categories side by side per period, each from zero
    Grouped,
}

impl LayoutMode {
    /// Parse from property or CLI value
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "stacked" => Some(Self::Stacked),
            "grouped" => Some(Self::Grouped),
            _ => None,
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Self::Stacked => Self::Grouped,
            Self::Grouped => Self::Stacked,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stacked => "stacked",
            Self::Grouped => "grouped",
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical interval of one bar segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub low: f64,
    pub high: f64,
    pub category: usize,
}

impl Band {
    pub fn new(low: f64, high: f64, category: usize) -> Self {
        Self {
            low,
            high,
            category,
        }
    }

    /// Segment height (`high - low`)
    pub fn height(&self) -> f64 {
        self.high - self.low
    }
}

/// Bands of one layout mode, ready for a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandSet {
    pub mode: LayoutMode,
    pub n_categories: usize,
    pub n_periods: usize,
    /// Upper bound of the vertical scale for this mode
    pub y_max: f64,
    /// `bands[category][period]`
    pub bands: Vec<Vec<Band>>,
}

impl BandSet {
    /// Bands of every category at one period, bottom first
    ///
    /// Returns None when `period` is out of range.
    pub fn period(&self, period: usize) -> Option<Vec<Band>> {
        self.bands
            .iter()
            .map(|series| series.get(period).copied())
            .collect()
    }
}

/// Cumulative bands: each category starts where the one below it ends
pub fn compute_stacked_bands(matrix: &Matrix) -> Vec<Vec<Band>> {
    let n = matrix.n_categories();
    let m = matrix.n_periods();

    let mut bands: Vec<Vec<Band>> = (0..n).map(|_| Vec::with_capacity(m)).collect();
    for p in 0..m {
        let mut low = 0.0;
        for (k, series) in bands.iter_mut().enumerate() {
            let high = low + matrix.value(k, p);
            series.push(Band::new(low, high, k));
            low = high;
        }
    }
    bands
}

/// Independent zero-based bands, one slot per category within a period
pub fn compute_grouped_bands(matrix: &Matrix) -> Vec<Vec<Band>> {
    matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(k, row)| row.iter().map(|&value| Band::new(0.0, value, k)).collect())
        .collect()
}

/// Top of the tallest stack
pub fn stacked_max(matrix: &Matrix) -> f64 {
    (0..matrix.n_periods())
        .map(|p| {
            (0..matrix.n_categories())
                .map(|k| matrix.value(k, p))
                .sum::<f64>()
        })
        .fold(0.0, f64::max)
}

/// Tallest single category value
pub fn grouped_max(matrix: &Matrix) -> f64 {
    matrix
        .rows()
        .iter()
        .flat_map(|row| row.iter().copied())
        .fold(0.0, f64::max)
}

/// Fractional horizontal slot `(start, end)` of category `k` out of `n`
///
/// Multiply by the period's band width to get pixel offsets; slot width is
/// `period_width / n`.
pub fn grouped_slot(category: usize, n_categories: usize) -> (f64, f64) {
    let n = n_categories.max(1) as f64;
    (category as f64 / n, (category + 1) as f64 / n)
}

/// Compute the bands of `mode` together with its scale bound
pub fn compute_bands(matrix: &Matrix, mode: LayoutMode) -> BandSet {
    let (bands, y_max) = match mode {
        LayoutMode::Stacked => (compute_stacked_bands(matrix), stacked_max(matrix)),
        LayoutMode::Grouped => (compute_grouped_bands(matrix), grouped_max(matrix)),
    };

    tracing::debug!(
        mode = %mode,
        n_categories = matrix.n_categories(),
        n_periods = matrix.n_periods(),
        y_max,
        "computed bands"
    );

    BandSet {
        mode,
        n_categories: matrix.n_categories(),
        n_periods: matrix.n_periods(),
        y_max,
        bands,
    }
}
