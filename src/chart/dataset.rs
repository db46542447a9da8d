//! Per-year sector records
//!
//! Source data is a JSON array with one object per year:
//! `[{ "Year": 1990, "Buildings": 1234.5, "Industry": 98.7, ... }, ...]`.
//! Records are filtered by year, then the chosen sector columns are
//! transposed into a category-major [`Matrix`] labelled by year.

use super::error::{ChartError, Result};
use super::matrix::Matrix;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Emission sectors in stacking order, bottom first
pub const DEFAULT_SECTORS: [&str; 9] = [
    "Buildings",
    "Industry",
    "Forestry",
    "Combustion",
    "Transport",
    "Manufacturing_Construction",
    "EnergyProduction",
    "Electricity_Heat",
    "BunkerFuels",
];

/// One year of sector values
#[derive(Debug, Clone, Deserialize)]
pub struct SectorRecord {
    #[serde(rename = "Year")]
    pub year: i32,

    /// Sector columns (and anything else the source carries)
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl SectorRecord {
    /// Numeric value of `sector`, rejecting missing or unusable entries
    fn sector_value(&self, sector: &str) -> Result<f64> {
        let value = match self.fields.get(sector) {
            None | Some(serde_json::Value::Null) => {
                return Err(ChartError::InvalidInput(format!(
                    "year {}: missing value for sector '{}'",
                    self.year, sector
                )))
            }
            Some(value) => value,
        };

        let number = value.as_f64().ok_or_else(|| {
            ChartError::InvalidInput(format!(
                "year {}: sector '{}' is not numeric: {}",
                self.year, sector, value
            ))
        })?;

        if number < 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "year {}: sector '{}' is negative: {}",
                self.year, sector, number
            )));
        }
        Ok(number)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectorDataset {
    records: Vec<SectorRecord>,
}

impl SectorDataset {
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<SectorRecord> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            "loaded sector dataset"
        );
        Ok(dataset)
    }

    /// Keep records with `min <= year` (and `year <= max` when given)
    ///
    /// Source order is preserved.
    pub fn filter_years(self, min: i32, max: Option<i32>) -> Self {
        let before = self.records.len();
        let records: Vec<SectorRecord> = self
            .records
            .into_iter()
            .filter(|r| r.year >= min && max.map_or(true, |max| r.year <= max))
            .collect();

        tracing::debug!(
            min,
            ?max,
            kept = records.len(),
            dropped = before - records.len(),
            "filtered years"
        );
        Self { records }
    }

    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    pub fn records(&self) -> &[SectorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One row per sector, one column per record, labelled by year
    pub fn to_matrix<S: AsRef<str>>(&self, sectors: &[S]) -> Result<Matrix> {
        if sectors.is_empty() {
            return Err(ChartError::InvalidInput("no sectors selected".to_string()));
        }
        if self.records.is_empty() {
            return Err(ChartError::InvalidInput(
                "no records left to chart".to_string(),
            ));
        }

        let rows = sectors
            .iter()
            .map(|sector| {
                self.records
                    .iter()
                    .map(|record| record.sector_value(sector.as_ref()))
                    .collect::<Result<Vec<f64>>>()
            })
            .collect::<Result<Vec<Vec<f64>>>>()?;

        Matrix::new(rows)?
            .with_period_labels(self.records.iter().map(|r| r.year.to_string()))?
            .with_category_names(sectors.iter().map(|s| s.as_ref().to_string()))
    }
}
