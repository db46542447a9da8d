//! Category × period value table
//!
//! A `Matrix` is validated once at construction and is read-only afterwards.
//! Rows are categories (stacking order, bottom first), columns are periods
//! (display order, left to right).

use super::error::{ChartError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    values: Vec<Vec<f64>>,
    n_periods: usize,
    period_labels: Vec<String>,
    category_names: Vec<String>,
}

impl Matrix {
    /// Build a matrix from category-major rows (`rows[category][period]`)
    ///
    /// Rejects empty tables, ragged rows, negative or non-finite values, and
    /// periods whose stacked total overflows.
    /// Period labels default to the period index.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(ChartError::InvalidInput(
                "matrix has no categories".to_string(),
            ));
        }

        let n_periods = rows[0].len();
        if n_periods == 0 {
            return Err(ChartError::InvalidInput("matrix has no periods".to_string()));
        }

        for (k, row) in rows.iter().enumerate() {
            if row.len() != n_periods {
                return Err(ChartError::InvalidInput(format!(
                    "category {} has {} periods, expected {}",
                    k,
                    row.len(),
                    n_periods
                )));
            }
            for (p, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ChartError::InvalidInput(format!(
                        "value at category {}, period {} is not finite: {}",
                        k, p, value
                    )));
                }
                if value < 0.0 {
                    return Err(ChartError::InvalidInput(format!(
                        "value at category {}, period {} is negative: {}",
                        k, p, value
                    )));
                }
            }
        }

        // Stack tops must stay finite too
        for p in 0..n_periods {
            let total: f64 = rows.iter().map(|row| row[p]).sum();
            if !total.is_finite() {
                return Err(ChartError::InvalidInput(format!(
                    "values at period {} overflow when stacked",
                    p
                )));
            }
        }

        let period_labels = (0..n_periods).map(|p| p.to_string()).collect();

        Ok(Self {
            values: rows,
            n_periods,
            period_labels,
            category_names: Vec::new(),
        })
    }

    /// Build a matrix from period-major rows (`rows[period][category]`)
    ///
    /// Record-oriented sources (one row per year) arrive in this shape.
    pub fn from_periods(periods: Vec<Vec<f64>>) -> Result<Self> {
        let n_categories = periods.first().map(Vec::len).unwrap_or(0);
        if let Some((p, row)) = periods
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != n_categories)
        {
            return Err(ChartError::InvalidInput(format!(
                "period {} has {} categories, expected {}",
                p,
                row.len(),
                n_categories
            )));
        }

        let rows = (0..n_categories)
            .map(|k| periods.iter().map(|row| row[k]).collect())
            .collect();
        Self::new(rows)
    }

    /// Attach display labels, one per period
    pub fn with_period_labels<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != self.n_periods {
            return Err(ChartError::InvalidInput(format!(
                "{} period labels for {} periods",
                labels.len(),
                self.n_periods
            )));
        }
        self.period_labels = labels;
        Ok(self)
    }

    /// Attach display names, one per category
    pub fn with_category_names<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != self.values.len() {
            return Err(ChartError::InvalidInput(format!(
                "{} category names for {} categories",
                names.len(),
                self.values.len()
            )));
        }
        self.category_names = names;
        Ok(self)
    }

    /// Number of categories (`n`)
    pub fn n_categories(&self) -> usize {
        self.values.len()
    }

    /// Number of periods (`m`)
    pub fn n_periods(&self) -> usize {
        self.n_periods
    }

    pub fn value(&self, category: usize, period: usize) -> f64 {
        self.values[category][period]
    }

    /// One category's series across all periods
    pub fn row(&self, category: usize) -> &[f64] {
        &self.values[category]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn period_labels(&self) -> &[String] {
        &self.period_labels
    }

    /// Category names, empty when none were attached
    pub fn category_names(&self) -> &[String] {
        &self.category_names
    }
}
