//! Layout owner
//!
//! `BandLayout` holds the current matrix and layout mode and keeps the active
//! band set in sync with them. `set_matrix` and `set_mode` are the only
//! mutators; bands are recomputed on every change, never patched.

use super::error::{ChartError, Result};
use super::matrix::Matrix;
use super::stacker::{compute_bands, BandSet, LayoutMode};

#[derive(Debug, Clone, Default)]
pub struct BandLayout {
    matrix: Option<Matrix>,
    mode: Option<LayoutMode>,
    active: Option<BandSet>,
}

impl BandLayout {
    /// Empty layout: no matrix, no mode selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout holding `matrix` with no mode selected yet
    pub fn with_matrix(matrix: Matrix) -> Self {
        Self {
            matrix: Some(matrix),
            mode: None,
            active: None,
        }
    }

    /// Replace the matrix, recomputing bands for the current mode
    ///
    /// Bands for the new matrix are built before anything is swapped, so the
    /// layout never pairs a new matrix with stale bands.
    pub fn set_matrix(&mut self, matrix: Matrix) {
        let active = self.mode.map(|mode| compute_bands(&matrix, mode));
        self.matrix = Some(matrix);
        self.active = active;
    }

    /// Select a layout mode and recompute the active bands
    pub fn set_mode(&mut self, mode: LayoutMode) -> Result<&BandSet> {
        let matrix = self.matrix.as_ref().ok_or_else(|| {
            ChartError::InvalidState(format!("cannot switch to {} layout: no matrix loaded", mode))
        })?;

        tracing::debug!(from = ?self.mode, to = %mode, "layout mode change");
        let bands = compute_bands(matrix, mode);
        self.mode = Some(mode);
        let active: &BandSet = self.active.insert(bands);
        Ok(active)
    }

    /// Switch between stacked and grouped; the first toggle selects stacked
    pub fn toggle(&mut self) -> Result<&BandSet> {
        let next = self.mode.map_or(LayoutMode::Stacked, LayoutMode::toggled);
        self.set_mode(next)
    }

    pub fn mode(&self) -> Option<LayoutMode> {
        self.mode
    }

    pub fn matrix(&self) -> Option<&Matrix> {
        self.matrix.as_ref()
    }

    /// Bands for the current mode, `None` until a mode is selected
    pub fn active(&self) -> Option<&BandSet> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::stacker::{compute_stacked_bands, Band};

    fn example_matrix() -> Matrix {
        Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap()
    }

    #[test]
    fn test_set_mode_without_matrix_fails() {
        let mut layout = BandLayout::new();
        let result = layout.set_mode(LayoutMode::Stacked);
        assert!(matches!(result, Err(ChartError::InvalidState(_))));
        assert!(layout.mode().is_none());
        assert!(layout.active().is_none());

        assert!(matches!(layout.toggle(), Err(ChartError::InvalidState(_))));
    }

    #[test]
    fn test_unset_mode_has_no_bands() {
        let layout = BandLayout::with_matrix(example_matrix());
        assert!(layout.matrix().is_some());
        assert!(layout.mode().is_none());
        assert!(layout.active().is_none());
    }

    #[test]
    fn test_modes_reachable_from_unset() {
        let mut grouped_first = BandLayout::with_matrix(example_matrix());
        assert_eq!(
            grouped_first.set_mode(LayoutMode::Grouped).unwrap().y_max,
            4.0
        );

        let mut stacked_first = BandLayout::with_matrix(example_matrix());
        assert_eq!(
            stacked_first.set_mode(LayoutMode::Stacked).unwrap().y_max,
            6.0
        );
    }

    #[test]
    fn test_round_trip_matches_direct_stacked() {
        let matrix = example_matrix();
        let direct = compute_stacked_bands(&matrix);

        let mut layout = BandLayout::with_matrix(matrix);
        layout.set_mode(LayoutMode::Stacked).unwrap();
        layout.set_mode(LayoutMode::Grouped).unwrap();
        let round_trip = layout.set_mode(LayoutMode::Stacked).unwrap();

        assert_eq!(round_trip.bands, direct);
        assert_eq!(round_trip.y_max, 6.0);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut layout = BandLayout::with_matrix(example_matrix());
        assert_eq!(layout.toggle().unwrap().mode, LayoutMode::Stacked);
        assert_eq!(layout.toggle().unwrap().mode, LayoutMode::Grouped);
        assert_eq!(layout.toggle().unwrap().mode, LayoutMode::Stacked);
        assert_eq!(layout.mode(), Some(LayoutMode::Stacked));
    }

    #[test]
    fn test_set_matrix_recomputes_active_bands() {
        let mut layout = BandLayout::with_matrix(example_matrix());
        layout.set_mode(LayoutMode::Stacked).unwrap();

        layout.set_matrix(Matrix::new(vec![vec![5.0], vec![1.0]]).unwrap());

        let active = layout.active().unwrap();
        assert_eq!(active.mode, LayoutMode::Stacked);
        assert_eq!(active.n_periods, 1);
        assert_eq!(active.y_max, 6.0);
        assert_eq!(active.period(0).unwrap()[1], Band::new(5.0, 6.0, 1));
    }

    #[test]
    fn test_set_matrix_on_empty_layout() {
        let mut layout = BandLayout::new();
        layout.set_matrix(example_matrix());
        assert!(layout.active().is_none());
        assert_eq!(layout.set_mode(LayoutMode::Grouped).unwrap().y_max, 4.0);
    }
}
