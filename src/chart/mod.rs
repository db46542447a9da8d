//! Chart data module
//!
//! Structure:
//! - `matrix.rs`: validated category × period table
//! - `stacker.rs`: stacked / grouped band geometry and scale bounds
//! - `layout.rs`: owner of the current matrix and layout mode
//! - `dataset.rs`: per-year sector records → matrix
//! - `bumps.rs`: synthetic demo series
//! - `error.rs`: error types

pub mod bumps;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod stacker;

// Re-exports for convenience
pub use dataset::{SectorDataset, SectorRecord, DEFAULT_SECTORS};
pub use error::{ChartError, Result};
pub use layout::BandLayout;
pub use matrix::Matrix;
pub use stacker::{
    compute_bands, compute_grouped_bands, compute_stacked_bands, grouped_max, grouped_slot,
    stacked_max, Band, BandSet, LayoutMode,
};
