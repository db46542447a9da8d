//! Band Stacker Library
//!
//! Lays out a category × period value table as stacked or grouped bar
//! bands. Shared by the `band_stacker` and `bumps` binaries.

pub mod chart;
pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod properties;
