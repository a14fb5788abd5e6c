//! Synthetic demo data for the EDA page and its chart-ready summaries.

pub mod sample;
pub mod summary;

pub use sample::*;
pub use summary::*;
