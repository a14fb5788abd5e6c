//! File exports (prediction JSON, demo-data CSV).

pub mod export;
