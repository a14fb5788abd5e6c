//! Domain types used throughout the application.
//!
//! This module defines:
//!
//! - input enums (`Sex`, `Smoker`, `Region`) and their integer encodings
//! - the applicant profile (`Profile`) with its domain bounds
//! - estimator output (`Estimate`)
//! - run configuration (`PredictConfig`, `EdaConfig`)

pub mod types;

pub use types::*;
