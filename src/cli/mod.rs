//! Command-line parsing for the insurance cost demo.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the estimator/data code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::data::DEMO_ROWS;
use crate::domain::{Region, Sex, Smoker};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "medicost", version, about = "Medical Insurance Cost Prediction (demo)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate the insurance cost for one applicant profile and print a report.
    Predict(PredictArgs),
    /// Print sample EDA charts (charges histogram, smoker box plot) from demo data.
    Eda(EdaArgs),
    /// Launch the interactive three-page TUI.
    ///
    /// This uses the same estimator and demo-data code as `predict`/`eda`, but
    /// renders results in a terminal UI using Ratatui.
    Tui(PredictArgs),
}

/// Applicant profile options shared by `predict` and `tui`.
#[derive(Debug, Parser, Clone)]
pub struct PredictArgs {
    /// Applicant age in years (18-100).
    #[arg(short = 'a', long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(18..=100))]
    pub age: u32,

    /// Body-mass index (10.0-60.0).
    #[arg(short = 'b', long, default_value_t = 25.0)]
    pub bmi: f64,

    /// Number of children (0-10).
    #[arg(short = 'c', long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=10))]
    pub children: u32,

    /// Applicant sex (encoded but unused by the formula).
    #[arg(long, value_enum, default_value_t = Sex::Male)]
    pub sex: Sex,

    /// Smoking status.
    #[arg(long, value_enum, default_value_t = Smoker::Yes)]
    pub smoker: Smoker,

    /// Region of residence (encoded but unused by the formula).
    #[arg(long, value_enum, default_value_t = Region::Northeast)]
    pub region: Region,

    /// Seed for the noise draw (omit to draw from OS entropy).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the prediction (profile + breakdown) to a JSON file.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for the demo-data EDA report.
#[derive(Debug, Parser, Clone)]
pub struct EdaArgs {
    /// Number of demo rows to generate.
    #[arg(short = 'n', long, default_value_t = DEMO_ROWS)]
    pub count: usize,

    /// Random seed for demo-data generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Histogram bin count.
    #[arg(long, default_value_t = 10)]
    pub bins: usize,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Export demo rows to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}
