//! Terminal chart rendering for the non-TUI `eda` subcommand.

pub mod ascii;

pub use ascii::*;
