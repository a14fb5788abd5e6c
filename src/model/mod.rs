//! Heuristic cost-estimation formula.
//!
//! The formula is implemented as small, pure functions so that the CLI/TUI
//! front-ends can stay presentation-only.

pub mod formula;

pub use formula::*;
