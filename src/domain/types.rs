//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during estimation
//! - exported to JSON/CSV
//! - rendered by both the CLI and the TUI front-ends

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Applicant age bounds (years).
pub const AGE_MIN: u32 = 18;
pub const AGE_MAX: u32 = 100;

/// Body-mass index bounds.
pub const BMI_MIN: f64 = 10.0;
pub const BMI_MAX: f64 = 60.0;

/// Number-of-children bounds.
pub const CHILDREN_MIN: u32 = 0;
pub const CHILDREN_MAX: u32 = 10;

/// Applicant sex.
///
/// Encoded as male=1 / female=0 in the feature vector. The encoding is kept
/// for schema compatibility even though the current formula does not read it
/// (see `model`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn display_name(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn encoded(self) -> u8 {
        match self {
            Sex::Male => 1,
            Sex::Female => 0,
        }
    }

    pub fn next(self) -> Sex {
        match self {
            Sex::Male => Sex::Female,
            Sex::Female => Sex::Male,
        }
    }

    pub fn prev(self) -> Sex {
        self.next()
    }
}

/// Smoking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Smoker {
    Yes,
    No,
}

impl Smoker {
    pub const ALL: [Smoker; 2] = [Smoker::Yes, Smoker::No];

    pub fn display_name(self) -> &'static str {
        match self {
            Smoker::Yes => "yes",
            Smoker::No => "no",
        }
    }

    pub fn encoded(self) -> u8 {
        match self {
            Smoker::Yes => 1,
            Smoker::No => 0,
        }
    }

    pub fn next(self) -> Smoker {
        match self {
            Smoker::Yes => Smoker::No,
            Smoker::No => Smoker::Yes,
        }
    }

    pub fn prev(self) -> Smoker {
        self.next()
    }
}

/// US census region of residence.
///
/// Encoded 0–3 in fixed enumeration order. Like `Sex`, the encoding is carried
/// in the feature vector but unused by the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Northeast,
        Region::Northwest,
        Region::Southeast,
        Region::Southwest,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Region::Northeast => "northeast",
            Region::Northwest => "northwest",
            Region::Southeast => "southeast",
            Region::Southwest => "southwest",
        }
    }

    pub fn encoded(self) -> u8 {
        match self {
            Region::Northeast => 0,
            Region::Northwest => 1,
            Region::Southeast => 2,
            Region::Southwest => 3,
        }
    }

    pub fn next(self) -> Region {
        match self {
            Region::Northeast => Region::Northwest,
            Region::Northwest => Region::Southeast,
            Region::Southeast => Region::Southwest,
            Region::Southwest => Region::Northeast,
        }
    }

    pub fn prev(self) -> Region {
        match self {
            Region::Northeast => Region::Southwest,
            Region::Northwest => Region::Northeast,
            Region::Southeast => Region::Northwest,
            Region::Southwest => Region::Southeast,
        }
    }
}

/// The six-field applicant profile.
///
/// Created fresh per estimation request; never stored. The estimator assumes
/// in-range fields — the TUI clamps at the widget level, and the CLI path
/// calls [`Profile::validate`] before estimating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub bmi: f64,
    pub children: u32,
    pub sex: Sex,
    pub smoker: Smoker,
    pub region: Region,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            age: 30,
            bmi: 25.0,
            children: 0,
            sex: Sex::Male,
            smoker: Smoker::Yes,
            region: Region::Northeast,
        }
    }
}

impl Profile {
    /// Check every field against its declared domain.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(AGE_MIN..=AGE_MAX).contains(&self.age) {
            return Err(AppError::invalid_input(format!(
                "Age {} outside [{AGE_MIN}, {AGE_MAX}].",
                self.age
            )));
        }
        if !self.bmi.is_finite() || !(BMI_MIN..=BMI_MAX).contains(&self.bmi) {
            return Err(AppError::invalid_input(format!(
                "BMI {} outside [{BMI_MIN}, {BMI_MAX}].",
                self.bmi
            )));
        }
        if !(CHILDREN_MIN..=CHILDREN_MAX).contains(&self.children) {
            return Err(AppError::invalid_input(format!(
                "Children {} outside [{CHILDREN_MIN}, {CHILDREN_MAX}].",
                self.children
            )));
        }
        Ok(())
    }

    /// Integer-encoded feature vector in the fixed order
    /// `[age, bmi, children, sex, smoker, region]`.
    ///
    /// Note that `sex` and `region` are encoded but not consumed by the
    /// formula; they are retained as documented inputs of the schema.
    pub fn features(&self) -> [f64; 6] {
        [
            self.age as f64,
            self.bmi,
            self.children as f64,
            self.sex.encoded() as f64,
            self.smoker.encoded() as f64,
            self.region.encoded() as f64,
        ]
    }
}

/// Estimator output with the per-term breakdown.
///
/// `cost` is the floored result; `raw` is the pre-floor sum of the terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub base: f64,
    pub age_term: f64,
    pub bmi_term: f64,
    pub smoker_term: f64,
    pub children_term: f64,
    pub noise: i32,
    pub raw: f64,
    pub cost: f64,
}

/// A saved prediction (JSON export).
///
/// `features` is the integer-encoded vector in the original
/// `[age, bmi, children, sex, smoker, region]` order, including the two
/// encoded-but-unused fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionFile {
    pub tool: String,
    pub profile: Profile,
    pub features: [f64; 6],
    pub estimate: Estimate,
}

/// Configuration for a one-shot prediction run.
#[derive(Debug, Clone)]
pub struct PredictConfig {
    pub profile: Profile,
    /// Seed for the noise draw. `None` seeds from OS entropy (the original
    /// demo behavior); `Some` makes the run reproducible.
    pub seed: Option<u64>,
    pub export: Option<PathBuf>,
}

/// Configuration for a demo-data (EDA) run.
#[derive(Debug, Clone)]
pub struct EdaConfig {
    pub count: usize,
    pub seed: u64,
    pub bins: usize,
    pub plot_width: usize,
    pub plot_height: usize,
    pub export: Option<PathBuf>,
}

/// One synthetic row of the EDA demo dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemoRow {
    pub age: u32,
    pub bmi: f64,
    pub charges: f64,
    pub smoker: Smoker,
}

/// Summary statistics of a demo dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoStats {
    pub n_rows: usize,
    pub age_min: u32,
    pub age_max: u32,
    pub bmi_min: f64,
    pub bmi_max: f64,
    pub charges_min: f64,
    pub charges_max: f64,
}
