//! Shared pipeline logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflows:
//! - predict: validate profile -> seed RNG -> draw noise -> evaluate formula
//! - eda: generate demo rows -> bin charges -> box summaries by smoker status
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data::{BoxStats, DemoData, HistogramBin};
use crate::domain::{EdaConfig, Estimate, PredictConfig, Profile};
use crate::error::AppError;
use crate::model::predict_cost;

/// All computed outputs of a single prediction run.
#[derive(Debug, Clone)]
pub struct PredictOutput {
    pub profile: Profile,
    pub estimate: Estimate,
}

/// All computed outputs of a demo-data (EDA) run.
#[derive(Debug, Clone)]
pub struct EdaOutput {
    pub data: DemoData,
    pub hist: Vec<HistogramBin>,
    pub smoker_box: Option<BoxStats>,
    pub non_smoker_box: Option<BoxStats>,
}

/// Validate the profile and produce one estimate.
///
/// `seed: None` draws from OS entropy (the demo's original behavior); a fixed
/// seed makes the noise draw, and therefore the result, reproducible.
pub fn run_predict(config: &PredictConfig) -> Result<PredictOutput, AppError> {
    config.profile.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let estimate = predict_cost(&config.profile, &mut rng);

    Ok(PredictOutput {
        profile: config.profile,
        estimate,
    })
}

/// Generate the demo dataset and its chart-ready summaries.
pub fn run_eda(config: &EdaConfig) -> Result<EdaOutput, AppError> {
    if config.bins == 0 {
        return Err(AppError::invalid_input("Histogram bin count must be > 0."));
    }

    let data = crate::data::generate_demo_data(config.seed, config.count)?;

    let charges: Vec<f64> = data.rows.iter().map(|r| r.charges).collect();
    let hist = crate::data::histogram(&charges, config.bins);

    let (yes, no) = crate::data::charges_by_smoker(&data.rows);
    let smoker_box = crate::data::box_stats(&yes);
    let non_smoker_box = crate::data::box_stats(&no);

    Ok(EdaOutput {
        data,
        hist,
        smoker_box,
        non_smoker_box,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_predict_is_reproducible() {
        let config = PredictConfig {
            profile: Profile::default(),
            seed: Some(99),
            export: None,
        };
        let a = run_predict(&config).unwrap();
        let b = run_predict(&config).unwrap();
        assert_eq!(a.estimate.noise, b.estimate.noise);
        assert_eq!(a.estimate.cost, b.estimate.cost);
    }

    #[test]
    fn out_of_domain_profile_rejected() {
        let config = PredictConfig {
            profile: Profile {
                age: 17,
                ..Profile::default()
            },
            seed: Some(0),
            export: None,
        };
        assert!(run_predict(&config).is_err());
    }

    #[test]
    fn eda_run_produces_both_groups() {
        let config = EdaConfig {
            count: 200,
            seed: 42,
            bins: 10,
            plot_width: 80,
            plot_height: 15,
            export: None,
        };
        let out = run_eda(&config).unwrap();
        assert_eq!(out.hist.iter().map(|b| b.count).sum::<usize>(), 200);
        // With 200 coin-flip rows, both groups are present for any sane seed.
        assert!(out.smoker_box.is_some());
        assert!(out.non_smoker_box.is_some());
    }

    #[test]
    fn eda_zero_bins_rejected() {
        let config = EdaConfig {
            count: 10,
            seed: 1,
            bins: 0,
            plot_width: 80,
            plot_height: 15,
            export: None,
        };
        assert!(run_eda(&config).is_err());
    }
}
