//! Synthetic demo dataset generation.
//!
//! The EDA page visualizes a disposable dataset that mimics the shape of the
//! classic insurance-charges data: it is drawn fresh from a seeded RNG, is
//! never persisted, and is deliberately unrelated to the prediction formula.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::{DemoRow, DemoStats, Smoker};
use crate::error::AppError;

/// Demo dataset draw ranges (inclusive-exclusive, as the original demo).
pub const DEMO_AGE_MIN: u32 = 18;
pub const DEMO_AGE_MAX: u32 = 65;
pub const DEMO_BMI_MIN: f64 = 18.0;
pub const DEMO_BMI_MAX: f64 = 40.0;
pub const DEMO_CHARGES_MIN: f64 = 2000.0;
pub const DEMO_CHARGES_MAX: f64 = 50_000.0;

/// Default row count for the EDA demo dataset.
pub const DEMO_ROWS: usize = 200;

#[derive(Debug, Clone)]
pub struct DemoData {
    pub rows: Vec<DemoRow>,
    pub stats: DemoStats,
}

/// Generate `count` demo rows from a seeded RNG.
///
/// The same seed always produces the same dataset, which keeps chart snapshots
/// and exports reproducible.
pub fn generate_demo_data(seed: u64, count: usize) -> Result<DemoData, AppError> {
    if count == 0 {
        return Err(AppError::invalid_input("Demo row count must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(count);

    for _ in 0..count {
        let age = rng.gen_range(DEMO_AGE_MIN..DEMO_AGE_MAX);
        let bmi = rng.gen_range(DEMO_BMI_MIN..DEMO_BMI_MAX);
        let charges = rng.gen_range(DEMO_CHARGES_MIN..DEMO_CHARGES_MAX);
        let smoker = if rng.r#gen() { Smoker::Yes } else { Smoker::No };

        rows.push(DemoRow {
            age,
            bmi,
            charges,
            smoker,
        });
    }

    let stats =
        compute_stats(&rows).ok_or_else(|| AppError::new(4, "Failed to compute demo stats."))?;

    Ok(DemoData { rows, stats })
}

fn compute_stats(rows: &[DemoRow]) -> Option<DemoStats> {
    let mut age_min = u32::MAX;
    let mut age_max = u32::MIN;
    let mut bmi_min = f64::INFINITY;
    let mut bmi_max = f64::NEG_INFINITY;
    let mut charges_min = f64::INFINITY;
    let mut charges_max = f64::NEG_INFINITY;

    for r in rows {
        age_min = age_min.min(r.age);
        age_max = age_max.max(r.age);
        bmi_min = bmi_min.min(r.bmi);
        bmi_max = bmi_max.max(r.bmi);
        charges_min = charges_min.min(r.charges);
        charges_max = charges_max.max(r.charges);
    }

    if rows.is_empty() || !bmi_min.is_finite() || !charges_min.is_finite() {
        return None;
    }

    Some(DemoStats {
        n_rows: rows.len(),
        age_min,
        age_max,
        bmi_min,
        bmi_max,
        charges_min,
        charges_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_stay_within_declared_ranges() {
        let data = generate_demo_data(42, DEMO_ROWS).unwrap();
        assert_eq!(data.rows.len(), DEMO_ROWS);
        for r in &data.rows {
            assert!((DEMO_AGE_MIN..DEMO_AGE_MAX).contains(&r.age));
            assert!(r.bmi >= DEMO_BMI_MIN && r.bmi < DEMO_BMI_MAX);
            assert!(r.charges >= DEMO_CHARGES_MIN && r.charges < DEMO_CHARGES_MAX);
        }
    }

    #[test]
    fn same_seed_same_rows() {
        let a = generate_demo_data(7, 50).unwrap();
        let b = generate_demo_data(7, 50).unwrap();
        assert_eq!(a.rows, b.rows);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn different_seed_different_rows() {
        let a = generate_demo_data(1, 50).unwrap();
        let b = generate_demo_data(2, 50).unwrap();
        assert_ne!(a.rows, b.rows);
    }

    #[test]
    fn zero_count_rejected() {
        assert!(generate_demo_data(0, 0).is_err());
    }

    #[test]
    fn stats_bound_the_rows() {
        let data = generate_demo_data(3, 100).unwrap();
        let s = data.stats;
        assert_eq!(s.n_rows, 100);
        for r in &data.rows {
            assert!(r.charges >= s.charges_min && r.charges <= s.charges_max);
            assert!(r.bmi >= s.bmi_min && r.bmi <= s.bmi_max);
            assert!(r.age >= s.age_min && r.age <= s.age_max);
        }
    }
}
