//! Export predictions to JSON and demo rows to CSV.
//!
//! The exports are meant to be easy to consume in spreadsheets or downstream
//! scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{DemoRow, Estimate, PredictionFile, Profile};
use crate::error::AppError;

/// Write a prediction JSON file (profile, encoded features, term breakdown).
pub fn write_prediction_json(
    path: &Path,
    profile: &Profile,
    estimate: &Estimate,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create prediction JSON '{}': {e}", path.display()),
        )
    })?;

    let record = PredictionFile {
        tool: "medicost".to_string(),
        profile: *profile,
        features: profile.features(),
        estimate: *estimate,
    };

    serde_json::to_writer_pretty(file, &record)
        .map_err(|e| AppError::new(2, format!("Failed to write prediction JSON: {e}")))?;

    Ok(())
}

/// Read a prediction JSON file back (round-trip used by tests and scripts).
pub fn read_prediction_json(path: &Path) -> Result<PredictionFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open prediction JSON '{}': {e}", path.display()),
        )
    })?;
    let record: PredictionFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid prediction JSON: {e}")))?;
    Ok(record)
}

/// Write demo rows to a CSV file.
pub fn write_demo_csv(path: &Path, rows: &[DemoRow]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create demo CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "age,bmi,charges,smoker")
        .map_err(|e| AppError::new(2, format!("Failed to write demo CSV header: {e}")))?;

    for r in rows {
        writeln!(
            file,
            "{},{:.4},{:.2},{}",
            r.age,
            r.bmi,
            r.charges,
            r.smoker.display_name(),
        )
        .map_err(|e| AppError::new(2, format!("Failed to write demo CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Smoker;
    use crate::model::predict_cost_with_noise;

    #[test]
    fn prediction_json_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("medicost_prediction_roundtrip.json");

        let profile = Profile::default();
        let estimate = predict_cost_with_noise(&profile, -150);
        write_prediction_json(&path, &profile, &estimate).unwrap();

        let record = read_prediction_json(&path).unwrap();
        assert_eq!(record.tool, "medicost");
        assert_eq!(record.profile, profile);
        assert_eq!(record.estimate.cost, estimate.cost);
        assert_eq!(record.features[3], 1.0); // male
        assert_eq!(record.features[5], 0.0); // northeast

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn demo_csv_has_header_and_rows() {
        let dir = std::env::temp_dir();
        let path = dir.join("medicost_demo_rows.csv");

        let rows = vec![
            DemoRow { age: 25, bmi: 22.5, charges: 4321.0, smoker: Smoker::No },
            DemoRow { age: 52, bmi: 31.0, charges: 28_765.5, smoker: Smoker::Yes },
        ];
        write_demo_csv(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "age,bmi,charges,smoker");
        assert_eq!(lines[1], "25,22.5000,4321.00,no");
        assert_eq!(lines[2], "52,31.0000,28765.50,yes");

        let _ = std::fs::remove_file(&path);
    }
}
