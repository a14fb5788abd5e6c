//! Text formatting for prediction and EDA output.

use crate::data::BoxStats;
use crate::domain::{DemoStats, Estimate, Profile};

/// Format a currency amount: `₹` prefix, two decimals, comma thousands
/// separators (`₹ 23,500.00`).
pub fn format_currency(v: f64) -> String {
    let s = format!("{v:.2}");
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("₹ {sign}{grouped}.{frac_part}")
}

/// Format the full prediction report (profile + term breakdown + result).
pub fn format_prediction(profile: &Profile, estimate: &Estimate) -> String {
    let mut out = String::new();

    out.push_str("=== medicost - Insurance Cost Prediction ===\n");
    out.push_str(&format!(
        "Profile: age={} | bmi={:.1} | children={} | sex={} | smoker={} | region={}\n",
        profile.age,
        profile.bmi,
        profile.children,
        profile.sex.display_name(),
        profile.smoker.display_name(),
        profile.region.display_name(),
    ));

    out.push_str("\nBreakdown:\n");
    out.push_str(&format_term("base", estimate.base));
    out.push_str(&format_term("age", estimate.age_term));
    out.push_str(&format_term("bmi", estimate.bmi_term));
    out.push_str(&format_term("smoker", estimate.smoker_term));
    out.push_str(&format_term("children", estimate.children_term));
    out.push_str(&format_term("noise", estimate.noise as f64));
    out.push_str(&format_term("raw", estimate.raw));

    out.push_str(&format!(
        "\nEstimated Medical Insurance Cost: {}\n",
        format_currency(estimate.cost)
    ));

    out
}

/// Format the EDA dataset summary (row count + observed ranges).
pub fn format_demo_summary(stats: &DemoStats) -> String {
    let mut out = String::new();
    out.push_str("=== medicost - EDA Insights (sample data) ===\n");
    out.push_str(&format!(
        "Rows: n={} | age=[{}, {}] | bmi=[{:.1}, {:.1}] | charges=[{}, {}]\n",
        stats.n_rows,
        stats.age_min,
        stats.age_max,
        stats.bmi_min,
        stats.bmi_max,
        format_currency(stats.charges_min),
        format_currency(stats.charges_max),
    ));
    out
}

/// Format a five-number summary line for one box-plot group.
pub fn format_box_line(label: &str, stats: &BoxStats) -> String {
    format!(
        "{label:<12} min={:>12} q1={:>12} med={:>12} q3={:>12} max={:>12}\n",
        format_currency(stats.min),
        format_currency(stats.q1),
        format_currency(stats.median),
        format_currency(stats.q3),
        format_currency(stats.max),
    )
}

fn format_term(label: &str, value: f64) -> String {
    format!("  {label:<10} {:>14}\n", format_currency(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Smoker;
    use crate::model::predict_cost_with_noise;

    #[test]
    fn currency_small() {
        assert_eq!(format_currency(8500.0), "₹ 8,500.00");
    }

    #[test]
    fn currency_large() {
        assert_eq!(format_currency(1_234_567.891), "₹ 1,234,567.89");
    }

    #[test]
    fn currency_no_grouping_below_thousand() {
        assert_eq!(format_currency(999.9), "₹ 999.90");
        assert_eq!(format_currency(0.0), "₹ 0.00");
    }

    #[test]
    fn currency_negative_term() {
        // Negative values appear in breakdown output (the noise term).
        assert_eq!(format_currency(-2000.0), "₹ -2,000.00");
    }

    #[test]
    fn prediction_report_contains_result() {
        let profile = Profile {
            smoker: Smoker::No,
            ..Profile::default()
        };
        let estimate = predict_cost_with_noise(&profile, 0);
        let txt = format_prediction(&profile, &estimate);
        assert!(txt.contains("Estimated Medical Insurance Cost: ₹ 8,500.00"));
        assert!(txt.contains("smoker=no"));
    }
}
