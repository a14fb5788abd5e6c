//! Chart-ready summaries: histogram binning and five-number box summaries.
//!
//! Both the ASCII plots (`plot::ascii`) and the Plotters widgets (`tui`)
//! render from these structures, so binning/quantile logic lives in exactly
//! one place.

use crate::domain::{DemoRow, Smoker};

/// One equal-width histogram bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin.
    pub start: f64,
    /// Bin width (identical across bins).
    pub width: f64,
    pub count: usize,
}

/// Five-number summary for a box plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Bin `values` into `bins` equal-width bins over `[min, max]`.
///
/// Returns an empty vector when there is nothing to bin (no values, a single
/// repeated value, or `bins == 0`). The maximum value lands in the last bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() || hi <= lo {
        return Vec::new();
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + i as f64 * width,
            width,
            count,
        })
        .collect()
}

/// Compute the five-number summary of `values`.
///
/// Quartiles use linear interpolation between order statistics (the numpy
/// default). Returns `None` for an empty or non-finite input.
pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(BoxStats {
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Split demo charges by smoker status: `(smoker, non_smoker)`.
pub fn charges_by_smoker(rows: &[DemoRow]) -> (Vec<f64>, Vec<f64>) {
    let mut yes = Vec::new();
    let mut no = Vec::new();
    for r in rows {
        match r.smoker {
            Smoker::Yes => yes.push(r.charges),
            Smoker::No => no.push(r.charges),
        }
    }
    (yes, no)
}

// `sorted` must be non-empty and ascending.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n as f64 - 1.0);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_sum_to_n() {
        let values: Vec<f64> = (0..97).map(|i| i as f64 * 3.7).collect();
        let bins = histogram(&values, 10);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
    }

    #[test]
    fn histogram_max_lands_in_last_bin() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];
        let bins = histogram(&values, 4);
        assert_eq!(bins.last().unwrap().count, 1);
    }

    #[test]
    fn histogram_degenerate_inputs() {
        assert!(histogram(&[], 10).is_empty());
        assert!(histogram(&[5.0, 5.0, 5.0], 10).is_empty());
        assert!(histogram(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn box_stats_known_array() {
        // numpy linear interpolation: q1=2.75, median=4.5, q3=6.25 for 1..=8
        let values: Vec<f64> = (1..=8).map(|i| i as f64).collect();
        let s = box_stats(&values).unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.q1, 2.75);
        assert_eq!(s.median, 4.5);
        assert_eq!(s.q3, 6.25);
        assert_eq!(s.max, 8.0);
    }

    #[test]
    fn box_stats_single_value() {
        let s = box_stats(&[3.0]).unwrap();
        assert_eq!(s.min, 3.0);
        assert_eq!(s.q3, 3.0);
    }

    #[test]
    fn box_stats_empty_is_none() {
        assert!(box_stats(&[]).is_none());
        assert!(box_stats(&[1.0, f64::NAN]).is_none());
    }

    #[test]
    fn charges_split_preserves_all_rows() {
        let rows = vec![
            DemoRow { age: 20, bmi: 21.0, charges: 3000.0, smoker: Smoker::Yes },
            DemoRow { age: 30, bmi: 25.0, charges: 9000.0, smoker: Smoker::No },
            DemoRow { age: 40, bmi: 30.0, charges: 15000.0, smoker: Smoker::No },
        ];
        let (yes, no) = charges_by_smoker(&rows);
        assert_eq!(yes, vec![3000.0]);
        assert_eq!(no, vec![9000.0, 15000.0]);
    }
}
