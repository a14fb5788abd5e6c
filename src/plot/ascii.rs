//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - histogram bars: `#` columns
//! - box plot: `|` whiskers/median, `[`/`]` quartile edges, `-` span

use crate::data::{BoxStats, HistogramBin};

/// Render a vertical-bar histogram into a `width`×`height` character grid.
///
/// Each column shows the bin that covers its horizontal position; bar heights
/// are scaled to the tallest bin.
pub fn render_ascii_histogram(bins: &[HistogramBin], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);
    if bins.is_empty() || max_count == 0 {
        return "Histogram: (no data)\n".to_string();
    }

    let lo = bins[0].start;
    let hi = bins[bins.len() - 1].start + bins[bins.len() - 1].width;

    let mut grid = vec![vec![' '; width]; height];
    for x in 0..width {
        let bin_idx = x * bins.len() / width;
        let count = bins[bin_idx].count;
        let bar = ((count as f64 / max_count as f64) * height as f64).round() as usize;
        for y in 0..bar.min(height) {
            grid[height - 1 - y][x] = '#';
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Histogram: charges=[{lo:.0}, {hi:.0}] | bins={} | peak={max_count}\n",
        bins.len()
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Render two box plots (smoker vs non-smoker) on a shared horizontal scale.
pub fn render_ascii_box_pair(
    smoker: Option<&BoxStats>,
    non_smoker: Option<&BoxStats>,
    width: usize,
) -> String {
    let width = width.max(20);

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for s in [smoker, non_smoker].into_iter().flatten() {
        lo = lo.min(s.min);
        hi = hi.max(s.max);
    }
    if !lo.is_finite() || !hi.is_finite() || hi <= lo {
        return "Box plot: (no data)\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("Box plot: charges=[{lo:.0}, {hi:.0}]\n"));
    out.push_str(&render_box_row("smoker", smoker, lo, hi, width));
    out.push_str(&render_box_row("non-smoker", non_smoker, lo, hi, width));
    out
}

fn render_box_row(label: &str, stats: Option<&BoxStats>, lo: f64, hi: f64, width: usize) -> String {
    let Some(s) = stats else {
        return format!("{label:<12} (no data)\n");
    };

    let mut row = vec![' '; width];
    let x_min = map_x(s.min, lo, hi, width);
    let x_q1 = map_x(s.q1, lo, hi, width);
    let x_med = map_x(s.median, lo, hi, width);
    let x_q3 = map_x(s.q3, lo, hi, width);
    let x_max = map_x(s.max, lo, hi, width);

    for cell in row.iter_mut().take(x_max + 1).skip(x_min) {
        *cell = '-';
    }
    // Order matters: edges and median overwrite the span.
    row[x_min] = '|';
    row[x_max] = '|';
    row[x_q1] = '[';
    row[x_q3] = ']';
    row[x_med] = '|';

    format!("{label:<12} {}\n", row.into_iter().collect::<String>())
}

fn map_x(v: f64, lo: f64, hi: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(start: f64, width: f64, count: usize) -> HistogramBin {
        HistogramBin { start, width, count }
    }

    #[test]
    fn histogram_golden_snapshot_small() {
        let bins = vec![bin(0.0, 10.0, 1), bin(10.0, 10.0, 4), bin(20.0, 10.0, 2)];
        let txt = render_ascii_histogram(&bins, 12, 5);
        // Bars: count 1 -> height 1, count 4 -> height 5, count 2 -> height 3.
        let expected = concat!(
            "Histogram: charges=[0, 30] | bins=3 | peak=4\n",
            "    ####    \n",
            "    ####    \n",
            "    ########\n",
            "    ########\n",
            "############\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn histogram_empty_input() {
        assert_eq!(render_ascii_histogram(&[], 20, 5), "Histogram: (no data)\n");
    }

    #[test]
    fn box_pair_golden_snapshot_small() {
        let smoker = BoxStats {
            min: 0.0,
            q1: 5.0,
            median: 10.0,
            q3: 15.0,
            max: 20.0,
        };
        let non = BoxStats {
            min: 2.0,
            q1: 4.0,
            median: 6.0,
            q3: 8.0,
            max: 10.0,
        };
        let txt = render_ascii_box_pair(Some(&smoker), Some(&non), 21);
        let expected = concat!(
            "Box plot: charges=[0, 20]\n",
            "smoker       |----[----|----]----|\n",
            "non-smoker     |-[-|-]-|          \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn box_pair_no_data() {
        assert_eq!(render_ascii_box_pair(None, None, 20), "Box plot: (no data)\n");
    }
}
