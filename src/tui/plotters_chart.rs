//! Plotters-powered EDA chart widgets for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart`/`BarChart` widgets?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::data::HistogramBin;

/// A render-only histogram of the demo charges distribution.
///
/// The widget is intentionally data-driven: bins and bounds are computed
/// outside the render call. This keeps `render()` focused on drawing and makes
/// it easy to test/benchmark the data prep separately.
pub struct ChargesHistogramChart<'a> {
    pub bins: &'a [HistogramBin],
    /// X bounds (charges, currency units).
    pub x_bounds: [f64; 2],
    /// Y bound (bin count); the lower bound is always 0.
    pub y_max: f64,
    pub x_label: &'a str,
    pub y_label: &'a str,
}

impl<'a> Widget for ChargesHistogramChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        if !(x0.is_finite() && x1.is_finite() && self.y_max.is_finite()) || x1 <= x0 || self.y_max <= 0.0 {
            return;
        }

        let bins: Vec<HistogramBin> = self.bins.to_vec();
        let y_max = self.y_max;
        let x_label = self.x_label.to_string();
        let y_label = self.y_label.to_string();

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, 0.0..y_max)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(&x_label)
                .y_desc(&y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| format!("{:.0}k", v / 1000.0))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // High-contrast palette for terminal readability.
            let bar_color = RGBColor(0, 255, 255); // cyan
            let density_color = RGBColor(255, 255, 0); // yellow

            // 1) Histogram bars as filled rectangles.
            chart.draw_series(bins.iter().map(|b| {
                Rectangle::new(
                    [(b.start, 0.0), (b.start + b.width, b.count as f64)],
                    bar_color.filled(),
                )
            }))?;

            // 2) A light density-style overlay through the bin midpoints.
            chart.draw_series(LineSeries::new(
                bins.iter()
                    .map(|b| (b.start + b.width / 2.0, b.count as f64)),
                &density_color,
            ))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// A render-only box plot of charges grouped by smoker status.
pub struct SmokerBoxChart<'a> {
    /// Raw charges of smokers / non-smokers (quartiles computed by Plotters).
    pub smoker: &'a [f64],
    pub non_smoker: &'a [f64],
    /// Y bounds (charges, currency units).
    pub y_bounds: [f64; 2],
}

impl<'a> Widget for SmokerBoxChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];
        if !(y0.is_finite() && y1.is_finite()) || y1 <= y0 {
            return;
        }
        if self.smoker.is_empty() || self.non_smoker.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                "Waiting for data...",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let smoker_q = Quartiles::new(self.smoker);
        let non_smoker_q = Quartiles::new(self.non_smoker);

        let widget = widget_fn(move |root| {
            let labels = ["yes", "no"];
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(labels[..].into_segmented(), (y0 as f32)..(y1 as f32))?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc("smoker")
                .y_desc("charges")
                .y_labels(5)
                .y_label_formatter(&|v| format!("{:.0}k", v / 1000.0))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let smoker_color = RGBColor(255, 0, 0); // red
            let non_smoker_color = RGBColor(0, 255, 0); // green

            chart.draw_series([
                Boxplot::new_vertical(SegmentValue::CenterOf(&"yes"), &smoker_q)
                    .style(&smoker_color),
                Boxplot::new_vertical(SegmentValue::CenterOf(&"no"), &non_smoker_q)
                    .style(&non_smoker_color),
            ])?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
