//! Plotters-powered panel chart widget for Ratatui.
//!
//! One widget draws one `Panel` of the figure: axes, mesh (depending on the
//! style sheet), every series and a legend. Plotters output is rendered into
//! the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::config::{Rgb, Theme};
use crate::plot::figure::{LineStyle, Panel};

/// A render-only chart for a single figure panel.
pub struct PanelChart<'a> {
    pub panel: &'a Panel,
    pub theme: &'a Theme,
}

impl<'a> Widget for PanelChart<'a> {
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

        let [x0, x1] = self.panel.x_bounds;
        let [y0, y1] = self.panel.y_bounds;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let panel = self.panel;
        let theme = self.theme;
        let fg = rgb(theme.foreground);
        let bg = rgb(theme.background);

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Relative errors need room for scientific tick labels.
                .set_label_area_size(LabelAreaPosition::Left, 10)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            let fmt_x: &dyn Fn(&f64) -> String = &fmt_axis_x;
            let fmt_y: &dyn Fn(&f64) -> String = &fmt_axis_y;
            let mut mesh = chart.configure_mesh();
            mesh.x_desc(panel.x_label)
                .y_desc(panel.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(fmt_x)
                .y_label_formatter(fmt_y)
                .label_style(("sans-serif", 10).into_font().color(&fg))
                .axis_style(&fg);
            match theme.grid {
                Some(grid) => {
                    // The canvas has no alpha, so minor lines would be drawn
                    // solid and bury the series. Major lines only.
                    mesh.bold_line_style(&rgb(grid)).max_light_lines(0);
                }
                None => {
                    mesh.disable_x_mesh().disable_y_mesh();
                }
            }
            mesh.draw()?;

            for (idx, series) in panel.series.iter().enumerate() {
                let color = rgb(theme.cycle[idx % theme.cycle.len()]);
                let (dash, gap) = dash_pattern(series.line);

                for run in series.finite_runs() {
                    chart.draw_series(DashedLineSeries::new(
                        run,
                        dash,
                        gap,
                        color.stroke_width(1),
                    ))?;
                }

                // Markers are square pixel blocks: the ratatui backend maps
                // circle radii to canvas units incorrectly, producing huge circles.
                let points: Vec<(f64, f64)> = series.finite_runs().into_iter().flatten().collect();
                for (i, offset) in marker_offsets(series.marker_size).into_iter().enumerate() {
                    let anno = chart.draw_series(
                        points
                            .iter()
                            .map(move |&p| EmptyElement::at(p) + Pixel::new(offset, color)),
                    )?;
                    if i == 0 {
                        anno.label(series.label)
                            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], color));
                    }
                }
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .margin(4)
                .legend_area_size(16)
                .background_style(&bg)
                .border_style(&fg)
                .label_font(("sans-serif", 10).into_font().color(&fg))
                .draw()?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

fn rgb((r, g, b): Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

/// Dash length and gap (backend pixels) for a line style.
fn dash_pattern(style: LineStyle) -> (u32, u32) {
    match style {
        LineStyle::Dotted => (1, 2),
        LineStyle::DashDot => (4, 2),
    }
}

/// Backend pixel offsets covered by a marker of `size` (at least one pixel).
fn marker_offsets(size: u32) -> Vec<(i32, i32)> {
    let n = size.max(1) as i32;
    (0..n).flat_map(|dy| (0..n).map(move |dx| (dx, dy))).collect()
}

fn fmt_axis_x(v: &f64) -> String {
    format!("{v:.1}")
}

fn fmt_axis_y(v: &f64) -> String {
    format!("{v:.1e}")
}
