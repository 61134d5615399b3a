//! Backend-independent figure description.
//!
//! `build_figure` turns the derived table into plain data (panels, series,
//! bounds). Renderers only draw what is described here, which keeps them free
//! of table lookups and makes the figure itself testable.

use crate::error::AppError;
use crate::table::{Cell, Table};

pub const FIGURE_TITLE: &str = "Analysis of Exponential Function Results";

/// Marker size for every series, in chart backend pixels per side. The text
/// renderer draws one glyph per point regardless.
pub const MARKER_SIZE: u32 = 2;

/// Line pattern between markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Dotted,
    DashDot,
}

/// One plotted line: `(x, y)` per input row.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub line: LineStyle,
    pub marker_size: u32,
    pub points: Vec<(Cell, Cell)>,
}

impl Series {
    /// Split the series into runs of consecutive finite points.
    ///
    /// A missing or non-finite cell ends the current run, leaving a gap.
    pub fn finite_runs(&self) -> Vec<Vec<(f64, f64)>> {
        let mut runs = Vec::new();
        let mut current = Vec::new();
        for &(x, y) in &self.points {
            match (x, y) {
                (Some(x), Some(y)) if x.is_finite() && y.is_finite() => current.push((x, y)),
                _ => {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

/// One subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<Series>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// The whole figure: a title over vertically stacked panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: &'static str,
    pub panels: Vec<Panel>,
}

struct SeriesSpec {
    column: &'static str,
    label: &'static str,
    line: LineStyle,
}

struct PanelSpec {
    x_column: &'static str,
    series: &'static [SeriesSpec],
}

const PANELS: [PanelSpec; 2] = [
    PanelSpec {
        x_column: "x_float",
        series: &[
            SeriesSpec {
                column: "exp_fast_float_rerr",
                label: "Fast Float Relative Error",
                line: LineStyle::Dotted,
            },
            SeriesSpec {
                column: "exp_very_fast_float_rerr",
                label: "Very Fast Float Relative Error",
                line: LineStyle::DashDot,
            },
        ],
    },
    PanelSpec {
        x_column: "x_double",
        series: &[
            SeriesSpec {
                column: "exp_float_rerr",
                label: "Float Relative Error",
                line: LineStyle::Dotted,
            },
            SeriesSpec {
                column: "exp_fast_double_rerr",
                label: "Fast Double Relative Error",
                line: LineStyle::Dotted,
            },
            SeriesSpec {
                column: "exp_very_fast_double_rerr",
                label: "Very Fast Double Relative Error",
                line: LineStyle::DashDot,
            },
        ],
    },
];

/// Build the two-panel relative error figure from a derived table.
pub fn build_figure(table: &Table) -> Result<Figure, AppError> {
    let panels = PANELS
        .iter()
        .map(|spec| build_panel(table, spec))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Figure {
        title: FIGURE_TITLE,
        panels,
    })
}

fn build_panel(table: &Table, spec: &PanelSpec) -> Result<Panel, AppError> {
    let xs = table.numeric(spec.x_column)?;

    let mut series = Vec::with_capacity(spec.series.len());
    for s in spec.series {
        let ys = table.numeric(s.column)?;
        series.push(Series {
            label: s.label,
            line: s.line,
            marker_size: MARKER_SIZE,
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
        });
    }

    let (x_bounds, y_bounds) = bounds(&series);
    Ok(Panel {
        x_label: spec.x_column,
        y_label: "relative error",
        series,
        x_bounds,
        y_bounds,
    })
}

fn bounds(series: &[Series]) -> ([f64; 2], [f64; 2]) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);

    for (x, y) in series.iter().flat_map(|s| s.finite_runs()).flatten() {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    (pad_range(x_min, x_max), pad_range(y_min, y_max))
}

/// Pad a data range by 5% on each side.
///
/// Empty ranges fall back to `[0, 1]`; a single value gets a small window
/// around it. Bounds stay finite even when the span overflows `f64`.
fn pad_range(min: f64, max: f64) -> [f64; 2] {
    if !(min.is_finite() && max.is_finite()) || max < min {
        return [0.0, 1.0];
    }
    let pad = if max > min {
        max * 0.05 - min * 0.05
    } else {
        (min.abs() * 0.05).max(1e-12)
    };
    [(min - pad).max(f64::MIN), (max + pad).min(f64::MAX)]
}
