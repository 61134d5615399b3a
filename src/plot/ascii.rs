//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - piping the figure somewhere without a terminal UI
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - markers: one glyph per series (`*`, `+`, `x`, ...)
//! - lines: `.` for dotted series, `-` for dash-dot series

use crate::plot::figure::{Figure, LineStyle, Panel};

const MARKERS: [char; 5] = ['*', '+', 'x', 'o', '#'];

/// Render the whole figure: title, then each panel with its legend.
pub fn render_figure(figure: &Figure, width: usize, height: usize) -> String {
    let mut out = String::new();
    out.push_str(figure.title);
    out.push('\n');

    for panel in &figure.panels {
        out.push('\n');
        out.push_str(&render_panel(panel, width, height));
    }

    out
}

fn render_panel(panel: &Panel, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);
    let [x_min, x_max] = panel.x_bounds;
    let [y_min, y_max] = panel.y_bounds;

    let mut grid = vec![vec![' '; width]; height];

    // Lines first so markers overlay them.
    for series in &panel.series {
        let ch = line_glyph(series.line);
        for run in series.finite_runs() {
            let mut prev = None;
            for &(x, y) in &run {
                let cell = (map_x(x, x_min, x_max, width), map_y(y, y_min, y_max, height));
                if let Some((x0, y0)) = prev {
                    draw_line(&mut grid, x0, y0, cell.0, cell.1, ch);
                }
                prev = Some(cell);
            }
        }
    }

    for (idx, series) in panel.series.iter().enumerate() {
        let marker = MARKERS[idx % MARKERS.len()];
        for (x, y) in series.finite_runs().into_iter().flatten() {
            grid[map_y(y, y_min, y_max, height)][map_x(x, x_min, x_max, width)] = marker;
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{}: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.2e}, {y_max:.2e}]\n",
        panel.x_label
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    for (idx, series) in panel.series.iter().enumerate() {
        out.push_str(&format!("  {} {}\n", MARKERS[idx % MARKERS.len()], series.label));
    }

    out
}

fn line_glyph(style: LineStyle) -> char {
    match style {
        LineStyle::Dotted => '.',
        LineStyle::DashDot => '-',
    }
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish). Only fills blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
