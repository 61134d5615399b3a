//! Benchmark result generation.
//!
//! Evaluates the standard and fast `exp` implementations over an evenly spaced
//! grid and writes one CSV row per grid point, in the column layout the
//! analysis pipeline reads back.
//!
//! The double-precision fast columns run the `f32` approximations on the
//! narrowed input and widen the result, the same way a single-precision
//! routine is used from double-precision code.

use std::io::Write;

use log::debug;

use crate::error::{AppError, EXIT_INPUT, EXIT_RENDER};
use crate::fastexp::{fast_exp, very_fast_exp};

/// Columns written by `write_results`, in order.
pub const RESULT_COLUMNS: [&str; 8] = [
    "x_float",
    "exp_float",
    "exp_fast_float",
    "exp_very_fast_float",
    "x_double",
    "exp_double",
    "exp_fast_double",
    "exp_very_fast_double",
];

/// Half-open input range `[min, max)` sampled every `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            min: -50.0,
            max: 50.0,
            step: 0.001,
        }
    }
}

impl Grid {
    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(AppError::new(EXIT_INPUT, "Grid bounds and step must be finite."));
        }
        if self.step <= 0.0 {
            return Err(AppError::new(EXIT_INPUT, format!("Grid step must be > 0 (got {}).", self.step)));
        }
        if self.max <= self.min {
            return Err(AppError::new(
                EXIT_INPUT,
                format!("Grid max ({}) must be greater than min ({}).", self.max, self.min),
            ));
        }
        Ok(())
    }

    /// Grid points, accumulated by repeated addition of `step`.
    pub fn points(&self) -> impl Iterator<Item = f64> {
        let Grid { min, max, step } = *self;
        std::iter::successors(Some(min), move |x| Some(x + step)).take_while(move |x| *x < max)
    }
}

/// One generated row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    pub x_float: f32,
    pub exp_float: f32,
    pub exp_fast_float: f32,
    pub exp_very_fast_float: f32,
    pub x_double: f64,
    pub exp_double: f64,
    pub exp_fast_double: f64,
    pub exp_very_fast_double: f64,
}

impl ResultRow {
    pub fn at(x: f64) -> Self {
        let fx = x as f32;
        Self {
            x_float: fx,
            exp_float: fx.exp(),
            exp_fast_float: fast_exp(fx),
            exp_very_fast_float: very_fast_exp(fx),
            x_double: x,
            exp_double: x.exp(),
            exp_fast_double: fast_exp(fx) as f64,
            exp_very_fast_double: very_fast_exp(fx) as f64,
        }
    }

    /// Shortest round-trip text for every field.
    fn to_record(self) -> [String; 8] {
        [
            self.x_float.to_string(),
            self.exp_float.to_string(),
            self.exp_fast_float.to_string(),
            self.exp_very_fast_float.to_string(),
            self.x_double.to_string(),
            self.exp_double.to_string(),
            self.exp_fast_double.to_string(),
            self.exp_very_fast_double.to_string(),
        ]
    }
}

/// Write the header and one row per grid point. Returns the row count.
pub fn write_results<W: Write>(writer: W, grid: &Grid) -> Result<usize, AppError> {
    grid.validate()?;

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(RESULT_COLUMNS)
        .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to write CSV header: {e}")))?;

    let mut rows = 0usize;
    for x in grid.points() {
        wtr.write_record(ResultRow::at(x).to_record())
            .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to write CSV row: {e}")))?;
        rows += 1;
    }

    wtr.flush()
        .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to flush CSV output: {e}")))?;
    debug!("wrote {rows} rows for {grid:?}");
    Ok(rows)
}
