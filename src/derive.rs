//! Derived error columns.
//!
//! For each comparison of an approximate result against a reference result we
//! add two columns:
//!
//! - `<stem>_err  = approx - reference`
//! - `<stem>_rerr = <stem>_err / reference`

use log::debug;

use crate::error::AppError;
use crate::table::{Table, div, sub};

/// One approximate-vs-reference comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub approx: &'static str,
    pub reference: &'static str,
}

impl Comparison {
    pub fn err_column(&self) -> String {
        format!("{}_err", self.approx)
    }

    pub fn rerr_column(&self) -> String {
        format!("{}_rerr", self.approx)
    }
}

/// The comparisons computed for a benchmark run, in column order.
pub const COMPARISONS: [Comparison; 5] = [
    Comparison { approx: "exp_fast_float", reference: "exp_float" },
    Comparison { approx: "exp_very_fast_float", reference: "exp_float" },
    Comparison { approx: "exp_float", reference: "exp_double" },
    Comparison { approx: "exp_fast_double", reference: "exp_double" },
    Comparison { approx: "exp_very_fast_double", reference: "exp_double" },
];

/// Add the `_err`/`_rerr` columns for every comparison in `COMPARISONS`.
pub fn derive_errors(table: &mut Table) -> Result<(), AppError> {
    for cmp in &COMPARISONS {
        derive_comparison(table, cmp)?;
    }
    Ok(())
}

/// Add the two error columns for a single comparison.
pub fn derive_comparison(table: &mut Table, cmp: &Comparison) -> Result<(), AppError> {
    let reference = table.numeric(cmp.reference)?;
    let err = sub(table.numeric(cmp.approx)?, reference);
    let rerr = div(&err, reference);

    debug!("derived {} and {}", cmp.err_column(), cmp.rerr_column());
    table.set_numeric(&cmp.err_column(), err)?;
    table.set_numeric(&cmp.rerr_column(), rerr)
}
