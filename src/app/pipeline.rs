//! The analysis pipeline shared by the binary and the tests.
//!
//! CSV ingest -> numeric coercion -> derived error columns -> figure.
//!
//! Rendering is left to the caller so the whole analysis stays testable
//! without a terminal.

use std::io::Read;

use log::info;

use crate::error::AppError;
use crate::plot::figure::{Figure, build_figure};
use crate::table::Table;

/// Read a CSV stream and return the fully derived table.
pub fn load_and_derive<R: Read>(reader: R) -> Result<Table, AppError> {
    let mut table = crate::io::ingest::read_table(reader)?;
    crate::normalize::coerce_numeric(&mut table);
    crate::derive::derive_errors(&mut table)?;
    info!("derived error columns for {} rows", table.n_rows());
    Ok(table)
}

/// Run the analysis and build the figure to display.
pub fn analyze<R: Read>(reader: R) -> Result<(Table, Figure), AppError> {
    let table = load_and_derive(reader)?;
    let figure = build_figure(&table)?;
    Ok((table, figure))
}
