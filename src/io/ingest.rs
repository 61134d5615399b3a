//! CSV ingest.
//!
//! Turns a CSV stream into a `Table` of raw text columns. No numeric parsing
//! happens here; that is `crate::normalize`'s job.
//!
//! - the first record is the header and defines column names/order
//! - every record must have exactly as many fields as the header
//! - any read or parse failure aborts the whole load (exit code 2)

use std::io::Read;

use csv::StringRecord;
use log::debug;

use crate::error::{AppError, EXIT_INPUT};
use crate::table::{Column, Table};

/// Read a CSV stream into a text table.
pub fn read_table<R: Read>(reader: R) -> Result<Table, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to read CSV headers: {e}")))?
        .clone();

    if headers.is_empty() {
        return Err(AppError::new(EXIT_INPUT, "Input has no CSV header row."));
    }

    let names: Vec<String> = headers.iter().map(normalize_header_name).collect();
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); names.len()];

    let mut record = StringRecord::new();
    loop {
        let more = reader.read_record(&mut record).map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            AppError::new(EXIT_INPUT, format!("CSV parse error at line {line}: {e}"))
        })?;
        if !more {
            break;
        }

        for (column, field) in cells.iter_mut().zip(record.iter()) {
            column.push(field.to_string());
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::text(name, values))
        .collect();

    let table = Table::from_columns(columns)?;
    debug!(
        "ingested {} rows x {} columns: {:?}",
        table.n_rows(),
        table.n_columns(),
        table.column_names().collect::<Vec<_>>()
    );
    Ok(table)
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header. If we don't strip it, the first column can't be looked up.
    name.trim_start_matches('\u{feff}').trim().to_string()
}
