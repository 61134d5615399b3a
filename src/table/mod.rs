//! In-memory results table.
//!
//! The table is column-oriented: each column owns a vector of cells and all
//! columns share the same row count. Columns start out as raw text (straight
//! from the CSV) and become numeric after coercion (`crate::normalize`).
//!
//! A numeric cell is an `Option<f64>`:
//! - `None` is the missing-value marker; any arithmetic touching it yields `None`
//! - `Some(v)` is a plain float, including `inf`/`NaN` produced by arithmetic

use crate::error::AppError;

pub mod ops;

pub use ops::{div, sub};

/// A single numeric cell.
pub type Cell = Option<f64>;

/// Cell storage for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Raw cell text as read from the input.
    Text(Vec<String>),
    /// Coerced numeric cells.
    Numeric(Vec<Cell>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Text(v) => v.len(),
            ColumnData::Numeric(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn text(name: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Text(cells),
        }
    }

    pub fn numeric(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(cells),
        }
    }
}

/// The results table: ordered columns of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Build a table from text columns.
    ///
    /// Fails if the columns do not all have the same length.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, AppError> {
        let n_rows = columns.first().map(|c| c.data.len()).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.data.len() != n_rows) {
            return Err(AppError::new(
                crate::error::EXIT_INPUT,
                format!(
                    "Column `{}` has {} rows, expected {n_rows}.",
                    bad.name,
                    bad.data.len()
                ),
            ));
        }
        Ok(Self { columns, n_rows })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Look up a numeric column by name.
    ///
    /// A missing column is fatal. A column that has not been coerced yet is a
    /// programming error in the pipeline order and is reported the same way.
    pub fn numeric(&self, name: &str) -> Result<&[Cell], AppError> {
        let column = self.get(name).ok_or_else(|| AppError::missing_column(name))?;
        match &column.data {
            ColumnData::Numeric(cells) => Ok(cells),
            ColumnData::Text(_) => Err(AppError::new(
                crate::error::EXIT_SCHEMA,
                format!("Column `{name}` has not been converted to numeric."),
            )),
        }
    }

    /// Set a numeric column, replacing an existing column of the same name in
    /// place or appending a new one.
    pub fn set_numeric(&mut self, name: &str, cells: Vec<Cell>) -> Result<(), AppError> {
        if cells.len() != self.n_rows {
            return Err(AppError::new(
                crate::error::EXIT_SCHEMA,
                format!(
                    "Column `{name}` has {} rows, expected {}.",
                    cells.len(),
                    self.n_rows
                ),
            ));
        }

        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.data = ColumnData::Numeric(cells),
            None => self.columns.push(Column::numeric(name, cells)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(vec![
            Column::numeric("a", vec![Some(1.0), None]),
            Column::text("b", vec!["x".to_string(), "2".to_string()]),
        ])
        .unwrap()
    }

    #[test]
    fn set_numeric_appends_then_replaces() {
        let mut t = sample();
        t.set_numeric("c", vec![Some(3.0), Some(4.0)]).unwrap();
        assert_eq!(t.column_names().collect::<Vec<_>>(), ["a", "b", "c"]);

        t.set_numeric("a", vec![Some(9.0), Some(9.0)]).unwrap();
        assert_eq!(t.column_names().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(t.numeric("a").unwrap(), &[Some(9.0), Some(9.0)]);
    }

    #[test]
    fn set_numeric_rejects_wrong_length() {
        let mut t = sample();
        let err = t.set_numeric("c", vec![Some(1.0)]).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_SCHEMA);
    }

    #[test]
    fn numeric_lookup_errors() {
        let t = sample();
        assert_eq!(t.numeric("zzz").unwrap_err().exit_code(), 3);
        assert!(t.numeric("b").is_err());
    }

    #[test]
    fn ragged_columns_rejected() {
        let err = Table::from_columns(vec![
            Column::numeric("a", vec![Some(1.0)]),
            Column::numeric("b", vec![]),
        ])
        .unwrap_err();
        assert!(err.message().contains("`b`"));
    }
}
