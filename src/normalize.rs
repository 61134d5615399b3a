//! Numeric coercion.
//!
//! Every column is converted to numeric cells. A cell that does not parse
//! becomes missing instead of failing the load, so a column of labels simply
//! ends up entirely missing.

use log::debug;

use crate::table::{Cell, ColumnData, Table};

/// Coerce every column of `table` to numeric, in place.
///
/// Already-numeric columns are left untouched, which makes this idempotent.
pub fn coerce_numeric(table: &mut Table) {
    for column in table.columns_mut() {
        let ColumnData::Text(cells) = &column.data else {
            continue;
        };

        let parsed: Vec<Cell> = cells.iter().map(|s| parse_cell(s)).collect();
        let missing = parsed.iter().filter(|c| c.is_none()).count();
        if missing > 0 {
            debug!("column `{}`: {missing}/{} cells missing after coercion", column.name, parsed.len());
        }
        column.data = ColumnData::Numeric(parsed);
    }
}

/// Parse one raw cell.
///
/// Empty cells, unparseable text and a literal NaN are all missing.
pub fn parse_cell(raw: &str) -> Cell {
    let v = raw.trim().parse::<f64>().ok()?;
    if v.is_nan() { None } else { Some(v) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    #[test]
    fn parse_cell_cases() {
        assert_eq!(parse_cell("1.5"), Some(1.5));
        assert_eq!(parse_cell("  -2e-3 "), Some(-2e-3));
        assert_eq!(parse_cell("inf"), Some(f64::INFINITY));
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("abc"), None);
        assert_eq!(parse_cell("NaN"), None);
    }

    #[test]
    fn coerces_all_columns() {
        let mut table = Table::from_columns(vec![
            Column::text("x", vec!["1".into(), "oops".into()]),
            Column::text("label", vec!["a".into(), "b".into()]),
        ])
        .unwrap();

        coerce_numeric(&mut table);

        assert_eq!(table.numeric("x").unwrap(), &[Some(1.0), None]);
        assert_eq!(table.numeric("label").unwrap(), &[None, None]);
    }

    #[test]
    fn coercion_is_idempotent() {
        let mut table = Table::from_columns(vec![Column::text(
            "x",
            vec!["1".into(), "".into(), "3.25".into()],
        )])
        .unwrap();

        coerce_numeric(&mut table);
        let once = table.clone();
        coerce_numeric(&mut table);

        assert_eq!(table, once);
    }
}
