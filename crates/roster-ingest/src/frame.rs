//! Polars DataFrame to record table conversion.

use polars::prelude::*;
use roster_model::{CellValue, Table};

use crate::error::Result;
use crate::na::{number_cell, text_cell};

/// Converts a Polars AnyValue into a tagged cell.
/// Empty strings, NA markers and non-finite floats become `Null`; booleans
/// become `TRUE`/`FALSE` text.
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Null,
        AnyValue::Boolean(b) => CellValue::text(if b { "TRUE" } else { "FALSE" }),
        AnyValue::Int32(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int64(v) => CellValue::Number(v as f64),
        AnyValue::UInt32(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt64(v) => CellValue::Number(v as f64),
        AnyValue::Float32(v) => number_cell(f64::from(v)),
        AnyValue::Float64(v) => number_cell(v),
        AnyValue::String(s) => text_cell(s),
        AnyValue::StringOwned(s) => text_cell(s.as_str()),
        other => CellValue::Text(other.to_string()),
    }
}

/// Copies a DataFrame into a row-major record table, keeping column order.
/// Rows whose cells are all null are dropped.
pub fn table_from_dataframe(df: &DataFrame) -> Result<Table> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}').to_string())
        .collect();
    let mut rows: Vec<Vec<CellValue>> = (0..df.height())
        .map(|_| Vec::with_capacity(columns.len()))
        .collect();
    for column in df.get_columns() {
        for (idx, row) in rows.iter_mut().enumerate() {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            row.push(any_to_cell(value));
        }
    }
    rows.retain(|row| !row.iter().all(CellValue::is_null));
    Ok(Table::from_rows(columns, rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_from_dataframe() {
        let df = DataFrame::new(vec![
            Series::new("Dept".into(), vec![Some("HR"), None, Some("")]).into(),
            Series::new("Age".into(), vec![Some(31i64), Some(40), None]).into(),
        ])
        .unwrap();

        let table = table_from_dataframe(&df).unwrap();

        assert_eq!(table.columns, vec!["Dept", "Age"]);
        assert_eq!(table.height(), 3);
        assert_eq!(table.rows[0][0], CellValue::text("HR"));
        assert!(table.rows[1][0].is_null());
        assert!(table.rows[2][0].is_null());
        assert_eq!(table.rows[1][1], CellValue::Number(40.0));
        assert!(table.rows[2][1].is_null());
    }

    #[test]
    fn test_all_null_rows_are_dropped() {
        let df = DataFrame::new(vec![
            Series::new("Dept".into(), vec![Some("HR"), Some("N/A"), None]).into(),
            Series::new("Age".into(), vec![Some(31.0f64), None, Some(f64::NAN)]).into(),
        ])
        .unwrap();

        let table = table_from_dataframe(&df).unwrap();

        assert_eq!(table.height(), 1);
        assert_eq!(table.rows[0][0], CellValue::text("HR"));
    }

    #[test]
    fn test_na_markers_are_null() {
        assert!(any_to_cell(AnyValue::String("NA")).is_null());
        assert!(any_to_cell(AnyValue::String("#N/A")).is_null());
        assert!(any_to_cell(AnyValue::Float64(f64::NAN)).is_null());
        assert_eq!(any_to_cell(AnyValue::String("HR")), CellValue::text("HR"));
    }

    #[test]
    fn test_any_to_cell_boolean() {
        assert_eq!(any_to_cell(AnyValue::Boolean(false)), CellValue::text("FALSE"));
        assert_eq!(any_to_cell(AnyValue::Float32(1.5)), CellValue::Number(1.5));
    }
}
