//! Per-column null counts.

use roster_model::{ColumnPresence, MissingnessRow, Table, percent};

use crate::error::{Result, require_column};

/// Null count and share for every column that has at least one null.
///
/// Rows come out in table column order. Columns named in `excluded` are left
/// out; names that are not in the table are ignored.
pub fn profile_missingness(table: &Table, excluded: &[String]) -> Vec<MissingnessRow> {
    let total = table.height();
    table
        .columns
        .iter()
        .enumerate()
        .filter(|(_, name)| !excluded.contains(*name))
        .filter_map(|(idx, name)| {
            let missing_count = table.column_values(idx).filter(|v| v.is_null()).count();
            (missing_count > 0).then(|| MissingnessRow {
                column_name: name.clone(),
                missing_count,
                missing_percent: percent(missing_count, total),
            })
        })
        .collect()
}

/// Present/missing split of one column across the whole table.
pub fn column_presence(table: &Table, column: &str) -> Result<ColumnPresence> {
    let idx = require_column(table, column)?;
    let missing_count = table.column_values(idx).filter(|v| v.is_null()).count();
    Ok(ColumnPresence {
        column: column.to_string(),
        total_count: table.height(),
        present_count: table.height() - missing_count,
        missing_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;
    use roster_model::CellValue;

    fn table() -> Table {
        Table::from_rows(
            vec!["Name".to_string(), "Age".to_string(), "Sponsor".to_string()],
            vec![
                vec![CellValue::text("a"), CellValue::from(20.0), CellValue::Null],
                vec![CellValue::text("b"), CellValue::Null, CellValue::Null],
                vec![CellValue::text("c"), CellValue::from(40.0), CellValue::Null],
                vec![CellValue::text("d"), CellValue::Null, CellValue::text("s")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn reports_only_columns_with_nulls_in_table_order() {
        let rows = profile_missingness(&table(), &[]);
        let names: Vec<&str> = rows.iter().map(|row| row.column_name.as_str()).collect();
        assert_eq!(names, vec!["Age", "Sponsor"]);
        assert_eq!(rows[0].missing_count, 2);
        assert_eq!(rows[0].missing_percent, 50.0);
        assert_eq!(rows[1].missing_count, 3);
        assert_eq!(rows[1].missing_percent, 75.0);
    }

    #[test]
    fn excluded_columns_are_skipped() {
        let rows = profile_missingness(&table(), &["Sponsor".to_string(), "Visa".to_string()]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].column_name, "Age");
    }

    #[test]
    fn empty_table_has_no_rows() {
        let rows = profile_missingness(&Table::new(vec!["Age".to_string()]), &[]);
        assert!(rows.is_empty());
    }

    #[test]
    fn presence_counts_whole_table() {
        let presence = column_presence(&table(), "Age").unwrap();
        assert_eq!(presence.total_count, 4);
        assert_eq!(presence.present_count, 2);
        assert_eq!(presence.missing_count, 2);
    }

    #[test]
    fn presence_of_unknown_column_fails() {
        assert!(matches!(
            column_presence(&table(), "Visa"),
            Err(ProfileError::MissingColumn { .. })
        ));
    }
}
