//! Population split on a designator column.

use roster_model::{PopulationRule, Table};
use tracing::debug;

use crate::error::{Result, require_column};

/// Disjoint, exhaustive partition of a table's rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationSplit {
    /// Rows whose designator is text equal to the literal.
    pub matched: Table,
    /// Every other row, including rows with a null or non-text designator.
    pub unmatched: Table,
}

/// Splits `table` on `column == literal`, preserving row order in both halves.
///
/// The designator column is checked before any row is looked at.
pub fn split_population(table: &Table, column: &str, literal: &str) -> Result<PopulationSplit> {
    let idx = require_column(table, column)?;
    let (matched, unmatched): (Vec<usize>, Vec<usize>) = (0..table.height())
        .partition(|&row| table.rows[row][idx].as_text() == Some(literal));
    debug!(
        column,
        matched = matched.len(),
        unmatched = unmatched.len(),
        "population split"
    );
    Ok(PopulationSplit {
        matched: table.select_rows(&matched),
        unmatched: table.select_rows(&unmatched),
    })
}

pub fn split_by_rule(table: &Table, rule: &PopulationRule) -> Result<PopulationSplit> {
    split_population(table, &rule.column, &rule.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;
    use roster_model::CellValue;

    fn nationality_table(values: Vec<CellValue>) -> Table {
        Table::from_rows(
            vec!["Nationality".to_string(), "Id".to_string()],
            values
                .into_iter()
                .enumerate()
                .map(|(idx, value)| vec![value, CellValue::from(idx as i64)])
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn splits_on_exact_text() {
        let table = nationality_table(vec![
            CellValue::text("A"),
            CellValue::text("B"),
            CellValue::text("A"),
            CellValue::text("A "),
        ]);
        let split = split_population(&table, "Nationality", "A").unwrap();
        assert_eq!(split.matched.height(), 2);
        assert_eq!(split.unmatched.height(), 2);
        assert_eq!(split.matched.rows[1][1], CellValue::from(2i64));
    }

    #[test]
    fn null_and_numeric_designators_are_unmatched() {
        let table = nationality_table(vec![CellValue::Null, CellValue::from(1.0)]);
        let split = split_population(&table, "Nationality", "1").unwrap();
        assert!(split.matched.is_empty());
        assert_eq!(split.unmatched.height(), 2);
    }

    #[test]
    fn missing_designator_column_fails() {
        let table = Table::new(vec!["Id".to_string()]);
        let err = split_population(&table, "Nationality", "A").unwrap_err();
        assert_eq!(
            err,
            ProfileError::MissingColumn {
                column: "Nationality".to_string()
            }
        );
    }

    #[test]
    fn split_by_rule_uses_rule_fields() {
        let table = nationality_table(vec![CellValue::text("A")]);
        let split = split_by_rule(&table, &PopulationRule::new("Nationality", "A")).unwrap();
        assert_eq!(split.matched.height(), 1);
    }
}
