//! Row filtering by per-column value sets.

use std::collections::HashSet;

use roster_model::{CellValue, FilterSpec, Table};
use tracing::debug;

use crate::error::{Result, require_column};

/// Rows of `table` that satisfy every constraint in `spec`, in original order.
///
/// Fails with `MissingColumn` when the spec constrains a column the table does not have.
pub fn apply_filter(table: &Table, spec: &FilterSpec) -> Result<Table> {
    let constraints = spec
        .constraints()
        .map(|(column, values)| Ok((require_column(table, column)?, values)))
        .collect::<Result<Vec<_>>>()?;
    if constraints.is_empty() {
        return Ok(table.clone());
    }
    let keep: Vec<usize> = table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            constraints
                .iter()
                .all(|(idx, values)| values.contains(&row[*idx]))
        })
        .map(|(idx, _)| idx)
        .collect();
    debug!(
        constraints = constraints.len(),
        kept = keep.len(),
        total = table.height(),
        "filter applied"
    );
    Ok(table.select_rows(&keep))
}

/// Selectable values of a column: distinct non-null cells in first-appearance order.
pub fn distinct_values(table: &Table, column: &str) -> Result<Vec<CellValue>> {
    let idx = require_column(table, column)?;
    let mut seen = HashSet::new();
    Ok(table
        .column_values(idx)
        .filter(|value| !value.is_null() && seen.insert(*value))
        .cloned()
        .collect())
}

/// Maps textual selections onto the typed values of a column.
///
/// A selection picks every distinct value whose rendered text equals it, so
/// `"20"` selects `Number(20)` as well as `Text("20")`. A selection that
/// renders no existing value is kept as text and simply matches nothing.
pub fn resolve_values<S: AsRef<str>>(
    table: &Table,
    column: &str,
    selections: &[S],
) -> Result<Vec<CellValue>> {
    let distinct = distinct_values(table, column)?;
    let mut resolved = Vec::new();
    for selection in selections {
        let selection = selection.as_ref();
        let before = resolved.len();
        resolved.extend(
            distinct
                .iter()
                .filter(|value| value.to_string() == selection)
                .cloned(),
        );
        if resolved.len() == before {
            resolved.push(CellValue::text(selection));
        }
    }
    Ok(resolved)
}
