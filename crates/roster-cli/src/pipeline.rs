//! Shared steps behind the CLI commands: loading a sheet and building filters.

use std::path::Path;

use anyhow::{Context, Result, bail};
use roster_ingest::{load_workbook, normalize_columns};
use roster_model::{FilterSpec, Table};
use roster_profile::resolve_values;
use tracing::{debug, info};

use crate::logging::redact_value;

/// A selected sheet after header normalization.
#[derive(Debug, Clone)]
pub struct LoadedSheet {
    pub name: String,
    pub table: Table,
}

/// Loads `path` and normalizes the chosen sheet (the first one by default).
pub fn load_sheet(path: &Path, sheet: Option<&str>) -> Result<LoadedSheet> {
    let workbook =
        load_workbook(path).with_context(|| format!("load workbook {}", path.display()))?;
    let selected = workbook.select(sheet).context("select sheet")?;
    let table = normalize_columns(&selected.table);
    info!(
        sheet = %selected.name,
        rows = table.height(),
        columns = table.width(),
        "sheet loaded"
    );
    Ok(LoadedSheet {
        name: selected.name.clone(),
        table,
    })
}

/// One `--where COLUMN=V1,V2` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    pub column: String,
    pub values: Vec<String>,
}

/// Parses `COLUMN=V1,V2`. The column is trimmed; values are kept verbatim,
/// and an empty right-hand side selects nothing.
pub fn parse_where(raw: &str) -> Result<WhereClause> {
    let Some((column, values)) = raw.split_once('=') else {
        bail!("invalid filter '{raw}': expected COLUMN=VALUE[,VALUE...]");
    };
    let column = column.trim();
    if column.is_empty() {
        bail!("invalid filter '{raw}': column name is empty");
    }
    let values = if values.is_empty() {
        Vec::new()
    } else {
        values.split(',').map(str::to_string).collect()
    };
    Ok(WhereClause {
        column: column.to_string(),
        values,
    })
}

/// Resolves textual clauses against `table` into a typed filter.
///
/// Clauses on the same column accumulate their values.
pub fn build_filter(table: &Table, clauses: &[WhereClause]) -> Result<FilterSpec> {
    let mut spec = FilterSpec::new();
    for clause in clauses {
        let values = resolve_values(table, &clause.column, &clause.values)
            .with_context(|| format!("filter on '{}'", clause.column))?;
        debug!(
            column = %clause.column,
            values = %redact_value(&clause.values.join(",")),
            "filter selection"
        );
        spec.select(clause.column.clone(), values);
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::CellValue;

    #[test]
    fn parse_where_splits_values() {
        let clause = parse_where(" Dept =HR,IT").unwrap();
        assert_eq!(clause.column, "Dept");
        assert_eq!(clause.values, vec!["HR", "IT"]);
    }

    #[test]
    fn parse_where_keeps_arabic_text() {
        let clause = parse_where("الجنسية=إماراتية").unwrap();
        assert_eq!(clause.column, "الجنسية");
        assert_eq!(clause.values, vec!["إماراتية"]);
    }

    #[test]
    fn parse_where_rejects_missing_separator() {
        assert!(parse_where("Dept").is_err());
        assert!(parse_where("=HR").is_err());
    }

    #[test]
    fn repeated_columns_accumulate() {
        let table = Table::from_rows(
            vec!["Dept".to_string()],
            vec![vec![CellValue::text("HR")], vec![CellValue::text("IT")]],
        )
        .unwrap();
        let clauses = vec![parse_where("Dept=HR").unwrap(), parse_where("Dept=IT").unwrap()];
        let spec = build_filter(&table, &clauses).unwrap();
        let (_, values) = spec.constraints().next().unwrap();
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn unknown_filter_column_fails() {
        let table = Table::new(vec!["Dept".to_string()]);
        let clauses = vec![parse_where("Visa=x").unwrap()];
        assert!(build_filter(&table, &clauses).is_err());
    }
}
