//! Record completeness under an exclusion or inclusion policy.
//!
//! A record is complete when none of its checked cells is null. The checked
//! columns depend on the policy:
//!
//! - exclusion: every table column except the excluded ones
//! - inclusion: only the required columns
//!
//! Either way the checked set may end up empty, in which case every record is
//! vacuously complete.

use roster_model::{CellValue, ColumnStrictness, CompletenessPolicy, CompletenessSummary, Table};
use tracing::debug;

use crate::error::{ProfileError, Result};

/// Counts complete and incomplete records of `table`.
pub fn evaluate_completeness(
    table: &Table,
    policy: &CompletenessPolicy,
    strictness: ColumnStrictness,
) -> Result<CompletenessSummary> {
    let checked = checked_columns(table, policy, strictness)?;
    let complete_count = table
        .rows
        .iter()
        .filter(|row| is_complete(row, &checked.indices))
        .count();
    let checked_names = checked
        .indices
        .iter()
        .map(|&idx| table.columns[idx].clone())
        .collect();
    let summary = CompletenessSummary::from_counts(
        table.height(),
        complete_count,
        checked_names,
        checked.ignored,
    );
    debug!(
        total = summary.total_count,
        complete = summary.complete_count,
        ignored = summary.ignored_columns.len(),
        "completeness evaluated"
    );
    Ok(summary)
}

fn is_complete(row: &[CellValue], checked: &[usize]) -> bool {
    checked.iter().all(|&idx| !row[idx].is_null())
}

struct CheckedColumns {
    indices: Vec<usize>,
    ignored: Vec<String>,
}

fn checked_columns(
    table: &Table,
    policy: &CompletenessPolicy,
    strictness: ColumnStrictness,
) -> Result<CheckedColumns> {
    let mut listed = Vec::new();
    let mut ignored = Vec::new();
    for column in policy.columns() {
        match table.column_index(column) {
            Some(idx) => {
                if !listed.contains(&idx) {
                    listed.push(idx);
                }
            }
            None if strictness == ColumnStrictness::Strict => {
                return Err(ProfileError::MissingColumn {
                    column: column.clone(),
                });
            }
            None => {
                debug!(column = %column, "policy column not in table, ignoring");
                if !ignored.contains(column) {
                    ignored.push(column.clone());
                }
            }
        }
    }

    let indices = match policy {
        CompletenessPolicy::Exclusion { .. } => (0..table.width())
            .filter(|idx| !listed.contains(idx))
            .collect(),
        CompletenessPolicy::Inclusion { .. } => {
            listed.sort_unstable();
            listed
        }
    };
    Ok(CheckedColumns { indices, ignored })
}
