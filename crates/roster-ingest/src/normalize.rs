//! Header normalization.

use std::collections::HashSet;

use roster_model::Table;
use tracing::debug;

/// Trims surrounding whitespace from every column name and keeps only the
/// first column for each trimmed name. Cell values are carried over untouched.
pub fn normalize_columns(table: &Table) -> Table {
    let mut seen = HashSet::with_capacity(table.width());
    let mut keep = Vec::with_capacity(table.width());
    let mut names = Vec::with_capacity(table.width());
    for (idx, raw) in table.columns.iter().enumerate() {
        let name = raw.trim();
        if seen.insert(name) {
            keep.push(idx);
            names.push(name.to_string());
        } else {
            debug!(column = %name, position = idx, "dropping duplicate column");
        }
    }
    let mut normalized = table.select_columns(&keep);
    normalized.columns = names;
    normalized
}
