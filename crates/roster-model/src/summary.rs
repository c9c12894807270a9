use serde::{Deserialize, Serialize};

/// Percentage of `part` in `total`, rounded to one decimal place with ties
/// going to the even digit (`1/16` is `6.2`, `3/16` is `18.8`).
///
/// Returns `0.0` when `total` is zero.
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 10.0).round_ties_even() / 10.0
}

/// Complete/incomplete record counts for one population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessSummary {
    pub total_count: usize,
    pub complete_count: usize,
    pub incomplete_count: usize,
    pub complete_percent: f64,
    pub incomplete_percent: f64,
    /// Columns whose nullity decided completeness.
    pub checked_columns: Vec<String>,
    /// Policy columns that were not present in the table.
    pub ignored_columns: Vec<String>,
}

impl CompletenessSummary {
    pub fn from_counts(
        total_count: usize,
        complete_count: usize,
        checked_columns: Vec<String>,
        ignored_columns: Vec<String>,
    ) -> Self {
        let incomplete_count = total_count.saturating_sub(complete_count);
        Self {
            total_count,
            complete_count,
            incomplete_count,
            complete_percent: percent(complete_count, total_count),
            incomplete_percent: percent(incomplete_count, total_count),
            checked_columns,
            ignored_columns,
        }
    }
}

/// Null count of one column within a scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingnessRow {
    pub column_name: String,
    pub missing_count: usize,
    pub missing_percent: f64,
}

/// Present/missing split of a single column over a whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPresence {
    pub column: String,
    pub total_count: usize,
    pub present_count: usize,
    pub missing_count: usize,
}

impl ColumnPresence {
    pub fn present_percent(&self) -> f64 {
        percent(self.present_count, self.total_count)
    }

    pub fn missing_percent(&self) -> f64 {
        percent(self.missing_count, self.total_count)
    }
}
