//! Descriptive aggregates for the analytics charts.

use std::collections::HashMap;

use roster_model::{BoxStats, CellValue, Histogram, HistogramBin, Table, ValueCount};

use crate::error::{ProfileError, Result, require_column};

/// Frequency of each non-null value, most frequent first.
///
/// Ties keep the order in which the values first appear.
pub fn value_counts(table: &Table, column: &str) -> Result<Vec<ValueCount>> {
    let idx = require_column(table, column)?;
    let mut counts: HashMap<&CellValue, (usize, usize)> = HashMap::new();
    for (position, value) in table.column_values(idx).enumerate() {
        if value.is_null() {
            continue;
        }
        counts.entry(value).or_insert((0, position)).0 += 1;
    }
    let mut ordered: Vec<(&CellValue, (usize, usize))> = counts.into_iter().collect();
    ordered.sort_by(|(_, (left_count, left_first)), (_, (right_count, right_first))| {
        right_count
            .cmp(left_count)
            .then(left_first.cmp(right_first))
    });
    Ok(ordered
        .into_iter()
        .map(|(value, (count, _))| ValueCount {
            value: value.clone(),
            count,
        })
        .collect())
}

/// Equal-width histogram over the finite numeric cells of a column.
///
/// A column with a single distinct number yields one bin; a column with no
/// numbers yields none.
pub fn histogram(table: &Table, column: &str, bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(ProfileError::InvalidBins);
    }
    let idx = require_column(table, column)?;
    let (values, skipped_count) = numeric_values(table.column_values(idx));
    let bins = match min_max(&values) {
        None => Vec::new(),
        Some((min, max)) if min == max => vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }],
        Some((min, max)) => {
            let width = (max - min) / bins as f64;
            let mut out: Vec<HistogramBin> = (0..bins)
                .map(|bin| HistogramBin {
                    lower: min + width * bin as f64,
                    upper: if bin + 1 == bins {
                        max
                    } else {
                        min + width * (bin + 1) as f64
                    },
                    count: 0,
                })
                .collect();
            for value in &values {
                let slot = (((value - min) / width).floor() as usize).min(bins - 1);
                out[slot].count += 1;
            }
            out
        }
    };
    Ok(Histogram {
        column: column.to_string(),
        bins,
        skipped_count,
    })
}

/// Box-plot statistics of `value_column` for each non-null value of `group_column`.
///
/// Groups appear in first-appearance order; groups without numeric values are omitted.
pub fn box_stats_by(table: &Table, group_column: &str, value_column: &str) -> Result<Vec<BoxStats>> {
    let group_idx = require_column(table, group_column)?;
    let value_idx = require_column(table, value_column)?;
    let mut groups: Vec<(&CellValue, Vec<f64>)> = Vec::new();
    for row in &table.rows {
        let group = &row[group_idx];
        if group.is_null() {
            continue;
        }
        let slot = match groups.iter().position(|(existing, _)| *existing == group) {
            Some(slot) => slot,
            None => {
                groups.push((group, Vec::new()));
                groups.len() - 1
            }
        };
        if let Some(value) = row[value_idx].as_number().filter(|v| v.is_finite()) {
            groups[slot].1.push(value);
        }
    }
    Ok(groups
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(group, mut values)| {
            values.sort_by(f64::total_cmp);
            BoxStats {
                group: group.clone(),
                count: values.len(),
                min: values[0],
                q1: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q3: quantile(&values, 0.75),
                max: values[values.len() - 1],
            }
        })
        .collect())
}

fn numeric_values<'a>(cells: impl Iterator<Item = &'a CellValue>) -> (Vec<f64>, usize) {
    let mut values = Vec::new();
    let mut skipped = 0usize;
    for cell in cells {
        match cell.as_number() {
            Some(value) if value.is_finite() => values.push(value),
            _ if cell.is_null() => {}
            _ => skipped += 1,
        }
    }
    (values, skipped)
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

/// Linear-interpolation quantile of sorted, non-empty values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
