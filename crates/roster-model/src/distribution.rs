//! Aggregates behind the descriptive charts (bar, pie, treemap, histogram, box).

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Frequency of one distinct value in a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: CellValue,
    pub count: usize,
}

/// Half-open bin `[lower, upper)`; the last bin of a histogram also includes `upper`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub column: String,
    pub bins: Vec<HistogramBin>,
    /// Non-null cells that were not numeric.
    pub skipped_count: usize,
}

impl Histogram {
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

/// Five-number summary of one group's numeric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub group: CellValue,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}
