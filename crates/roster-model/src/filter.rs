use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Conjunctive value-membership predicate over columns.
///
/// A row matches when, for every column with at least one selected value,
/// the row's cell is one of the selected values. Columns with no selected
/// values impose no constraint, so the default spec matches every row.
/// `Null` can never be selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    selections: BTreeMap<String, BTreeSet<CellValue>>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds values to the selection of `column`.
    pub fn select<I>(&mut self, column: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = CellValue>,
    {
        let entry = self.selections.entry(column.into()).or_default();
        entry.extend(values.into_iter().filter(|value| !value.is_null()));
        self
    }

    #[must_use]
    pub fn with<I>(mut self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = CellValue>,
    {
        self.select(column, values);
        self
    }

    pub fn clear_column(&mut self, column: &str) {
        self.selections.remove(column);
    }

    /// True when no column carries a selection.
    pub fn is_empty(&self) -> bool {
        self.selections.values().all(BTreeSet::is_empty)
    }

    /// Columns that constrain rows, with their selected values.
    pub fn constraints(&self) -> impl Iterator<Item = (&str, &BTreeSet<CellValue>)> {
        self.selections
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(column, values)| (column.as_str(), values))
    }
}
