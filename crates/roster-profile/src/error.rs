use roster_model::Table;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("column '{column}' not found")]
    MissingColumn { column: String },
    #[error("histogram needs at least one bin")]
    InvalidBins,
}

pub type Result<T> = std::result::Result<T, ProfileError>;

/// Index of `column`, or [`ProfileError::MissingColumn`].
pub(crate) fn require_column(table: &Table, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| ProfileError::MissingColumn {
            column: column.to_string(),
        })
}
