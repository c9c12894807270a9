//! Population and completeness rules.

use serde::{Deserialize, Serialize};

/// Splits records on `column == value` (exact text equality).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRule {
    pub column: String,
    pub value: String,
}

impl PopulationRule {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Which columns must be non-null for a record to count as complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum CompletenessPolicy {
    /// Every column except `excluded` must be non-null.
    Exclusion { excluded: Vec<String> },
    /// Every column in `required` must be non-null; other columns are ignored.
    Inclusion { required: Vec<String> },
}

impl CompletenessPolicy {
    pub fn exclusion<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exclusion {
            excluded: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn inclusion<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Inclusion {
            required: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Column names the policy refers to.
    pub fn columns(&self) -> &[String] {
        match self {
            Self::Exclusion { excluded } => excluded,
            Self::Inclusion { required } => required,
        }
    }

    /// Columns left out of a missing-data profile under this policy.
    ///
    /// Excluded columns are irrelevant to the population, so they are hidden
    /// from its profile too; an inclusion policy hides nothing.
    pub fn profile_exclusions(&self) -> &[String] {
        match self {
            Self::Exclusion { excluded } => excluded,
            Self::Inclusion { .. } => &[],
        }
    }
}

/// How to treat policy columns that are absent from the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnStrictness {
    /// Skip absent columns and report them.
    #[default]
    Lenient,
    /// Fail on the first absent column.
    Strict,
}
