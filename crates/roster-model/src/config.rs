//! Dashboard configuration.
//!
//! Defaults describe the Emirati HR roster layout: a nationality column that
//! separates citizens from residents, and four residency-permit columns that
//! only apply to residents. Any key left out of a configuration file falls
//! back to these defaults.

use serde::{Deserialize, Serialize};

use crate::policy::{ColumnStrictness, CompletenessPolicy, PopulationRule};

pub const DEFAULT_NATIONALITY_COLUMN: &str = "الجنسية";
pub const DEFAULT_CITIZEN_VALUE: &str = "إماراتية";

/// Residence number, sponsor, residence issue date, residence expiry date.
pub const DEFAULT_RESIDENCY_COLUMNS: [&str; 4] = [
    "رقم الأقامة",
    "الكفيل",
    "تاريخ اصدار اللإقامة",
    "تاريخ انتهاء اللإقامة",
];

pub const DEFAULT_GENDER_COLUMN: &str = "الجنس";
pub const DEFAULT_RELIGION_COLUMN: &str = "الديانة";
pub const DEFAULT_DEPARTMENT_COLUMN: &str = "الدائرة";
pub const DEFAULT_AGE_COLUMN: &str = "العمر";
pub const DEFAULT_EDUCATION_COLUMN: &str = "المستوى التعليمي";
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub strictness: ColumnStrictness,

    /// Citizens are the rows where `population.column == population.value`.
    pub population: PopulationRule,

    pub citizen_policy: CompletenessPolicy,

    pub non_citizen_policy: CompletenessPolicy,

    pub analytics: AnalyticsConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            strictness: ColumnStrictness::default(),
            population: PopulationRule::new(DEFAULT_NATIONALITY_COLUMN, DEFAULT_CITIZEN_VALUE),
            citizen_policy: CompletenessPolicy::exclusion(DEFAULT_RESIDENCY_COLUMNS),
            non_citizen_policy: CompletenessPolicy::inclusion(DEFAULT_RESIDENCY_COLUMNS),
            analytics: AnalyticsConfig::default(),
        }
    }
}

/// Columns feeding the descriptive charts. Absent columns are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub gender_column: String,
    pub religion_column: String,
    pub department_column: String,
    pub age_column: String,
    pub education_column: String,
    pub histogram_bins: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            gender_column: DEFAULT_GENDER_COLUMN.to_string(),
            religion_column: DEFAULT_RELIGION_COLUMN.to_string(),
            department_column: DEFAULT_DEPARTMENT_COLUMN.to_string(),
            age_column: DEFAULT_AGE_COLUMN.to_string(),
            education_column: DEFAULT_EDUCATION_COLUMN.to_string(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl AnalyticsConfig {
    /// Categorical columns charted by value frequency.
    pub fn categorical_columns(&self) -> [&str; 4] {
        [
            self.gender_column.as_str(),
            self.religion_column.as_str(),
            self.department_column.as_str(),
            self.education_column.as_str(),
        ]
    }
}
