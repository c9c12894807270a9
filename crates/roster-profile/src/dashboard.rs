//! Dashboard views composed from the profiling primitives.
//!
//! Each view splits the sheet into citizens and non-citizens with the
//! configured [`PopulationRule`](roster_model::PopulationRule) and applies the
//! population's own completeness policy.

use roster_model::{
    AnalyticsConfig, BoxStats, ColumnPresence, CompletenessSummary, DashboardConfig, Histogram,
    MissingnessRow, Table, ValueCount,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::completeness::evaluate_completeness;
use crate::distribution::{box_stats_by, histogram, value_counts};
use crate::error::Result;
use crate::missingness::{column_presence, profile_missingness};
use crate::population::split_by_rule;

/// Completeness metrics per population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub citizens: CompletenessSummary,
    pub non_citizens: CompletenessSummary,
}

/// Missing-data profiles per population, plus an optional single-column split
/// over the whole sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingReport {
    pub citizens: Vec<MissingnessRow>,
    pub non_citizens: Vec<MissingnessRow>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub column: Option<ColumnPresence>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub column: String,
    pub counts: Vec<ValueCount>,
}

/// Chart aggregates for the configured analytics columns that exist in the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distributions {
    pub categories: Vec<CategoryCounts>,
    pub age_histogram: Option<Histogram>,
    pub age_by_gender: Vec<BoxStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub sheet: String,
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<String>,
    pub overview: Overview,
    pub missing: MissingReport,
    pub distributions: Distributions,
}

pub fn build_overview(table: &Table, config: &DashboardConfig) -> Result<Overview> {
    info_span!("overview", rows = table.height()).in_scope(|| -> Result<_> {
        let split = split_by_rule(table, &config.population)?;
        let citizens =
            evaluate_completeness(&split.matched, &config.citizen_policy, config.strictness)?;
        let non_citizens = evaluate_completeness(
            &split.unmatched,
            &config.non_citizen_policy,
            config.strictness,
        )?;
        info!(
            citizens = citizens.total_count,
            non_citizens = non_citizens.total_count,
            "overview built"
        );
        Ok(Overview {
            citizens,
            non_citizens,
        })
    })
}

/// Missing-data report; `column` adds the present/missing split of that column.
pub fn build_missing_report(
    table: &Table,
    config: &DashboardConfig,
    column: Option<&str>,
) -> Result<MissingReport> {
    info_span!("missing", rows = table.height()).in_scope(|| -> Result<_> {
        let split = split_by_rule(table, &config.population)?;
        let citizens = profile_missingness(
            &split.matched,
            config.citizen_policy.profile_exclusions(),
        );
        let non_citizens = profile_missingness(
            &split.unmatched,
            config.non_citizen_policy.profile_exclusions(),
        );
        let column = column
            .map(|column| column_presence(table, column))
            .transpose()?;
        info!(
            citizen_columns = citizens.len(),
            non_citizen_columns = non_citizens.len(),
            "missing-data report built"
        );
        Ok(MissingReport {
            citizens,
            non_citizens,
            column,
        })
    })
}

pub fn build_distributions(table: &Table, analytics: &AnalyticsConfig) -> Result<Distributions> {
    info_span!("distributions", rows = table.height()).in_scope(|| -> Result<_> {
        let mut categories = Vec::new();
        for column in analytics.categorical_columns() {
            if !table.has_column(column) {
                debug!(column, "analytics column not in table, skipping");
                continue;
            }
            categories.push(CategoryCounts {
                column: column.to_string(),
                counts: value_counts(table, column)?,
            });
        }

        let age_histogram = if table.has_column(&analytics.age_column) {
            Some(histogram(
                table,
                &analytics.age_column,
                analytics.histogram_bins,
            )?)
        } else {
            debug!(column = %analytics.age_column, "age column not in table, skipping");
            None
        };

        let age_by_gender = if table.has_column(&analytics.age_column)
            && table.has_column(&analytics.gender_column)
        {
            box_stats_by(table, &analytics.gender_column, &analytics.age_column)?
        } else {
            Vec::new()
        };

        Ok(Distributions {
            categories,
            age_histogram,
            age_by_gender,
        })
    })
}

/// Every dashboard view of one sheet.
pub fn build_dashboard(
    sheet: &str,
    table: &Table,
    config: &DashboardConfig,
    column: Option<&str>,
) -> Result<DashboardReport> {
    info_span!("dashboard", sheet).in_scope(|| -> Result<_> {
        Ok(DashboardReport {
            sheet: sheet.to_string(),
            row_count: table.height(),
            column_count: table.width(),
            columns: table.columns.clone(),
            overview: build_overview(table, config)?,
            missing: build_missing_report(table, config, column)?,
            distributions: build_distributions(table, &config.analytics)?,
        })
    })
}
