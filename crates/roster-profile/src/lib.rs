//! Data-quality profiling of HR roster tables.
//!
//! Every operation is a pure function of its inputs: the source table is
//! never modified, and all results are freshly built values.

mod completeness;
mod dashboard;
mod distribution;
mod error;
mod filter;
mod missingness;
mod population;

pub use completeness::evaluate_completeness;
pub use dashboard::{
    CategoryCounts, DashboardReport, Distributions, MissingReport, Overview, build_dashboard,
    build_distributions, build_missing_report, build_overview,
};
pub use distribution::{box_stats_by, histogram, value_counts};
pub use error::{ProfileError, Result};
pub use filter::{apply_filter, distinct_values, resolve_values};
pub use missingness::{column_presence, profile_missingness};
pub use population::{PopulationSplit, split_by_rule, split_population};
