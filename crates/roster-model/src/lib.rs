//! Data model for HR roster quality profiling.
//!
//! Tables hold tagged [`CellValue`]s; everything else in this crate is a
//! derived, read-only view produced by the profiling crate.

pub mod config;
pub mod distribution;
pub mod error;
pub mod filter;
pub mod policy;
pub mod summary;
pub mod table;
pub mod value;

pub use config::{AnalyticsConfig, DashboardConfig};
pub use distribution::{BoxStats, Histogram, HistogramBin, ValueCount};
pub use error::{ModelError, Result};
pub use filter::FilterSpec;
pub use policy::{ColumnStrictness, CompletenessPolicy, PopulationRule};
pub use summary::{ColumnPresence, CompletenessSummary, MissingnessRow, percent};
pub use table::Table;
pub use value::{CellValue, format_number};
