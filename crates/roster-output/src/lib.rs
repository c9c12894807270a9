//! Export of filtered roster subsets and dashboard reports.

mod csv;
mod error;
mod json;

pub use crate::csv::{UTF8_BOM, export_csv, to_csv_bytes, write_csv};
pub use error::{OutputError, Result};
pub use json::{export_json_report, write_json_report};
