//! Roster ingestion utilities.
//!
//! This crate loads uploaded HR rosters into record tables.
//!
//! # Features
//!
//! - **Workbook Loading**: xlsx/xlsm/xlsb/xls/ods via calamine, every sheet read eagerly
//! - **CSV Loading**: CSV files via Polars, exposed as a one-sheet workbook
//! - **Missing Markers**: `N/A`, `NULL`, `NaN` and similar text load as null
//! - **Sheet Selection**: by name, or the first sheet by default
//! - **Header Normalization**: trimmed, de-duplicated column names
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::{load_workbook, normalize_columns};
//!
//! let workbook = load_workbook(Path::new("staff.xlsx"))?;
//! let sheet = workbook.select(Some("Finance"))?;
//! let table = normalize_columns(&sheet.table);
//! ```

mod csv;
mod error;
mod frame;
mod na;
mod normalize;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use csv::{read_csv_workbook, validate_encoding};
pub use frame::{any_to_cell, table_from_dataframe};
pub use workbook::{
    MAX_WORKBOOK_FILE_SIZE, Sheet, Workbook, check_file_size, load_workbook, load_workbook_bytes,
};

// === Normalization ===
pub use normalize::normalize_columns;
