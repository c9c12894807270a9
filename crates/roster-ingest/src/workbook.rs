//! Spreadsheet loading via calamine.
//!
//! The whole workbook is read eagerly: every sheet is parsed up front and a
//! failure on any sheet rejects the file as a whole.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use chrono::{NaiveDate, NaiveDateTime};
use roster_model::{CellValue, Table, format_number};
use tracing::{debug, info};

use crate::csv::read_csv_workbook;
use crate::error::{IngestError, Result};
use crate::na::{number_cell, text_cell};

/// Maximum file size for workbook loading (500 MB).
pub const MAX_WORKBOOK_FILE_SIZE: u64 = 500 * 1024 * 1024;

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// One named sheet and its raw (not yet normalized) table.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub table: Table,
}

/// All sheets of a loaded workbook, in workbook order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }

    pub fn first_sheet(&self) -> Option<&Sheet> {
        self.sheets.first()
    }

    pub fn sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .iter()
            .find(|sheet| sheet.name == name)
            .ok_or_else(|| IngestError::SheetNotFound {
                sheet: name.to_string(),
                available: self.sheet_names().join(", "),
            })
    }

    /// Picks the named sheet, or the first sheet when no name is given.
    pub fn select(&self, name: Option<&str>) -> Result<&Sheet> {
        match name {
            Some(name) => self.sheet(name),
            None => self.first_sheet().ok_or_else(|| IngestError::NoSheets {
                source_name: "workbook".to_string(),
            }),
        }
    }
}

/// Loads a workbook from disk, dispatching on the file extension.
///
/// Spreadsheet formats go through calamine; `.csv` is read with polars as a
/// single sheet named after the file stem.
pub fn load_workbook(path: &Path) -> Result<Workbook> {
    check_file_size(path, MAX_WORKBOOK_FILE_SIZE)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let source_name = path.display().to_string();

    let workbook = if extension == "csv" {
        read_csv_workbook(path)?
    } else if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        let mut sheets = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
            source_name: source_name.clone(),
            message: e.to_string(),
        })?;
        read_sheets(&mut sheets, &source_name)?
    } else {
        return Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        });
    };

    info!(
        source = %source_name,
        sheet_count = workbook.sheets.len(),
        "workbook loaded"
    );
    Ok(workbook)
}

/// Loads an uploaded spreadsheet held in memory; the format is sniffed from the bytes.
pub fn load_workbook_bytes(bytes: Vec<u8>) -> Result<Workbook> {
    let source_name = "upload".to_string();
    let mut sheets =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| IngestError::Workbook {
            source_name: source_name.clone(),
            message: e.to_string(),
        })?;
    read_sheets(&mut sheets, &source_name)
}

/// Check file existence and size before loading.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

fn read_sheets<RS>(workbook: &mut Sheets<RS>, source_name: &str) -> Result<Workbook>
where
    RS: Read + Seek,
{
    let names = workbook.sheet_names();
    if names.is_empty() {
        return Err(IngestError::NoSheets {
            source_name: source_name.to_string(),
        });
    }
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| IngestError::Workbook {
                source_name: source_name.to_string(),
                message: format!("sheet '{name}': {e}"),
            })?;
        let mut rows = range.rows();
        let table = match rows.next() {
            Some(header) => {
                let columns = header_names(header);
                let mut table = Table::new(columns);
                for raw in rows {
                    let mut row: Vec<CellValue> = raw.iter().map(cell_value).collect();
                    if row.iter().all(CellValue::is_null) {
                        continue;
                    }
                    row.resize(table.width(), CellValue::Null);
                    table.push_row(row)?;
                }
                table
            }
            None => Table::default(),
        };
        debug!(
            sheet = %name,
            rows = table.height(),
            columns = table.width(),
            "sheet parsed"
        );
        sheets.push(Sheet { name, table });
    }
    Ok(Workbook { sheets })
}

fn header_names(header: &[Data]) -> Vec<String> {
    header
        .iter()
        .enumerate()
        .map(|(idx, cell)| match cell {
            Data::Empty => format!("Unnamed: {idx}"),
            Data::String(value) if value.is_empty() => format!("Unnamed: {idx}"),
            Data::String(value) => value.clone(),
            Data::Float(value) => format_number(*value),
            Data::Int(value) => value.to_string(),
            other => other.to_string(),
        })
        .collect()
}

/// Maps a calamine cell onto the tagged cell model.
pub(crate) fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Null,
        Data::String(value) => text_cell(value),
        Data::Float(value) => number_cell(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::text(if *value { "TRUE" } else { "FALSE" }),
        Data::DateTime(value) => match value.as_datetime() {
            Some(stamp) => CellValue::Date(stamp),
            None => number_cell(value.as_f64()),
        },
        Data::DateTimeIso(value) => {
            parse_iso_datetime(value).map_or_else(|| CellValue::Text(value.clone()), CellValue::Date)
        }
        Data::DurationIso(value) => CellValue::Text(value.clone()),
    }
}

fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
