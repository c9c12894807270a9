//! CSV rosters, read with polars and presented as a one-sheet workbook.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::frame::table_from_dataframe;
use crate::workbook::{Sheet, Workbook};

/// Reads a CSV file into a single-sheet workbook named after the file stem.
pub fn read_csv_workbook(path: &Path) -> Result<Workbook> {
    validate_encoding(path)?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Sheet1")
        .to_string();
    let table = table_from_dataframe(&df)?;
    Ok(Workbook::new(vec![Sheet { name, table }]))
}

/// Rejects UTF-16 input; a UTF-8 BOM is fine.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| {
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

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::CellValue;
    use std::io::Write;
    use tempfile::Builder;

    fn create_temp_csv(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_workbook() {
        let file = create_temp_csv(b"Dept,Age\nHR,31\nIT,\n");
        let workbook = read_csv_workbook(file.path()).unwrap();
        let sheet = workbook.first_sheet().unwrap();
        assert_eq!(sheet.table.columns, vec!["Dept", "Age"]);
        assert_eq!(sheet.table.height(), 2);
        assert_eq!(sheet.table.rows[0][1], CellValue::Number(31.0));
        assert!(sheet.table.rows[1][1].is_null());
    }

    #[test]
    fn test_blank_and_na_rows_are_skipped() {
        let file = create_temp_csv(b"Dept,Sponsor\nHR,N/A\n,\nNA,NULL\nIT,Acme\n");
        let workbook = read_csv_workbook(file.path()).unwrap();
        let table = &workbook.sheets()[0].table;
        assert_eq!(table.height(), 2);
        assert_eq!(table.rows[0][0], CellValue::text("HR"));
        assert!(table.rows[0][1].is_null());
        assert_eq!(table.rows[1][1], CellValue::text("Acme"));
    }

    #[test]
    fn test_utf8_bom_is_stripped_from_header() {
        let file = create_temp_csv("\u{feff}Dept,Age\nHR,31\n".as_bytes());
        let workbook = read_csv_workbook(file.path()).unwrap();
        assert_eq!(workbook.sheets()[0].table.columns[0], "Dept");
    }

    #[test]
    fn test_utf16_is_rejected() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'A', 0]);
        let result = read_csv_workbook(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding { .. })
        ));
    }
}
