//! Integration tests for workbook loading.

use std::path::{Path, PathBuf};

use roster_ingest::{IngestError, load_workbook, load_workbook_bytes, normalize_columns};
use roster_model::CellValue;
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use tempfile::TempDir;

fn write_roster(dir: &Path) -> PathBuf {
    let path = dir.join("staff.xlsx");
    let mut workbook = XlsxWorkbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Finance").unwrap();
    sheet.write_string(0, 0, " Name ").unwrap();
    sheet.write_string(0, 1, "Age").unwrap();
    sheet.write_string(0, 2, "Name").unwrap();
    sheet.write_string(1, 0, "Salma").unwrap();
    sheet.write_number(1, 1, 31.0).unwrap();
    sheet.write_string(1, 2, "duplicate").unwrap();
    sheet.write_string(2, 0, "Omar").unwrap();
    sheet.write_string(2, 2, "duplicate").unwrap();

    let other = workbook.add_worksheet();
    other.set_name("IT").unwrap();
    other.write_string(0, 0, "Dept").unwrap();
    other.write_string(1, 0, "IT").unwrap();

    workbook.save(&path).unwrap();
    path
}

#[test]
fn loads_every_sheet_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write_roster(dir.path());

    let workbook = load_workbook(&path).unwrap();

    assert_eq!(workbook.sheet_names(), vec!["Finance", "IT"]);
    let finance = &workbook.sheet("Finance").unwrap().table;
    assert_eq!(finance.columns, vec![" Name ", "Age", "Name"]);
    assert_eq!(finance.height(), 2);
    assert_eq!(finance.rows[0][1], CellValue::Number(31.0));
    assert!(finance.rows[1][1].is_null());
}

#[test]
fn normalized_sheet_has_unique_trimmed_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_roster(dir.path());

    let workbook = load_workbook(&path).unwrap();
    let table = normalize_columns(&workbook.select(None).unwrap().table);

    assert_eq!(table.columns, vec!["Name", "Age"]);
    assert_eq!(table.rows[0][0], CellValue::text("Salma"));
}

#[test]
fn loads_uploaded_bytes() {
    let dir = TempDir::new().unwrap();
    let path = write_roster(dir.path());
    let bytes = std::fs::read(&path).unwrap();

    let workbook = load_workbook_bytes(bytes).unwrap();

    assert_eq!(workbook.sheets().len(), 2);
    assert_eq!(workbook.sheet("IT").unwrap().table.height(), 1);
}

#[test]
fn corrupt_workbook_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    let result = load_workbook(&path);

    assert!(matches!(result, Err(IngestError::Workbook { .. })));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let result = load_workbook(&dir.path().join("absent.xlsx"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("staff.txt");
    std::fs::write(&path, b"Name\nSalma\n").unwrap();

    let result = load_workbook(&path);

    assert!(matches!(
        result,
        Err(IngestError::UnsupportedFormat { ref extension, .. }) if extension == "txt"
    ));
}

#[test]
fn csv_loads_as_single_sheet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.csv");
    std::fs::write(&path, "Dept,Age\nHR,31\nIT,\n").unwrap();

    let workbook = load_workbook(&path).unwrap();

    assert_eq!(workbook.sheet_names(), vec!["roster"]);
    let table = &workbook.sheets()[0].table;
    assert_eq!(table.height(), 2);
    assert!(table.rows[1][1].is_null());
}
