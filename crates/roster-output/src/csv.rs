//! CSV export of record tables.
//!
//! Files start with a UTF-8 byte-order mark so spreadsheet applications
//! detect the encoding of Arabic headers and values.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use roster_model::{CellValue, Table};
use tracing::info;

use crate::error::{OutputError, Result};

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes `table` as BOM-prefixed CSV: header row, then one line per row.
///
/// Cells use their display form; nulls become empty fields.
pub fn write_csv<W: Write>(table: &Table, mut writer: W) -> Result<()> {
    writer.write_all(UTF8_BOM)?;
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(&table.columns)?;
    for row in &table.rows {
        out.write_record(row.iter().map(field))?;
    }
    out.flush()?;
    Ok(())
}

/// Writes `table` to `path`, creating parent directories as needed.
pub fn export_csv(table: &Table, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(table, BufWriter::new(file))?;
    info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "CSV exported"
    );
    Ok(())
}

/// Download payload for `table`.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_csv(table, &mut bytes)?;
    Ok(bytes)
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Create {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn field(value: &CellValue) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_then_header_then_rows() {
        let table = Table::from_rows(
            vec!["Dept".to_string(), "Age".to_string()],
            vec![
                vec![CellValue::text("HR"), CellValue::from(31.0)],
                vec![CellValue::text("a,b"), CellValue::Null],
            ],
        )
        .unwrap();
        let bytes = to_csv_bytes(&table).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = std::str::from_utf8(&bytes[UTF8_BOM.len()..]).unwrap();
        assert_eq!(text, "Dept,Age\nHR,31\n\"a,b\",\n");
    }

    #[test]
    fn empty_table_still_has_header() {
        let bytes = to_csv_bytes(&Table::new(vec!["Dept".to_string()])).unwrap();
        assert_eq!(&bytes[UTF8_BOM.len()..], b"Dept\n");
    }
}
