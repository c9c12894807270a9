//! JSON report output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::csv::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Pretty-printed JSON of `report`, followed by a newline.
pub fn write_json_report<T: Serialize, W: Write>(report: &T, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn export_json_report<T: Serialize>(report: &T, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_json_report(report, BufWriter::new(file))?;
    info!(path = %path.display(), "JSON report written");
    Ok(())
}
