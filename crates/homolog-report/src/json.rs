//! Machine-readable run report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use homolog_model::HomologationReport;

use crate::error::{ExportError, Result};

pub fn write_report_json(report: &HomologationReport, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ExportError::io(path, source))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| ExportError::io(path, source))
}
