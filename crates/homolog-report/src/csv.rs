//! Semicolon-delimited CSV output.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, PolarsResult, SerWriter};

use crate::error::{ExportError, Result};

pub const SEPARATOR: u8 = b';';

/// Write `frame` with a header row to any writer.
pub fn write_csv_to<W: Write>(frame: &mut DataFrame, writer: W) -> PolarsResult<()> {
    CsvWriter::new(writer)
        .include_header(true)
        .with_separator(SEPARATOR)
        .finish(frame)
}

pub fn write_csv(frame: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ExportError::io(path, source))?;
    write_csv_to(frame, file).map_err(|source| ExportError::polars(path, source))
}
