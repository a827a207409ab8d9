//! Single-sheet XLSX output. Cells are written as plain strings.

use std::path::Path;

use polars::prelude::DataFrame;
use rust_xlsxwriter::{Workbook, XlsxError};

use crate::error::{ExportError, Result};

pub const SHEET_NAME: &str = "Datos";

pub fn write_xlsx(frame: &DataFrame, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook
        .add_worksheet()
        .set_name(SHEET_NAME)
        .map_err(|source| ExportError::xlsx(path, source))?;

    for (col_idx, column) in frame.get_columns().iter().enumerate() {
        let col = u16::try_from(col_idx).map_err(|_| out_of_range(path))?;
        sheet
            .write_string(0, col, column.name().as_str())
            .map_err(|source| ExportError::xlsx(path, source))?;
        let values = column
            .str()
            .map_err(|source| ExportError::polars(path, source))?;
        for (row_idx, value) in values.into_iter().enumerate() {
            let Some(value) = value.filter(|value| !value.is_empty()) else {
                continue;
            };
            let row = u32::try_from(row_idx + 1).map_err(|_| out_of_range(path))?;
            sheet
                .write_string(row, col, value)
                .map_err(|source| ExportError::xlsx(path, source))?;
        }
    }

    workbook
        .save(path)
        .map_err(|source| ExportError::xlsx(path, source))
}

fn out_of_range(path: &Path) -> ExportError {
    ExportError::xlsx(path, XlsxError::RowColumnLimitError)
}
