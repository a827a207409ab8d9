use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::error::{IngestError, Result};
use crate::table::Table;

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) | Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        // Whole numbers come back as floats; keep them free of a ".0" suffix.
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", *value as i64)
        }
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        other => other.to_string(),
    }
}

/// Sheet names of a workbook, in file order.
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    let workbook = open_workbook_auto(path).map_err(|e| IngestError::workbook(path, e))?;
    Ok(workbook.sheet_names().to_vec())
}

/// Read one sheet (or the first sheet when `sheet` is `None`) into a [`Table`].
pub fn read_sheet(path: &Path, sheet: Option<&str>) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::workbook(path, e))?;
    let names: Vec<String> = workbook.sheet_names().to_vec();
    let name = match sheet {
        Some(wanted) => names
            .iter()
            .find(|name| name.trim() == wanted.trim())
            .cloned()
            .ok_or_else(|| IngestError::MissingSheet {
                path: path.to_path_buf(),
                sheet: wanted.to_string(),
                available: names.join(", "),
            })?,
        None => names
            .first()
            .cloned()
            .ok_or_else(|| IngestError::workbook(path, "workbook contains no sheets"))?,
    };
    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| IngestError::workbook(path, format!("sheet '{name}': {e}")))?;
    let raw_rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    Table::from_raw_rows(format!("{} [{name}]", path.display()), raw_rows)
}
