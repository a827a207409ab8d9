use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::table::Table;

/// Read a text file as UTF-8, falling back to Windows-1252.
///
/// Reference CSVs exported from Excel on Spanish-locale machines are
/// usually Latin-1; Windows-1252 is a superset for the printable range.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::io(path, source))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(error) => {
            debug!(path = %path.display(), "input is not UTF-8, decoding as Windows-1252");
            let bytes = error.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Pick `;` or `,` from whichever appears more often in the header line.
pub fn detect_delimiter(text: &str) -> u8 {
    let first_line = text.lines().next().unwrap_or("");
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    if semicolons >= commas && semicolons > 0 {
        b';'
    } else {
        b','
    }
}

/// Read a CSV file into a [`Table`]. `None` sniffs the delimiter.
pub fn read_csv_table(path: &Path, delimiter: Option<u8>) -> Result<Table> {
    let text = read_text(path)?;
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&text));
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        raw_rows.push(record.iter().map(str::to_string).collect());
    }
    Table::from_raw_rows(path.display().to_string(), raw_rows)
}
