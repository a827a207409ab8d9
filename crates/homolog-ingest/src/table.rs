use crate::error::{IngestError, Result};

/// A header row plus string cells, independent of the source format.
#[derive(Debug, Clone)]
pub struct Table {
    /// Human-readable origin, e.g. `formato.xlsx [País]`.
    pub source: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

impl Table {
    /// Build a table whose first non-blank row is the header.
    ///
    /// Blank rows are skipped and short rows are padded with empty cells.
    pub fn from_raw_rows(source: impl Into<String>, raw_rows: Vec<Vec<String>>) -> Result<Self> {
        let source = source.into();
        let mut rows = raw_rows
            .into_iter()
            .filter(|row| row.iter().any(|value| !value.trim().is_empty()));
        let Some(header_row) = rows.next() else {
            return Err(IngestError::EmptyTable { table: source });
        };
        let headers: Vec<String> = header_row
            .iter()
            .map(|value| normalize_header(value))
            .collect();
        let rows = rows
            .map(|record| {
                (0..headers.len())
                    .map(|idx| record.get(idx).map(|v| normalize_cell(v)).unwrap_or_default())
                    .collect()
            })
            .collect();
        Ok(Self {
            source,
            headers,
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Case-insensitive header lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = normalize_header(name).to_lowercase();
        self.headers
            .iter()
            .position(|header| header.to_lowercase() == wanted)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| IngestError::MissingColumn {
                table: self.source.clone(),
                column: name.to_string(),
            })
    }

    /// Cell text at `(row, column)`, empty when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }
}
