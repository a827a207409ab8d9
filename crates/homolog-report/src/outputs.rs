//! Output file selection and writing.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::csv::write_csv;
use crate::error::{ExportError, Result};
use crate::xlsx::write_xlsx;

/// Default output file, next to the `assets/` directory.
pub const DEFAULT_OUTPUT: &str = "Datos - homologados.xlsx";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
    Both,
}

impl OutputFormat {
    pub fn writes_xlsx(self) -> bool {
        matches!(self, OutputFormat::Xlsx | OutputFormat::Both)
    }

    pub fn writes_csv(self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }
}

/// Files produced by [`write_outputs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub xlsx: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

impl OutputPaths {
    /// Derive one path per requested format from `base`, replacing its
    /// extension.
    pub fn for_format(base: &Path, format: OutputFormat) -> Self {
        Self {
            xlsx: format.writes_xlsx().then(|| base.with_extension("xlsx")),
            csv: format.writes_csv().then(|| base.with_extension("csv")),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.xlsx.iter().chain(self.csv.iter()).map(PathBuf::as_path)
    }
}

/// Write `frame` in every requested format. Returns the written paths.
pub fn write_outputs(
    frame: &mut DataFrame,
    base: &Path,
    format: OutputFormat,
) -> Result<OutputPaths> {
    let paths = OutputPaths::for_format(base, format);
    if let Some(parent) = base.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::io(parent, source))?;
    }
    if let Some(path) = &paths.xlsx {
        write_xlsx(frame, path)?;
        info!(path = %path.display(), rows = frame.height(), "wrote workbook");
    }
    if let Some(path) = &paths.csv {
        write_csv(frame, path)?;
        info!(path = %path.display(), rows = frame.height(), "wrote csv");
    }
    Ok(paths)
}
