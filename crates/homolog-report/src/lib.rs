//! Writers for the homologated roster.
//!
//! - **XLSX**: one sheet, plain string cells
//! - **CSV**: `;`-delimited with a header row
//! - **JSON**: the per-stage run report

mod csv;
mod error;
mod json;
mod outputs;
mod xlsx;

pub use crate::csv::{SEPARATOR, write_csv, write_csv_to};
pub use error::{ExportError, Result};
pub use json::write_report_json;
pub use outputs::{DEFAULT_OUTPUT, OutputFormat, OutputPaths, write_outputs};
pub use xlsx::{SHEET_NAME, write_xlsx};
