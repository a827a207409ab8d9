//! Loading of the roster export and the reference relations.
//!
//! Everything here is plain I/O: cells are read as trimmed text and handed
//! to the transform crate untouched.

pub mod csv_table;
pub mod error;
pub mod loaders;
pub mod table;
pub mod workbook;

pub use csv_table::{detect_delimiter, read_csv_table, read_text};
pub use error::{IngestError, Result};
pub use loaders::{
    SheetNames, load_reference_workbook, load_references, load_roster, load_translations,
    read_table, roster_from_table, translations_from_table,
};
pub use table::Table;
pub use workbook::{read_sheet, sheet_names};
