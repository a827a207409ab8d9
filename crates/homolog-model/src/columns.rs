//! Column names shared by the loader and the exporter.
//!
//! The roster and the homologated output keep the Spanish headers of the
//! source spreadsheets.

pub const NAME: &str = "Nombre";
pub const EMAIL: &str = "Correo";
pub const COUNTRY: &str = "País";
pub const CALLING_CODE: &str = "Código país";
pub const PHONE: &str = "Teléfono";
pub const JOB_TITLE: &str = "Puesto de trabajo";
pub const AREA: &str = "Área";

/// Columns every roster export must carry.
pub const ROSTER_COLUMNS: [&str; 6] = [NAME, EMAIL, COUNTRY, CALLING_CODE, PHONE, JOB_TITLE];

/// Columns of the homologated output, in order.
pub const OUTPUT_COLUMNS: [&str; 7] = [NAME, EMAIL, COUNTRY, CALLING_CODE, PHONE, JOB_TITLE, AREA];

/// English country name in the translation table.
pub const TRANSLATION_ENGLISH: &str = "DescENG";
/// Spanish country name in the translation table.
pub const TRANSLATION_SPANISH: &str = "DescESP";

/// Canonical spelling column of the `País` sheet.
pub const CANONICAL_COUNTRY: &str = "País";
/// Descriptor column (`"Name (+NN)"`) of the `Código país` sheet.
pub const CALLING_CODE_DESCRIPTOR: &str = "Código país";
