//! Typed loaders for the roster and the reference relations.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use homolog_model::columns;
use homolog_model::{
    CallingCodeDescriptor, CanonicalCountry, CountryTranslation, EmployeeRecord, RecordKey,
    ReferenceTables, TaxonomyEntry,
};

use crate::csv_table::read_csv_table;
use crate::error::{IngestError, Result};
use crate::table::Table;
use crate::workbook::read_sheet;

/// Sheet names inside the reference workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SheetNames {
    pub canonical: String,
    pub calling_codes: String,
    /// Documentation-only taxonomy sheet; skipped with a warning when absent.
    pub taxonomy: Option<String>,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            canonical: "País".to_string(),
            calling_codes: "Código país".to_string(),
            taxonomy: Some("Cargo".to_string()),
        }
    }
}

fn has_extension(path: &Path, wanted: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| wanted.iter().any(|w| ext.eq_ignore_ascii_case(w)))
}

/// Read a `.csv` file or the first sheet of a spreadsheet.
pub fn read_table(path: &Path) -> Result<Table> {
    if has_extension(path, &["csv", "txt"]) {
        read_csv_table(path, None)
    } else if has_extension(path, &["xlsx", "xlsm", "xls", "xlsb", "ods"]) {
        read_sheet(path, None)
    } else {
        Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

/// Load the roster export. Row keys are assigned in file order.
pub fn load_roster(path: &Path) -> Result<Vec<EmployeeRecord>> {
    let table = read_table(path)?;
    let roster = roster_from_table(&table)?;
    info!(path = %path.display(), rows = roster.len(), "roster loaded");
    Ok(roster)
}

pub fn roster_from_table(table: &Table) -> Result<Vec<EmployeeRecord>> {
    let name = table.require_column(columns::NAME)?;
    let email = table.require_column(columns::EMAIL)?;
    let country = table.require_column(columns::COUNTRY)?;
    let calling_code = table.require_column(columns::CALLING_CODE)?;
    let phone = table.require_column(columns::PHONE)?;
    let job_title = table.require_column(columns::JOB_TITLE)?;
    Ok((0..table.len())
        .map(|row| EmployeeRecord {
            key: RecordKey(row),
            name: table.cell(row, name).to_string(),
            email: table.cell(row, email).to_string(),
            country: table.cell(row, country).to_string(),
            calling_code_text: table.cell(row, calling_code).to_string(),
            phone: table.cell(row, phone).to_string(),
            job_title: table.cell(row, job_title).to_string(),
        })
        .collect())
}

/// Load the semicolon-delimited English/Spanish country table.
pub fn load_translations(path: &Path) -> Result<Vec<CountryTranslation>> {
    let table = read_csv_table(path, Some(b';'))?;
    let translations = translations_from_table(&table)?;
    info!(path = %path.display(), rows = translations.len(), "country translations loaded");
    Ok(translations)
}

pub fn translations_from_table(table: &Table) -> Result<Vec<CountryTranslation>> {
    let english = table.require_column(columns::TRANSLATION_ENGLISH)?;
    let spanish = table.require_column(columns::TRANSLATION_SPANISH)?;
    Ok((0..table.len())
        .map(|row| CountryTranslation {
            english: table.cell(row, english).to_string(),
            spanish: table.cell(row, spanish).to_string(),
        })
        .filter(|t| !t.english.is_empty())
        .collect())
}

fn single_column(table: &Table, column: &str) -> Result<Vec<String>> {
    let idx = table.require_column(column)?;
    Ok((0..table.len())
        .map(|row| table.cell(row, idx).to_string())
        .filter(|value| !value.is_empty())
        .collect())
}

fn taxonomy_from_table(table: &Table) -> Vec<TaxonomyEntry> {
    (0..table.len())
        .map(|row| TaxonomyEntry {
            job_title: table.cell(row, 0).to_string(),
            area: table.cell(row, 1).to_string(),
        })
        .filter(|entry| !entry.job_title.is_empty() && !entry.area.is_empty())
        .collect()
}

/// Load the canonical-spelling, calling-code and taxonomy sheets.
///
/// The returned tables carry no translations.
pub fn load_reference_workbook(path: &Path, sheets: &SheetNames) -> Result<ReferenceTables> {
    let canonical_countries = single_column(
        &read_sheet(path, Some(&sheets.canonical))?,
        columns::CANONICAL_COUNTRY,
    )?
    .into_iter()
    .map(|name| CanonicalCountry { name })
    .collect::<Vec<_>>();

    let calling_codes = single_column(
        &read_sheet(path, Some(&sheets.calling_codes))?,
        columns::CALLING_CODE_DESCRIPTOR,
    )?
    .into_iter()
    .map(|descriptor| CallingCodeDescriptor { descriptor })
    .collect::<Vec<_>>();

    let taxonomy = match &sheets.taxonomy {
        Some(sheet) => match read_sheet(path, Some(sheet)) {
            Ok(table) => taxonomy_from_table(&table),
            Err(IngestError::MissingSheet { sheet, .. }) => {
                warn!(path = %path.display(), sheet = %sheet, "taxonomy sheet not found, skipping");
                Vec::new()
            }
            Err(error) => return Err(error),
        },
        None => Vec::new(),
    };

    info!(
        path = %path.display(),
        canonical_countries = canonical_countries.len(),
        calling_codes = calling_codes.len(),
        taxonomy = taxonomy.len(),
        "reference workbook loaded"
    );
    Ok(ReferenceTables {
        translations: Vec::new(),
        canonical_countries,
        calling_codes,
        taxonomy,
    })
}

/// Load every reference relation for a run.
pub fn load_references(
    translations: &Path,
    workbook: &Path,
    sheets: &SheetNames,
) -> Result<ReferenceTables> {
    let mut tables = load_reference_workbook(workbook, sheets)?;
    tables.translations = load_translations(translations)?;
    Ok(tables)
}
