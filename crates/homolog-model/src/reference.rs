//! Raw reference relations, as handed over by the loader.
//!
//! Values are cell text with surrounding whitespace trimmed. All
//! normalization (diacritics, non-breaking spaces, descriptor parsing)
//! happens in the transform crate.

use serde::{Deserialize, Serialize};

/// English to Spanish country name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTranslation {
    pub english: String,
    pub spanish: String,
}

/// Authoritative Spanish spelling of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalCountry {
    pub name: String,
}

/// Combined `"Name (+NN)"` calling-code descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallingCodeDescriptor {
    pub descriptor: String,
}

/// Job title to area pair from the taxonomy sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub job_title: String,
    pub area: String,
}

/// All reference relations for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub translations: Vec<CountryTranslation>,
    pub canonical_countries: Vec<CanonicalCountry>,
    pub calling_codes: Vec<CallingCodeDescriptor>,
    /// Documentation-only taxonomy; never drives classification.
    pub taxonomy: Vec<TaxonomyEntry>,
}
