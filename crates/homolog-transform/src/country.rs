//! Country resolution: English roster name to canonical Spanish spelling.
//!
//! Three stages, each of which may fail:
//! 1. translation: exact join on the English name, yielding a normalized
//!    Spanish working name;
//! 2. overrides: a fixed list of working names whose canonical spelling
//!    differs from the translation;
//! 3. canonical: lookup of the working name in the canonical spellings.

use homolog_model::{CanonicalCountry, CanonicalFallback, CountryTranslation};

use crate::index::FirstWinsIndex;
use crate::text::{normalize, normalize_country, strip_nbsp};

/// Working names replaced before the canonical lookup.
///
/// `ESPANA` maps to itself here; its accent is restored after the
/// calling-code join, which only knows the unaccented spelling.
pub const COUNTRY_OVERRIDES: [(&str, &str); 7] = [
    ("ESTADOS UNIDOS", "USA"),
    ("REPUBLICA DEMOCRATICA DEL CONGO", "CONGO"),
    ("KIRGUISTAN", "KIRGIZSTAN"),
    ("REINO UNIDO (GRAN BRETANA)", "REINO UNIDO"),
    ("GUINEA ECUATORIAL", "GUINEA"),
    ("ESPANA", "ESPANA"),
    ("YEMEN", "YEMEN"),
];

/// Override output for a working name, if any.
pub fn country_override(working_name: &str) -> Option<&'static str> {
    COUNTRY_OVERRIDES
        .iter()
        .find(|(key, _)| *key == working_name)
        .map(|(_, output)| *output)
}

/// Where a resolved country name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountrySource {
    Override,
    Canonical,
    /// No canonical spelling; the working name was kept.
    WorkingName,
    /// No canonical spelling; the name was left empty.
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryResolution {
    Resolved {
        working_name: String,
        country: String,
        source: CountrySource,
    },
    /// The English name is not in the translation table.
    Untranslated,
    /// No canonical spelling and the fallback policy drops the record.
    NoCanonical { working_name: String },
}

impl CountryResolution {
    pub fn country(&self) -> Option<&str> {
        match self {
            CountryResolution::Resolved { country, .. } => Some(country),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CountryResolver {
    translations: FirstWinsIndex<String>,
    canonical: FirstWinsIndex<String>,
    fallback: CanonicalFallback,
}

impl CountryResolver {
    pub fn new(
        translations: &[CountryTranslation],
        canonical: &[CanonicalCountry],
        fallback: CanonicalFallback,
    ) -> Self {
        let translations = translations
            .iter()
            .map(|row| (row.english.trim().to_string(), normalize(&row.spanish)))
            .collect();
        let canonical = canonical
            .iter()
            .map(|row| (normalize_country(&row.name), strip_nbsp(&row.name)))
            .collect();
        Self {
            translations,
            canonical,
            fallback,
        }
    }

    /// Normalized Spanish working name for an English country name.
    pub fn working_name(&self, english: &str) -> Option<&str> {
        self.translations.get(english.trim()).map(String::as_str)
    }

    /// Canonical spelling for a working name.
    pub fn canonical_name(&self, working_name: &str) -> Option<&str> {
        self.canonical.get(working_name).map(String::as_str)
    }

    pub fn resolve(&self, english: &str) -> CountryResolution {
        let Some(working_name) = self.working_name(english) else {
            return CountryResolution::Untranslated;
        };
        let working_name = working_name.to_string();
        if let Some(output) = country_override(&working_name) {
            return CountryResolution::Resolved {
                working_name,
                country: output.to_string(),
                source: CountrySource::Override,
            };
        }
        if let Some(canonical) = self.canonical_name(&working_name) {
            return CountryResolution::Resolved {
                country: canonical.to_string(),
                working_name,
                source: CountrySource::Canonical,
            };
        }
        match self.fallback {
            CanonicalFallback::WorkingName => CountryResolution::Resolved {
                country: working_name.clone(),
                working_name,
                source: CountrySource::WorkingName,
            },
            CanonicalFallback::Blank => CountryResolution::Resolved {
                working_name,
                country: String::new(),
                source: CountrySource::Blank,
            },
            CanonicalFallback::Drop => CountryResolution::NoCanonical { working_name },
        }
    }

    /// Reference rows ignored as repeated keys.
    pub fn duplicate_keys(&self) -> usize {
        self.translations.duplicates() + self.canonical.duplicates()
    }
}
