//! Calling-code lookup keyed by country name.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use homolog_model::CallingCodeDescriptor;

use crate::index::FirstWinsIndex;
use crate::text::country_key;

/// `+NN` followed by an optional digit group, as in `"(+1 787)"`.
static DESCRIPTOR_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+(\d{1,5})\s*(\d*)").expect("valid calling code pattern"));

/// Names whose accent is stripped by normalization and restored on output.
pub const ACCENT_RESTORATIONS: [(&str, &str); 1] = [("ESPANA", "ESPAÑA")];

/// A parsed calling-code descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallingCode {
    /// Join key: normalized, uppercased country name.
    pub country: String,
    /// Digits only.
    pub code: String,
}

/// Parse `"Name (+NN)"` into a join key and digits.
///
/// Returns `None` when the descriptor has no `+NN` group or no name.
pub fn parse_descriptor(descriptor: &str) -> Option<CallingCode> {
    let captures = DESCRIPTOR_CODE.captures(descriptor)?;
    let mut code = captures[1].to_string();
    if let Some(extra) = captures.get(2) {
        code.push_str(extra.as_str());
    }
    let name = descriptor.split('(').next().unwrap_or("");
    let country = country_key(name);
    if country.is_empty() {
        return None;
    }
    Some(CallingCode { country, code })
}

/// Display spelling for a joined country name.
pub fn restore_accents(country: &str) -> &str {
    ACCENT_RESTORATIONS
        .iter()
        .find(|(plain, _)| *plain == country)
        .map_or(country, |(_, accented)| *accented)
}

/// Digits embedded in free-text calling-code input (`"+52 "` → `"52"`).
pub fn embedded_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallingCodeResolution {
    Resolved { country: String, code: String },
    Unmatched,
}

#[derive(Debug, Clone)]
pub struct CallingCodeResolver {
    codes: FirstWinsIndex<String>,
    skipped: usize,
    restore_accents: bool,
}

impl CallingCodeResolver {
    pub fn new(descriptors: &[CallingCodeDescriptor], restore_accents: bool) -> Self {
        let mut codes = FirstWinsIndex::new();
        let mut skipped = 0usize;
        for row in descriptors {
            match parse_descriptor(&row.descriptor) {
                Some(parsed) => {
                    codes.insert(parsed.country, parsed.code);
                }
                None => {
                    warn!(descriptor = %row.descriptor, "calling code descriptor not understood");
                    skipped += 1;
                }
            }
        }
        Self {
            codes,
            skipped,
            restore_accents,
        }
    }

    pub fn code_for(&self, country: &str) -> Option<&str> {
        self.codes.get(&country_key(country)).map(String::as_str)
    }

    pub fn resolve(&self, country: &str) -> CallingCodeResolution {
        let Some(code) = self.code_for(country) else {
            return CallingCodeResolution::Unmatched;
        };
        let country = if self.restore_accents {
            restore_accents(country)
        } else {
            country
        };
        CallingCodeResolution::Resolved {
            country: country.to_string(),
            code: code.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Descriptors that could not be parsed.
    pub fn skipped_descriptors(&self) -> usize {
        self.skipped
    }

    pub fn duplicate_keys(&self) -> usize {
        self.codes.duplicates()
    }
}
