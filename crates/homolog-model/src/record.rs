use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Stable per-record key: the zero-based row ordinal within the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(pub usize);

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.0)
    }
}

/// One roster row as exported, before any cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub key: RecordKey,
    pub name: String,
    pub email: String,
    /// Country name in English, as typed in the roster.
    pub country: String,
    /// Free-text calling code column (e.g. `"+52"`).
    pub calling_code_text: String,
    pub phone: String,
    pub job_title: String,
}

/// A fully resolved output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomologatedRecord {
    pub key: RecordKey,
    pub name: String,
    pub email: String,
    pub country: String,
    pub calling_code: String,
    pub phone: String,
    /// Job title after text normalization.
    pub job_title: String,
    pub category: Category,
}
