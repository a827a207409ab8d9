//! Per-stage accounting for a homologation run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::record::RecordKey;

/// A pipeline stage that can lose rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Translation,
    Canonical,
    CallingCode,
    Classification,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Translation,
        Stage::Canonical,
        Stage::CallingCode,
        Stage::Classification,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Translation => "translation",
            Stage::Canonical => "canonical",
            Stage::CallingCode => "calling-code",
            Stage::Classification => "classification",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Stage::Translation => "English country name to Spanish working name",
            Stage::Canonical => "Working name to canonical spelling",
            Stage::CallingCode => "Canonical name to calling code",
            Stage::Classification => "Job title to area",
        }
    }
}

/// Row accounting for one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageReport {
    pub stage: Stage,
    pub input_rows: usize,
    pub output_rows: usize,
    /// Distinct lookup values that found no match, sorted.
    pub unmatched: Vec<String>,
    /// Keys of the records removed by this stage.
    pub dropped: Vec<RecordKey>,
}

impl StageReport {
    pub fn new(stage: Stage, input_rows: usize) -> Self {
        Self {
            stage,
            input_rows,
            output_rows: input_rows,
            unmatched: Vec::new(),
            dropped: Vec::new(),
        }
    }

    pub fn dropped_rows(&self) -> usize {
        self.input_rows.saturating_sub(self.output_rows)
    }

    pub fn has_losses(&self) -> bool {
        self.dropped_rows() > 0
    }
}

/// How surviving records obtained their country name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResolutionCounts {
    pub overrides: usize,
    pub canonical: usize,
    pub working_name_fallbacks: usize,
    pub blanks: usize,
}

/// Summary of a homologation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomologationReport {
    pub roster_rows: usize,
    pub stages: Vec<StageReport>,
    pub country_resolution: CountryResolutionCounts,
    /// Records whose own calling-code text disagrees with the resolved code.
    pub calling_code_mismatches: usize,
    /// Email addresses appearing on more than one roster row.
    pub duplicate_emails: usize,
    /// Reference rows ignored because an earlier row had the same key.
    pub duplicate_reference_keys: usize,
    /// Taxonomy area labels that are not known categories, sorted.
    pub unknown_taxonomy_areas: Vec<String>,
    pub category_counts: BTreeMap<Category, usize>,
}

impl HomologationReport {
    pub fn stage(&self, stage: Stage) -> Option<&StageReport> {
        self.stages.iter().find(|report| report.stage == stage)
    }

    /// Rows in the final relation.
    pub fn output_rows(&self) -> usize {
        self.stages
            .last()
            .map_or(self.roster_rows, |report| report.output_rows)
    }

    pub fn total_dropped(&self) -> usize {
        self.stages.iter().map(StageReport::dropped_rows).sum()
    }

    pub fn has_losses(&self) -> bool {
        self.total_dropped() > 0
    }
}
