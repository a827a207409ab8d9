use std::path::PathBuf;

use homolog_model::{Category, HomologationReport};
use homolog_report::OutputPaths;
use homolog_transform::Pattern;

use crate::config::RunSettings;

#[derive(Debug)]
pub struct RunResult {
    pub settings: RunSettings,
    pub report: HomologationReport,
    pub outputs: OutputPaths,
    pub report_file: Option<PathBuf>,
}

/// One row of `homolog classify` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTitle {
    pub title: String,
    /// The text the rules were matched against.
    pub matched_text: String,
    pub category: Category,
    /// Rule position and pattern; `None` for the fallback.
    pub rule: Option<(usize, Pattern)>,
}
