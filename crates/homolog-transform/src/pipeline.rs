//! Roster homologation pipeline.
//!
//! Stages run in a fixed order over the surviving records:
//! translation, canonical spelling, calling code, classification. Lookup
//! stages behave like inner joins and drop the rows they cannot resolve;
//! every drop is recorded in a [`StageReport`].

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info, info_span, warn};

use homolog_model::{
    Category, EmployeeRecord, HomologatedRecord, HomologationOptions, HomologationReport,
    ReferenceTables, Stage, StageReport, TaxonomyEntry,
};

use crate::calling_code::{CallingCodeResolution, CallingCodeResolver, embedded_digits};
use crate::classify::JobTitleClassifier;
use crate::country::{CountryResolution, CountryResolver, CountrySource};
use crate::text::normalize;

/// Lookup structures built once per run from the reference tables.
#[derive(Debug, Clone)]
pub struct ReferenceIndex {
    pub countries: CountryResolver,
    pub calling_codes: CallingCodeResolver,
    pub classifier: JobTitleClassifier,
}

impl ReferenceIndex {
    pub fn build(references: &ReferenceTables, options: &HomologationOptions) -> Self {
        let countries = CountryResolver::new(
            &references.translations,
            &references.canonical_countries,
            options.canonical_fallback,
        );
        let calling_codes =
            CallingCodeResolver::new(&references.calling_codes, options.restore_accents);
        let index = Self {
            countries,
            calling_codes,
            classifier: JobTitleClassifier::new(options.rule_order),
        };
        let duplicates = index.duplicate_keys();
        if duplicates > 0 {
            warn!(
                duplicates,
                "reference tables repeat keys; the first row for each key is used"
            );
        }
        index
    }

    pub fn duplicate_keys(&self) -> usize {
        self.countries.duplicate_keys() + self.calling_codes.duplicate_keys()
    }
}

/// The final relation and its accounting.
#[derive(Debug, Clone)]
pub struct Homologation {
    pub records: Vec<HomologatedRecord>,
    pub report: HomologationReport,
}

struct Survivor<'a> {
    record: &'a EmployeeRecord,
    job_title: String,
    working_name: String,
    country: String,
    calling_code: String,
}

/// Run every stage over `roster`. Output rows keep roster order.
pub fn homologate(
    roster: &[EmployeeRecord],
    references: &ReferenceTables,
    options: &HomologationOptions,
) -> Homologation {
    let span = info_span!("homologate", roster_rows = roster.len());
    let _guard = span.enter();

    let index = ReferenceIndex::build(references, options);
    let mut report = HomologationReport {
        roster_rows: roster.len(),
        duplicate_emails: duplicate_emails(roster),
        duplicate_reference_keys: index.duplicate_keys(),
        unknown_taxonomy_areas: unknown_taxonomy_areas(&references.taxonomy),
        ..HomologationReport::default()
    };
    if report.duplicate_emails > 0 {
        warn!(
            duplicate_emails = report.duplicate_emails,
            "roster repeats email addresses; rows are keyed by position"
        );
    }
    if !report.unknown_taxonomy_areas.is_empty() {
        warn!(
            areas = ?report.unknown_taxonomy_areas,
            "taxonomy sheet uses area labels that are not categories"
        );
    }

    // Titles are normalized before any row is dropped.
    let titles: Vec<String> = roster
        .iter()
        .map(|record| normalize(&record.job_title))
        .collect();

    let mut translation = StageReport::new(Stage::Translation, roster.len());
    let mut canonical = StageReport::new(Stage::Canonical, 0);
    let mut untranslated = BTreeSet::new();
    let mut without_canonical = BTreeSet::new();
    let mut survivors = Vec::with_capacity(roster.len());

    for (record, job_title) in roster.iter().zip(titles) {
        match index.countries.resolve(&record.country) {
            CountryResolution::Untranslated => {
                untranslated.insert(record.country.trim().to_string());
                translation.dropped.push(record.key);
            }
            CountryResolution::NoCanonical { working_name } => {
                canonical.input_rows += 1;
                without_canonical.insert(working_name);
                canonical.dropped.push(record.key);
            }
            CountryResolution::Resolved {
                working_name,
                country,
                source,
            } => {
                canonical.input_rows += 1;
                let counts = &mut report.country_resolution;
                match source {
                    CountrySource::Override => counts.overrides += 1,
                    CountrySource::Canonical => counts.canonical += 1,
                    CountrySource::WorkingName => {
                        counts.working_name_fallbacks += 1;
                        without_canonical.insert(working_name.clone());
                    }
                    CountrySource::Blank => {
                        counts.blanks += 1;
                        without_canonical.insert(working_name.clone());
                    }
                }
                survivors.push(Survivor {
                    record,
                    job_title,
                    working_name,
                    country,
                    calling_code: String::new(),
                });
            }
        }
    }
    translation.output_rows = canonical.input_rows;
    translation.unmatched = untranslated.into_iter().collect();
    canonical.output_rows = survivors.len();
    canonical.unmatched = without_canonical.into_iter().collect();
    finish_stage(&translation);
    finish_stage(&canonical);

    let mut calling_code = StageReport::new(Stage::CallingCode, survivors.len());
    let mut unmatched_codes = BTreeSet::new();
    survivors.retain_mut(|survivor| {
        match index.calling_codes.resolve(&survivor.country) {
            CallingCodeResolution::Resolved { country, code } => {
                let typed = embedded_digits(&survivor.record.calling_code_text);
                if !typed.is_empty() && typed != code {
                    report.calling_code_mismatches += 1;
                    debug!(
                        key = %survivor.record.key,
                        typed = %typed,
                        resolved = %code,
                        "calling code differs from roster"
                    );
                }
                survivor.country = country;
                survivor.calling_code = code;
                true
            }
            CallingCodeResolution::Unmatched => {
                let missing = if survivor.country.is_empty() {
                    &survivor.working_name
                } else {
                    &survivor.country
                };
                unmatched_codes.insert(missing.clone());
                calling_code.dropped.push(survivor.record.key);
                false
            }
        }
    });
    calling_code.output_rows = survivors.len();
    calling_code.unmatched = unmatched_codes.into_iter().collect();
    finish_stage(&calling_code);

    // Every title has a category, so classification never drops rows.
    let mut classification = StageReport::new(Stage::Classification, survivors.len());
    let mut records = Vec::with_capacity(survivors.len());
    for survivor in survivors {
        let category = index.classifier.classify(&survivor.job_title);
        *report.category_counts.entry(category).or_default() += 1;
        records.push(HomologatedRecord {
            key: survivor.record.key,
            name: survivor.record.name.clone(),
            email: survivor.record.email.clone(),
            country: survivor.country,
            calling_code: survivor.calling_code,
            phone: survivor.record.phone.clone(),
            job_title: survivor.job_title,
            category,
        });
    }
    classification.output_rows = records.len();
    if let Some(others) = report.category_counts.get(&Category::Otra) {
        debug!(records = others, "titles matched no rule");
    }
    finish_stage(&classification);

    report.stages = vec![translation, canonical, calling_code, classification];
    info!(
        roster_rows = report.roster_rows,
        output_rows = records.len(),
        dropped_rows = report.total_dropped(),
        calling_code_mismatches = report.calling_code_mismatches,
        "homologation complete"
    );
    Homologation { records, report }
}

fn finish_stage(stage: &StageReport) {
    let span = info_span!("stage", stage = stage.stage.as_str());
    let _guard = span.enter();
    info!(
        input_rows = stage.input_rows,
        output_rows = stage.output_rows,
        dropped_rows = stage.dropped_rows(),
        "stage complete"
    );
    if !stage.unmatched.is_empty() {
        warn!(
            unmatched = stage.unmatched.len(),
            values = ?stage.unmatched,
            "values without a match"
        );
    }
}

/// Distinct addresses, compared case-insensitively, used by more than one row.
fn duplicate_emails(roster: &[EmployeeRecord]) -> usize {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for record in roster {
        let email = record.email.trim().to_lowercase();
        if !email.is_empty() {
            *seen.entry(email).or_default() += 1;
        }
    }
    seen.values().filter(|count| **count > 1).count()
}

/// Taxonomy area labels that do not name a category, sorted.
fn unknown_taxonomy_areas(taxonomy: &[TaxonomyEntry]) -> Vec<String> {
    taxonomy
        .iter()
        .map(|entry| entry.area.trim())
        .filter(|area| !area.is_empty())
        .filter(|area| normalize(area).to_uppercase().parse::<Category>().is_err())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
