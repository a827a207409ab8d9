//! End-to-end homologation over a small roster.

mod common;

use homolog_model::{
    CanonicalFallback, Category, HomologationOptions, RecordKey, RuleOrder, Stage,
};
use homolog_transform::{homologate, to_frame};

fn keys(records: &[homolog_model::HomologatedRecord]) -> Vec<usize> {
    records.iter().map(|record| record.key.0).collect()
}

#[test]
fn default_run_resolves_surviving_rows() {
    let result = homologate(
        &common::roster(),
        &common::references(),
        &HomologationOptions::default(),
    );

    assert_eq!(keys(&result.records), vec![0, 1, 4, 5]);
    let ana = &result.records[0];
    assert_eq!(ana.country, "MÉXICO");
    assert_eq!(ana.calling_code, "52");
    assert_eq!(ana.job_title, "Gerente de Produccion");
    assert_eq!(ana.category, Category::Gerente);
    assert_eq!(ana.phone, "555-0000");

    let luis = &result.records[1];
    assert_eq!(luis.country, "ESPAÑA");
    assert_eq!(luis.calling_code, "34");
    assert_eq!(luis.category, Category::Analista);

    let us = &result.records[2];
    assert_eq!(us.country, "USA");
    assert_eq!(us.calling_code, "1");
    assert_eq!(us.category, Category::Presidente);

    let carl = &result.records[3];
    assert_eq!(carl.country, "PERÚ");
    assert_eq!(carl.calling_code, "51");
    assert_eq!(carl.category, Category::Jefe);
}

#[test]
fn report_accounts_for_every_stage() {
    let result = homologate(
        &common::roster(),
        &common::references(),
        &HomologationOptions::default(),
    );
    let report = &result.report;

    assert_eq!(report.roster_rows, 6);
    let translation = report.stage(Stage::Translation).expect("translation");
    assert_eq!((translation.input_rows, translation.output_rows), (6, 5));
    assert_eq!(translation.unmatched, vec!["Narnia"]);
    assert_eq!(translation.dropped, vec![RecordKey(2)]);

    let canonical = report.stage(Stage::Canonical).expect("canonical");
    assert_eq!((canonical.input_rows, canonical.output_rows), (5, 5));
    assert_eq!(canonical.unmatched, vec!["ATLANTIDA"]);

    let calling_code = report.stage(Stage::CallingCode).expect("calling code");
    assert_eq!((calling_code.input_rows, calling_code.output_rows), (5, 4));
    assert_eq!(calling_code.unmatched, vec!["ATLANTIDA"]);
    assert_eq!(calling_code.dropped, vec![RecordKey(3)]);

    let classification = report.stage(Stage::Classification).expect("classification");
    assert_eq!((classification.input_rows, classification.output_rows), (4, 4));
    assert!(classification.dropped.is_empty());

    assert_eq!(report.output_rows(), 4);
    assert_eq!(report.total_dropped(), 2);
    assert_eq!(report.duplicate_emails, 1);
    assert_eq!(report.calling_code_mismatches, 1);
    assert_eq!(report.duplicate_reference_keys, 1);
    assert_eq!(report.unknown_taxonomy_areas, vec!["Jefatura"]);
    assert_eq!(report.country_resolution.overrides, 2);
    assert_eq!(report.country_resolution.canonical, 2);
    assert_eq!(report.country_resolution.working_name_fallbacks, 1);
    assert_eq!(report.category_counts.values().sum::<usize>(), 4);
    assert_eq!(report.category_counts.get(&Category::Jefe), Some(&1));
}

#[test]
fn stage_counts_chain_and_never_grow() {
    for fallback in [
        CanonicalFallback::WorkingName,
        CanonicalFallback::Blank,
        CanonicalFallback::Drop,
    ] {
        let options = HomologationOptions::default().with_canonical_fallback(fallback);
        let report = homologate(&common::roster(), &common::references(), &options).report;
        assert_eq!(report.stages.len(), Stage::ALL.len());
        assert_eq!(report.stages[0].input_rows, report.roster_rows);
        for pair in report.stages.windows(2) {
            assert!(pair[0].output_rows <= pair[0].input_rows);
            assert_eq!(pair[0].output_rows, pair[1].input_rows);
        }
    }
}

#[test]
fn blank_fallback_loses_row_at_calling_code() {
    let result = homologate(
        &common::roster(),
        &common::references(),
        &HomologationOptions::legacy(),
    );
    let report = &result.report;
    assert_eq!(report.country_resolution.blanks, 1);
    let calling_code = report.stage(Stage::CallingCode).expect("calling code");
    assert_eq!(calling_code.dropped, vec![RecordKey(3)]);
    assert_eq!(calling_code.unmatched, vec!["ATLANTIDA"]);
    assert_eq!(keys(&result.records), vec![0, 1, 4, 5]);
}

#[test]
fn drop_fallback_loses_row_at_canonical() {
    let options = HomologationOptions::default().with_canonical_fallback(CanonicalFallback::Drop);
    let report = homologate(&common::roster(), &common::references(), &options).report;
    let canonical = report.stage(Stage::Canonical).expect("canonical");
    assert_eq!((canonical.input_rows, canonical.output_rows), (5, 4));
    assert_eq!(canonical.dropped, vec![RecordKey(3)]);
    let calling_code = report.stage(Stage::CallingCode).expect("calling code");
    assert!(!calling_code.has_losses());
}

#[test]
fn specific_rule_order_separates_vice_president() {
    let options = HomologationOptions::default().with_rule_order(RuleOrder::Specific);
    let result = homologate(&common::roster(), &common::references(), &options);
    let us = result
        .records
        .iter()
        .find(|record| record.key == RecordKey(4))
        .expect("row 4");
    assert_eq!(us.category, Category::Vicepresidente);
}

#[test]
fn accent_restoration_can_be_disabled() {
    let options = HomologationOptions::default().with_restore_accents(false);
    let result = homologate(&common::roster(), &common::references(), &options);
    assert_eq!(result.records[1].country, "ESPANA");
}

#[test]
fn duplicate_emails_do_not_duplicate_rows() {
    let mut roster = common::roster();
    roster.push(common::employee(
        6,
        "Ana C.",
        "ana@example.com",
        "Mexico",
        "+52",
        "Asistente",
    ));
    let result = homologate(&roster, &common::references(), &HomologationOptions::default());
    assert_eq!(keys(&result.records), vec![0, 1, 4, 5, 6]);
    assert_eq!(result.report.duplicate_emails, 1);
}

#[test]
fn runs_are_deterministic() {
    let options = HomologationOptions::default();
    let first = homologate(&common::roster(), &common::references(), &options);
    let second = homologate(&common::roster(), &common::references(), &options);
    assert_eq!(first.records, second.records);
    assert_eq!(first.report, second.report);
}

#[test]
fn empty_roster_yields_empty_relation() {
    let result = homologate(&[], &common::references(), &HomologationOptions::default());
    assert!(result.records.is_empty());
    assert_eq!(result.report.output_rows(), 0);
    assert!(!result.report.has_losses());
}

#[test]
fn frame_matches_records() {
    let result = homologate(
        &common::roster(),
        &common::references(),
        &HomologationOptions::default(),
    );
    let frame = to_frame(&result.records).expect("frame");
    assert_eq!(frame.height(), result.records.len());
    assert_eq!(frame.width(), 7);
}
