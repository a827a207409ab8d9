pub mod category;
pub mod columns;
pub mod options;
pub mod record;
pub mod reference;
pub mod report;

pub use category::{Category, ParseCategoryError};
pub use options::{CanonicalFallback, HomologationOptions, RuleOrder};
pub use record::{EmployeeRecord, HomologatedRecord, RecordKey};
pub use reference::{
    CallingCodeDescriptor, CanonicalCountry, CountryTranslation, ReferenceTables, TaxonomyEntry,
};
pub use report::{CountryResolutionCounts, HomologationReport, Stage, StageReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_losses_across_stages() {
        let mut translation = StageReport::new(Stage::Translation, 5);
        translation.output_rows = 4;
        translation.dropped = vec![RecordKey(2)];
        let mut calling_code = StageReport::new(Stage::CallingCode, 4);
        calling_code.output_rows = 3;
        let report = HomologationReport {
            roster_rows: 5,
            stages: vec![translation, calling_code],
            ..HomologationReport::default()
        };
        assert_eq!(report.total_dropped(), 2);
        assert_eq!(report.output_rows(), 3);
        assert!(report.has_losses());
        assert_eq!(
            report.stage(Stage::Translation).map(StageReport::dropped_rows),
            Some(1)
        );
    }

    #[test]
    fn empty_report_keeps_roster_rows() {
        let report = HomologationReport {
            roster_rows: 7,
            ..HomologationReport::default()
        };
        assert_eq!(report.output_rows(), 7);
        assert!(!report.has_losses());
    }
}
