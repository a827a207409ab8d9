//! Polars view of the homologated relation.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use homolog_model::HomologatedRecord;
use homolog_model::columns::OUTPUT_COLUMNS;

/// Build the output frame, one string column per entry of [`OUTPUT_COLUMNS`].
pub fn to_frame(records: &[HomologatedRecord]) -> PolarsResult<DataFrame> {
    let fields: [fn(&HomologatedRecord) -> &str; 7] = [
        |r| r.name.as_str(),
        |r| r.email.as_str(),
        |r| r.country.as_str(),
        |r| r.calling_code.as_str(),
        |r| r.phone.as_str(),
        |r| r.job_title.as_str(),
        |r| r.category.as_str(),
    ];
    let columns = OUTPUT_COLUMNS
        .iter()
        .zip(fields)
        .map(|(name, field)| {
            let values: Vec<String> = records.iter().map(|r| field(r).to_string()).collect();
            Series::new((*name).into(), values).into_column()
        })
        .collect::<Vec<_>>();
    DataFrame::new(columns)
}
