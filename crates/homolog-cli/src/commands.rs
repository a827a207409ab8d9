use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, trace};

use homolog_ingest::{load_references, load_roster};
use homolog_model::{Category, HomologatedRecord};
use homolog_report::{OutputPaths, write_outputs, write_report_json};
use homolog_transform::{JobTitleClassifier, homologate, normalize, to_frame};

use crate::cli::{CategoriesArgs, ClassifyArgs, RunArgs};
use crate::config::{ConfigFile, RunSettings};
use crate::logging::redact_value;
use crate::summary::apply_table_style;
use crate::types::{ClassifiedTitle, RunResult};

pub fn run_homologation(args: &RunArgs) -> Result<RunResult> {
    let file = ConfigFile::discover(args.config.as_deref())?;
    let settings = RunSettings::resolve(file, args);
    let run_span = info_span!("run", roster = %settings.roster.display());
    let _run_guard = run_span.enter();

    let roster = load_roster(&settings.roster)
        .with_context(|| format!("load roster {}", settings.roster.display()))?;
    let references = load_references(&settings.translations, &settings.workbook, &settings.sheets)
        .context("load reference tables")?;

    let homologation = homologate(&roster, &references, &settings.options);
    trace_records(&homologation.records);

    let mut outputs = OutputPaths::default();
    let mut report_file = None;
    if settings.dry_run {
        info!("dry run, no files written");
    } else {
        let mut frame = to_frame(&homologation.records).context("build output frame")?;
        outputs = write_outputs(&mut frame, &settings.output, settings.format)
            .context("write homologated roster")?;
        if let Some(path) = &settings.report {
            write_report_json(&homologation.report, path).context("write run report")?;
            report_file = Some(path.clone());
        }
    }

    Ok(RunResult {
        settings,
        report: homologation.report,
        outputs,
        report_file,
    })
}

fn trace_records(records: &[HomologatedRecord]) {
    for record in records {
        trace!(
            key = %record.key,
            name = redact_value(&record.name),
            email = redact_value(&record.email),
            country = %record.country,
            category = %record.category,
            "homologated record"
        );
    }
}

pub fn classify_titles(args: &ClassifyArgs) -> Vec<ClassifiedTitle> {
    let classifier = JobTitleClassifier::new(args.rule_order.into());
    args.titles
        .iter()
        .map(|title| {
            let matched_text = if args.raw {
                title.clone()
            } else {
                normalize(title)
            };
            let matched = classifier.matching_rule(&matched_text);
            ClassifiedTitle {
                title: title.clone(),
                category: matched.map_or(Category::Otra, |m| m.category),
                rule: matched.map(|m| (m.rule_index, m.pattern)),
                matched_text,
            }
        })
        .collect()
}

/// The rule table in evaluation order, ending with the fallback.
pub fn categories_table(args: &CategoriesArgs) -> Table {
    let classifier = JobTitleClassifier::new(args.rule_order.into());
    let mut table = Table::new();
    table.set_header(vec!["#", "Área", "Patterns"]);
    apply_table_style(&mut table);
    for (position, rule) in classifier.rules().enumerate() {
        let patterns = rule
            .patterns
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            (position + 1).to_string(),
            rule.category.to_string(),
            patterns,
        ]);
    }
    table.add_row(vec![
        "-".to_string(),
        Category::Otra.to_string(),
        "(no match)".to_string(),
    ]);
    table
}
