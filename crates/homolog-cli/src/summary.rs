use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use homolog_model::{Category, HomologationReport};

use crate::types::{ClassifiedTitle, RunResult};

/// Unmatched values listed per stage before eliding the rest.
const UNMATCHED_PREVIEW: usize = 5;

pub fn print_summary(result: &RunResult) {
    println!("Roster: {}", result.settings.roster.display());
    if result.settings.dry_run {
        println!("Output: (dry run)");
    }
    for path in result.outputs.iter() {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &result.report_file {
        println!("Report: {}", path.display());
    }
    println!("{}", stage_table(&result.report));
    println!("{}", category_table(&result.report));
    let diagnostics = diagnostics(&result.report);
    if !diagnostics.is_empty() {
        eprintln!("Warnings:");
        for line in diagnostics {
            eprintln!("- {line}");
        }
    }
}

pub fn stage_table(report: &HomologationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Description"),
        header_cell("In"),
        header_cell("Out"),
        header_cell("Dropped"),
        header_cell("Unmatched"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for stage in &report.stages {
        table.add_row(vec![
            Cell::new(stage.stage.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(stage.stage.description()),
            Cell::new(stage.input_rows),
            Cell::new(stage.output_rows),
            count_cell(stage.dropped_rows(), Color::Red),
            unmatched_cell(&stage.unmatched),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("Roster to output"),
        Cell::new(report.roster_rows).add_attribute(Attribute::Bold),
        Cell::new(report.output_rows()).add_attribute(Attribute::Bold),
        count_cell(report.total_dropped(), Color::Red).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

pub fn category_table(report: &HomologationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Área"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in &report.category_counts {
        let label = if category.is_fallback() {
            dim_cell(category)
        } else {
            Cell::new(category)
        };
        table.add_row(vec![label, Cell::new(count)]);
    }
    table
}

/// Non-fatal findings worth a line on stderr.
pub fn diagnostics(report: &HomologationReport) -> Vec<String> {
    let mut lines = Vec::new();
    let resolution = &report.country_resolution;
    if resolution.working_name_fallbacks > 0 {
        lines.push(format!(
            "{} record(s) kept their translated country name (no canonical spelling)",
            resolution.working_name_fallbacks
        ));
    }
    if resolution.blanks > 0 {
        lines.push(format!(
            "{} record(s) had no canonical country spelling",
            resolution.blanks
        ));
    }
    if report.calling_code_mismatches > 0 {
        lines.push(format!(
            "{} record(s) typed a calling code different from their country's",
            report.calling_code_mismatches
        ));
    }
    if report.duplicate_emails > 0 {
        lines.push(format!(
            "{} email address(es) appear on more than one row",
            report.duplicate_emails
        ));
    }
    if report.duplicate_reference_keys > 0 {
        lines.push(format!(
            "{} reference row(s) ignored as repeated keys",
            report.duplicate_reference_keys
        ));
    }
    if !report.unknown_taxonomy_areas.is_empty() {
        lines.push(format!(
            "taxonomy areas not in the category list: {}",
            report.unknown_taxonomy_areas.join(", ")
        ));
    }
    lines
}

pub fn print_classifications(rows: &[ClassifiedTitle]) {
    println!("{}", classification_table(rows));
}

pub fn classification_table(rows: &[ClassifiedTitle]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Title"),
        header_cell("Matched text"),
        header_cell("Área"),
        header_cell("Rule"),
        header_cell("Pattern"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in rows {
        let (rule, pattern) = match row.rule {
            Some((index, pattern)) => (Cell::new(index + 1), Cell::new(pattern)),
            None => (dim_cell("-"), dim_cell("-")),
        };
        table.add_row(vec![
            Cell::new(&row.title),
            Cell::new(&row.matched_text),
            category_cell(row.category),
            rule,
            pattern,
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn unmatched_cell(values: &[String]) -> Cell {
    if values.is_empty() {
        return dim_cell("-");
    }
    let mut text = values
        .iter()
        .take(UNMATCHED_PREVIEW)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if values.len() > UNMATCHED_PREVIEW {
        text.push_str(&format!(" (+{} more)", values.len() - UNMATCHED_PREVIEW));
    }
    Cell::new(text).fg(Color::Yellow)
}

fn category_cell(category: Category) -> Cell {
    if category.is_fallback() {
        dim_cell(category)
    } else {
        Cell::new(category).add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
