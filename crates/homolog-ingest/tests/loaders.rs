//! Integration tests for roster and reference loading.

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use homolog_ingest::{
    IngestError, SheetNames, load_reference_workbook, load_references, load_roster,
    load_translations, read_sheet, sheet_names,
};
use homolog_model::RecordKey;

fn write_workbook(path: &Path, sheets: Vec<(&str, Vec<Vec<&str>>)>) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet().set_name(name).expect("sheet name");
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                sheet
                    .write_string(r as u32, c as u16, *value)
                    .expect("write cell");
            }
        }
    }
    workbook.save(path).expect("save workbook");
}

fn reference_workbook(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("formato.xlsx");
    write_workbook(
        &path,
        vec![
            (
                "País",
                vec![vec!["País"], vec!["MEXICO\u{a0}"], vec![""], vec!["PERU"]],
            ),
            (
                "Código país",
                vec![
                    vec!["Código país"],
                    vec!["México (+52)"],
                    vec!["Perú (+51)"],
                ],
            ),
            (
                "Cargo",
                vec![
                    vec!["Puesto", "Área"],
                    vec!["Gerente de ventas", "GERENTE"],
                    vec!["Sin área", ""],
                ],
            ),
        ],
    );
    path
}

#[test]
fn translations_decode_latin1() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("lut_paises.csv");
    let mut bytes = b"CodPais;DescESP;DescENG\n".to_vec();
    bytes.extend_from_slice(b"ES;ESPA\xD1A;Spain\n");
    bytes.extend_from_slice(b"MX;M\xC9XICO;Mexico\n");
    bytes.extend_from_slice(b";;\n");
    std::fs::write(&path, bytes).expect("write csv");

    let translations = load_translations(&path).expect("load translations");

    assert_eq!(translations.len(), 2);
    assert_eq!(translations[0].english, "Spain");
    assert_eq!(translations[0].spanish, "ESPAÑA");
    assert_eq!(translations[1].spanish, "MÉXICO");
}

#[test]
fn translations_require_both_name_columns() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("lut_paises.csv");
    std::fs::write(&path, "DescENG;Other\nSpain;x\n").expect("write csv");

    let error = load_translations(&path).expect_err("missing DescESP");

    match error {
        IngestError::MissingColumn { column, .. } => assert_eq!(column, "DescESP"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_reports_path() {
    let error = load_translations(Path::new("/nonexistent/lut_paises.csv")).expect_err("missing");
    assert!(matches!(error, IngestError::Io { .. }));
    assert!(error.to_string().contains("lut_paises.csv"));
}

#[test]
fn roster_from_csv_assigns_row_keys() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("Datos.csv");
    std::fs::write(
        &path,
        "Nombre,Correo,País,Código país,Teléfono,Puesto de trabajo\n\
         Ana,ana@example.com,Mexico,+52,5512345678,Gerente de Ventas\n\
         ,,,,,\n\
         Luis,luis@example.com,Spain,+34,600111222,Analista\n",
    )
    .expect("write csv");

    let roster = load_roster(&path).expect("load roster");

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].key, RecordKey(0));
    assert_eq!(roster[1].key, RecordKey(1));
    assert_eq!(roster[1].country, "Spain");
    assert_eq!(roster[1].calling_code_text, "+34");
    assert_eq!(roster[0].job_title, "Gerente de Ventas");
}

#[test]
fn roster_from_first_workbook_sheet() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("Datos.xlsx");
    write_workbook(
        &path,
        vec![(
            "Hoja1",
            vec![
                vec![
                    "Nombre",
                    "Correo",
                    "País",
                    "Código país",
                    "Teléfono",
                    "Puesto de trabajo",
                ],
                vec![
                    "Ana",
                    "ana@example.com",
                    "Mexico",
                    "+52",
                    "5512345678",
                    "Directora",
                ],
            ],
        )],
    );

    let roster = load_roster(&path).expect("load roster");

    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].email, "ana@example.com");
    assert_eq!(roster[0].job_title, "Directora");
}

#[test]
fn unsupported_roster_extension() {
    let error = load_roster(Path::new("Datos.json")).expect_err("unsupported");
    assert!(matches!(error, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn reference_workbook_reads_named_sheets() {
    let dir = TempDir::new().expect("tempdir");
    let path = reference_workbook(&dir);

    assert_eq!(
        sheet_names(&path).expect("sheet names"),
        vec!["País", "Código país", "Cargo"]
    );
    let tables = load_reference_workbook(&path, &SheetNames::default()).expect("load workbook");

    let canonical: Vec<_> = tables
        .canonical_countries
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    // Surrounding non-breaking spaces are trimmed like any other whitespace.
    assert_eq!(canonical, vec!["MEXICO", "PERU"]);
    assert_eq!(tables.calling_codes.len(), 2);
    assert_eq!(tables.calling_codes[1].descriptor, "Perú (+51)");
    assert_eq!(tables.taxonomy.len(), 1);
    assert_eq!(tables.taxonomy[0].area, "GERENTE");
    assert!(tables.translations.is_empty());
}

#[test]
fn missing_required_sheet_is_fatal() {
    let dir = TempDir::new().expect("tempdir");
    let path = reference_workbook(&dir);
    let sheets = SheetNames {
        calling_codes: "Codigos".to_string(),
        ..SheetNames::default()
    };

    let error = load_reference_workbook(&path, &sheets).expect_err("missing sheet");

    match error {
        IngestError::MissingSheet {
            sheet, available, ..
        } => {
            assert_eq!(sheet, "Codigos");
            assert!(available.contains("Código país"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_taxonomy_sheet_is_skipped() {
    let dir = TempDir::new().expect("tempdir");
    let path = reference_workbook(&dir);
    let sheets = SheetNames {
        taxonomy: Some("Áreas".to_string()),
        ..SheetNames::default()
    };

    let tables = load_reference_workbook(&path, &sheets).expect("load workbook");

    assert!(tables.taxonomy.is_empty());
    assert_eq!(tables.canonical_countries.len(), 2);
}

#[test]
fn load_references_combines_both_sources() {
    let dir = TempDir::new().expect("tempdir");
    let workbook = reference_workbook(&dir);
    let translations = dir.path().join("lut_paises.csv");
    std::fs::write(&translations, "DescENG;DescESP\nPeru;PERÚ\n").expect("write csv");

    let tables =
        load_references(&translations, &workbook, &SheetNames::default()).expect("load references");

    assert_eq!(tables.translations.len(), 1);
    assert_eq!(tables.canonical_countries.len(), 2);
}

#[test]
fn read_sheet_labels_source() {
    let dir = TempDir::new().expect("tempdir");
    let path = reference_workbook(&dir);
    let table = read_sheet(&path, Some("Código país")).expect("read sheet");
    assert!(table.source.ends_with("[Código país]"));
    assert_eq!(table.headers, vec!["Código país"]);
}
