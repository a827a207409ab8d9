//! Shared reference fixtures.

#![allow(dead_code)]

use homolog_model::{
    CallingCodeDescriptor, CanonicalCountry, CountryTranslation, EmployeeRecord, RecordKey,
    ReferenceTables, TaxonomyEntry,
};

pub fn translations() -> Vec<CountryTranslation> {
    [
        ("United States", "ESTADOS UNIDOS"),
        ("Spain", "ESPAÑA"),
        ("Mexico", "MÉXICO"),
        ("Peru", "PERÚ"),
        ("Atlantis", "ATLÁNTIDA"),
        ("Spain", "REINO DE ESPAÑA"),
    ]
    .into_iter()
    .map(|(english, spanish)| CountryTranslation {
        english: english.to_string(),
        spanish: spanish.to_string(),
    })
    .collect()
}

pub fn canonical_countries() -> Vec<CanonicalCountry> {
    ["MÉXICO\u{a0}", "PERÚ", "ESPAÑA"]
        .into_iter()
        .map(|name| CanonicalCountry {
            name: name.to_string(),
        })
        .collect()
}

pub fn calling_codes() -> Vec<CallingCodeDescriptor> {
    [
        "México (+52)",
        "España (+34)",
        "Perú (+51)",
        "USA (+1)",
        "Puerto Rico (+1 787)",
        "Antártida",
    ]
    .into_iter()
    .map(|descriptor| CallingCodeDescriptor {
        descriptor: descriptor.to_string(),
    })
    .collect()
}

pub fn references() -> ReferenceTables {
    ReferenceTables {
        translations: translations(),
        canonical_countries: canonical_countries(),
        calling_codes: calling_codes(),
        taxonomy: vec![
            TaxonomyEntry {
                job_title: "Gerente de ventas".to_string(),
                area: "GERENTE".to_string(),
            },
            TaxonomyEntry {
                job_title: "Jefe de planta".to_string(),
                area: "Jefatura".to_string(),
            },
        ],
    }
}

pub fn employee(
    key: usize,
    name: &str,
    email: &str,
    country: &str,
    calling_code: &str,
    job_title: &str,
) -> EmployeeRecord {
    EmployeeRecord {
        key: RecordKey(key),
        name: name.to_string(),
        email: email.to_string(),
        country: country.to_string(),
        calling_code_text: calling_code.to_string(),
        phone: format!("555-{key:04}"),
        job_title: job_title.to_string(),
    }
}

/// Six rows covering every stage outcome.
pub fn roster() -> Vec<EmployeeRecord> {
    vec![
        employee(0, "Ana", "ana@example.com", "Mexico", "+52", "Gerente de Producción"),
        employee(1, "Luis", "luis@example.com", "Spain", "+34", "Analista de Datos"),
        employee(2, "Eve", "eve@example.com", "Narnia", "+99", "Analista"),
        employee(3, "Bob", "bob@example.com", "Atlantis", "", "Supervisor de Turno"),
        employee(4, "Ana B.", "ANA@example.com", "United States", "+1", "Vicepresidente"),
        employee(5, "Carl", "carl@example.com", "Peru", "+52", "Jefa de Compras"),
    ]
}
