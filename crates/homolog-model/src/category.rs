//! Functional-role categories ("áreas") assigned to job titles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A functional-role bucket for a free-text job title.
///
/// Declaration order matches the legacy rule table, with the `Otra`
/// fallback last. `Ord` follows declaration order so category tallies
/// print in rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Presidente,
    Vicepresidente,
    Ceo,
    Director,
    Subdirector,
    Gerente,
    Subgerente,
    Auditor,
    Ingeniero,
    Jefe,
    Coordinador,
    Lider,
    Responsable,
    Supervisor,
    Especialista,
    #[serde(rename = "SECRETARIO/A")]
    Secretario,
    Analista,
    Asistente,
    Representante,
    Otra,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 20] = [
        Category::Presidente,
        Category::Vicepresidente,
        Category::Ceo,
        Category::Director,
        Category::Subdirector,
        Category::Gerente,
        Category::Subgerente,
        Category::Auditor,
        Category::Ingeniero,
        Category::Jefe,
        Category::Coordinador,
        Category::Lider,
        Category::Responsable,
        Category::Supervisor,
        Category::Especialista,
        Category::Secretario,
        Category::Analista,
        Category::Asistente,
        Category::Representante,
        Category::Otra,
    ];

    /// The label written to the output `Área` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Presidente => "PRESIDENTE",
            Category::Vicepresidente => "VICEPRESIDENTE",
            Category::Ceo => "CEO",
            Category::Director => "DIRECTOR",
            Category::Subdirector => "SUBDIRECTOR",
            Category::Gerente => "GERENTE",
            Category::Subgerente => "SUBGERENTE",
            Category::Auditor => "AUDITOR",
            Category::Ingeniero => "INGENIERO",
            Category::Jefe => "JEFE",
            Category::Coordinador => "COORDINADOR",
            Category::Lider => "LIDER",
            Category::Responsable => "RESPONSABLE",
            Category::Supervisor => "SUPERVISOR",
            Category::Especialista => "ESPECIALISTA",
            Category::Secretario => "SECRETARIO/A",
            Category::Analista => "ANALISTA",
            Category::Asistente => "ASISTENTE",
            Category::Representante => "REPRESENTANTE",
            Category::Otra => "OTRA",
        }
    }

    /// Whether this is the terminal fallback category.
    pub fn is_fallback(self) -> bool {
        self == Category::Otra
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category label: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let label = raw.trim().to_uppercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == label)
            .ok_or_else(|| ParseCategoryError(raw.to_string()))
    }
}
