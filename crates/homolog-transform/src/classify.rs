//! Job title classification by ordered substring rules.
//!
//! Rules are evaluated in table order and the first rule with a matching
//! pattern decides the category. Matching is case-insensitive and not
//! anchored to word boundaries, so broad patterns shadow narrower rules
//! listed after them: "subdirector" contains "director", "subgerente"
//! contains "gerente" and "vicepresidente" contains "presidente".
//! [`RuleOrder::Specific`] evaluates the narrower rules first.
//!
//! Titles are expected to be normalized (see [`crate::text::normalize`]);
//! patterns spelled with accents therefore only match raw input.

use std::fmt;

use homolog_model::{Category, RuleOrder};

use Pattern::{Contains, Prefix};

/// One case-insensitive pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Matches anywhere in the title.
    Contains(&'static str),
    /// Matches only at the start of the title.
    Prefix(&'static str),
}

impl Pattern {
    pub fn text(self) -> &'static str {
        match self {
            Pattern::Contains(text) | Pattern::Prefix(text) => text,
        }
    }

    /// Match against an already lowercased title.
    fn matches_lowercase(self, lowered_pattern: &str, title: &str) -> bool {
        match self {
            Pattern::Contains(_) => title.contains(lowered_pattern),
            Pattern::Prefix(_) => title.starts_with(lowered_pattern),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Contains(text) => write!(f, "%{text}%"),
            Pattern::Prefix(text) => write!(f, "{text}%"),
        }
    }
}

/// A category and the patterns that select it.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub patterns: &'static [Pattern],
}

/// The rule table in its historical evaluation order.
///
/// Repeated patterns and patterns that cannot match a normalized title are
/// part of the table as it was curated and are kept.
pub static LEGACY_RULES: [Rule; 19] = [
    Rule {
        category: Category::Presidente,
        patterns: &[
            Contains("presidente"),
            Contains("president"),
            Contains("dueno"),
            Contains("propietario"),
            Contains("fundador"),
            Contains("founder"),
        ],
    },
    Rule {
        category: Category::Vicepresidente,
        patterns: &[Contains("vicepresidente"), Contains("vice president")],
    },
    Rule {
        category: Category::Ceo,
        patterns: &[Contains("ceo"), Contains("director ejecutivo")],
    },
    Rule {
        category: Category::Director,
        patterns: &[Contains("director"), Contains("head")],
    },
    Rule {
        category: Category::Subdirector,
        patterns: &[Contains("subdirector"), Contains("subdirector")],
    },
    Rule {
        category: Category::Gerente,
        patterns: &[
            Contains("gerente"),
            Contains("management"),
            Contains("mgr"),
            Contains("superintendente"),
            Contains("superintendent"),
            Contains("contralor"),
            Contains("manager"),
        ],
    },
    Rule {
        category: Category::Subgerente,
        patterns: &[Contains("subgerente"), Contains("assistant manager")],
    },
    Rule {
        category: Category::Auditor,
        patterns: &[Contains("auditor"), Contains("auditoria")],
    },
    Rule {
        category: Category::Ingeniero,
        patterns: &[
            Contains("ingeniero"),
            Contains("engineer"),
            Contains("ing"),
            Contains("enginner"),
            Contains("residente de obra"),
            Contains("ingenieria"),
        ],
    },
    Rule {
        category: Category::Jefe,
        patterns: &[
            Contains("jefe"),
            Contains("chief"),
            Prefix("jefa"),
            Contains("boss"),
        ],
    },
    Rule {
        category: Category::Coordinador,
        patterns: &[
            Contains("coordinador"),
            Contains("coord"),
            Contains("cordinator"),
            Contains("cooerdinador"),
            Contains("cordinador"),
            Contains("coodinador"),
        ],
    },
    Rule {
        category: Category::Lider,
        patterns: &[
            Contains("líder"),
            Contains("lider"),
            Contains("lead"),
            Contains("leader"),
        ],
    },
    Rule {
        category: Category::Responsable,
        patterns: &[
            Contains("responsable"),
            Contains("encargad"),
            Contains("administracion general"),
            Contains("contador general"),
            Contains("inspector"),
            Contains("compliance"),
            Contains("planeacion"),
            Contains("seguridad"),
            Contains("responable"),
            Contains("administrador"),
            Contains("administrator"),
            Contains("respons"),
        ],
    },
    Rule {
        category: Category::Supervisor,
        patterns: &[
            Contains("supervisor"),
            Contains("supervisor"),
            Contains("expeditador"),
            Contains("scheduler"),
            Contains("controlador"),
        ],
    },
    Rule {
        category: Category::Especialista,
        patterns: &[
            Contains("especialista"),
            Contains("control"),
            Contains("supply"),
            Contains("specialist"),
            Contains("optimizacion"),
            Contains("programador"),
            Contains("valuadora"),
            Contains("operacion"),
            Contains("expert"),
            Contains("cajero"),
            Contains("almacen"),
            Contains("gestion"),
            Contains("operative"),
            Contains("contador"),
            Contains("consultor"),
            Contains("tecnico"),
            Contains("consultant"),
            Contains("technician"),
            Contains("trade"),
            Contains("technical"),
            Contains("capacitacion"),
            Contains("assurance"),
            Contains("insights"),
            Contains("logist"),
            Contains("negociador"),
            Contains("facilitador"),
            Contains("planner"),
            Contains("planeador"),
            Contains("compras"),
            Contains("buyer"),
            Contains("docente"),
            Contains("generalist"),
            Contains("mecanico"),
            Contains("Advanced"),
            Contains("traductor"),
            Contains("comprador"),
            Contains("independiente"),
            Contains("emprendedor"),
            Contains("autónomo"),
            Contains("autonomo"),
            Contains("calidad"),
            Contains("independent professional"),
            Contains("freelancer"),
            Contains("mejora"),
            Contains("operador"),
            Contains("operaciones"),
            Contains("professor"),
            Contains("coach"),
            Contains("deposito"),
            Contains("SAP"),
            Contains("especificador"),
            Contains("profesor"),
        ],
    },
    Rule {
        category: Category::Secretario,
        patterns: &[Contains("secretario"), Contains("secretary")],
    },
    Rule {
        category: Category::Analista,
        patterns: &[
            Contains("analista"),
            Contains("analyst"),
            Contains("business intelligence"),
        ],
    },
    Rule {
        category: Category::Asistente,
        patterns: &[
            Contains("assistant"),
            Contains("asistente"),
            Contains("auxiliar"),
            Contains("aux"),
            Contains("assitant"),
            Contains("assistance"),
            Contains("ayudante"),
            Contains("administrativo"),
            Contains("soporte"),
            Contains("Almacenista"),
            Contains("Almacén de herramientas"),
            Contains("practicas"),
            Contains("practicante"),
            Contains("apoyo"),
        ],
    },
    Rule {
        category: Category::Representante,
        patterns: &[
            Contains("sales representative"),
            Contains("representante"),
            Contains("assesor"),
            Contains("atencion al cliente"),
            Contains("impulsador"),
            Contains("vendedor"),
            Contains("ejecutiv"),
            Contains("asesor"),
            Contains("asesor"),
            Contains("customer"),
            Contains("servicio"),
            Contains("agente"),
        ],
    },
];

/// `(narrow, broad)` pairs where `broad` shadows `narrow` in legacy order.
pub const SHADOWED_RULES: [(Category, Category); 3] = [
    (Category::Vicepresidente, Category::Presidente),
    (Category::Subdirector, Category::Director),
    (Category::Subgerente, Category::Gerente),
];

/// Indexes into [`LEGACY_RULES`] in evaluation order.
pub fn rule_order(order: RuleOrder) -> Vec<usize> {
    match order {
        RuleOrder::Legacy => (0..LEGACY_RULES.len()).collect(),
        RuleOrder::Specific => {
            let position = |category: Category| {
                LEGACY_RULES
                    .iter()
                    .position(|rule| rule.category == category)
            };
            let mut indexes = Vec::with_capacity(LEGACY_RULES.len());
            for (idx, rule) in LEGACY_RULES.iter().enumerate() {
                if SHADOWED_RULES
                    .iter()
                    .any(|(narrow, _)| *narrow == rule.category)
                {
                    continue;
                }
                for (narrow, broad) in SHADOWED_RULES {
                    if broad == rule.category
                        && let Some(narrow_idx) = position(narrow)
                    {
                        indexes.push(narrow_idx);
                    }
                }
                indexes.push(idx);
            }
            indexes
        }
    }
}

/// The rule that decided a title's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    /// Position of the rule in [`LEGACY_RULES`].
    pub rule_index: usize,
    pub category: Category,
    pub pattern: Pattern,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    rule_index: usize,
    category: Category,
    patterns: Vec<(Pattern, String)>,
}

/// First-match-wins classifier over [`LEGACY_RULES`].
#[derive(Debug, Clone)]
pub struct JobTitleClassifier {
    order: RuleOrder,
    rules: Vec<CompiledRule>,
}

impl Default for JobTitleClassifier {
    fn default() -> Self {
        Self::new(RuleOrder::Legacy)
    }
}

impl JobTitleClassifier {
    pub fn new(order: RuleOrder) -> Self {
        let rules = rule_order(order)
            .into_iter()
            .map(|rule_index| {
                let rule = &LEGACY_RULES[rule_index];
                CompiledRule {
                    rule_index,
                    category: rule.category,
                    patterns: rule
                        .patterns
                        .iter()
                        .map(|pattern| (*pattern, pattern.text().to_lowercase()))
                        .collect(),
                }
            })
            .collect();
        Self { order, rules }
    }

    pub fn order(&self) -> RuleOrder {
        self.order
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &'static Rule> + '_ {
        self.rules.iter().map(|rule| &LEGACY_RULES[rule.rule_index])
    }

    /// The first rule and pattern matching `title`, if any.
    pub fn matching_rule(&self, title: &str) -> Option<RuleMatch> {
        let lowered = title.to_lowercase();
        self.rules.iter().find_map(|rule| {
            rule.patterns
                .iter()
                .find(|(pattern, text)| pattern.matches_lowercase(text, &lowered))
                .map(|(pattern, _)| RuleMatch {
                    rule_index: rule.rule_index,
                    category: rule.category,
                    pattern: *pattern,
                })
        })
    }

    /// Category for `title`; [`Category::Otra`] when no rule matches.
    pub fn classify(&self, title: &str) -> Category {
        self.matching_rule(title)
            .map_or(Category::Otra, |matched| matched.category)
    }
}
