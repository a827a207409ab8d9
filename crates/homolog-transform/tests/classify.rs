//! Job title classification: rule order, shadowing and pattern quirks.

use proptest::prelude::*;

use homolog_model::{Category, RuleOrder};
use homolog_transform::classify::SHADOWED_RULES;
use homolog_transform::{JobTitleClassifier, LEGACY_RULES, Pattern, normalize};

/// One title per category, chosen so no earlier rule fires under the
/// specific order.
const TITLES: [(&str, Category); 20] = [
    ("Presidente del Consejo", Category::Presidente),
    ("Vicepresidente Comercial", Category::Vicepresidente),
    ("CEO", Category::Ceo),
    ("Director de Finanzas", Category::Director),
    ("Subdirector de Planta", Category::Subdirector),
    ("Gerente de Ventas", Category::Gerente),
    ("Subgerente de Tienda", Category::Subgerente),
    ("Auditor Interno", Category::Auditor),
    ("Ingeniero Civil", Category::Ingeniero),
    ("Jefe de Turno", Category::Jefe),
    ("Coordinador de Proyectos", Category::Coordinador),
    ("Lider de Equipo", Category::Lider),
    ("Responsable de Almacen", Category::Responsable),
    ("Supervisor de Produccion", Category::Supervisor),
    ("Especialista en Nominas", Category::Especialista),
    ("Secretario General", Category::Secretario),
    ("Analista de Datos", Category::Analista),
    ("Asistente de Direccion", Category::Asistente),
    ("Vendedor de Mostrador", Category::Representante),
    ("Zookeeper of Rare Birds", Category::Otra),
];

#[test]
fn specific_order_reaches_every_category() {
    let classifier = JobTitleClassifier::new(RuleOrder::Specific);
    for (title, expected) in TITLES {
        assert_eq!(classifier.classify(title), expected, "{title}");
    }
}

#[test]
fn legacy_order_shadows_narrow_rules() {
    let classifier = JobTitleClassifier::new(RuleOrder::Legacy);
    for (title, expected) in TITLES {
        let shadowed_by = SHADOWED_RULES
            .iter()
            .find(|(narrow, _)| *narrow == expected)
            .map(|(_, broad)| *broad);
        assert_eq!(
            classifier.classify(title),
            shadowed_by.unwrap_or(expected),
            "{title}"
        );
    }
    assert_eq!(
        classifier.classify("Subdirector de Operaciones"),
        Category::Director
    );
    assert_eq!(classifier.classify("Assistant Manager"), Category::Gerente);
}

#[test]
fn default_classifier_is_legacy() {
    assert_eq!(JobTitleClassifier::default().order(), RuleOrder::Legacy);
    assert_eq!(
        JobTitleClassifier::new(RuleOrder::Specific).classify("Assistant Manager"),
        Category::Subgerente
    );
}

#[test]
fn matching_is_case_insensitive_and_unanchored() {
    let classifier = JobTitleClassifier::default();
    assert_eq!(classifier.classify("gerente de ventas"), Category::Gerente);
    assert_eq!(classifier.classify("GERENTE DE VENTAS"), Category::Gerente);
    // "ing" matches inside unrelated words.
    assert_eq!(classifier.classify("Training Specialist"), Category::Ingeniero);
}

#[test]
fn jefa_is_prefix_anchored() {
    let classifier = JobTitleClassifier::default();
    let matched = classifier.matching_rule("Jefa de Compras").expect("match");
    assert_eq!(matched.category, Category::Jefe);
    assert_eq!(matched.pattern, Pattern::Prefix("jefa"));
    assert_eq!(classifier.classify("Subjefa de Area"), Category::Otra);
}

#[test]
fn feminine_secretary_title_is_not_matched() {
    assert_eq!(
        JobTitleClassifier::default().classify("Secretaria"),
        Category::Otra
    );
}

#[test]
fn accented_patterns_only_match_raw_titles() {
    let classifier = JobTitleClassifier::default();
    let raw = classifier.matching_rule("Líder de Proyecto").expect("raw match");
    assert_eq!(raw.pattern, Pattern::Contains("líder"));
    let normalized = classifier
        .matching_rule(&normalize("Líder de Proyecto"))
        .expect("normalized match");
    assert_eq!(normalized.pattern, Pattern::Contains("lider"));
    assert_eq!(normalized.category, Category::Lider);
}

#[test]
fn uppercase_patterns_match_any_case() {
    let matched = JobTitleClassifier::default()
        .matching_rule("SAP Basis")
        .expect("match");
    assert_eq!(matched.category, Category::Especialista);
    assert_eq!(matched.pattern, Pattern::Contains("SAP"));
}

#[test]
fn matching_rule_reports_table_position() {
    let classifier = JobTitleClassifier::new(RuleOrder::Specific);
    let matched = classifier.matching_rule("CEO").expect("match");
    assert_eq!(matched.rule_index, 2);
    assert_eq!(LEGACY_RULES[matched.rule_index].category, Category::Ceo);
    assert!(classifier.matching_rule("Zookeeper").is_none());
}

#[test]
fn rules_iterate_in_evaluation_order() {
    let legacy: Vec<_> = JobTitleClassifier::new(RuleOrder::Legacy)
        .rules()
        .map(|rule| rule.category)
        .collect();
    assert_eq!(legacy[0], Category::Presidente);
    let specific: Vec<_> = JobTitleClassifier::new(RuleOrder::Specific)
        .rules()
        .map(|rule| rule.category)
        .collect();
    assert_eq!(specific[0], Category::Vicepresidente);
    assert_eq!(legacy.len(), specific.len());
}

fn arb_title() -> impl Strategy<Value = String> {
    let words = vec![
        "sub", "director", "gerente", "vice", "presidente", "assistant ", "manager", "ceo",
        " de ", "ventas", "jefa", "analista", " ",
    ];
    prop::collection::vec(prop::sample::select(words), 0..6).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn orders_disagree_only_on_shadowed_pairs(title in arb_title()) {
        let legacy = JobTitleClassifier::new(RuleOrder::Legacy).classify(&title);
        let specific = JobTitleClassifier::new(RuleOrder::Specific).classify(&title);
        if legacy != specific {
            prop_assert!(SHADOWED_RULES.contains(&(specific, legacy)));
        }
    }

    #[test]
    fn classification_is_deterministic(title in arb_title()) {
        let classifier = JobTitleClassifier::default();
        prop_assert_eq!(classifier.classify(&title), classifier.classify(&title));
    }
}
