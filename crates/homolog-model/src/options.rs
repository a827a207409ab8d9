//! Configuration options for a homologation run.

use serde::{Deserialize, Serialize};

/// What to emit when a translated country has no canonical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanonicalFallback {
    /// Keep the normalized Spanish working name.
    #[default]
    WorkingName,
    /// Emit an empty country name. Such rows never match a calling code,
    /// so they are lost at the next stage.
    Blank,
    /// Drop the record at the canonical stage.
    Drop,
}

/// Evaluation order of the job-title rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleOrder {
    /// The historical order, where broad rules shadow their narrower
    /// counterparts (DIRECTOR before SUBDIRECTOR, GERENTE before SUBGERENTE,
    /// PRESIDENTE before VICEPRESIDENTE).
    #[default]
    Legacy,
    /// Narrower rules are evaluated before the rules that contain them.
    Specific,
}

/// Options for the homologation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct HomologationOptions {
    pub canonical_fallback: CanonicalFallback,
    pub rule_order: RuleOrder,
    /// Restore the accent of `ESPANA` after the calling-code join.
    pub restore_accents: bool,
}

impl Default for HomologationOptions {
    fn default() -> Self {
        Self {
            canonical_fallback: CanonicalFallback::default(),
            rule_order: RuleOrder::default(),
            restore_accents: true,
        }
    }
}

impl HomologationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options reproducing the historical output: blank canonical names,
    /// legacy rule order.
    pub fn legacy() -> Self {
        Self {
            canonical_fallback: CanonicalFallback::Blank,
            ..Self::default()
        }
    }

    pub fn with_canonical_fallback(mut self, fallback: CanonicalFallback) -> Self {
        self.canonical_fallback = fallback;
        self
    }

    pub fn with_rule_order(mut self, order: RuleOrder) -> Self {
        self.rule_order = order;
        self
    }

    pub fn with_restore_accents(mut self, enable: bool) -> Self {
        self.restore_accents = enable;
        self
    }
}
