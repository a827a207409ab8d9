//! Roster homologation core.
//!
//! Normalizes job titles, resolves English country names to canonical
//! Spanish spellings and calling codes, and assigns each job title a
//! functional-role [`Category`](homolog_model::Category).

pub mod calling_code;
pub mod classify;
pub mod country;
pub mod frame;
pub mod index;
pub mod pipeline;
pub mod text;

pub use calling_code::{
    CallingCode, CallingCodeResolution, CallingCodeResolver, parse_descriptor, restore_accents,
};
pub use classify::{JobTitleClassifier, LEGACY_RULES, Pattern, Rule, RuleMatch, rule_order};
pub use country::{COUNTRY_OVERRIDES, CountryResolution, CountryResolver, CountrySource};
pub use frame::to_frame;
pub use index::FirstWinsIndex;
pub use pipeline::{Homologation, ReferenceIndex, homologate};
pub use text::{country_key, normalize, normalize_country, strip_nbsp};
