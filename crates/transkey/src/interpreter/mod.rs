//! Translation engine.
//!
//! This module resolves keys against a translation table, selects plural
//! forms, and substitutes placeholders.

mod error;
mod plural;
mod pluralizer;
mod resolver;
mod translator;

pub use error::{TranslationError, TranslationWarning, compute_suggestions};
pub use plural::{CldrPluralRules, PluralRuleProvider, plural_index};
pub use pluralizer::{evaluate_condition, pluralize, strip_condition};
pub use resolver::resolve;
pub use translator::Translator;
