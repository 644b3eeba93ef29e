//! Error types for translation lookup.

use thiserror::Error;

/// An error that occurred while translating a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The requested locale has no subtree in the translation table.
    ///
    /// Never silenced, even for [`Translator::trans_or_key`](crate::Translator::trans_or_key).
    #[error("locale not found: '{locale}'")]
    LocaleNotFound { locale: String },

    /// The key did not resolve in the requested or fallback locale.
    #[error(
        "translation key not found: '{key}' (missing '{segment}' in locale '{locale}'){}",
        format_suggestions(suggestions)
    )]
    TranslationKeyNotFound {
        key: String,
        locale: String,
        segment: String,
        suggestions: Vec<String>,
    },

    /// The caller broke the argument contract, e.g. pluralizing without a
    /// numeric `count`.
    #[error("invalid argument for '{key}': {message}")]
    InvalidArgument { key: String, message: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// A non-fatal problem noticed while setting up a translator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationWarning {
    /// No translation table was supplied; every lookup sees an empty table.
    #[error("no translation table supplied, lookups will find nothing")]
    MissingTranslationSource,

    /// The active locale was switched to one the table does not contain.
    #[error("locale '{locale}' is not present in the translation table")]
    UnknownLocale { locale: String },
}

/// Compute "did you mean" suggestions for a missing key segment.
///
/// Returns up to three candidates within edit distance 1 (for keys of three
/// characters or fewer) or 2 (for longer keys), closest first.
pub fn compute_suggestions<'a>(
    target: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };
    let mut candidates: Vec<(usize, &str)> = available
        .into_iter()
        .filter(|candidate| *candidate != target)
        .map(|candidate| (strsim::levenshtein(target, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    candidates.sort_unstable();
    candidates
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
