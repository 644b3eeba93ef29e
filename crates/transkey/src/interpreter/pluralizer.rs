//! Plural form selection over `|`-separated sentences.
//!
//! Selection runs in two passes. The first looks for a segment whose inline
//! condition the count satisfies; the first such segment in sentence order
//! wins outright, whatever the plural rules would pick. Only when no
//! condition matches are the conditions stripped and the form chosen by the
//! locale's plural-rule index.

use log::trace;

use crate::interpreter::PluralRuleProvider;
use crate::parser::{Condition, split_condition};

/// Return the text of `segment` if it carries an inline condition that
/// `count` satisfies.
///
/// The text is returned exactly as written after the closing bracket.
/// `None` means the segment has no condition or the condition does not hold,
/// which is distinct from `Some("")` for a matching condition with no text.
///
/// # Example
///
/// ```
/// use transkey::interpreter::evaluate_condition;
///
/// assert_eq!(evaluate_condition("{0} none", 0.0), Some(" none"));
/// assert_eq!(evaluate_condition("[2,*]many", 7.0), Some("many"));
/// assert_eq!(evaluate_condition("{*,5}few", 6.0), None);
/// assert_eq!(evaluate_condition("no condition", 1.0), None);
/// ```
pub fn evaluate_condition(segment: &str, count: f64) -> Option<&str> {
    let split = split_condition(segment)?;
    Condition::parse(split.condition)
        .matches(count)
        .then_some(split.text)
}

/// Remove a leading inline condition, leaving other segments unchanged.
pub fn strip_condition(segment: &str) -> &str {
    split_condition(segment).map_or(segment, |split| split.text)
}

/// Choose the plural form of `sentence` for `count` in `locale`.
///
/// # Example
///
/// ```
/// use transkey::CldrPluralRules;
/// use transkey::interpreter::pluralize;
///
/// assert_eq!(pluralize("apple|apples", 1.0, "en", &CldrPluralRules), "apple");
/// assert_eq!(pluralize("apple|apples", 4.0, "en", &CldrPluralRules), "apples");
///
/// let sentence = "{0} no apples|[1,19] some apples|[20,*] lots of apples";
/// assert_eq!(pluralize(sentence, 0.0, "en", &CldrPluralRules), "no apples");
/// assert_eq!(pluralize(sentence, 3.0, "en", &CldrPluralRules), "some apples");
/// assert_eq!(pluralize(sentence, 25.0, "en", &CldrPluralRules), "lots of apples");
/// ```
pub fn pluralize(
    sentence: &str,
    count: f64,
    locale: &str,
    rules: &(impl PluralRuleProvider + ?Sized),
) -> String {
    let segments: Vec<&str> = sentence.split('|').collect();

    if let Some(text) = segments
        .iter()
        .find_map(|segment| evaluate_condition(segment, count))
    {
        trace!("inline condition matched for count {count}");
        return text.trim().to_string();
    }

    let forms: Vec<&str> = segments.into_iter().map(strip_condition).collect();
    let index = rules.plural_index(locale, count);
    trace!("plural index {index} of {} forms for '{locale}'", forms.len());

    let first = forms.first().copied().unwrap_or_default();
    if forms.len() == 1 {
        return first.to_string();
    }
    match forms.get(index) {
        Some(form) if !form.is_empty() => (*form).to_string(),
        _ => first.to_string(),
    }
}
