//! Plural-rule index resolution.
//!
//! A pluralized sentence lists its forms in a fixed order, and the
//! [`PluralRuleProvider`] decides which position applies to a count. The
//! default provider, [`CldrPluralRules`], derives that order from CLDR data:
//! the categories a locale uses for whole numbers, ranked zero, one, two,
//! few, many, other. English yields `one|other`, Russian `one|few|many`, and
//! Arabic all six.
//!
//! Categories a locale only reaches for fractions or very large numbers
//! (French "many" at one million, Russian "other" for 1.5) share the index of
//! the locale's last whole-number form.
//!
//! Plural rules are cached per thread per locale to avoid re-creating
//! `PluralRules` instances on every call.

use std::cell::RefCell;

use fixed_decimal::Decimal;
use icu_locale_core::{Locale, locale};
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

/// Counts probed to discover which categories a locale uses for whole numbers.
///
/// Two hundred covers every modulo-100 pattern in the CLDR cardinal rules.
const PROBE_LIMIT: i64 = 200;

/// Selects the index of the plural form to use for a count.
///
/// Implemented for any `Fn(&str, f64) -> usize`, so a closure can stand in
/// for a custom rule table:
///
/// ```
/// use transkey::PluralRuleProvider;
///
/// let always_last = |_: &str, _: f64| 1_usize;
/// assert_eq!(always_last.plural_index("en", 1.0), 1);
/// ```
pub trait PluralRuleProvider {
    /// Return the plural-form index for `count` in `locale`.
    fn plural_index(&self, locale: &str, count: f64) -> usize;
}

impl<F> PluralRuleProvider for F
where
    F: Fn(&str, f64) -> usize,
{
    fn plural_index(&self, locale: &str, count: f64) -> usize {
        self(locale, count)
    }
}

/// [`PluralRuleProvider`] backed by the CLDR cardinal rules in `icu_plurals`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CldrPluralRules;

impl PluralRuleProvider for CldrPluralRules {
    fn plural_index(&self, locale: &str, count: f64) -> usize {
        plural_index(locale, count)
    }
}

/// Cardinal rules for one locale plus its ranked whole-number categories.
struct LocaleRules {
    rules: PluralRules,
    forms: Vec<PluralCategory>,
}

thread_local! {
    /// Per-thread cache of rules keyed by normalized locale identifier.
    static PLURAL_RULES_CACHE: RefCell<Vec<(String, LocaleRules)>> = const { RefCell::new(Vec::new()) };
}

/// Normalize a locale identifier to BCP-47 form (`pt_BR` -> `pt-BR`).
fn normalize_locale(locale: &str) -> String {
    locale.trim().replace('_', "-")
}

/// Build rules for a normalized identifier, using English for identifiers
/// that do not parse or have no data.
fn build_rules(locale: &str) -> LocaleRules {
    let rules = locale
        .parse::<Locale>()
        .ok()
        .and_then(|loc| PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into()).ok())
        .unwrap_or_else(|| {
            PluralRules::try_new(locale!("en").into(), PluralRuleType::Cardinal.into())
                .expect("english plural rules should be available")
        });

    let mut forms: Vec<PluralCategory> = Vec::new();
    for n in 0..=PROBE_LIMIT {
        let category = rules.category_for(n);
        if !forms.contains(&category) {
            forms.push(category);
        }
    }
    forms.sort_by_key(|category| category_rank(*category));

    LocaleRules { rules, forms }
}

/// CLDR ordering of plural categories.
fn category_rank(category: PluralCategory) -> u8 {
    match category {
        PluralCategory::Zero => 0,
        PluralCategory::One => 1,
        PluralCategory::Two => 2,
        PluralCategory::Few => 3,
        PluralCategory::Many => 4,
        PluralCategory::Other => 5,
    }
}

impl LocaleRules {
    fn category(&self, count: f64) -> PluralCategory {
        if count.fract() == 0.0 && count.abs() < i64::MAX as f64 {
            return self.rules.category_for(count as i64);
        }
        match Decimal::try_from_str(&count.to_string()) {
            Ok(decimal) => self.rules.category_for(&decimal),
            Err(_) => self.rules.category_for(count.trunc() as i64),
        }
    }

    fn index(&self, count: f64) -> usize {
        let category = self.category(count);
        self.forms
            .iter()
            .position(|form| *form == category)
            .unwrap_or(self.forms.len().saturating_sub(1))
    }
}

/// Get the plural-form index for a count in a given locale.
///
/// Rules are cached per thread per locale, so repeated calls with the same
/// locale reuse the previously constructed `PluralRules`.
///
/// # Examples
///
/// ```
/// use transkey::interpreter::plural_index;
///
/// // English: "one|other"
/// assert_eq!(plural_index("en", 1.0), 0);
/// assert_eq!(plural_index("en", 2.0), 1);
///
/// // Russian: "one|few|many"
/// assert_eq!(plural_index("ru", 1.0), 0);
/// assert_eq!(plural_index("ru", 3.0), 1);
/// assert_eq!(plural_index("ru", 5.0), 2);
/// ```
pub fn plural_index(locale: &str, count: f64) -> usize {
    let locale = normalize_locale(locale);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some((_, rules)) = cache.iter().find(|(code, _)| *code == locale) {
            return rules.index(count);
        }
        let rules = build_rules(&locale);
        let index = rules.index(count);
        cache.push((locale, rules));
        index
    })
}
