//! Integration tests for the Translator.

use serde_json::json;
use transkey::{
    Args, LocaleConfig, TranslationError, TranslationOptions, TranslationTable, TranslationWarning,
    Translator, Value, args,
};

fn table(value: serde_json::Value) -> TranslationTable {
    serde_json::from_value(value).unwrap()
}

fn translator() -> Translator {
    Translator::builder()
        .locale("en")
        .fallback_locale("en")
        .table(table(json!({
            "en": {
                "greet": "Hello :name",
                "echo": ":name, :name and :name",
                "items": "{0}no items|{1}one item|[2,*]:count items",
                "apples": "apple|apples",
                "nav": { "home": "Home", "about": "About us" },
                "only_en": "English only"
            },
            "fr": {
                "greet": "Bonjour :name",
                "apples": "pomme|pommes",
                "nav": { "home": "Accueil" }
            }
        })))
        .build()
}

// =========================================================================
// Builder and Locale Management
// =========================================================================

#[test]
fn builder_defaults_to_english() {
    let translator = Translator::builder().table(TranslationTable::new()).build();
    assert_eq!(translator.locale(), "en");
    assert_eq!(translator.fallback_locale(), None);
    assert!(translator.warnings().is_empty());
}

#[test]
fn locales_come_from_table() {
    assert_eq!(translator().locales(), ["en", "fr"]);
}

#[test]
fn set_locale_keeps_fallback() {
    let mut translator = translator();
    translator.set_locale("fr");
    assert_eq!(translator.locale(), "fr");
    assert_eq!(translator.fallback_locale(), Some("en"));
    assert!(translator.warnings().is_empty());

    let options = TranslationOptions::default();
    assert_eq!(translator.trans("nav.home", &options).unwrap(), "Accueil");
    assert_eq!(translator.trans("nav.about", &options).unwrap(), "About us");
}

#[test]
fn set_locale_to_unknown_locale_warns() {
    let mut translator = translator();
    translator.set_locale("de");
    assert_eq!(translator.locale(), "de");
    assert_eq!(
        translator.warnings(),
        [TranslationWarning::UnknownLocale {
            locale: "de".to_string()
        }]
    );

    let err = translator
        .trans("greet", &TranslationOptions::default())
        .unwrap_err();
    assert!(matches!(err, TranslationError::LocaleNotFound { .. }));
}

#[test]
fn missing_table_degrades_to_empty_lookups() {
    let translator = Translator::builder().locale("en").build();
    assert_eq!(
        translator.warnings(),
        [TranslationWarning::MissingTranslationSource]
    );
    assert!(translator.locales().is_empty());
    assert!(translator.table().is_empty());

    let err = translator
        .trans_or_key("anything", &TranslationOptions::default())
        .unwrap_err();
    assert_eq!(
        err,
        TranslationError::LocaleNotFound {
            locale: "en".to_string()
        }
    );
}

#[test]
fn from_config_reads_host_settings() {
    let config: LocaleConfig =
        serde_json::from_value(json!({ "locale": "fr", "fallbackLocale": "en" })).unwrap();
    let translator = Translator::from_config(
        config,
        table(json!({ "en": { "x": "fallback" }, "fr": {} })),
    );
    assert_eq!(translator.locale(), "fr");
    assert_eq!(translator.fallback_locale(), Some("en"));
    assert_eq!(
        translator.trans("x", &TranslationOptions::default()).unwrap(),
        "fallback"
    );
}

// =========================================================================
// Placeholders
// =========================================================================

#[test]
fn placeholder_substitution() {
    let result = translator()
        .trans("greet", &args! { "name" => "Amy" }.into())
        .unwrap();
    assert_eq!(result, "Hello Amy");
}

#[test]
fn every_occurrence_is_replaced() {
    let result = translator()
        .trans("echo", &args! { "name" => "Bo" }.into())
        .unwrap();
    assert_eq!(result, "Bo, Bo and Bo");
}

#[test]
fn unknown_placeholders_are_left_alone() {
    let result = translator()
        .trans("greet", &args! { "other" => "x" }.into())
        .unwrap();
    assert_eq!(result, "Hello :name");
}

#[test]
fn substitution_follows_argument_order() {
    let translator = Translator::builder()
        .table(table(json!({ "en": { "pair": ":a :b" } })))
        .build();

    let a_first = translator
        .trans("pair", &args! { "a" => ":b", "b" => "X" }.into())
        .unwrap();
    assert_eq!(a_first, "X X");

    let b_first = translator
        .trans("pair", &args! { "b" => "X", "a" => ":b" }.into())
        .unwrap();
    assert_eq!(b_first, ":b X");
}

#[test]
fn numbers_substitute_in_display_form() {
    let result = translator()
        .trans("greet", &args! { "name" => 2.5 }.into())
        .unwrap();
    assert_eq!(result, "Hello 2.5");
}

// =========================================================================
// Pluralization
// =========================================================================

#[test]
fn trans_choice_inline_conditions() {
    let translator = translator();
    let choose = |count: i64| translator.trans_choice("items", count, args! {}, Some("en")).unwrap();
    assert_eq!(choose(0), "no items");
    assert_eq!(choose(1), "one item");
    assert_eq!(choose(3), "3 items");
}

#[test]
fn trans_choice_uses_plural_rules_of_active_locale() {
    let mut translator = translator();
    assert_eq!(translator.trans_choice("apples", 0, args! {}, None).unwrap(), "apples");
    assert_eq!(translator.trans_choice("apples", 1, args! {}, None).unwrap(), "apple");
    // The override picks the sentence; English rules still pick the form.
    assert_eq!(
        translator.trans_choice("apples", 0, args! {}, Some("fr")).unwrap(),
        "pommes"
    );

    // French treats zero as singular once it is the active locale.
    translator.set_locale("fr");
    assert_eq!(translator.trans_choice("apples", 0, args! {}, None).unwrap(), "pomme");
}

#[test]
fn trans_choice_accepts_float_count() {
    let translator = translator();
    assert_eq!(
        translator.trans_choice("items", 2.5, args! {}, None).unwrap(),
        "2.5 items"
    );
}

#[test]
fn trans_choice_overrides_count_argument() {
    let translator = translator();
    let result = translator
        .trans_choice("items", 1, args! { "count" => 9 }, None)
        .unwrap();
    assert_eq!(result, "one item");
}

#[test]
fn trans_with_pluralize_option() {
    let options = TranslationOptions::builder()
        .args(args! { "count" => 4 })
        .pluralize(true)
        .build();
    assert_eq!(translator().trans("items", &options).unwrap(), "4 items");
}

#[test]
fn pluralize_without_count_is_invalid() {
    let options = TranslationOptions::builder().pluralize(true).build();
    let err = translator().trans("items", &options).unwrap_err();
    assert!(matches!(
        err,
        TranslationError::InvalidArgument { ref key, .. } if key == "items"
    ));
}

#[test]
fn pluralize_with_string_count_is_invalid() {
    let err = translator()
        .trans_choice("items", "three", Args::new(), None)
        .unwrap_err();
    assert!(matches!(err, TranslationError::InvalidArgument { .. }));
}

#[test]
fn invalid_argument_is_not_silenced() {
    let options = TranslationOptions::builder().pluralize(true).build();
    let err = translator().trans_or_key("missing", &options).unwrap_err();
    assert!(matches!(err, TranslationError::InvalidArgument { .. }));
}

#[test]
fn custom_plural_rules() {
    let translator = Translator::builder()
        .table(table(json!({ "en": { "forms": "a|b|c" } })))
        .plural_rules(Box::new(|_: &str, _: f64| 2_usize))
        .build();
    assert_eq!(translator.trans_choice("forms", 1, args! {}, None).unwrap(), "c");
}

// =========================================================================
// Silent Mode and Lookup Helpers
// =========================================================================

#[test]
fn trans_or_key_returns_key_with_substitution() {
    let result = translator()
        .trans_or_key("Welcome back, :name", &args! { "name" => "Amy" }.into())
        .unwrap();
    assert_eq!(result, "Welcome back, Amy");
}

#[test]
fn trans_or_key_pluralizes_key_literal() {
    let options = TranslationOptions::builder()
        .args(args! { "count" => 2 })
        .pluralize(true)
        .build();
    let result = translator()
        .trans_or_key("There is one apple|There are many apples", &options)
        .unwrap();
    assert_eq!(result, "There are many apples");
}

#[test]
fn trans_fails_loudly_on_missing_key() {
    let err = translator()
        .trans("nav.contact", &TranslationOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        TranslationError::TranslationKeyNotFound { ref segment, .. } if segment == "contact"
    ));
}

#[test]
fn locale_option_overrides_active_locale() {
    let options = TranslationOptions::builder()
        .args(args! { "name" => "Amy" })
        .locale("fr")
        .build();
    assert_eq!(translator().trans("greet", &options).unwrap(), "Bonjour Amy");
}

#[test]
fn locale_option_falls_back() {
    let options = TranslationOptions::builder().locale("fr").build();
    assert_eq!(translator().trans("only_en", &options).unwrap(), "English only");
}

#[test]
fn has_checks_single_locale() {
    let translator = translator();
    assert!(translator.has("nav.about", None));
    assert!(!translator.has("nav.about", Some("fr")));
    assert!(!translator.has("nav.missing", None));
    assert!(!translator.has("greet", Some("de")));
}

#[test]
fn value_conversions() {
    assert_eq!(Value::from(3).as_count(), Some(3.0));
    assert_eq!(Value::from(0.5).as_count(), Some(0.5));
    assert_eq!(Value::from("x").as_count(), None);
    assert_eq!(Value::from(String::from("y")).as_string(), Some("y"));
}

#[test]
fn large_unsigned_values_do_not_wrap() {
    assert_eq!(Value::from(42_u64), Value::Number(42));
    assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
    assert_eq!(Value::from(u64::MAX).to_string(), (u64::MAX as f64).to_string());
    assert!(!Value::from(usize::MAX).to_string().starts_with('-'));
}
