//! The user-facing translation engine.
//!
//! A `Translator` owns the translation table, the active and fallback
//! locales, and the plural-rule provider. Hosts construct one explicitly and
//! pass it to whatever renders text.

use std::fmt;

use bon::bon;
use log::warn;

use crate::config::LocaleConfig;
use crate::interpreter::{
    CldrPluralRules, PluralRuleProvider, TranslationError, TranslationWarning, pluralize, resolve,
};
use crate::types::{Args, TranslationOptions, TranslationTable, Value};

/// Translates keys against a read-only [`TranslationTable`].
///
/// Lookups go through three stages:
/// - key resolution, with dotted paths and the fallback locale
/// - plural form selection when requested
/// - `:name` placeholder substitution
///
/// # Example
///
/// ```
/// use transkey::{Entry, TranslationTable, Translator, args};
///
/// let mut table = TranslationTable::new();
/// table.insert_locale("en", [
///     ("greet", Entry::from("Hello :name")),
///     ("apples", Entry::from("{0} no apples|one apple|:count apples")),
/// ]);
///
/// let translator = Translator::builder().locale("en").table(table).build();
///
/// let greeting = translator.trans("greet", &args! { "name" => "Amy" }.into()).unwrap();
/// assert_eq!(greeting, "Hello Amy");
///
/// let apples = translator.trans_choice("apples", 0, args! {}, None).unwrap();
/// assert_eq!(apples, "no apples");
/// ```
pub struct Translator {
    /// Locale used when a call does not name one.
    locale: String,

    /// Locale retried when a key misses. Never changed by `set_locale`.
    fallback_locale: Option<String>,

    /// Translations for every locale.
    table: TranslationTable,

    /// Locale identifiers present in the table at construction.
    locales: Vec<String>,

    /// Plural-form index provider.
    plural_rules: Box<dyn PluralRuleProvider + Send + Sync>,

    /// Problems noticed during construction or locale changes.
    warnings: Vec<TranslationWarning>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .field("fallback_locale", &self.fallback_locale)
            .field("locales", &self.locales)
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}

#[bon]
impl Translator {
    /// Build a translator.
    ///
    /// Omitting the table is allowed: the translator then works against an
    /// empty table and records [`TranslationWarning::MissingTranslationSource`].
    #[builder]
    pub fn new(
        #[builder(default = "en".to_string(), into)] locale: String,
        #[builder(into)] fallback_locale: Option<String>,
        table: Option<TranslationTable>,
        plural_rules: Option<Box<dyn PluralRuleProvider + Send + Sync>>,
    ) -> Self {
        let mut warnings = Vec::new();
        let table = table.unwrap_or_else(|| {
            let warning = TranslationWarning::MissingTranslationSource;
            warn!("{warning}");
            warnings.push(warning);
            TranslationTable::new()
        });
        let locales = table.locales().map(str::to_string).collect();

        Self {
            locale,
            fallback_locale,
            table,
            locales,
            plural_rules: plural_rules.unwrap_or_else(|| Box::new(CldrPluralRules)),
            warnings,
        }
    }
}

impl Translator {
    /// Create a translator from host configuration and a table.
    pub fn from_config(config: LocaleConfig, table: TranslationTable) -> Self {
        Translator::builder()
            .locale(config.locale)
            .maybe_fallback_locale(config.fallback_locale)
            .table(table)
            .build()
    }

    // =========================================================================
    // Locale Management
    // =========================================================================

    /// Get the active locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Change the active locale.
    ///
    /// The fallback locale is unaffected. Switching to a locale the table
    /// does not contain is allowed but records a warning; lookups in it will
    /// fail with [`TranslationError::LocaleNotFound`].
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        let locale = locale.into();
        if !self.table.contains_locale(&locale) {
            let warning = TranslationWarning::UnknownLocale {
                locale: locale.clone(),
            };
            warn!("{warning}");
            self.warnings.push(warning);
        }
        self.locale = locale;
    }

    /// Get the fallback locale, if one is configured.
    pub fn fallback_locale(&self) -> Option<&str> {
        self.fallback_locale.as_deref()
    }

    /// Locale identifiers the table provided at construction, sorted.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Get the translation table (read-only).
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Warnings recorded so far.
    pub fn warnings(&self) -> &[TranslationWarning] {
        &self.warnings
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translate a key, failing on any miss.
    ///
    /// # Errors
    ///
    /// - [`TranslationError::LocaleNotFound`] if the locale has no translations
    /// - [`TranslationError::TranslationKeyNotFound`] if the key does not
    ///   resolve in the locale or the fallback locale
    /// - [`TranslationError::InvalidArgument`] if `pluralize` is set without a
    ///   numeric `count` argument
    pub fn trans(&self, key: &str, options: &TranslationOptions) -> Result<String, TranslationError> {
        self.translate(key, false, options)
    }

    /// Translate a key, returning the key itself when it does not resolve.
    ///
    /// # Errors
    ///
    /// Missing locales and invalid arguments are still errors.
    ///
    /// # Example
    ///
    /// ```
    /// use transkey::{Entry, TranslationOptions, TranslationTable, Translator};
    ///
    /// let mut table = TranslationTable::new();
    /// table.insert_locale("en", [("known", Entry::from("Known"))]);
    /// let translator = Translator::builder().table(table).build();
    ///
    /// let options = TranslationOptions::default();
    /// assert_eq!(translator.trans_or_key("known", &options).unwrap(), "Known");
    /// assert_eq!(translator.trans_or_key("Unknown text", &options).unwrap(), "Unknown text");
    /// ```
    pub fn trans_or_key(
        &self,
        key: &str,
        options: &TranslationOptions,
    ) -> Result<String, TranslationError> {
        self.translate(key, true, options)
    }

    /// Translate a key with plural selection on `count`.
    ///
    /// `count` is merged into `args`, replacing an existing `count` in place.
    /// `locale` selects where the sentence is looked up; the plural form is
    /// always chosen by the active locale's rules.
    ///
    /// # Errors
    ///
    /// Same as [`Translator::trans`]; a non-numeric `count` is an
    /// [`TranslationError::InvalidArgument`].
    pub fn trans_choice(
        &self,
        key: &str,
        count: impl Into<Value>,
        args: impl Into<Args>,
        locale: Option<&str>,
    ) -> Result<String, TranslationError> {
        let mut args = args.into();
        args.insert("count", count);
        let options = TranslationOptions {
            args,
            pluralize: true,
            locale: locale.map(str::to_string),
        };
        self.translate(key, false, &options)
    }

    /// Check whether a key resolves in `locale` (or the active locale)
    /// without consulting the fallback locale.
    pub fn has(&self, key: &str, locale: Option<&str>) -> bool {
        let locale = locale.unwrap_or(&self.locale);
        resolve(&self.table, key, locale, None, false).is_ok()
    }

    fn translate(
        &self,
        key: &str,
        silent: bool,
        options: &TranslationOptions,
    ) -> Result<String, TranslationError> {
        let locale = options.locale.as_deref().unwrap_or(&self.locale);
        let mut sentence = resolve(
            &self.table,
            key,
            locale,
            self.fallback_locale.as_deref(),
            silent,
        )?;

        if options.pluralize {
            let count = options
                .args
                .get("count")
                .and_then(Value::as_count)
                .ok_or_else(|| TranslationError::InvalidArgument {
                    key: key.to_string(),
                    message: "pluralization requires a numeric 'count' argument".to_string(),
                })?;
            // Plural rules follow the active locale, not the lookup override.
            sentence = pluralize(&sentence, count, &self.locale, &*self.plural_rules);
        }

        Ok(substitute(sentence, &options.args))
    }
}

/// Replace every `:name` with its value, one pass per argument in order.
fn substitute(mut sentence: String, args: &Args) -> String {
    for (name, value) in args.iter() {
        let token = format!(":{name}");
        if sentence.contains(&token) {
            sentence = sentence.replace(&token, &value.to_string());
        }
    }
    sentence
}
