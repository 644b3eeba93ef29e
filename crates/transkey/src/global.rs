//! Process-wide translator for the `global` feature.
//!
//! The host installs one [`Translator`] with [`init`]; the free functions
//! then translate without a translator reference. Installation happens at
//! most once. If nothing was installed, first use creates an empty
//! translator, which records a missing-source warning.

use std::sync::{OnceLock, PoisonError, RwLock};

use crate::{Args, TranslationError, TranslationOptions, Translator, Value};

static GLOBAL_TRANSLATOR: OnceLock<RwLock<Translator>> = OnceLock::new();

fn global() -> &'static RwLock<Translator> {
    GLOBAL_TRANSLATOR.get_or_init(|| RwLock::new(Translator::builder().build()))
}

/// Install the global translator.
///
/// # Errors
///
/// Returns the rejected translator if one was already installed, or if a
/// lookup already created the empty default.
pub fn init(translator: Translator) -> Result<(), Translator> {
    GLOBAL_TRANSLATOR
        .set(RwLock::new(translator))
        .map_err(|lock| lock.into_inner().unwrap_or_else(PoisonError::into_inner))
}

/// Provides read access to the global translator.
pub fn with_translator<T>(f: impl FnOnce(&Translator) -> T) -> T {
    let guard = global().read().expect("global translator lock poisoned");
    f(&guard)
}

/// Provides write access to the global translator.
pub fn with_translator_mut<T>(f: impl FnOnce(&mut Translator) -> T) -> T {
    let mut guard = global().write().expect("global translator lock poisoned");
    f(&mut guard)
}

/// Translate a key with the global translator. See [`Translator::trans`].
pub fn trans(key: &str, options: &TranslationOptions) -> Result<String, TranslationError> {
    with_translator(|translator| translator.trans(key, options))
}

/// Translate a key, or return it unchanged. See [`Translator::trans_or_key`].
pub fn trans_or_key(key: &str, options: &TranslationOptions) -> Result<String, TranslationError> {
    with_translator(|translator| translator.trans_or_key(key, options))
}

/// Translate with plural selection. See [`Translator::trans_choice`].
pub fn trans_choice(
    key: &str,
    count: impl Into<Value>,
    args: impl Into<Args>,
    locale: Option<&str>,
) -> Result<String, TranslationError> {
    let count = count.into();
    let args = args.into();
    with_translator(|translator| translator.trans_choice(key, count, args, locale))
}

/// Sets the active locale of the global translator.
pub fn set_locale(locale: impl Into<String>) {
    with_translator_mut(|translator| translator.set_locale(locale));
}

/// Returns the active locale of the global translator.
pub fn locale() -> String {
    with_translator(|translator| translator.locale().to_owned())
}

/// Returns the locales known to the global translator.
pub fn locales() -> Vec<String> {
    with_translator(|translator| translator.locales().to_vec())
}
