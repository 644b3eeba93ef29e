//! Host-supplied locale configuration.

use serde::Deserialize;

/// Active and fallback locale settings, as read from host configuration.
///
/// Missing fields take their defaults, so an empty document yields English
/// with no fallback.
///
/// # Example
///
/// ```
/// use transkey::LocaleConfig;
///
/// let config = LocaleConfig::default();
/// assert_eq!(config.locale, "en");
/// assert_eq!(config.fallback_locale, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale used when a call does not name one.
    #[serde(alias = "currentLocale")]
    pub locale: String,

    /// Locale consulted when a key is missing from the requested locale.
    #[serde(alias = "fallbackLocale")]
    pub fallback_locale: Option<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fallback_locale: None,
        }
    }
}
