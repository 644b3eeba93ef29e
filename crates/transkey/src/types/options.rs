use bon::Builder;

use super::Args;

/// Per-call options for [`Translator::trans`](crate::Translator::trans).
///
/// # Example
///
/// ```
/// use transkey::{TranslationOptions, args};
///
/// let options = TranslationOptions::builder()
///     .args(args! { "count" => 3 })
///     .pluralize(true)
///     .locale("fr")
///     .build();
///
/// assert!(options.pluralize);
/// assert_eq!(options.locale.as_deref(), Some("fr"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct TranslationOptions {
    /// Values substituted for `:name` placeholders.
    #[builder(default)]
    pub args: Args,

    /// Select a plural form using the numeric `count` argument.
    #[builder(default)]
    pub pluralize: bool,

    /// Locale to use instead of the translator's active locale.
    #[builder(into)]
    pub locale: Option<String>,
}

impl TranslationOptions {
    /// Options that only substitute placeholders.
    pub fn with_args(args: impl Into<Args>) -> Self {
        Self {
            args: args.into(),
            ..Self::default()
        }
    }
}

impl From<Args> for TranslationOptions {
    fn from(args: Args) -> Self {
        Self::with_args(args)
    }
}
