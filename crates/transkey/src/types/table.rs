use std::collections::BTreeMap;

use serde::Deserialize;

/// One node of a locale's translation tree.
///
/// Deserializes untagged, so a JSON/YAML/TOML document of nested objects
/// with string or number leaves maps onto it directly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A terminal sentence.
    Text(String),

    /// A numeric leaf, stringified when looked up.
    Number(f64),

    /// A nested group of entries keyed by path segment.
    Group(BTreeMap<String, Entry>),
}

impl Entry {
    /// Look up a child entry if this entry is a group.
    pub fn get(&self, segment: &str) -> Option<&Entry> {
        match self {
            Entry::Group(children) => children.get(segment),
            Entry::Text(_) | Entry::Number(_) => None,
        }
    }

    /// Get the children of this entry if it is a group.
    pub fn as_group(&self) -> Option<&BTreeMap<String, Entry>> {
        match self {
            Entry::Group(children) => Some(children),
            Entry::Text(_) | Entry::Number(_) => None,
        }
    }

    /// The sentence stored at this entry, or `None` for a group.
    pub fn sentence(&self) -> Option<String> {
        match self {
            Entry::Text(text) => Some(text.clone()),
            Entry::Number(n) => Some(n.to_string()),
            Entry::Group(_) => None,
        }
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Entry::Text(text.to_string())
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Entry::Text(text)
    }
}

impl<K: Into<String>> FromIterator<(K, Entry)> for Entry {
    fn from_iter<I: IntoIterator<Item = (K, Entry)>>(iter: I) -> Self {
        Entry::Group(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Translations for every locale, keyed by locale identifier.
///
/// The table is read-only once handed to a [`Translator`](crate::Translator).
///
/// # Example
///
/// ```
/// use transkey::{Entry, TranslationTable};
///
/// let mut table = TranslationTable::new();
/// table.insert_locale("en", [("greeting", Entry::from("Hello :name"))]);
/// table.insert_locale("fr", [("greeting", Entry::from("Bonjour :name"))]);
///
/// assert_eq!(table.locales().collect::<Vec<_>>(), vec!["en", "fr"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    locales: BTreeMap<String, BTreeMap<String, Entry>>,
}

impl TranslationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entries of one locale.
    pub fn insert_locale<K: Into<String>>(
        &mut self,
        locale: impl Into<String>,
        entries: impl IntoIterator<Item = (K, Entry)>,
    ) {
        let entries = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.locales.insert(locale.into(), entries);
    }

    /// Get the top-level entries of a locale.
    pub fn locale(&self, locale: &str) -> Option<&BTreeMap<String, Entry>> {
        self.locales.get(locale)
    }

    /// Check whether a locale has a subtree.
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Locale identifiers in the table, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Check whether the table has no locales.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
