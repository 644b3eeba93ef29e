//! Key resolution over a translation table.
//!
//! A key is first tried whole (`"Sign in."` is a valid key), then as a dotted
//! path through nested groups. When both miss, the whole sequence is retried
//! against the fallback locale.

use std::collections::BTreeMap;

use log::debug;

use crate::interpreter::TranslationError;
use crate::interpreter::error::compute_suggestions;
use crate::types::{Entry, TranslationTable};

/// Where a lookup stopped short.
struct Miss {
    segment: String,
    suggestions: Vec<String>,
}

/// Resolve `key` to its sentence.
///
/// Tries `locale` first, then `fallback` when it differs from `locale`.
/// With `silent` set, an unresolved key comes back as itself.
///
/// # Errors
///
/// - [`TranslationError::LocaleNotFound`] if `locale`, or the fallback
///   consulted after a miss, has no subtree. This is returned even when
///   `silent` is set.
/// - [`TranslationError::TranslationKeyNotFound`] if the key misses in every
///   locale tried and `silent` is not set.
pub fn resolve(
    table: &TranslationTable,
    key: &str,
    locale: &str,
    fallback: Option<&str>,
    silent: bool,
) -> Result<String, TranslationError> {
    let mut current = locale;
    loop {
        let entries = table
            .locale(current)
            .ok_or_else(|| TranslationError::LocaleNotFound {
                locale: current.to_string(),
            })?;

        match lookup(entries, key) {
            Ok(sentence) => {
                if current != locale {
                    debug!("key '{key}' served from fallback locale '{current}'");
                }
                return Ok(sentence);
            }
            Err(miss) => match fallback {
                Some(fallback) if fallback != current && current == locale => current = fallback,
                _ if silent => return Ok(key.to_string()),
                _ => {
                    return Err(TranslationError::TranslationKeyNotFound {
                        key: key.to_string(),
                        locale: current.to_string(),
                        segment: miss.segment,
                        suggestions: miss.suggestions,
                    });
                }
            },
        }
    }
}

/// Look up a key in one locale's entries, whole first and then dotted.
fn lookup(entries: &BTreeMap<String, Entry>, key: &str) -> Result<String, Miss> {
    if let Some(sentence) = entries.get(key).and_then(Entry::sentence) {
        return Ok(sentence);
    }
    walk(entries, key)
}

/// Walk a dotted key segment by segment.
fn walk(entries: &BTreeMap<String, Entry>, key: &str) -> Result<String, Miss> {
    let mut segments = key.split('.');
    let first = segments.next().unwrap_or(key);
    let mut node = entries.get(first).ok_or_else(|| Miss {
        segment: first.to_string(),
        suggestions: compute_suggestions(first, entries.keys().map(String::as_str)),
    })?;
    let mut last = first;

    for segment in segments {
        let Some(children) = node.as_group() else {
            return Err(Miss {
                segment: segment.to_string(),
                suggestions: Vec::new(),
            });
        };
        node = children.get(segment).ok_or_else(|| Miss {
            segment: segment.to_string(),
            suggestions: compute_suggestions(segment, children.keys().map(String::as_str)),
        })?;
        last = segment;
    }

    node.sentence().ok_or_else(|| Miss {
        segment: last.to_string(),
        suggestions: Vec::new(),
    })
}
