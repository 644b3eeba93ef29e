use super::Value;

/// Placeholder values, in insertion order.
///
/// Substitution visits arguments in this order, so the order is part of the
/// observable result when one value contains another placeholder.
///
/// # Example
///
/// ```
/// use transkey::{Args, Value};
///
/// let mut args = Args::new();
/// args.insert("name", "Amy");
/// args.insert("count", 2);
/// args.insert("name", "Bo");
///
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.get("name"), Some(&Value::from("Bo")));
/// assert_eq!(args.iter().next().map(|(k, _)| k), Some("name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    entries: Vec<(String, Value)>,
}

impl Args {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an argument, keeping its original position if it already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get an argument by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Iterate over arguments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Args::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Args {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
