pub mod config;
#[cfg(feature = "global")]
pub mod global;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use config::LocaleConfig;
pub use interpreter::{
    CldrPluralRules, PluralRuleProvider, TranslationError, TranslationWarning, Translator,
    compute_suggestions,
};
pub use types::{Args, Entry, TranslationOptions, TranslationTable, Value};

/// Creates an ordered [`Args`] from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly. Arguments keep the order they are
/// written in.
///
/// # Example
///
/// ```
/// use transkey::{args, Value};
///
/// let a = args! { "count" => 3, "name" => "Alice" };
/// assert_eq!(a.len(), 2);
/// assert_eq!(a.get("count"), Some(&Value::Number(3)));
/// assert_eq!(a.get("name").and_then(Value::as_string), Some("Alice"));
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        $crate::Args::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut args = $crate::Args::new();
            $(
                args.insert($key, ::std::convert::Into::<$crate::Value>::into($value));
            )+
            args
        }
    };
}
