mod args;
mod options;
mod table;
mod value;

pub use args::Args;
pub use options::TranslationOptions;
pub use table::{Entry, TranslationTable};
pub use value::Value;
