//! Sentence parsing for pluralization.
//!
//! Sentences are plain strings; the only structure parsed out of them is the
//! optional inline condition that prefixes a pluralization segment.

mod condition;

pub use condition::{Condition, Conditional, parse_number, split_condition};
