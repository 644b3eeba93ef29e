//! Inline condition parser using winnow.
//!
//! A pluralization segment may open with a bracketed numeric condition:
//! `{0}`, `[1]`, `{2,5}`, `[6,*]`, `{*,10}`. Either bracket style may open or
//! close the condition, and the condition body never contains a bracket. The
//! remainder after the closing bracket is the segment's text, newlines
//! included.

use winnow::ascii::{digit0, digit1, multispace0};
use winnow::combinator::{alt, delimited, opt, preceded};
use winnow::prelude::*;
use winnow::token::{one_of, take_till};

const BRACKETS: [char; 4] = ['{', '}', '[', ']'];

/// A segment split into its inline condition and the text that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditional<'a> {
    /// The condition body between the brackets, e.g. `2,*`.
    pub condition: &'a str,
    /// Everything after the closing bracket, unmodified.
    pub text: &'a str,
}

/// A numeric condition, parsed from a condition body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// `{n}`: the count equals `n`.
    Exact(f64),
    /// `{n,*}`: the count is at least `n`.
    AtLeast(f64),
    /// `{*,m}`: the count is at most `m`.
    AtMost(f64),
    /// `{n,m}`: the count lies in the inclusive range.
    Between(f64, f64),
}

impl Condition {
    /// Parse a condition body such as `1`, `2,*` or `*,5`.
    ///
    /// The `*` bound must be written exactly, so `2, *` is a closed range
    /// with an unparseable upper bound. Bounds that are not numbers parse to
    /// NaN, which no count satisfies.
    pub fn parse(body: &str) -> Self {
        match body.split_once(',') {
            Some((from, to)) => {
                if to == "*" {
                    Condition::AtLeast(parse_number(from))
                } else if from == "*" {
                    Condition::AtMost(parse_number(to))
                } else {
                    Condition::Between(parse_number(from), parse_number(to))
                }
            }
            None => Condition::Exact(parse_number(body)),
        }
    }

    /// Check whether `count` satisfies this condition.
    pub fn matches(self, count: f64) -> bool {
        match self {
            Condition::Exact(n) => n == count,
            Condition::AtLeast(from) => count >= from,
            Condition::AtMost(to) => count <= to,
            Condition::Between(from, to) => from <= count && count <= to,
        }
    }
}

/// Split the leading inline condition off a segment.
///
/// Returns `None` when the segment does not open with a well-formed
/// bracketed condition.
///
/// # Example
///
/// ```
/// use transkey::parser::split_condition;
///
/// let split = split_condition("[2,*] :count items").unwrap();
/// assert_eq!(split.condition, "2,*");
/// assert_eq!(split.text, " :count items");
///
/// assert!(split_condition("plain text").is_none());
/// ```
pub fn split_condition(segment: &str) -> Option<Conditional<'_>> {
    let mut remaining = segment;
    let condition = condition_prefix(&mut remaining).ok()?;
    Some(Conditional {
        condition,
        text: remaining,
    })
}

/// Parse a bracketed condition body.
fn condition_prefix<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    delimited(
        one_of(['{', '[']),
        take_till(0.., BRACKETS),
        one_of(['}', ']']),
    )
    .parse_next(input)
}

/// Parse the leading number of a string, ignoring anything after it.
///
/// Leading whitespace is skipped and the longest decimal prefix is used:
/// an optional sign, digits with an optional fraction, and an exponent only
/// when it has digits. A string without a numeric prefix yields NaN.
///
/// ```
/// use transkey::parser::parse_number;
///
/// assert_eq!(parse_number(" 2"), 2.0);
/// assert_eq!(parse_number("1.5rem"), 1.5);
/// assert_eq!(parse_number("1e3"), 1000.0);
/// assert!(parse_number("*").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    let mut remaining = text;
    preceded(multispace0, decimal_prefix)
        .parse_next(&mut remaining)
        .ok()
        .and_then(|digits| digits.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Recognize a decimal number such as `-1`, `2.`, `.5` or `3e-2`.
fn decimal_prefix<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}
