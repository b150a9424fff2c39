//! Password composition rules
//!
//! Each rule checks one property of the candidate and reports the matching
//! [`PasswordError`] when the property does not hold.

mod case;
mod class;
mod length;

pub use case::{lowercase_rule, uppercase_rule};
pub use class::{number_rule, special_character_rule, whitespace_rule, word_character_rule};
pub use length::{empty_rule, max_length_rule, min_length_rule, MAX_LENGTH, MIN_LENGTH};

use crate::error::PasswordError;

/// Result type for rule functions.
/// - `Ok(Some(kind))` - Rule failed with kind
/// - `Ok(None)` - Rule passed
/// - `Err(())` - Fatal error during evaluation
pub type RuleResult = Result<Option<PasswordError>, ()>;

/// A named rule, in evaluation order.
pub type Rule = (&'static str, fn(&str) -> RuleResult);

/// Every rule in evaluation order. The first four form the basic rule set.
pub(crate) static ALL_RULES: [Rule; 9] = [
    ("empty", empty_rule),
    ("minimum_length", min_length_rule),
    ("maximum_length", max_length_rule),
    ("uppercase", uppercase_rule),
    ("lowercase", lowercase_rule),
    ("number", number_rule),
    ("word_character", word_character_rule),
    ("special_character", special_character_rule),
    ("whitespace", whitespace_rule),
];

/// ASCII letter, ASCII digit or underscore.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
