//! Length rules - empty, minimum and maximum character count.
//!
//! Length is the number of extended grapheme clusters, so a base letter with
//! combining marks or a joined emoji sequence counts once.

use unicode_segmentation::UnicodeSegmentation;

use super::RuleResult;
use crate::error::PasswordError;

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 16;

fn char_count(password: &str) -> usize {
    password.graphemes(true).count()
}

/// Fails with [`PasswordError::Empty`] on an empty password.
pub fn empty_rule(password: &str) -> RuleResult {
    if password.is_empty() {
        return Ok(Some(PasswordError::Empty));
    }
    Ok(None)
}

/// Fails with [`PasswordError::MinimumLength`] below [`MIN_LENGTH`] characters.
pub fn min_length_rule(password: &str) -> RuleResult {
    if char_count(password) < MIN_LENGTH {
        return Ok(Some(PasswordError::MinimumLength));
    }
    Ok(None)
}

/// Fails with [`PasswordError::MaximumLength`] above [`MAX_LENGTH`] characters.
pub fn max_length_rule(password: &str) -> RuleResult {
    if char_count(password) > MAX_LENGTH {
        return Ok(Some(PasswordError::MaximumLength));
    }
    Ok(None)
}
