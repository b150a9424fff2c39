//! Character class rules - digits, word characters, special characters, whitespace.

use super::{is_word_char, RuleResult};
use crate::error::PasswordError;

/// Requires at least one ASCII digit.
pub fn number_rule(password: &str) -> RuleResult {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Ok(Some(PasswordError::Number));
    }
    Ok(None)
}

/// Requires at least one letter, digit or underscore.
pub fn word_character_rule(password: &str) -> RuleResult {
    if !password.chars().any(is_word_char) {
        return Ok(Some(PasswordError::Character));
    }
    Ok(None)
}

/// Requires at least one character outside the word class.
pub fn special_character_rule(password: &str) -> RuleResult {
    if password.chars().all(is_word_char) {
        return Ok(Some(PasswordError::Special));
    }
    Ok(None)
}

/// Rejects spaces, tabs and line breaks.
pub fn whitespace_rule(password: &str) -> RuleResult {
    if password.chars().any(char::is_whitespace) {
        return Ok(Some(PasswordError::WhiteSpace));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_rule() {
        assert_eq!(number_rule("NoNumbers!"), Ok(Some(PasswordError::Number)));
        assert_eq!(number_rule("maaaa2M@"), Ok(None));
    }

    #[test]
    fn test_number_rule_ignores_non_ascii_digits() {
        // Arabic-Indic digits
        assert_eq!(number_rule("Aa١٢٣!"), Ok(Some(PasswordError::Number)));
    }

    #[test]
    fn test_word_character_rule() {
        assert_eq!(word_character_rule("@#$%^&"), Ok(Some(PasswordError::Character)));
        assert_eq!(word_character_rule("@#$_%^"), Ok(None));
        assert_eq!(word_character_rule("@#$a%^"), Ok(None));
    }

    #[test]
    fn test_special_character_rule() {
        assert_eq!(special_character_rule("m123215M"), Ok(Some(PasswordError::Special)));
        assert_eq!(special_character_rule("under_score1A"), Ok(Some(PasswordError::Special)));
        assert_eq!(special_character_rule("maaaa2M@"), Ok(None));
    }

    #[test]
    fn test_special_character_rule_space_counts() {
        assert_eq!(special_character_rule("maaaa2M M"), Ok(None));
    }

    #[test]
    fn test_whitespace_rule() {
        assert_eq!(whitespace_rule("maaaa2M @"), Ok(Some(PasswordError::WhiteSpace)));
        assert_eq!(whitespace_rule("maaaa2M\t@"), Ok(Some(PasswordError::WhiteSpace)));
        assert_eq!(whitespace_rule("maaaa2M\n@"), Ok(Some(PasswordError::WhiteSpace)));
        assert_eq!(whitespace_rule("maaaa2M\r\n@"), Ok(Some(PasswordError::WhiteSpace)));
        assert_eq!(whitespace_rule("maaaa2M@"), Ok(None));
    }
}
