//! Case rules - the password must mix upper and lower case.

use super::RuleResult;
use crate::error::PasswordError;

/// Fails when lowercasing the password leaves it unchanged.
pub fn uppercase_rule(password: &str) -> RuleResult {
    if password.to_lowercase() == password {
        return Ok(Some(PasswordError::Uppercase));
    }
    Ok(None)
}

/// Fails when uppercasing the password leaves it unchanged.
pub fn lowercase_rule(password: &str) -> RuleResult {
    if password.to_uppercase() == password {
        return Ok(Some(PasswordError::Lowercase));
    }
    Ok(None)
}
