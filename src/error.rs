//! Password rule failures and their user-facing messages.

use thiserror::Error;

/// The reason a password was rejected.
///
/// Each variant except [`PasswordError::Unknown`] belongs to exactly one rule.
/// The `Display` output is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordError {
    #[error("You cannot insert an empty password.")]
    Empty,
    #[error("Your password does not meet the minimum character requirement of 6.")]
    MinimumLength,
    #[error("Your password does not meet the maximum character requirement of 16.")]
    MaximumLength,
    #[error("Your password has to include at least one uppercase character.")]
    Uppercase,
    #[error("Your password has to include at least one lowercase character.")]
    Lowercase,
    #[error("Your password has to include at least one numeric character.")]
    Number,
    #[error("Your password has to include at least one word character.")]
    Character,
    #[error("Your password has to include at least one special character.")]
    Special,
    #[error("Your password cannot include a whitespace, a tab space or a line break.")]
    WhiteSpace,
    /// A rule faulted instead of returning a verdict.
    #[error("Unknown error!")]
    Unknown,
}

impl PasswordError {
    /// Returns the fixed user-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
