//! Password composition rule checker
//!
//! This library checks a candidate password against a fixed, ordered list of
//! composition rules and reports either acceptance or the first rule the
//! password breaks, as a user-facing message.
//!
//! # Rules
//!
//! In evaluation order: not empty, at least 6 characters, at most 16
//! characters, an uppercase character, a lowercase character, an ASCII digit,
//! a word character, a special character, and no whitespace.
//! [`RuleSet::Basic`] stops after the uppercase rule.
//!
//! # Features
//!
//! - `async` (default): Enables delivery of the outcome over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_check::{validate_password, check_password, PasswordError};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("maaaa2M@".to_string().into());
//! let accepted = validate_password(password).into_result().unwrap();
//! assert_eq!(accepted.expose_secret(), "maaaa2M@");
//!
//! let password = SecretString::new("m123215M".to_string().into());
//! check_password(password, |outcome| {
//!     assert_eq!(outcome.rejection(), Some(PasswordError::Special));
//!     println!("{}", outcome.message().unwrap_or_default());
//! });
//! ```

// Internal modules
mod error;
mod rules;
mod validator;

// Public API
pub use error::PasswordError;
pub use rules::{MAX_LENGTH, MIN_LENGTH, Rule, RuleResult};
pub use validator::{
    check_password, validate_password, validate_password_with, PasswordValidator, RuleSet,
    ValidationOutcome,
};

#[cfg(feature = "async")]
pub use validator::validate_password_tx;
