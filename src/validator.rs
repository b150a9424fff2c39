//! Password validator - runs the rules in order and stops at the first failure.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::error::PasswordError;
use crate::rules::{Rule, ALL_RULES};

/// Which rules a validation run applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RuleSet {
    /// Empty, minimum length, maximum length and uppercase only.
    Basic,
    /// All nine rules.
    #[default]
    Full,
}

impl RuleSet {
    /// Returns the rules of this set in evaluation order.
    pub fn rules(&self) -> &'static [Rule] {
        match self {
            RuleSet::Basic => &ALL_RULES[..4],
            RuleSet::Full => &ALL_RULES,
        }
    }
}

/// Result of a single validation run.
#[derive(Debug)]
pub enum ValidationOutcome {
    /// The password passed every rule and is handed back unchanged.
    Accepted(SecretString),
    /// The first rule the password failed.
    Rejected(PasswordError),
}

impl ValidationOutcome {
    /// Returns `true` when the password passed every rule.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted(_))
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<PasswordError> {
        match self {
            ValidationOutcome::Accepted(_) => None,
            ValidationOutcome::Rejected(kind) => Some(*kind),
        }
    }

    /// Returns the user-facing message for a rejection.
    pub fn message(&self) -> Option<String> {
        self.rejection().map(|kind| kind.message())
    }

    /// Converts into a `Result`, yielding the accepted password or the rejection reason.
    pub fn into_result(self) -> Result<SecretString, PasswordError> {
        match self {
            ValidationOutcome::Accepted(password) => Ok(password),
            ValidationOutcome::Rejected(kind) => Err(kind),
        }
    }
}

impl From<ValidationOutcome> for Result<SecretString, PasswordError> {
    fn from(outcome: ValidationOutcome) -> Self {
        outcome.into_result()
    }
}

/// Checks passwords against a fixed [`RuleSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordValidator {
    rule_set: RuleSet,
}

impl PasswordValidator {
    /// Creates a validator that applies `rule_set`.
    pub fn new(rule_set: RuleSet) -> Self {
        Self { rule_set }
    }

    /// Returns the rule set this validator applies.
    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    /// Validates the password, returning it unchanged when accepted.
    pub fn validate(&self, password: SecretString) -> ValidationOutcome {
        match run_rules(password.expose_secret(), self.rule_set.rules()) {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(rule_set = ?self.rule_set, "password accepted");
                ValidationOutcome::Accepted(password)
            }
            Err(kind) => ValidationOutcome::Rejected(kind),
        }
    }

    /// Validates the password and hands the outcome to `on_complete`.
    ///
    /// `on_complete` runs exactly once, before this method returns.
    pub fn check<F>(&self, password: SecretString, on_complete: F)
    where
        F: FnOnce(ValidationOutcome),
    {
        on_complete(self.validate(password));
    }
}

/// Runs `rules` in order and returns the first failure.
///
/// A rule that faults ends the run with [`PasswordError::Unknown`].
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn run_rules(password: &str, rules: &[Rule]) -> Result<(), PasswordError> {
    for (rule_name, rule_fn) in rules {
        match rule_fn(password) {
            Ok(Some(kind)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(rule = *rule_name, "password rejected: {}", kind);
                return Err(kind);
            }
            Ok(None) => {
                // Rule passed, continue
            }
            Err(()) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Fatal error in password rule: {}", rule_name);
                return Err(PasswordError::Unknown);
            }
        }
    }
    Ok(())
}

/// Validates a password against the full rule set.
pub fn validate_password(password: SecretString) -> ValidationOutcome {
    PasswordValidator::default().validate(password)
}

/// Validates a password against the given rule set.
pub fn validate_password_with(password: SecretString, rule_set: RuleSet) -> ValidationOutcome {
    PasswordValidator::new(rule_set).validate(password)
}

/// Validates a password against the full rule set and passes the outcome to `on_complete`.
pub fn check_password<F>(password: SecretString, on_complete: F)
where
    F: FnOnce(ValidationOutcome),
{
    PasswordValidator::default().check(password, on_complete);
}

/// Async version that sends the validation outcome via channel.
#[cfg(feature = "async")]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub async fn validate_password_tx(
    password: SecretString,
    rule_set: RuleSet,
    tx: mpsc::Sender<ValidationOutcome>,
) {
    let outcome = validate_password_with(password, rule_set);

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation outcome: {}", e);
    }
}
