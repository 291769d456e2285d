//! Port for password strength checks.
//!
//! The validator hands the candidate password together with the username and
//! system id so a policy can reject passwords equal to either.

use super::define_port_error;

define_port_error! {
    /// Reasons a password fails the configured policy.
    pub enum PasswordPolicyViolation {
        /// Shorter than the configured minimum.
        TooShort { min_length: usize } =>
            "password must be at least {min_length} characters long",
        /// Lacks either an upper or a lower case letter.
        MissingUpperAndLowerCase =>
            "password must contain both upper and lower case characters",
        /// Lacks a digit.
        MissingDigit => "password must contain at least one digit",
        /// Consists of digits only.
        MissingNonDigit => "password must contain at least one non-digit character",
        /// Equal to the username.
        MatchesUsername => "password must not equal the username",
        /// Equal to the system id.
        MatchesSystemId => "password must not equal the system id",
        /// Fails the custom regular expression.
        PatternMismatch { pattern: String } =>
            "password must match the pattern {pattern}",
    }
}

/// Password strength policy consulted by the account validator.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordPolicy: Send + Sync {
    /// Check `password` for the user identified by `username` and `system_id`.
    fn validate_password<'a>(
        &self,
        username: Option<&'a str>,
        password: &str,
        system_id: Option<&'a str>,
    ) -> Result<(), PasswordPolicyViolation>;
}

/// Fixture policy accepting every password.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePasswordPolicy;

impl PasswordPolicy for FixturePasswordPolicy {
    fn validate_password<'a>(
        &self,
        _username: Option<&'a str>,
        _password: &str,
        _system_id: Option<&'a str>,
    ) -> Result<(), PasswordPolicyViolation> {
        Ok(())
    }
}
