//! Built-in password strength policy.
//!
//! [`DefaultPasswordPolicy`] applies the platform's stock rules. Checks run in
//! a fixed order and the first failure wins, so callers see one violation per
//! attempt.

use regex::Regex;

use crate::domain::ports::{PasswordPolicy, PasswordPolicyViolation};

/// Tunable password rules.
///
/// # Examples
/// ```
/// use emr::domain::PasswordRules;
///
/// let rules = PasswordRules::default();
/// assert_eq!(rules.min_length, 8);
/// assert!(rules.pattern().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordRules {
    /// Minimum number of characters.
    pub min_length: usize,
    /// Require at least one upper case and one lower case letter.
    pub require_upper_and_lower_case: bool,
    /// Require at least one digit.
    pub require_digit: bool,
    /// Require at least one character that is not a digit.
    pub require_non_digit: bool,
    /// Reject passwords equal to the username or system id, ignoring case.
    pub forbid_username_or_system_id: bool,
    pattern: Option<Regex>,
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_upper_and_lower_case: true,
            require_digit: true,
            require_non_digit: true,
            forbid_username_or_system_id: true,
            pattern: None,
        }
    }
}

impl PasswordRules {
    /// Require passwords to match `pattern` in addition to the other rules.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }

    /// Custom pattern, if configured.
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }
}

/// [`PasswordPolicy`] backed by [`PasswordRules`].
#[derive(Debug, Clone, Default)]
pub struct DefaultPasswordPolicy {
    rules: PasswordRules,
}

impl DefaultPasswordPolicy {
    /// Policy enforcing `rules`.
    pub fn new(rules: PasswordRules) -> Self {
        Self { rules }
    }

    /// Rules in force.
    pub fn rules(&self) -> &PasswordRules {
        &self.rules
    }
}

fn same_ignoring_case(candidate: Option<&str>, password: &str) -> bool {
    candidate.is_some_and(|value| value.to_lowercase() == password.to_lowercase())
}

impl PasswordPolicy for DefaultPasswordPolicy {
    fn validate_password<'a>(
        &self,
        username: Option<&'a str>,
        password: &str,
        system_id: Option<&'a str>,
    ) -> Result<(), PasswordPolicyViolation> {
        let rules = &self.rules;

        if rules.forbid_username_or_system_id {
            if same_ignoring_case(username, password) {
                return Err(PasswordPolicyViolation::matches_username());
            }
            if same_ignoring_case(system_id, password) {
                return Err(PasswordPolicyViolation::matches_system_id());
            }
        }
        if password.chars().count() < rules.min_length {
            return Err(PasswordPolicyViolation::too_short(rules.min_length));
        }
        if rules.require_upper_and_lower_case
            && !(password.chars().any(char::is_uppercase) && password.chars().any(char::is_lowercase))
        {
            return Err(PasswordPolicyViolation::missing_upper_and_lower_case());
        }
        if rules.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyViolation::missing_digit());
        }
        if rules.require_non_digit && password.chars().all(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyViolation::missing_non_digit());
        }
        if let Some(pattern) = rules.pattern()
            && !pattern.is_match(password)
        {
            return Err(PasswordPolicyViolation::pattern_mismatch(pattern.as_str()));
        }
        Ok(())
    }
}
