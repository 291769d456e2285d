//! Field validation for the account management form.
//!
//! [`AccountValidator`] inspects an [`Account`] and appends one
//! [`FieldError`](crate::domain::FieldError) per broken rule to a
//! [`FieldErrors`] sink. Rules are independent: a failure in one never hides
//! another, with two exceptions. At most one username error is recorded, and
//! the password policy only runs once the password pair is complete and
//! matching.
//!
//! Duplicate and strength checks are delegated to the
//! [`UserDirectory`], [`ProviderDirectory`] and [`PasswordPolicy`] ports.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::debug;

use crate::domain::ports::{PasswordPolicy, ProviderDirectory, UserDirectory};
use crate::domain::{
    Account, AccountErrorCode, AccountField, AccountUser, FieldError, FieldErrors,
};

/// Minimum username length in characters.
pub const USERNAME_MIN: usize = 2;
/// Maximum username length in characters.
pub const USERNAME_MAX: usize = 50;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        // Length is enforced separately; this regex constrains allowed characters.
        Regex::new("^[A-Za-z0-9._-]+$")
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

fn is_valid_username(username: &str) -> bool {
    let length = username.chars().count();
    (USERNAME_MIN..=USERNAME_MAX).contains(&length) && username_regex().is_match(username)
}

/// Validator for [`Account`] form submissions.
///
/// Port parameters may be trait objects, so handlers can share one validator
/// built from `Arc<dyn …>` adapters.
pub struct AccountValidator<U: ?Sized, P: ?Sized, W: ?Sized> {
    users: Arc<U>,
    providers: Arc<P>,
    password_policy: Arc<W>,
}

impl<U: ?Sized, P: ?Sized, W: ?Sized> Clone for AccountValidator<U, P, W> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            providers: Arc::clone(&self.providers),
            password_policy: Arc::clone(&self.password_policy),
        }
    }
}

impl<U: ?Sized, P: ?Sized, W: ?Sized> AccountValidator<U, P, W> {
    /// Create a validator backed by the given lookups.
    pub fn new(users: Arc<U>, providers: Arc<P>, password_policy: Arc<W>) -> Self {
        Self {
            users,
            providers,
            password_policy,
        }
    }
}

impl<U, P, W> AccountValidator<U, P, W>
where
    U: UserDirectory + ?Sized,
    P: ProviderDirectory + ?Sized,
    W: PasswordPolicy + ?Sized,
{
    /// Validate `account` and return the collected field errors.
    pub fn check(&self, account: &Account) -> FieldErrors {
        let mut errors = FieldErrors::default();
        self.validate(account, &mut errors);
        errors
    }

    /// Validate `account`, appending any failures to `errors`.
    ///
    /// Never fails; invalid input is reported solely through `errors`.
    pub fn validate(&self, account: &Account, errors: &mut FieldErrors) {
        let before = errors.error_count();

        Self::check_person(account, errors);

        match account.user() {
            Some(user) => {
                self.check_user(user, errors);
                self.check_passwords(account, user, errors);
                if !account.is_provider_enabled() && user.capabilities().is_empty() {
                    reject(errors, AccountField::Capabilities, AccountErrorCode::CapabilityRequired);
                }
            }
            None if !account.is_provider_enabled() => {
                reject(errors, AccountField::Provider, AccountErrorCode::UserOrProviderRequired);
            }
            None => {}
        }

        if let Some(provider) = account.provider().filter(|link| link.is_enabled())
            && !self.providers.is_provider_identifier_unique(provider)
        {
            reject(
                errors,
                AccountField::ProviderIdentifier,
                AccountErrorCode::DuplicateProviderIdentifier,
            );
        }

        debug!(
            rejected = errors.error_count() - before,
            becoming_user = account.is_becoming_user(),
            provider_enabled = account.is_provider_enabled(),
            "account validated"
        );
    }

    fn check_person(account: &Account, errors: &mut FieldErrors) {
        if account.given_name().is_none() {
            reject(errors, AccountField::GivenName, AccountErrorCode::Required);
        }
        if account.family_name().is_none() {
            reject(errors, AccountField::FamilyName, AccountErrorCode::Required);
        }
        if account.gender().is_none() {
            reject(errors, AccountField::Gender, AccountErrorCode::Required);
        }
    }

    fn check_user(&self, user: &AccountUser, errors: &mut FieldErrors) {
        if user.privilege_level().is_none() {
            reject(errors, AccountField::PrivilegeLevel, AccountErrorCode::Required);
        }

        let username_error = match user.username() {
            None => Some(AccountErrorCode::Required),
            Some(username) if !is_valid_username(username) => {
                Some(AccountErrorCode::InvalidUsername)
            }
            Some(_) if self.users.has_duplicate_username(user) => {
                Some(AccountErrorCode::DuplicateUsername)
            }
            Some(_) => None,
        };
        if let Some(code) = username_error {
            reject(errors, AccountField::Username, code);
        }
    }

    fn check_passwords(&self, account: &Account, user: &AccountUser, errors: &mut FieldErrors) {
        let password = account.password();
        let confirm = account.confirm_password();

        // Persisted users keep their password unless a new one is typed.
        if user.is_persisted() && password.is_none() && confirm.is_none() {
            return;
        }

        if password.is_none() {
            reject(errors, AccountField::Password, AccountErrorCode::Required);
        }
        if confirm.is_none() {
            reject(errors, AccountField::ConfirmPassword, AccountErrorCode::Required);
        }

        match (password, confirm) {
            (Some(password), Some(confirm)) if password == confirm => {
                if let Err(violation) = self.password_policy.validate_password(
                    user.username(),
                    password,
                    user.system_id(),
                ) {
                    debug!(%violation, "password rejected by policy");
                    errors.push(FieldError::with_message(
                        AccountField::Password,
                        AccountErrorCode::PasswordPolicy,
                        violation.to_string(),
                    ));
                }
            }
            (None, None) => {}
            (password, confirm) => {
                if password.is_some() {
                    reject(errors, AccountField::Password, AccountErrorCode::PasswordMismatch);
                }
                if confirm.is_some() {
                    reject(
                        errors,
                        AccountField::ConfirmPassword,
                        AccountErrorCode::PasswordMismatch,
                    );
                }
            }
        }
    }
}

fn reject(errors: &mut FieldErrors, field: AccountField, code: AccountErrorCode) {
    debug!(%field, %code, "account field rejected");
    errors.reject(field, code);
}
