//! Account aggregate edited on the account management screens.
//!
//! An [`Account`] wraps a person (names and gender) plus two optional
//! facets: the login user ([`AccountUser`]) and the linked clinical provider
//! ([`ProviderLink`]). The aggregate is deliberately mutable and permissive:
//! form input lands here unvalidated and
//! [`AccountValidator`](crate::domain::AccountValidator) reports what is
//! wrong, field by field.
//!
//! Setting any user field materialises the user facet, which turns the
//! account into one that is "becoming a user" and makes credentials and a
//! privilege level mandatory.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use zeroize::Zeroizing;

mod role;

pub use role::{
    CAPABILITY_PREFIX, FULL_PRIVILEGE_LEVEL, PRIVILEGE_LEVEL_PREFIX, Role, RoleKind,
    RoleValidationError,
};

/// Error returned when a gender form value is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("gender must be M or F (got {value:?})")]
pub struct GenderParseError {
    /// Raw value that failed to parse.
    pub value: String,
}

/// Administrative gender recorded on the person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// `M`
    Male,
    /// `F`
    Female,
}

impl Gender {
    /// Single-letter form value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = GenderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            other => Err(GenderParseError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Login facet of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountUser {
    user_id: Option<u32>,
    system_id: Option<String>,
    username: Option<String>,
    privilege_level: Option<Role>,
    capabilities: BTreeSet<Role>,
}

impl AccountUser {
    /// Persisted identifier; `None` for a user not yet saved.
    pub fn user_id(&self) -> Option<u32> {
        self.user_id
    }

    /// Record the persisted identifier assigned by the platform.
    pub fn set_user_id(&mut self, user_id: u32) {
        self.user_id = Some(user_id);
    }

    /// Platform-assigned system identifier, if known.
    pub fn system_id(&self) -> Option<&str> {
        self.system_id.as_deref()
    }

    /// Set the platform system identifier.
    pub fn set_system_id(&mut self, system_id: impl Into<String>) {
        self.system_id = Some(system_id.into());
    }

    /// Username as entered, blank values collapsed to `None`.
    pub fn username(&self) -> Option<&str> {
        non_blank(self.username.as_deref())
    }

    /// Selected privilege level.
    pub fn privilege_level(&self) -> Option<&Role> {
        self.privilege_level.as_ref()
    }

    /// Selected capabilities in name order.
    pub fn capabilities(&self) -> &BTreeSet<Role> {
        &self.capabilities
    }

    /// Whether the user has been persisted by the platform.
    pub fn is_persisted(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Provider facet linking the account to a clinical provider record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderLink {
    provider_id: Option<u32>,
    identifier: Option<String>,
    enabled: bool,
}

impl ProviderLink {
    /// Persisted provider identifier; `None` for a provider not yet saved.
    pub fn provider_id(&self) -> Option<u32> {
        self.provider_id
    }

    /// Record the persisted provider identifier.
    pub fn set_provider_id(&mut self, provider_id: u32) {
        self.provider_id = Some(provider_id);
    }

    /// Provider identifier as entered, blank values collapsed to `None`.
    pub fn identifier(&self) -> Option<&str> {
        non_blank(self.identifier.as_deref())
    }

    /// Whether the provider facet is switched on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Mutable account aggregate validated by
/// [`AccountValidator`](crate::domain::AccountValidator).
///
/// # Examples
/// ```
/// use emr::domain::{Account, Gender, Role};
///
/// let mut account = Account::new();
/// account.set_given_name("Grace");
/// account.set_family_name("Hopper");
/// account.set_gender(Gender::Female);
/// assert!(account.user().is_none());
///
/// account.set_username("ghopper");
/// account.set_privilege_level(Role::full_privilege_level());
/// assert_eq!(account.user().and_then(|user| user.username()), Some("ghopper"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    given_name: Option<String>,
    family_name: Option<String>,
    gender: Option<Gender>,
    password: Option<Zeroizing<String>>,
    confirm_password: Option<Zeroizing<String>>,
    user: Option<AccountUser>,
    provider: Option<ProviderLink>,
}

impl Account {
    /// Create an empty account, as shown on a blank "new account" form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Given name, blank values collapsed to `None`.
    pub fn given_name(&self) -> Option<&str> {
        non_blank(self.given_name.as_deref())
    }

    /// Set the given name.
    pub fn set_given_name(&mut self, given_name: impl Into<String>) {
        self.given_name = Some(given_name.into());
    }

    /// Family name, blank values collapsed to `None`.
    pub fn family_name(&self) -> Option<&str> {
        non_blank(self.family_name.as_deref())
    }

    /// Set the family name.
    pub fn set_family_name(&mut self, family_name: impl Into<String>) {
        self.family_name = Some(family_name.into());
    }

    /// Recorded gender.
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Set the gender.
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
    }

    /// Password as typed; empty input counts as not supplied.
    pub fn password(&self) -> Option<&str> {
        non_empty(self.password.as_deref().map(String::as_str))
    }

    /// Set the password.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(Zeroizing::new(password.into()));
    }

    /// Confirmation password as typed; empty input counts as not supplied.
    pub fn confirm_password(&self) -> Option<&str> {
        non_empty(self.confirm_password.as_deref().map(String::as_str))
    }

    /// Set the confirmation password.
    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.confirm_password = Some(Zeroizing::new(confirm_password.into()));
    }

    /// Login facet, present once any user field has been set.
    pub fn user(&self) -> Option<&AccountUser> {
        self.user.as_ref()
    }

    /// Login facet, created on first access.
    pub fn user_mut(&mut self) -> &mut AccountUser {
        self.user.get_or_insert_with(AccountUser::default)
    }

    /// Set the username, materialising the login facet.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.user_mut().username = Some(username.into());
    }

    /// Set the privilege level, materialising the login facet.
    pub fn set_privilege_level(&mut self, privilege_level: Role) {
        self.user_mut().privilege_level = Some(privilege_level);
    }

    /// Replace the capability set, materialising the login facet.
    pub fn set_capabilities(&mut self, capabilities: impl IntoIterator<Item = Role>) {
        self.user_mut().capabilities = capabilities.into_iter().collect();
    }

    /// Provider facet, present once the provider flag or identifier was set.
    pub fn provider(&self) -> Option<&ProviderLink> {
        self.provider.as_ref()
    }

    /// Provider facet, created on first access.
    pub fn provider_mut(&mut self) -> &mut ProviderLink {
        self.provider.get_or_insert_with(ProviderLink::default)
    }

    /// Switch the provider facet on or off.
    pub fn set_provider_enabled(&mut self, enabled: bool) {
        self.provider_mut().enabled = enabled;
    }

    /// Set the provider identifier.
    pub fn set_provider_identifier(&mut self, identifier: impl Into<String>) {
        self.provider_mut().identifier = Some(identifier.into());
    }

    /// Whether the account is being promoted to (or already is) a login user.
    pub fn is_becoming_user(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the provider facet is switched on.
    pub fn is_provider_enabled(&self) -> bool {
        self.provider.as_ref().is_some_and(ProviderLink::is_enabled)
    }

    /// Whether the login user has already been persisted.
    pub fn is_persisted_user(&self) -> bool {
        self.user.as_ref().is_some_and(AccountUser::is_persisted)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.is_empty())
}

#[cfg(test)]
mod tests;
