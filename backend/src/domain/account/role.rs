//! Platform roles as seen by the account screens.
//!
//! The host platform models capabilities and privilege levels as plain roles
//! distinguished by a name prefix. [`RoleKind`] recovers that distinction.

use std::fmt;

/// Name prefix shared by every capability role.
pub const CAPABILITY_PREFIX: &str = "Application Role: ";
/// Name prefix shared by every privilege level role.
pub const PRIVILEGE_LEVEL_PREFIX: &str = "Privilege Level: ";
/// Role granting the full privilege level.
pub const FULL_PRIVILEGE_LEVEL: &str = "Privilege Level: Full";

/// Validation errors returned by [`Role::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleValidationError {
    /// The role name was blank.
    #[error("role name must not be empty")]
    EmptyName,
    /// The role name carried leading or trailing whitespace.
    #[error("role name must not have surrounding whitespace")]
    UntrimmedName,
}

/// Category of a role derived from its name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    /// `Application Role: …`
    Capability,
    /// `Privilege Level: …`
    PrivilegeLevel,
    /// Any other platform role.
    Other,
}

/// A named platform role.
///
/// # Examples
/// ```
/// use emr::domain::{Role, RoleKind};
///
/// let role = Role::capability("Registration").expect("valid role");
/// assert_eq!(role.as_ref(), "Application Role: Registration");
/// assert_eq!(role.kind(), RoleKind::Capability);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Role(String);

impl Role {
    /// Validate and construct a role from its full platform name.
    pub fn new(name: impl Into<String>) -> Result<Self, RoleValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RoleValidationError::EmptyName);
        }
        if name.trim() != name {
            return Err(RoleValidationError::UntrimmedName);
        }
        Ok(Self(name))
    }

    /// Build a capability role from its display suffix.
    pub fn capability(suffix: &str) -> Result<Self, RoleValidationError> {
        Self::with_prefix(CAPABILITY_PREFIX, suffix)
    }

    /// Build a privilege level role from its display suffix.
    pub fn privilege_level(suffix: &str) -> Result<Self, RoleValidationError> {
        Self::with_prefix(PRIVILEGE_LEVEL_PREFIX, suffix)
    }

    /// The full privilege level role.
    pub fn full_privilege_level() -> Self {
        Self(FULL_PRIVILEGE_LEVEL.to_owned())
    }

    fn with_prefix(prefix: &str, suffix: &str) -> Result<Self, RoleValidationError> {
        if suffix.trim().is_empty() {
            return Err(RoleValidationError::EmptyName);
        }
        Self::new(format!("{prefix}{suffix}"))
    }

    /// Category derived from the name prefix.
    pub fn kind(&self) -> RoleKind {
        if self.0.starts_with(CAPABILITY_PREFIX) {
            RoleKind::Capability
        } else if self.0.starts_with(PRIVILEGE_LEVEL_PREFIX) {
            RoleKind::PrivilegeLevel
        } else {
            RoleKind::Other
        }
    }

    /// Name without the category prefix, as shown on screen.
    pub fn display_name(&self) -> &str {
        self.0
            .strip_prefix(CAPABILITY_PREFIX)
            .or_else(|| self.0.strip_prefix(PRIVILEGE_LEVEL_PREFIX))
            .unwrap_or(self.0.as_str())
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl TryFrom<String> for Role {
    type Error = RoleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
