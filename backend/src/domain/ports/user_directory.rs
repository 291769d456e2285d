//! Port for username lookups against the platform user store.
//!
//! The account validator only needs to know whether another user already
//! owns the requested username. Adapters decide what "another" means, usually
//! by excluding the user's own persisted identifier.

use crate::domain::AccountUser;

/// Read-only view of the platform user store.
#[cfg_attr(test, mockall::automock)]
pub trait UserDirectory: Send + Sync {
    /// Whether a different user already holds `user`'s username.
    fn has_duplicate_username(&self, user: &AccountUser) -> bool;
}

/// Fixture directory that never reports duplicates.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserDirectory;

impl UserDirectory for FixtureUserDirectory {
    fn has_duplicate_username(&self, _user: &AccountUser) -> bool {
        false
    }
}
