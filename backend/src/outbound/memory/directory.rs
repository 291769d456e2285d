//! Username and provider identifier registry.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::ports::{ProviderDirectory, UserDirectory};
use crate::domain::{AccountUser, ProviderLink};

/// Case-insensitive registry of usernames and provider identifiers.
///
/// # Examples
/// ```
/// use emr::domain::Account;
/// use emr::domain::ports::UserDirectory;
/// use emr::outbound::memory::InMemoryDirectory;
///
/// let directory = InMemoryDirectory::new();
/// directory.register_user(1, "admin");
///
/// let mut account = Account::new();
/// account.set_username("Admin");
/// let user = account.user().expect("user part");
/// assert!(directory.has_duplicate_username(user));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    usernames: RwLock<HashMap<String, u32>>,
    provider_identifiers: RwLock<HashMap<String, u32>>,
}

fn key(value: &str) -> String {
    value.trim().to_lowercase()
}

fn read(map: &RwLock<HashMap<String, u32>>) -> RwLockReadGuard<'_, HashMap<String, u32>> {
    map.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(map: &RwLock<HashMap<String, u32>>) -> RwLockWriteGuard<'_, HashMap<String, u32>> {
    map.write().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryDirectory {
    /// Empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `username` as owned by the persisted user `user_id`.
    pub fn register_user(&self, user_id: u32, username: &str) {
        write(&self.usernames).insert(key(username), user_id);
    }

    /// Record `identifier` as owned by the persisted provider `provider_id`.
    pub fn register_provider(&self, provider_id: u32, identifier: &str) {
        write(&self.provider_identifiers).insert(key(identifier), provider_id);
    }
}

impl UserDirectory for InMemoryDirectory {
    fn has_duplicate_username(&self, user: &AccountUser) -> bool {
        let Some(username) = user.username() else {
            return false;
        };
        read(&self.usernames)
            .get(&key(username))
            .is_some_and(|owner| Some(*owner) != user.user_id())
    }
}

impl ProviderDirectory for InMemoryDirectory {
    fn is_provider_identifier_unique(&self, provider: &ProviderLink) -> bool {
        let Some(identifier) = provider.identifier() else {
            return true;
        };
        read(&self.provider_identifiers)
            .get(&key(identifier))
            .is_none_or(|owner| Some(*owner) == provider.provider_id())
    }
}
