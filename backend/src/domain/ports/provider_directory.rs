//! Port for provider identifier lookups.

use crate::domain::ProviderLink;

/// Read-only view of the platform provider registry.
#[cfg_attr(test, mockall::automock)]
pub trait ProviderDirectory: Send + Sync {
    /// Whether `provider`'s identifier is unused by every other provider.
    ///
    /// A provider without an identifier is unique.
    fn is_provider_identifier_unique(&self, provider: &ProviderLink) -> bool;
}

/// Fixture registry that treats every identifier as unique.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProviderDirectory;

impl ProviderDirectory for FixtureProviderDirectory {
    fn is_provider_identifier_unique(&self, _provider: &ProviderLink) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fixture_registry_reports_unique() {
        let provider = ProviderLink::default();
        assert!(FixtureProviderDirectory.is_provider_identifier_unique(&provider));
    }
}
