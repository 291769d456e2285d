//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use emr::domain::PasswordRules;
use emr::outbound::memory::{InMemoryDirectory, InMemoryVisitQuery};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) password_rules: PasswordRules,
    pub(crate) directory: Arc<InMemoryDirectory>,
    pub(crate) visits: Arc<InMemoryVisitQuery>,
}

impl ServerConfig {
    /// Configuration with default password rules and empty stores.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            password_rules: PasswordRules::default(),
            directory: Arc::new(InMemoryDirectory::new()),
            visits: Arc::new(InMemoryVisitQuery::new()),
        }
    }

    /// Override the default password rules.
    #[must_use]
    pub fn with_password_rules(mut self, rules: PasswordRules) -> Self {
        self.password_rules = rules;
        self
    }

    /// Share an already-seeded user and provider registry.
    #[must_use]
    pub fn with_directory(mut self, directory: Arc<InMemoryDirectory>) -> Self {
        self.directory = directory;
        self
    }

    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
