//! Shared HTTP adapter state.
//!
//! Handlers receive [`HttpState`] through `web::Data`, so they only see domain
//! ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixturePasswordPolicy, FixtureProviderDirectory, FixtureUserDirectory, FixtureVisitQuery,
    PasswordPolicy, ProviderDirectory, UiFormatter, UserDirectory, VisitQuery,
};
use crate::domain::{AccountValidator, DefaultUiFormatter, VisitDetailsPresenter};

/// Account validator wired to trait-object ports.
pub type SharedAccountValidator =
    AccountValidator<dyn UserDirectory, dyn ProviderDirectory, dyn PasswordPolicy>;

/// Visit details presenter wired to a trait-object formatter.
pub type SharedVisitDetailsPresenter = VisitDetailsPresenter<dyn UiFormatter>;

/// Parameter object bundling every port the HTTP handlers need.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Username duplicate lookups.
    pub users: Arc<dyn UserDirectory>,
    /// Provider identifier lookups.
    pub providers: Arc<dyn ProviderDirectory>,
    /// Password strength checks.
    pub password_policy: Arc<dyn PasswordPolicy>,
    /// Visit lookups.
    pub visits: Arc<dyn VisitQuery>,
    /// Timestamp formatting.
    pub formatter: Arc<dyn UiFormatter>,
}

impl HttpStatePorts {
    /// Fixture ports: no duplicates, permissive password policy, no visits.
    pub fn fixtures() -> Self {
        Self {
            users: Arc::new(FixtureUserDirectory),
            providers: Arc::new(FixtureProviderDirectory),
            password_policy: Arc::new(FixturePasswordPolicy),
            visits: Arc::new(FixtureVisitQuery),
            formatter: Arc::new(DefaultUiFormatter),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Account form validator.
    pub accounts: SharedAccountValidator,
    /// Visit lookups.
    pub visits: Arc<dyn VisitQuery>,
    /// Visit view-model builder.
    pub visit_details: SharedVisitDetailsPresenter,
}

impl HttpState {
    /// Assemble handler state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use emr::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts::fixtures());
    /// let _visits = state.visits.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users,
            providers,
            password_policy,
            visits,
            formatter,
        } = ports;
        Self {
            accounts: AccountValidator::new(users, providers, password_policy),
            visits,
            visit_details: VisitDetailsPresenter::new(formatter),
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
