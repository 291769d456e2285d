//! Domain ports for the hexagonal boundary.
//!
//! The account validator depends on three synchronous lookups supplied by the
//! host platform. The visit details screen reads through an async query port.
//! Every port ships a `Fixture*` implementation for wiring tests and demos.

mod macros;
pub(crate) use macros::define_port_error;

mod password_policy;
mod provider_directory;
mod ui_formatter;
mod user_directory;
mod visit_query;

#[cfg(test)]
pub use password_policy::MockPasswordPolicy;
pub use password_policy::{FixturePasswordPolicy, PasswordPolicy, PasswordPolicyViolation};
#[cfg(test)]
pub use provider_directory::MockProviderDirectory;
pub use provider_directory::{FixtureProviderDirectory, ProviderDirectory};
#[cfg(test)]
pub use ui_formatter::MockUiFormatter;
pub use ui_formatter::UiFormatter;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{FixtureUserDirectory, UserDirectory};
#[cfg(test)]
pub use visit_query::MockVisitQuery;
pub use visit_query::{FixtureVisitQuery, VisitQuery, VisitQueryError};
