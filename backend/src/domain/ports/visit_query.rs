//! Driving port for loading visits by identifier.

use async_trait::async_trait;

use crate::domain::Visit;

use super::define_port_error;

define_port_error! {
    /// Errors raised by visit query adapters.
    pub enum VisitQueryError {
        /// The backing store could not be reached.
        Connection { message: String } => "visit store connection failed: {message}",
        /// The lookup failed while executing.
        Query { message: String } => "visit query failed: {message}",
    }
}

/// Read access to visits for the visit details screen.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitQuery: Send + Sync {
    /// Load a visit with its encounters; `None` when it does not exist.
    async fn find_visit(&self, visit_id: u32) -> Result<Option<Visit>, VisitQueryError>;
}

/// Fixture query that knows no visits.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureVisitQuery;

#[async_trait]
impl VisitQuery for FixtureVisitQuery {
    async fn find_visit(&self, _visit_id: u32) -> Result<Option<Visit>, VisitQueryError> {
        Ok(None)
    }
}
