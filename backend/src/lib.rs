//! EMR account validation and visit details service.
//!
//! The [`domain`] module holds the account validator, the visit details
//! presenter and their ports. [`inbound`] exposes them over HTTP and
//! [`outbound`] provides in-memory adapters.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
