//! Outbound adapters implementing domain ports.
//!
//! - **memory**: in-process directories and visit store used by the server
//!   binary and integration tests
//!
//! Adapters are thin translators between domain types and their storage.
//! They contain no business logic.

pub mod memory;
