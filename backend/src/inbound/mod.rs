//! Inbound adapters translating external requests into domain calls.
//!
//! Only an HTTP transport exists today; it lives under [`http`].

pub mod http;
