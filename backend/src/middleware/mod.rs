//! Request middleware.

pub mod trace;

pub use trace::{Trace, TraceMiddleware};
