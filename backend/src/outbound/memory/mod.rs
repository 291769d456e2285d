//! In-process adapters backing the domain ports.
//!
//! The server binary seeds these at start-up. They hold their data behind
//! `RwLock`s and can be shared across workers through an `Arc`.

mod directory;
mod visits;

pub use directory::InMemoryDirectory;
pub use visits::InMemoryVisitQuery;
