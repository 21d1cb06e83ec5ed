//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for statement execution and `tokio-rusqlite` to run it on
//! a dedicated thread behind an async handle.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteStore;
