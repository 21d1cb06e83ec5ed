//! Storage backend implementations.
//!
//! Concrete implementations of [`pastepouch_core::storage::PasteStore`].
//! SQLite is the only backend; local and remote targets differ only in the
//! location handed to [`SqliteStore::open`].

pub mod sqlite;

pub use sqlite::SqliteStore;
