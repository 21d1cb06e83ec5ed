//! Shared application state.
//!
//! The storage handle is created once at startup and injected here; every
//! request handler receives a clone of this state.

use std::sync::Arc;

use pastepouch_core::projection::TypeTable;
use pastepouch_core::storage::PasteStore;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide storage handle.
    pub store: Arc<dyn PasteStore>,
    /// Declared-type decode table used when projecting rows.
    pub types: Arc<TypeTable>,
}

impl AppState {
    /// Creates state around `store` with the default type table.
    pub fn new(store: Arc<dyn PasteStore>) -> Self {
        Self {
            store,
            types: Arc::new(TypeTable::default()),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State backed by a fresh in-memory SQLite database.
    pub async fn in_memory() -> Self {
        let store = crate::storage::SqliteStore::open_in_memory()
            .await
            .expect("in-memory SQLite should open");
        Self::new(Arc::new(store))
    }
}
