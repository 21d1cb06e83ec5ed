//! SQLite repository implementation.
//!
//! Implements [`PasteStore`] from `pastepouch_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use pastepouch_core::projection::ResultSet;
use pastepouch_core::storage::{PasteStore, RepositoryError, Result};

use super::conversions::{execute_result_set, query_result_set};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based store for users and pastes.
///
/// One connection per process. `tokio-rusqlite` runs every statement on the
/// connection's own thread, so concurrent callers are serialized there.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `location` and ensures the
    /// schema exists.
    ///
    /// `location` is a file path or an SQLite `file:` URI.
    pub async fn open(location: &str) -> Result<Self> {
        let conn = Connection::open(location)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens an in-memory database. Data is lost when the store is dropped.
    #[cfg(test)]
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Create the `users` and `pastes` tables if they are missing.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Run one statement on the connection thread.
    async fn run<F>(&self, entity_type: &'static str, statement: F) -> Result<ResultSet>
    where
        F: FnOnce(&rusqlite::Connection) -> rusqlite::Result<ResultSet> + Send + 'static,
    {
        self.conn
            .call(move |conn| statement(conn).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, entity_type))
    }
}

#[async_trait]
impl PasteStore for SqliteStore {
    async fn create_user(&self, name: Option<&str>, email: &str) -> Result<ResultSet> {
        let name = name.map(str::to_string);
        let email = email.to_string();

        self.run("User", move |conn| {
            execute_result_set(conn, schema::INSERT_USER, rusqlite::params![name, email])
        })
        .await
    }

    async fn create_paste(&self, userid: i64, content: &str) -> Result<ResultSet> {
        let content = content.to_string();

        self.run("Paste", move |conn| {
            execute_result_set(conn, schema::INSERT_PASTE, rusqlite::params![userid, content])
        })
        .await
    }

    async fn select_users(&self) -> Result<ResultSet> {
        self.run("User", |conn| query_result_set(conn, schema::SELECT_USERS, ()))
            .await
    }

    async fn select_pastes(&self) -> Result<ResultSet> {
        self.run("Paste", |conn| {
            query_result_set(conn, schema::SELECT_PASTES, ())
        })
        .await
    }

    async fn read_paste(&self, id: i64) -> Result<ResultSet> {
        self.run("Paste", move |conn| {
            query_result_set(conn, schema::SELECT_PASTE_BY_ID, [id])
        })
        .await
    }

    async fn delete_paste(&self, id: i64) -> Result<ResultSet> {
        self.run("Paste", move |conn| {
            execute_result_set(conn, schema::DELETE_PASTE, [id])
        })
        .await
    }

    async fn update_paste(&self, id: i64, content: &str) -> Result<ResultSet> {
        let content = content.to_string();

        self.run("Paste", move |conn| {
            execute_result_set(conn, schema::UPDATE_PASTE, rusqlite::params![id, content])
        })
        .await
    }

    async fn user_count(&self) -> Result<ResultSet> {
        self.run("User", |conn| query_result_set(conn, schema::COUNT_USERS, ()))
            .await
    }

    async fn paste_count(&self) -> Result<ResultSet> {
        self.run("Paste", |conn| {
            query_result_set(conn, schema::COUNT_PASTES, ())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pastepouch_core::paste::{Paste, User};
    use pastepouch_core::projection::{project, Scalar, TypeTable};

    async fn setup() -> SqliteStore {
        SqliteStore::open_in_memory().await.unwrap()
    }

    fn records_as<T: serde::de::DeserializeOwned>(result: &ResultSet) -> Vec<T> {
        let records = project(result, &TypeTable::default()).unwrap();
        let json = serde_json::to_value(&records).unwrap();
        serde_json::from_value(json).unwrap()
    }

    fn count_of(result: &ResultSet) -> String {
        let records = project(result, &TypeTable::default()).unwrap();
        records[0]
            .get("count")
            .and_then(Scalar::as_str)
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_create_and_select_users() {
        let store = setup().await;

        let written = store.create_user(Some("Ada"), "ada@example.com").await.unwrap();
        assert_eq!(written.rows_affected, 1);
        assert!(written.is_empty());

        let users: Vec<User> = records_as(&store.select_users().await.unwrap());
        assert_eq!(
            users,
            vec![User {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_user_without_name_stores_null() {
        let store = setup().await;

        store.create_user(None, "anon@example.com").await.unwrap();

        let result = store.select_users().await.unwrap();
        assert_eq!(result.rows[0][1], pastepouch_core::projection::SqlValue::Null);
        let users: Vec<User> = records_as(&result);
        assert_eq!(users[0].name, "");
        assert_eq!(users[0].email, "anon@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_fails_and_count_unchanged() {
        let store = setup().await;
        store.create_user(Some("Ada"), "ada@example.com").await.unwrap();

        let result = store.create_user(Some("Imposter"), "ada@example.com").await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                ..
            })
        ));
        assert_eq!(count_of(&store.user_count().await.unwrap()), "1");
    }

    #[tokio::test]
    async fn test_read_missing_paste_is_empty() {
        let store = setup().await;

        let result = store.read_paste(42).await.unwrap();

        assert!(result.is_empty());
        assert!(project(&result, &TypeTable::default()).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_paste_may_reference_missing_user() {
        let store = setup().await;

        store.create_paste(99, "orphan").await.unwrap();

        let pastes: Vec<Paste> = records_as(&store.read_paste(1).await.unwrap());
        assert_eq!(
            pastes,
            vec![Paste {
                id: 1,
                userid: 99,
                content: "orphan".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_update_then_read_returns_new_content() {
        let store = setup().await;
        store.create_paste(1, "hello").await.unwrap();

        let written = store.update_paste(1, "bye").await.unwrap();
        assert_eq!(written.rows_affected, 1);

        let pastes: Vec<Paste> = records_as(&store.read_paste(1).await.unwrap());
        assert_eq!(pastes[0].content, "bye");
    }

    #[tokio::test]
    async fn test_update_missing_paste_is_not_an_error() {
        let store = setup().await;

        let written = store.update_paste(7, "nothing").await.unwrap();

        assert_eq!(written.rows_affected, 0);
    }

    #[tokio::test]
    async fn test_delete_then_read_is_empty() {
        let store = setup().await;
        store.create_paste(1, "hello").await.unwrap();

        let deleted = store.delete_paste(1).await.unwrap();
        assert!(deleted.is_empty());
        assert_eq!(deleted.rows_affected, 1);

        assert!(store.read_paste(1).await.unwrap().is_empty());
        assert_eq!(count_of(&store.paste_count().await.unwrap()), "0");
    }

    #[tokio::test]
    async fn test_select_pastes_keeps_insert_order() {
        let store = setup().await;
        store.create_paste(1, "first").await.unwrap();
        store.create_paste(2, "second").await.unwrap();

        let pastes: Vec<Paste> = records_as(&store.select_pastes().await.unwrap());

        let contents: Vec<&str> = pastes.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_schema_init_is_idempotent() {
        let store = setup().await;
        store.create_user(Some("Ada"), "ada@example.com").await.unwrap();

        SqliteStore::init_schema(&store.conn).await.unwrap();

        assert_eq!(count_of(&store.user_count().await.unwrap()), "1");
    }
}
