use async_trait::async_trait;

use crate::projection::ResultSet;

use super::Result;

/// Data access for users and pastes.
///
/// Every method issues exactly one parameterized statement and hands back
/// the raw result set; callers project it with
/// [`project`](crate::projection::project).
#[async_trait]
pub trait PasteStore: Send + Sync {
    /// Inserts a user. A missing name is stored as NULL. Fails with
    /// `AlreadyExists` when the email is taken.
    async fn create_user(&self, name: Option<&str>, email: &str) -> Result<ResultSet>;

    /// Inserts a paste. `userid` is not checked against existing users.
    async fn create_paste(&self, userid: i64, content: &str) -> Result<ResultSet>;

    /// Lists every user.
    async fn select_users(&self) -> Result<ResultSet>;

    /// Lists every paste.
    async fn select_pastes(&self) -> Result<ResultSet>;

    /// Reads one paste by id. A missing id yields zero rows, not an error.
    async fn read_paste(&self, id: i64) -> Result<ResultSet>;

    /// Deletes one paste by id.
    async fn delete_paste(&self, id: i64) -> Result<ResultSet>;

    /// Replaces the content of one paste.
    async fn update_paste(&self, id: i64, content: &str) -> Result<ResultSet>;

    /// Single-row count of users.
    async fn user_count(&self) -> Result<ResultSet>;

    /// Single-row count of pastes.
    async fn paste_count(&self) -> Result<ResultSet>;
}
