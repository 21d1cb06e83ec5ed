use serde::{Deserialize, Serialize};

use super::Operation;

/// A registered user, as projected from the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A stored paste, as projected from the `pastes` table.
///
/// `userid` references a user by value only; it may point at a user that
/// does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paste {
    pub id: i64,
    pub userid: i64,
    pub content: String,
}

/// Request body for creating a user. `name` may be absent or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

impl CreateUserRequest {
    pub fn into_operation(self) -> Operation {
        Operation::CreateUser {
            name: self.name,
            email: self.email,
        }
    }
}

/// Request body for creating a paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePasteRequest {
    pub userid: i64,
    pub content: String,
}

impl CreatePasteRequest {
    pub fn into_operation(self) -> Operation {
        Operation::CreatePaste {
            userid: self.userid,
            content: self.content,
        }
    }
}

/// Request body for replacing a paste's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePasteRequest {
    pub content: String,
}

impl UpdatePasteRequest {
    pub fn into_operation(self, id: i64) -> Operation {
        Operation::UpdatePaste {
            id,
            content: self.content,
        }
    }
}
