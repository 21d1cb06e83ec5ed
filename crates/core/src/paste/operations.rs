//! The closed set of data-access operations and their dispatch.

use crate::projection::ResultSet;
use crate::storage::{PasteStore, Result};

/// One data-access operation together with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    SelectUsers,
    SelectPastes,
    ReadPaste { id: i64 },
    CreateUser {
        name: Option<String>,
        email: String,
    },
    CreatePaste { userid: i64, content: String },
    DeletePaste { id: i64 },
    UpdatePaste { id: i64, content: String },
    GetPasteCount,
    GetUserCount,
}

impl Operation {
    /// Route/operation name, e.g. `readPaste`.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::SelectUsers => "selectUsers",
            Operation::SelectPastes => "selectPastes",
            Operation::ReadPaste { .. } => "readPaste",
            Operation::CreateUser { .. } => "createUser",
            Operation::CreatePaste { .. } => "createPaste",
            Operation::DeletePaste { .. } => "deletePaste",
            Operation::UpdatePaste { .. } => "updatePaste",
            Operation::GetPasteCount => "getPasteCount",
            Operation::GetUserCount => "getUserCount",
        }
    }

    /// True for operations that modify storage and return no rows.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Operation::CreateUser { .. }
                | Operation::CreatePaste { .. }
                | Operation::DeletePaste { .. }
                | Operation::UpdatePaste { .. }
        )
    }
}

/// Runs `operation` against `store`.
pub async fn execute(store: &dyn PasteStore, operation: Operation) -> Result<ResultSet> {
    match operation {
        Operation::SelectUsers => store.select_users().await,
        Operation::SelectPastes => store.select_pastes().await,
        Operation::ReadPaste { id } => store.read_paste(id).await,
        Operation::CreateUser { name, email } => {
            store.create_user(name.as_deref(), &email).await
        }
        Operation::CreatePaste { userid, content } => store.create_paste(userid, &content).await,
        Operation::DeletePaste { id } => store.delete_paste(id).await,
        Operation::UpdatePaste { id, content } => store.update_paste(id, &content).await,
        Operation::GetPasteCount => store.paste_count().await,
        Operation::GetUserCount => store.user_count().await,
    }
}
